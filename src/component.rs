//! Components: reusable generators of attribute binders for one
//! block or one of its elements.

use anyhow::Result;
use kstring::KString;

use crate::{binder::AttributeBinder,
            error::BemError,
            modifier::{ModifierDefs, ModifierOptions},
            name::check_name,
            part::{Directive, RenderPart}};

#[derive(Debug)]
pub struct Component {
    modifier_defs: ModifierDefs,
    default_binder: AttributeBinder,
}

impl Component {
    /// `component_name` is `None` for the block's host. All names,
    /// modifier keys and suffixes must be usable in class tokens.
    pub fn new(
        block_name: KString,
        component_name: Option<KString>,
        modifier_defs: ModifierDefs,
    ) -> Result<Self, BemError> {
        check_name("block name", &block_name)?;
        if let Some(component_name) = &component_name {
            check_name("component name", component_name)?;
        }
        modifier_defs.check()?;
        Ok(Self::new_checked(block_name, component_name, modifier_defs))
    }

    pub(crate) fn new_checked(
        block_name: KString,
        component_name: Option<KString>,
        modifier_defs: ModifierDefs,
    ) -> Self {
        Component {
            modifier_defs,
            default_binder: AttributeBinder::new_checked(block_name,
                                                         component_name,
                                                         ModifierOptions::new()),
        }
    }

    pub fn block_name(&self) -> &str {
        self.default_binder.block_name()
    }

    pub fn component_name(&self) -> Option<&str> {
        self.default_binder.component_name()
    }

    pub fn base_name(&self) -> &str {
        self.default_binder.base_name()
    }

    pub fn modifier_defs(&self) -> &ModifierDefs {
        &self.modifier_defs
    }

    /// The binder with no modifiers active. Always the same instance.
    pub fn default_binder(&self) -> &AttributeBinder {
        &self.default_binder
    }

    /// Bind the unmodified class names onto `part`.
    pub fn bind_default(&self, part: &mut dyn RenderPart) -> Result<()> {
        self.default_binder.bind(part)
    }

    /// A new binder with the given modifier flags, keyed by the
    /// modifier keys of this component's declaration. Keys that
    /// aren't declared are an error. Every call returns a fresh
    /// binder.
    pub fn with_modifiers(
        &self,
        options: impl Into<ModifierOptions>
    ) -> Result<AttributeBinder, BemError> {
        let options = options.into();
        let mut by_suffix = ModifierOptions::new();
        for (key, flag) in options.iter() {
            let suffix = self.modifier_defs.get(key).ok_or_else(
                || BemError::UnknownModifier {
                    base_name: KString::from_ref(self.base_name()),
                    key: key.clone(),
                })?;
            by_suffix.set(suffix, flag);
        }
        Ok(AttributeBinder::new_checked(KString::from_ref(self.block_name()),
                                        self.component_name().map(KString::from_ref),
                                        by_suffix))
    }
}

impl Directive for Component {
    fn bind(&self, part: &mut dyn RenderPart) -> Result<()> {
        self.bind_default(part)
    }
}
