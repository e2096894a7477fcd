//! Attribute binders: the class names of one block or component in
//! one modifier state.

use std::cell::OnceCell;

use anyhow::Result;
use itertools::Itertools;
use kstring::KString;

use crate::{classmap::{ClassInfo, ClassMap},
            error::BemError,
            modifier::ModifierOptions,
            name::check_name,
            part::{Directive, RenderPart, att}};

/// `block`, or `block__component`.
pub fn base_name(block_name: &str, component_name: Option<&str>) -> KString {
    match component_name {
        None => KString::from_ref(block_name),
        Some(component_name) => KString::from_string(
            format!("{block_name}__{component_name}")),
    }
}

fn modifier_class(base_name: &str, suffix: &str) -> KString {
    KString::from_string(format!("{base_name}--{suffix}"))
}

/// The class names for a block or component in one modifier state,
/// bindable onto render parts.
///
/// Construction does no class name computation; each of the derived
/// views (`class_info`, `class_map`, `class`) is computed on first
/// use and then kept for the lifetime of the binder. The modifier
/// options can't be changed after construction, so the views never
/// go stale.
#[derive(Debug)]
pub struct AttributeBinder {
    block_name: KString,
    component_name: Option<KString>,
    base_name: KString,
    // Keyed by class suffix, not by the modifier keys of the
    // declaration.
    modifiers: ModifierOptions,
    class_info: OnceCell<ClassInfo>,
    class_map: OnceCell<ClassMap>,
    class: OnceCell<KString>,
}

impl AttributeBinder {
    /// `modifiers` is keyed by class suffix. The names and suffixes
    /// must be usable in class tokens.
    pub fn new(
        block_name: KString,
        component_name: Option<KString>,
        modifiers: ModifierOptions,
    ) -> Result<Self, BemError> {
        check_name("block name", &block_name)?;
        if let Some(component_name) = &component_name {
            check_name("component name", component_name)?;
        }
        for (suffix, _) in modifiers.iter() {
            check_name("modifier suffix", suffix)?;
        }
        Ok(Self::new_checked(block_name, component_name, modifiers))
    }

    /// For names that have already been through `check_name`.
    pub(crate) fn new_checked(
        block_name: KString,
        component_name: Option<KString>,
        modifiers: ModifierOptions,
    ) -> Self {
        let base_name = base_name(&block_name, component_name.as_deref());
        AttributeBinder {
            block_name,
            component_name,
            base_name,
            modifiers,
            class_info: OnceCell::new(),
            class_map: OnceCell::new(),
            class: OnceCell::new(),
        }
    }

    pub fn block_name(&self) -> &str {
        &self.block_name
    }

    pub fn component_name(&self) -> Option<&str> {
        self.component_name.as_deref()
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Same as `base_name`, for use as an element id.
    pub fn id(&self) -> &str {
        &self.base_name
    }

    pub fn modifiers(&self) -> &ModifierOptions {
        &self.modifiers
    }

    /// The base name flagged true, then each modifier class with its
    /// flag; modifiers set to `None` are left out.
    pub fn class_info(&self) -> &ClassInfo {
        self.class_info.get_or_init(|| {
            let mut info = ClassInfo::new();
            info.insert(self.base_name.clone(), true);
            for (suffix, flag) in self.modifiers.iter() {
                if let Some(on) = flag {
                    info.insert(modifier_class(&self.base_name, suffix), on);
                }
            }
            info
        })
    }

    pub fn class_map(&self) -> &ClassMap {
        self.class_map.get_or_init(|| ClassMap::new(self.class_info().clone()))
    }

    /// The space separated active classes: the base name followed by
    /// the classes of the modifiers set to `Some(true)`.
    pub fn class(&self) -> &str {
        self.class.get_or_init(|| {
            let base_name = &self.base_name;
            let modifier_classes = self.modifiers.iter()
                .filter(|(_, flag)| *flag == Some(true))
                .map(|(suffix, _)| modifier_class(base_name, suffix));
            KString::from_string(
                std::iter::once(base_name.clone()).chain(modifier_classes).join(" "))
        })
    }

    /// `class` as an attribute for `ahtml` element constructors.
    pub fn att(&self) -> Option<(KString, KString)> {
        att("class", self.class())
    }
}

impl Directive for AttributeBinder {
    fn bind(&self, part: &mut dyn RenderPart) -> Result<()> {
        self.class_map().apply(part)
    }
}
