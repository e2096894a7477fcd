//! The seam to the templating engine: attribute positions that class
//! names are bound onto, and the directives binding them.

use anyhow::Result;
use itertools::Itertools;
use kstring::KString;

use crate::{name::{IntoKString, check_name},
            warn};

/// One attribute-binding position in a rendered template, as handed
/// out by the templating engine for each render pass.
pub trait RenderPart {
    /// Mark the class `name` as present.
    fn add_class(&mut self, name: &str) -> Result<()>;

    /// Mark the class `name` as absent. Removing a class that isn't
    /// there is not an error.
    fn remove_class(&mut self, name: &str) -> Result<()>;

    /// The classes currently present because a binding added them,
    /// as opposed to classes written literally in the template.
    fn bound_classes(&self) -> Vec<KString>;

    /// Write the pending state through to the attribute.
    fn commit(&mut self) -> Result<()>;
}

/// Something the templating engine invokes with a render part on
/// each render pass.
pub trait Directive {
    fn bind(&self, part: &mut dyn RenderPart) -> Result<()>;
}


/// An attribute pair in the form the `ahtml` element constructors
/// take in their attribute arrays.
pub fn att(key: impl IntoKString, val: impl IntoKString) -> Option<(KString, KString)> {
    Some((key.into_kstring(), val.into_kstring()))
}

pub fn opt_att<V: IntoKString>(
    key: impl IntoKString,
    val: Option<V>
) -> Option<(KString, KString)> {
    val.map(|val| (key.into_kstring(), val.into_kstring()))
}


/// An in-memory `class` attribute: classes written statically in the
/// template, followed by the classes bound dynamically, each in the
/// order they were first added.
#[derive(Debug, Default)]
pub struct ClassAttribute {
    static_classes: Vec<KString>,
    classes: Vec<KString>,
    committed: Option<KString>,
    commits: usize,
}

impl ClassAttribute {
    pub fn new() -> Self {
        Self::default()
    }

    /// With the whitespace-separated classes from the template's
    /// literal attribute value. These are never removed by bindings.
    pub fn with_static(classes: &str) -> Self {
        let mut static_classes: Vec<KString> = Vec::new();
        for class in classes.split_whitespace() {
            if !static_classes.iter().any(|c| c.as_str() == class) {
                static_classes.push(KString::from_ref(class));
            }
        }
        ClassAttribute { static_classes, ..Self::default() }
    }

    /// Whether `name` is currently present (pending, not necessarily
    /// committed).
    pub fn contains(&self, name: &str) -> bool {
        self.static_classes.iter().chain(&self.classes).any(|c| c.as_str() == name)
    }

    /// The attribute value at the last commit; `None` if never
    /// committed or if there were no classes.
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_ref().map(|s| s.as_str())
    }

    pub fn commit_count(&self) -> usize {
        self.commits
    }

    /// The committed value as a `class` attribute pair, or nothing
    /// if the attribute would be empty.
    pub fn att(&self) -> Option<(KString, KString)> {
        opt_att("class", self.committed.as_ref())
    }
}

impl RenderPart for ClassAttribute {
    fn add_class(&mut self, name: &str) -> Result<()> {
        check_name("class name", name)?;
        if !self.contains(name) {
            self.classes.push(KString::from_ref(name));
        }
        Ok(())
    }

    fn remove_class(&mut self, name: &str) -> Result<()> {
        self.classes.retain(|c| c.as_str() != name);
        Ok(())
    }

    fn bound_classes(&self) -> Vec<KString> {
        self.classes.clone()
    }

    fn commit(&mut self) -> Result<()> {
        self.commits += 1;
        if self.static_classes.is_empty() && self.classes.is_empty() {
            warn!("committing an empty class attribute");
            self.committed = None;
        } else {
            self.committed = Some(KString::from_string(
                self.static_classes.iter().chain(&self.classes).join(" ")));
        }
        Ok(())
    }
}
