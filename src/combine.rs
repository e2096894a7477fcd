//! Several binders onto the same attribute position, e.g. an element
//! that is both a component of one block and the host of another.

use std::cell::OnceCell;

use anyhow::Result;
use itertools::Itertools;
use kstring::KString;

use crate::{binder::AttributeBinder,
            classmap::{ClassInfo, ClassMap},
            part::{Directive, RenderPart, att}};

/// The union of the class views of several binders, memoized the same
/// way as in `AttributeBinder`.
#[derive(Debug)]
pub struct Combined<'b> {
    binders: Vec<&'b AttributeBinder>,
    class_info: OnceCell<ClassInfo>,
    class_map: OnceCell<ClassMap>,
    class: OnceCell<KString>,
}

pub fn combine<'b>(binders: impl IntoIterator<Item = &'b AttributeBinder>) -> Combined<'b> {
    Combined {
        binders: binders.into_iter().collect(),
        class_info: OnceCell::new(),
        class_map: OnceCell::new(),
        class: OnceCell::new(),
    }
}

impl<'b> Combined<'b> {
    /// Later binders override the flags of earlier ones for the same
    /// class name.
    pub fn class_info(&self) -> &ClassInfo {
        self.class_info.get_or_init(|| {
            let mut info = ClassInfo::new();
            for binder in &self.binders {
                for (name, on) in binder.class_info().iter() {
                    info.insert(KString::from_ref(name), on);
                }
            }
            info
        })
    }

    pub fn class_map(&self) -> &ClassMap {
        self.class_map.get_or_init(|| ClassMap::new(self.class_info().clone()))
    }

    /// The classes flagged true in `class_info`, each once.
    pub fn class(&self) -> &str {
        self.class.get_or_init(|| {
            KString::from_string(self.class_info().active().join(" "))
        })
    }

    pub fn att(&self) -> Option<(KString, KString)> {
        att("class", self.class())
    }
}

impl<'b> Directive for Combined<'b> {
    fn bind(&self, part: &mut dyn RenderPart) -> Result<()> {
        self.class_map().apply(part)
    }
}
