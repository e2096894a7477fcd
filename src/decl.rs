//! Block declarations read from JSON:
//!
//! ```json
//! {
//!   "block": "card",
//!   "modifiers": { "highlighted": "highlighted" },
//!   "components": {
//!     "title": ["title", { "bold": "bold" }]
//!   }
//! }
//! ```
//!
//! Object keys keep the order they have in the file.

use std::{fmt, marker::PhantomData, path::Path};

use kstring::KString;
use serde::{Deserialize, Deserializer, de::{MapAccess, Visitor}};

use crate::{block::Block,
            error::BemError,
            modifier::{ComponentDef, ComponentDefs, ModifierDefs}};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockDecl {
    pub block: String,
    #[serde(default)]
    pub modifiers: ModifierDefs,
    #[serde(default)]
    pub components: ComponentDefs,
}

impl BlockDecl {
    pub fn from_json_str(s: &str) -> Result<Self, BemError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BemError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(
            |source| BemError::Io { path: path.to_owned(), source })?;
        Self::from_json_str(&s)
    }

    /// All names must be usable as parts of class tokens, and no
    /// component may be declared under the host's key.
    pub fn check(&self) -> Result<(), BemError> {
        Block::check_declaration(&self.block, &self.modifiers, &self.components)
    }

    pub fn into_block(self) -> Result<Block, BemError> {
        Block::new(KString::from_string(self.block), self.modifiers, self.components)
    }
}


// A JSON object read entry by entry, in document order.
struct OrderedMapVisitor<V, T> {
    expecting: &'static str,
    set: fn(&mut T, String, V),
    _v: PhantomData<fn() -> V>,
}

impl<'de, V: Deserialize<'de>, T: Default> Visitor<'de> for OrderedMapVisitor<V, T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
        let mut out = T::default();
        while let Some((key, val)) = map.next_entry::<String, V>()? {
            (self.set)(&mut out, key, val);
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for ModifierDefs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            expecting: "an object mapping modifier keys to class suffixes",
            set: |defs: &mut ModifierDefs, key: String, suffix: String| defs.set(key, suffix),
            _v: PhantomData,
        })
    }
}

impl<'de> Deserialize<'de> for ComponentDefs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            expecting: "an object mapping component keys to [name, modifiers] pairs",
            set: |defs: &mut ComponentDefs,
                  key: String,
                  (name, modifiers): (String, ModifierDefs)| {
                defs.set(key, ComponentDef::new(name, modifiers))
            },
            _v: PhantomData,
        })
    }
}
