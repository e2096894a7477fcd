//! Blocks: a host component plus a lazily built registry of the
//! block's declared components.

use std::cell::OnceCell;

use anyhow::Result;
use kstring::KString;

use crate::{component::Component,
            error::BemError,
            modifier::{ComponentDef, ComponentDefs, ModifierDefs},
            name::check_name,
            part::{Directive, RenderPart},
            warn};

#[derive(Debug)]
struct Slot {
    key: KString,
    def: ComponentDef,
    built: OnceCell<Component>,
}

/// A block with its host component and declared components.
///
/// Only the host is built up front. Each declared component is built
/// the first time it is asked for and kept in the block from then on,
/// so asking twice hands out the same `Component`. Separate blocks
/// never share components, even when declared identically.
#[derive(Debug)]
pub struct Block {
    name: KString,
    host: Component,
    // In declaration order; blocks have few components, a linear
    // search is fine.
    slots: Vec<Slot>,
}

impl Block {
    /// The key under which `get` hands out the host.
    pub const HOST_KEY: &'static str = "host";

    /// All declared names must be usable in class tokens, and no
    /// component may be declared under `HOST_KEY`. The declarations
    /// are checked completely here, components are still only built
    /// on first access.
    pub fn new(
        name: KString,
        host_modifier_defs: ModifierDefs,
        component_defs: ComponentDefs,
    ) -> Result<Self, BemError> {
        Self::check_declaration(&name, &host_modifier_defs, &component_defs)?;
        let host = Component::new_checked(name.clone(), None, host_modifier_defs);
        let slots = component_defs.into_iter()
            .map(|(key, def)| Slot { key, def, built: OnceCell::new() })
            .collect();
        Ok(Block { name, host, slots })
    }

    pub fn check_declaration(
        name: &str,
        host_modifier_defs: &ModifierDefs,
        component_defs: &ComponentDefs,
    ) -> Result<(), BemError> {
        check_name("block name", name)?;
        host_modifier_defs.check()?;
        for (key, def) in component_defs.iter() {
            check_name("component key", key)?;
            if key.as_str() == Self::HOST_KEY {
                return Err(BemError::ReservedKey(key.clone()));
            }
            check_name("component name", &def.name)?;
            def.modifiers.check()?;
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &Component {
        &self.host
    }

    /// The host for `HOST_KEY`, otherwise the component declared
    /// under `key`, building it on first access. For undeclared keys,
    /// warns and returns `None`; use `component` to get an error
    /// instead.
    pub fn get(&self, key: &str) -> Option<&Component> {
        if key == Self::HOST_KEY {
            return Some(&self.host);
        }
        let component = self.lookup(key);
        if component.is_none() {
            warn!("block {:?} has no component {:?}", self.name, key);
        }
        component
    }

    /// Like `get`, but an undeclared key is an error.
    pub fn component(&self, key: &str) -> Result<&Component, BemError> {
        if key == Self::HOST_KEY {
            return Ok(&self.host);
        }
        self.lookup(key).ok_or_else(|| BemError::UnknownComponent {
            block: self.name.clone(),
            key: KString::from_ref(key),
        })
    }

    fn slot(&self, key: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.key.as_str() == key)
    }

    fn lookup(&self, key: &str) -> Option<&Component> {
        let slot = self.slot(key)?;
        Some(slot.built.get_or_init(|| {
            Component::new_checked(self.name.clone(),
                                   Some(slot.def.name.clone()),
                                   slot.def.modifiers.clone())
        }))
    }

    /// The declared component keys, in declaration order.
    pub fn component_keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.key.as_str())
    }

    /// Whether the component under `key` has been built yet.
    pub fn is_built(&self, key: &str) -> bool {
        self.slot(key).map_or(false, |slot| slot.built.get().is_some())
    }
}

impl Directive for Block {
    fn bind(&self, part: &mut dyn RenderPart) -> Result<()> {
        self.host.bind_default(part)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::ClassAttribute;

    fn card() -> Block {
        Block::new(
            KString::from_static("card"),
            ModifierDefs::from([("highlighted", "highlighted")]),
            ComponentDefs::from([
                ("title", ComponentDef::new("title", [("bold", "bold")])),
                ("body", ComponentDef::new("content", ModifierDefs::new())),
            ]))
            .expect("valid declaration")
    }

    #[test]
    fn t_lazy_and_cached() {
        let block = card();
        assert!(!block.is_built("title"));
        assert!(!block.is_built("body"));
        let a = block.get("title").expect("declared");
        assert!(block.is_built("title"));
        assert!(!block.is_built("body"));
        let b = block.get("title").expect("declared");
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.base_name(), "card__title");
        assert_eq!(block.get("body").map(|c| c.base_name()), Some("card__content"));
    }

    #[test]
    fn t_blocks_dont_share() {
        let (x, y) = (card(), card());
        assert!(!std::ptr::eq(x.get("title").unwrap(), y.get("title").unwrap()));
        assert!(!std::ptr::eq(x.host(), y.host()));
    }

    #[test]
    fn t_host_key() {
        let block = card();
        assert!(std::ptr::eq(block.get(Block::HOST_KEY).unwrap(), block.host()));
        assert_eq!(block.host().component_name(), None);
        assert_eq!(block.host().base_name(), "card");
    }

    #[test]
    fn t_unknown_component() {
        let block = card();
        assert!(block.get("footer").is_none());
        assert!(!block.is_built("footer"));
        assert_eq!(block.component("footer").unwrap_err().to_string(),
                   "block \"card\" has no component \"footer\"");
        assert!(block.component("body").is_ok());
    }

    #[test]
    fn t_rejects_malformed_declaration() {
        let err = |name: &'static str, components: ComponentDefs| {
            Block::new(KString::from_static(name), ModifierDefs::new(), components)
                .unwrap_err()
                .to_string()
        };
        assert_eq!(err("my card", ComponentDefs::new()),
                   "invalid block name \"my card\": must be non-empty and without whitespace");
        assert_eq!(err("card", ComponentDefs::from([
                       ("host", ComponentDef::new("head", ModifierDefs::new()))])),
                   "component key \"host\" is reserved for the block's host");
        assert!(err("card", ComponentDefs::from([
                    ("title", ComponentDef::new("title", [("bold", "")]))]))
                .starts_with("invalid modifier suffix"));
    }

    #[test]
    fn t_debug() {
        let block = card();
        block.get("title");
        let s = format!("{block:?}");
        assert!(s.starts_with("Block {"));
        assert!(s.contains("card__title"));
    }

    #[test]
    fn t_keys_in_order() {
        assert_eq!(card().component_keys().collect::<Vec<_>>(), ["title", "body"]);
    }

    #[test]
    fn t_bind_block() -> Result<()> {
        let block = card();
        let mut part = ClassAttribute::new();
        block.bind(&mut part)?;
        assert_eq!(part.committed(), Some("card"));
        Ok(())
    }
}
