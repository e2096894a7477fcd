//! Declarations of modifiers and components, and the modifier flags
//! given when binding.
//!
//! All three are small association lists: they keep the order in
//! which entries were given (class strings are built in that order),
//! and setting an existing key replaces its value in place.

use kstring::KString;

use crate::{error::BemError,
            name::{IntoKString, check_name}};


fn alist_set<V>(entries: &mut Vec<(KString, V)>, key: KString, val: V) {
    if let Some(entry) = entries.iter_mut().find(|(k, _)| *k == key) {
        entry.1 = val;
    } else {
        entries.push((key, val));
    }
}

fn alist_get<'a, V>(entries: &'a [(KString, V)], key: &str) -> Option<&'a V> {
    entries.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v)
}


/// Modifier key -> CSS class-name suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierDefs(Vec<(KString, KString)>);

impl ModifierDefs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, key: impl IntoKString, suffix: impl IntoKString) -> Self {
        self.set(key, suffix);
        self
    }

    pub fn set(&mut self, key: impl IntoKString, suffix: impl IntoKString) {
        alist_set(&mut self.0, key.into_kstring(), suffix.into_kstring())
    }

    /// Keys and suffixes must be usable in class tokens.
    pub fn check(&self) -> Result<(), BemError> {
        for (key, suffix) in self.iter() {
            check_name("modifier key", key)?;
            check_name("modifier suffix", suffix)?;
        }
        Ok(())
    }

    /// The suffix declared for `key`.
    pub fn get(&self, key: &str) -> Option<&KString> {
        alist_get(&self.0, key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KString, &KString)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: IntoKString, S: IntoKString, const N: usize> From<[(K, S); N]> for ModifierDefs {
    fn from(entries: [(K, S); N]) -> Self {
        let mut defs = ModifierDefs::new();
        for (key, suffix) in entries {
            defs.set(key, suffix);
        }
        defs
    }
}


/// Declaration of one component of a block: its name (the part after
/// `block__`) and its modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDef {
    pub name: KString,
    pub modifiers: ModifierDefs,
}

impl ComponentDef {
    pub fn new(name: impl IntoKString, modifiers: impl Into<ModifierDefs>) -> Self {
        ComponentDef {
            name: name.into_kstring(),
            modifiers: modifiers.into(),
        }
    }
}

/// Component key -> component declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDefs(Vec<(KString, ComponentDef)>);

impl ComponentDefs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, key: impl IntoKString, def: ComponentDef) -> Self {
        self.set(key, def);
        self
    }

    pub fn set(&mut self, key: impl IntoKString, def: ComponentDef) {
        alist_set(&mut self.0, key.into_kstring(), def)
    }

    pub fn get(&self, key: &str) -> Option<&ComponentDef> {
        alist_get(&self.0, key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KString, &ComponentDef)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ComponentDefs {
    type Item = (KString, ComponentDef);
    type IntoIter = std::vec::IntoIter<(KString, ComponentDef)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: IntoKString, const N: usize> From<[(K, ComponentDef); N]> for ComponentDefs {
    fn from(entries: [(K, ComponentDef); N]) -> Self {
        let mut defs = ComponentDefs::new();
        for (key, def) in entries {
            defs.set(key, def);
        }
        defs
    }
}


/// Modifier key -> flag. `Some(true)` renders the modifier's class,
/// `Some(false)` declares it inactive, `None` leaves it out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierOptions(Vec<(KString, Option<bool>)>);

impl ModifierOptions {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, key: impl IntoKString, flag: impl Into<Option<bool>>) -> Self {
        self.set(key, flag);
        self
    }

    pub fn set(&mut self, key: impl IntoKString, flag: impl Into<Option<bool>>) {
        alist_set(&mut self.0, key.into_kstring(), flag.into())
    }

    /// `None` if `key` was never set; `Some(None)` if it was set to
    /// "leave out".
    pub fn get(&self, key: &str) -> Option<Option<bool>> {
        alist_get(&self.0, key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KString, Option<bool>)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: IntoKString, F: Into<Option<bool>>, const N: usize> From<[(K, F); N]>
    for ModifierOptions
{
    fn from(entries: [(K, F); N]) -> Self {
        let mut options = ModifierOptions::new();
        for (key, flag) in entries {
            options.set(key, flag);
        }
        options
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_modifier_defs() {
        let defs = ModifierDefs::from([("highlighted", "hl"), ("bold", "b")]);
        assert_eq!(defs.get("bold").map(|s| s.as_str()), Some("b"));
        assert_eq!(defs.get("italic"), None);
        assert_eq!(defs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
                   ["highlighted", "bold"]);
    }

    #[test]
    fn t_options_replace_in_place() {
        let options = ModifierOptions::new()
            .with("a", true)
            .with("b", None::<bool>)
            .with("a", false);
        assert_eq!(options.len(), 2);
        assert_eq!(options.iter().collect::<Vec<_>>(),
                   [(&KString::from_static("a"), Some(false)),
                    (&KString::from_static("b"), None)]);
        assert_eq!(options.get("b"), Some(None));
        assert_eq!(options.get("c"), None);
    }

    #[test]
    fn t_component_defs() {
        let defs = ComponentDefs::from([
            ("title", ComponentDef::new("title", [("bold", "bold")])),
            ("body", ComponentDef::new("body", ModifierDefs::new())),
        ]);
        assert_eq!(defs.len(), 2);
        assert_eq!(defs.get("title").map(|d| d.name.as_str()), Some("title"));
        assert!(defs.get("footer").is_none());
    }
}
