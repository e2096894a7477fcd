//! Class flag maps and the renderer committing them onto a part.

use anyhow::Result;
use kstring::KString;
use serde::ser::{Serialize, Serializer, SerializeMap};

use crate::{name::check_name,
            part::{RenderPart, Directive}};

/// Class name -> whether it is active, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassInfo(Vec<(KString, bool)>);

impl ClassInfo {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Setting a class again replaces its flag but keeps its
    /// position.
    pub fn insert(&mut self, name: KString, on: bool) {
        if let Some(entry) = self.0.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = on;
        } else {
            self.0.push((name, on));
        }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.iter().find(|(n, _)| n.as_str() == name).map(|(_, on)| *on)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(n, on)| (n.as_str(), *on))
    }

    /// The names whose flag is set.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, on)| *on).map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassInfo {
    fn from(entries: [(&str, bool); N]) -> Self {
        let mut info = ClassInfo::new();
        for (name, on) in entries {
            info.insert(KString::from_ref(name), on);
        }
        info
    }
}

// As a JSON object, `{"card": true, "card--bold": false}`.
impl Serialize for ClassInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, on) in &self.0 {
            map.serialize_entry(name.as_str(), on)?;
        }
        map.end()
    }
}


/// Applies a `ClassInfo` onto render parts: classes flagged true are
/// added, everything else a previous binding added to the part is
/// removed. Classes written literally in the template stay.
#[derive(Debug, Clone)]
pub struct ClassMap {
    info: ClassInfo,
}

impl ClassMap {
    pub fn new(info: ClassInfo) -> Self {
        ClassMap { info }
    }

    pub fn info(&self) -> &ClassInfo {
        &self.info
    }

    /// The part is left untouched if any name in the map is not a
    /// valid class token.
    pub fn apply(&self, part: &mut dyn RenderPart) -> Result<()> {
        for (name, _) in self.info.iter() {
            check_name("class name", name)?;
        }
        for stale in part.bound_classes() {
            if self.info.get(&stale) != Some(true) {
                part.remove_class(&stale)?;
            }
        }
        for (name, on) in self.info.iter() {
            if on {
                part.add_class(name)?;
            } else {
                part.remove_class(name)?;
            }
        }
        part.commit()
    }
}

impl Directive for ClassMap {
    fn bind(&self, part: &mut dyn RenderPart) -> Result<()> {
        self.apply(part)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::ClassAttribute;

    #[test]
    fn t_class_info() {
        let mut info = ClassInfo::from([("card", true), ("card--a", false)]);
        info.insert(KString::from_static("card--b"), true);
        info.insert(KString::from_static("card--a"), true);
        assert_eq!(info.iter().collect::<Vec<_>>(),
                   [("card", true), ("card--a", true), ("card--b", true)]);
        assert_eq!(info.get("card--c"), None);
    }

    #[test]
    fn t_class_info_json() -> Result<()> {
        let info = ClassInfo::from([("card__title", true), ("card__title--bold", false)]);
        assert_eq!(serde_json::to_string(&info)?,
                   r#"{"card__title":true,"card__title--bold":false}"#);
        Ok(())
    }

    #[test]
    fn t_apply_keeps_foreign_classes() -> Result<()> {
        let mut part = ClassAttribute::with_static("layout");
        ClassMap::new(ClassInfo::from([("card", true), ("card--x", true)]))
            .apply(&mut part)?;
        assert_eq!(part.committed(), Some("layout card card--x"));
        ClassMap::new(ClassInfo::from([("card", true), ("card--x", false)]))
            .apply(&mut part)?;
        assert_eq!(part.committed(), Some("layout card"));
        Ok(())
    }

    #[test]
    fn t_apply_drops_unlisted_bound_classes() -> Result<()> {
        let mut part = ClassAttribute::with_static("layout");
        ClassMap::new(ClassInfo::from([("card", true), ("card--x", true), ("layout", true)]))
            .apply(&mut part)?;
        assert_eq!(part.committed(), Some("layout card card--x"));
        ClassMap::new(ClassInfo::from([("card", true)])).apply(&mut part)?;
        assert_eq!(part.committed(), Some("layout card"));
        ClassMap::new(ClassInfo::from([("list", true)])).apply(&mut part)?;
        assert_eq!(part.committed(), Some("layout list"));
        Ok(())
    }

    #[test]
    fn t_apply_checks_names_first() -> Result<()> {
        let mut part = ClassAttribute::new();
        ClassMap::new(ClassInfo::from([("card", true)])).apply(&mut part)?;
        let bad = ClassMap::new(ClassInfo::from([("list", true), ("my card", true)]));
        assert!(bad.apply(&mut part).is_err());
        assert!(!part.contains("list"));
        assert_eq!(part.bound_classes(), [KString::from_static("card")]);
        assert_eq!(part.commit_count(), 1);
        Ok(())
    }
}
