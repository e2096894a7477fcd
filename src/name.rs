//! Names making up class names: conversion into `KString` and
//! validation.

use std::borrow::Cow;

use kstring::KString;

use crate::error::BemError;

/// Conversion of the various string types into an owned `KString`,
/// so that constructors can take string literals as well as owned
/// strings.
pub trait IntoKString {
    fn into_kstring(self) -> KString;
}

// Can't specialize for &'static str (KString::from_static), hence
// literals are copied (they are short, and KString inlines them).
impl IntoKString for &str {
    fn into_kstring(self) -> KString {
        KString::from_ref(self)
    }
}

impl IntoKString for &&str {
    fn into_kstring(self) -> KString {
        KString::from_ref(*self)
    }
}

impl IntoKString for String {
    fn into_kstring(self) -> KString {
        KString::from_string(self)
    }
}

impl IntoKString for &String {
    fn into_kstring(self) -> KString {
        KString::from_ref(self)
    }
}

impl IntoKString for KString {
    fn into_kstring(self) -> KString {
        self
    }
}

impl IntoKString for &KString {
    fn into_kstring(self) -> KString {
        self.clone()
    }
}

impl<'t> IntoKString for Cow<'t, str> {
    fn into_kstring(self) -> KString {
        match self {
            Cow::Borrowed(s) => KString::from_ref(s),
            Cow::Owned(s) => KString::from_string(s),
        }
    }
}


/// A name that ends up as (part of) a class token must be non-empty
/// and must not contain whitespace, or the class attribute would
/// split it into several tokens.
pub fn check_name(what: &'static str, name: &str) -> Result<(), BemError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        Err(BemError::InvalidName { what, name: KString::from_ref(name) })
    } else {
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_into_kstring() {
        let s = String::from("card");
        assert_eq!("card".into_kstring().as_str(), "card");
        assert_eq!((&s).into_kstring().as_str(), "card");
        assert_eq!(Cow::Borrowed("card").into_kstring().as_str(), "card");
        assert_eq!(s.into_kstring().as_str(), "card");
    }

    #[test]
    fn t_check_name() {
        assert!(check_name("block name", "card").is_ok());
        assert!(check_name("block name", "card-list_2").is_ok());
        assert_eq!(
            check_name("block name", "").unwrap_err().to_string(),
            "invalid block name \"\": must be non-empty and without whitespace");
        assert!(check_name("modifier suffix", "is bold").is_err());
        assert!(check_name("modifier suffix", "bold\n").is_err());
    }
}
