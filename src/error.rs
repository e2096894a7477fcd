use std::path::PathBuf;

use kstring::KString;

/// Errors from declaring blocks and looking up their parts.
#[derive(Debug, thiserror::Error)]
pub enum BemError {
    #[error("block {block:?} has no component {key:?}")]
    UnknownComponent { block: KString, key: KString },

    #[error("{base_name:?} has no modifier {key:?}")]
    UnknownModifier { base_name: KString, key: KString },

    #[error("invalid {what} {name:?}: must be non-empty and without whitespace")]
    InvalidName { what: &'static str, name: KString },

    #[error("component key {0:?} is reserved for the block's host")]
    ReservedKey(KString),

    #[error("reading block declaration {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("parsing block declaration: {0}")]
    Json(#[from] serde_json::Error),
}
