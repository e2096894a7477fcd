//! BEM (block, element, modifier) class names, bound onto the
//! attribute positions of rendered HTML.
//!
//! A `Block` is declared once with its modifiers and its components
//! (BEM elements). Its `Component`s hand out `AttributeBinder`s for a
//! given modifier state; binders compute their class string and class
//! flag map on first use and bind them onto a `RenderPart`, or give
//! them out as `class` attributes for `ahtml` element constructors.

pub mod warn;
pub mod error;
pub mod name;
pub mod modifier;
pub mod part;
pub mod classmap;
pub mod binder;
pub mod component;
pub mod block;
pub mod combine;
pub mod decl;

pub use error::BemError;
pub use modifier::{ModifierDefs, ModifierOptions, ComponentDef, ComponentDefs};
pub use part::{RenderPart, Directive, ClassAttribute, att, opt_att};
pub use classmap::{ClassInfo, ClassMap};
pub use binder::AttributeBinder;
pub use component::Component;
pub use block::Block;
pub use combine::{combine, Combined};
pub use decl::BlockDecl;
