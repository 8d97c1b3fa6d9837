//! Framework-provided elements.

pub mod composite;
pub mod script;
pub mod tag;
pub mod text;

pub use composite::{Component, Composite};
pub use script::Script;
pub use tag::Tag;
pub use text::{RawHtml, Text};
