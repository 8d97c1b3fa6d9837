//! # Lantern Core
//!
//! Building blocks shared by every Lantern element:
//!
//! - [`attributes`]: the per-element bag of tag name, classes, inline styles
//!   and data attributes, and its markup renderer
//! - [`element`]: the [`Element`] contract and element identifiers
//! - [`list`]: [`ElementList`], an ordered sequence that is itself an element
//! - [`builder`]: [`IntoElements`] and [`flat_unwrap`], which turn nested
//!   content expressions into one flat, ordered sequence
//! - [`context`]: the read-only [`RenderContext`] threaded through `render`
//!
//! ## Example
//!
//! ```ignore
//! use lantern_core::{elements, ElementList, RenderContext};
//!
//! let list: ElementList = elements![heading, vec![first, second], None::<Text>];
//! let html = list.render(&RenderContext::default());
//! ```

pub mod attributes;
pub mod builder;
pub mod context;
pub mod element;
pub mod list;

pub use attributes::{Attributes, DataAttribute, InlineStyle};
pub use builder::{Branch, IntoElements, flat_unwrap};
pub use context::{PageState, RenderContext};
pub use element::{AnyElement, Element, ElementClone, ElementId};
pub use list::ElementList;
