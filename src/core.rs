//! Element model module.
//!
//! Provides the [`Element`](lantern_core::Element) contract, attribute sets,
//! element lists and the content builder used by every container.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "core")]
//! use lantern::core::{ElementList, RenderContext, flat_unwrap};
//! ```

#[cfg(feature = "core")]
pub use lantern_core::*;
