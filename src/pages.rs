//! Page-level elements and layout.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lantern::pages::{Body, Tag, Text};
//! use lantern::core::RenderContext;
//!
//! let body = Body::new(|| {
//! 	(
//! 		Tag::new("h1").child(Text::new("Docs")),
//! 		Tag::new("abbr").hint("HyperText Markup Language").child(Text::new("HTML")),
//! 	)
//! });
//!
//! // Tooltip initialisation is added because the abbreviation has a hint.
//! let html = body.render(&RenderContext::default());
//! ```

#[cfg(feature = "pages")]
pub use lantern_pages::*;
