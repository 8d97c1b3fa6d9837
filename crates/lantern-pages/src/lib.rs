//! # Lantern Pages
//!
//! Page-level building blocks on top of `lantern-core`:
//!
//! - [`elements`]: the framework's own leaf elements ([`Script`], [`Text`],
//!   [`RawHtml`], [`Tag`]) and [`Composite`] for user-defined components
//! - [`body`]: the [`Body`] container, which wraps page content and injects
//!   the scripts the page needs
//! - [`page`] and [`context`]: the page being published and the
//!   [`PublishingContext`] that supplies it together with the site config
//! - [`document`]: the [`Document`] layout wrapper producing a full HTML page
//!
//! ## Example
//!
//! ```ignore
//! use lantern_pages::{Body, PublishingContext, Tag, Text};
//!
//! let body = Body::new(|| {
//!     (
//!         Tag::new("h1").child(Text::new("Welcome")),
//!         Tag::new("p").child(Text::new("Hello, world!")),
//!     )
//! });
//!
//! let cx = PublishingContext::default().render_context();
//! let html = body.render(&cx);
//! ```

pub mod body;
pub mod context;
pub mod document;
pub mod elements;
pub mod error;
pub mod page;

pub use body::{Body, TOOLTIP_MARKER};
pub use context::PublishingContext;
pub use document::Document;
pub use elements::{Component, Composite, RawHtml, Script, Tag, Text};
pub use error::{ContextError, Result};
pub use page::Page;
