//! # Lantern
//!
//! Typed HTML element trees for static sites, with a page body container
//! that injects the Bootstrap, syntax highlighting and tooltip scripts a
//! page actually needs.
//!
//! ## Feature Flags
//!
//! - `conf` - Site configuration ([`SiteConfig`]) and TOML loading
//! - `core` - Element contract, attribute sets and the content builder
//! - `pages` (default) - [`Body`], [`Document`] and the built-in elements
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use lantern::prelude::*;
//!
//! let config = SiteConfig::from_path("lantern.toml")?;
//! let cx = PublishingContext::from_config(config)
//! 	.with_page(Page::new("Home").with_body(Tag::new("h1").child(Text::new("Welcome"))));
//!
//! let body = Body::from_context(&cx)?.ignore_page_gutters();
//! let html = body.render(&cx.render_context());
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "pages")]
pub mod pages;

// Re-export configuration
#[cfg(feature = "conf")]
pub use lantern_conf::{
	BootstrapHosting, ConfigError, LineNumberVisibility, SiteConfig, SyntaxHighlighterConfig,
};

// Re-export the element model
#[cfg(feature = "core")]
pub use lantern_core::{
	AnyElement, Attributes, Branch, DataAttribute, Element, ElementId, ElementList, InlineStyle,
	IntoElements, RenderContext, elements, flat_unwrap,
};

// Re-export page-level types
#[cfg(feature = "pages")]
pub use lantern_pages::{
	Body, Component, Composite, ContextError, Document, Page, PublishingContext, RawHtml, Script,
	TOOLTIP_MARKER, Tag, Text,
};

/// Commonly used types, importable with `use lantern::prelude::*`.
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use crate::{BootstrapHosting, LineNumberVisibility, SiteConfig};

	#[cfg(feature = "core")]
	pub use crate::{Branch, Element, ElementList, IntoElements, RenderContext, elements};

	#[cfg(feature = "pages")]
	pub use crate::{Body, Component, Composite, Document, Page, PublishingContext, Tag, Text};
}
