//! # Lantern Conf
//!
//! Site-wide publishing configuration for Lantern.
//!
//! The values in this crate are read by the rendering pipeline to decide
//! which scripts a page needs and how code blocks are presented. They are
//! loaded once (usually from a `lantern.toml` file), validated, and then
//! shared read-only between render passes behind an `Arc`.
//!
//! ## Example
//!
//! ```
//! use lantern_conf::{BootstrapHosting, LineNumberVisibility, SiteConfig};
//!
//! let config = SiteConfig::from_toml_str(
//! 	r#"
//! bootstrap = "local"
//!
//! [syntax_highlighter]
//! line_numbers = { visible = { first_line = 5, wrap = true } }
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.bootstrap, BootstrapHosting::Local);
//! assert_eq!(
//! 	config.syntax_highlighter.line_numbers,
//! 	LineNumberVisibility::Visible { first_line: 5, wrap: true }
//! );
//! ```

pub mod error;
pub mod highlighter;
pub mod site;

pub use error::{ConfigError, Result};
pub use highlighter::{LineNumberVisibility, SyntaxHighlighterConfig};
pub use site::{BootstrapHosting, SiteConfig};
