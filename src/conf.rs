//! Site configuration module.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "conf")]
//! use lantern::conf::{SiteConfig, BootstrapHosting};
//! ```

#[cfg(feature = "conf")]
pub use lantern_conf::*;
