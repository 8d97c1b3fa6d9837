//! Site-wide publishing configuration.

use crate::error::{ConfigError, Result};
use crate::highlighter::{LineNumberVisibility, SyntaxHighlighterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where the Bootstrap JavaScript bundle is served from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapHosting {
	/// Loaded from a CDN by the layout's head (default)
	#[default]
	Remote,
	/// Served from the site's own `/js` directory
	Local,
	/// Bootstrap is not used
	None,
}

impl BootstrapHosting {
	/// Returns `true` when the bundle must be referenced from the page body.
	pub fn is_local(&self) -> bool {
		matches!(self, Self::Local)
	}
}

/// Publishing configuration shared by every page of a site.
///
/// Rendering never mutates this value; wrap it in an `Arc` and hand the
/// same instance to every render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Value of the `lang` attribute on the root `<html>` element
	pub language: String,
	/// Bootstrap bundle hosting mode
	pub bootstrap: BootstrapHosting,
	/// Code block presentation
	pub syntax_highlighter: SyntaxHighlighterConfig,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			language: "en".to_string(),
			bootstrap: BootstrapHosting::default(),
			syntax_highlighter: SyntaxHighlighterConfig::default(),
		}
	}
}

impl SiteConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses and validates a configuration from TOML source.
	///
	/// Keys that are absent keep their default value.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] for malformed input and
	/// [`ConfigError::Invalid`] when [`validate`](Self::validate) fails.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: SiteConfig = toml::from_str(source)?;
		config.validate()?;
		tracing::debug!(
			bootstrap = ?config.bootstrap,
			line_numbers = ?config.syntax_highlighter.line_numbers,
			"Loaded site configuration"
		);
		Ok(config)
	}

	/// Reads, parses and validates a TOML configuration file.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
	/// the same errors as [`from_toml_str`](Self::from_toml_str).
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "Reading site configuration");
		Self::from_toml_str(&source)
	}

	/// Checks values that deserialise fine but cannot be rendered.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Invalid`] if line numbers are visible with a
	/// first line of 0.
	pub fn validate(&self) -> Result<()> {
		if let LineNumberVisibility::Visible { first_line: 0, .. } =
			self.syntax_highlighter.line_numbers
		{
			let message = "syntax_highlighter.line_numbers.first_line must be at least 1";
			tracing::warn!("{}", message);
			return Err(ConfigError::Invalid(message.to_string()));
		}
		Ok(())
	}

	/// Sets the document language.
	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = language.into();
		self
	}

	/// Sets the Bootstrap hosting mode.
	pub fn with_bootstrap(mut self, hosting: BootstrapHosting) -> Self {
		self.bootstrap = hosting;
		self
	}

	/// Sets the line number presentation of the syntax highlighter.
	pub fn with_line_numbers(mut self, visibility: LineNumberVisibility) -> Self {
		self.syntax_highlighter.line_numbers = visibility;
		self
	}

	/// Replaces the whole syntax highlighter configuration.
	pub fn with_syntax_highlighter(mut self, config: SyntaxHighlighterConfig) -> Self {
		self.syntax_highlighter = config;
		self
	}
}
