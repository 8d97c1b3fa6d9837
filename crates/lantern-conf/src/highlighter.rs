//! Syntax highlighter presentation settings.

use serde::{Deserialize, Serialize};

/// Whether code blocks show line numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineNumberVisibility {
	/// No line numbers (default)
	#[default]
	Hidden,
	/// Line numbers are shown
	Visible {
		/// Number printed next to the first line of every block
		#[serde(default = "default_first_line")]
		first_line: u32,
		/// Wrap long lines instead of scrolling horizontally
		#[serde(default)]
		wrap: bool,
	},
}

fn default_first_line() -> u32 {
	1
}

impl LineNumberVisibility {
	/// Visible line numbers starting at 1, without wrapping.
	pub fn visible() -> Self {
		Self::Visible {
			first_line: 1,
			wrap: false,
		}
	}

	/// Returns `true` unless line numbers are hidden.
	pub fn is_visible(&self) -> bool {
		matches!(self, Self::Visible { .. })
	}
}

/// Settings for the client-side syntax highlighter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxHighlighterConfig {
	/// Line number presentation
	pub line_numbers: LineNumberVisibility,
	/// Languages the highlighter bundle is built for
	pub languages: Vec<String>,
}

impl SyntaxHighlighterConfig {
	/// Creates a configuration with hidden line numbers and no languages.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the line number presentation.
	pub fn line_numbers(mut self, visibility: LineNumberVisibility) -> Self {
		self.line_numbers = visibility;
		self
	}

	/// Adds a language to the highlighter bundle.
	pub fn language(mut self, language: impl Into<String>) -> Self {
		self.languages.push(language.into());
		self
	}
}
