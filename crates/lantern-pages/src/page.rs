//! The page being published.

use lantern_core::{ElementList, IntoElements};

/// A page produced by the publishing pipeline.
///
/// The page supplies the default content of a [`Body`](crate::Body)
/// constructed without explicit content.
#[derive(Debug, Clone, Default)]
pub struct Page {
	title: String,
	description: Option<String>,
	body: ElementList,
	uses_syntax_highlighters: bool,
}

impl Page {
	/// Creates an empty page titled `title`.
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			..Self::default()
		}
	}

	/// Sets the page description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Replaces the default body content.
	pub fn with_body(mut self, content: impl IntoElements) -> Self {
		self.body = ElementList::from_elements(content);
		self
	}

	/// Records whether any element on the page needs the syntax highlighter.
	pub fn with_syntax_highlighters(mut self, used: bool) -> Self {
		self.uses_syntax_highlighters = used;
		self
	}

	/// Returns the title.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Returns the description, if any.
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	/// Returns the default body content.
	pub fn body(&self) -> &ElementList {
		&self.body
	}

	/// Returns `true` if the page needs the syntax highlighter.
	pub fn uses_syntax_highlighters(&self) -> bool {
		self.uses_syntax_highlighters
	}
}
