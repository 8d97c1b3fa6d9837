//! Text content.

use lantern_core::{Element, ElementId, RenderContext};

/// Text rendered with HTML special characters escaped.
#[derive(Debug, Clone)]
pub struct Text {
	id: ElementId,
	content: String,
}

impl Text {
	/// Creates a text node.
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			id: ElementId::generate(),
			content: content.into(),
		}
	}

	/// Returns the unescaped content.
	pub fn content(&self) -> &str {
		&self.content
	}
}

impl Element for Text {
	fn id(&self) -> &str {
		self.id.as_str()
	}

	fn render(&self, _cx: &RenderContext) -> String {
		html_escape::encode_text(&self.content).into_owned()
	}
}

/// Markup inserted verbatim.
///
/// The caller guarantees the content is well-formed and safe.
#[derive(Debug, Clone)]
pub struct RawHtml {
	id: ElementId,
	html: String,
}

impl RawHtml {
	/// Wraps pre-rendered markup.
	pub fn new(html: impl Into<String>) -> Self {
		Self {
			id: ElementId::generate(),
			html: html.into(),
		}
	}
}

impl Element for RawHtml {
	fn id(&self) -> &str {
		self.id.as_str()
	}

	fn render(&self, _cx: &RenderContext) -> String {
		self.html.clone()
	}
}
