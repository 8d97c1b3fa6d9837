//! Full HTML documents.

use crate::body::Body;
use crate::context::PublishingContext;
use crate::error::Result;
use lantern_core::{Element, ElementId, ElementList, IntoElements, RenderContext};

/// A complete HTML page: doctype, `<html>`, `<head>` and a [`Body`].
///
/// # Example
///
/// ```ignore
/// let document = Document::new(body)
///     .title("Home")
///     .head(Script::file("/js/analytics.js"));
/// let html = document.render(&cx);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
	id: ElementId,
	title: Option<String>,
	description: Option<String>,
	head: ElementList,
	body: Body,
}

impl Document {
	/// Wraps `body` in a document with an empty head.
	pub fn new(body: Body) -> Self {
		Self {
			id: ElementId::generate(),
			title: None,
			description: None,
			head: ElementList::new(),
			body,
		}
	}

	/// Builds the document for the page currently being published.
	///
	/// # Errors
	///
	/// Returns [`ContextError::MissingPage`](crate::ContextError::MissingPage)
	/// if the context has no page.
	pub fn from_context(cx: &PublishingContext) -> Result<Self> {
		let page = cx.page()?;
		let mut document = Self::new(Body::for_page(page)).title(page.title());
		if let Some(description) = page.description() {
			document = document.description(description);
		}
		Ok(document)
	}

	/// Sets the `<title>`.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the description meta tag.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Appends content to the `<head>`.
	pub fn head(mut self, content: impl IntoElements) -> Self {
		self.head.push(content);
		self
	}

	/// Returns the body.
	pub fn body(&self) -> &Body {
		&self.body
	}
}

impl Element for Document {
	fn id(&self) -> &str {
		self.id.as_str()
	}

	fn render(&self, cx: &RenderContext) -> String {
		let body = self.body.render(cx);
		let mut html = String::with_capacity(body.len() + 256);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str("<html lang=\"");
		html.push_str(&html_escape::encode_double_quoted_attribute(
			&cx.site().language,
		));
		html.push_str("\">");

		html.push_str("<head>");
		html.push_str("<meta charset=\"UTF-8\">");
		html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
		if let Some(title) = &self.title {
			html.push_str("<title>");
			html.push_str(&html_escape::encode_text(title));
			html.push_str("</title>");
		}
		if let Some(description) = &self.description {
			html.push_str("<meta name=\"description\" content=\"");
			html.push_str(&html_escape::encode_double_quoted_attribute(description));
			html.push_str("\">");
		}
		html.push_str(&self.head.render(cx));
		html.push_str("</head>");

		html.push_str(&body);
		html.push_str("</html>");

		tracing::trace!(document_id = %self.id, bytes = html.len(), "Rendered document");
		html
	}
}
