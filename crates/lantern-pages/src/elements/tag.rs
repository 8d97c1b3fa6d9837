//! Generic markup element.

use lantern_core::{
	AnyElement, Attributes, DataAttribute, Element, ElementId, InlineStyle, IntoElements,
	RenderContext, flat_unwrap,
};

/// Tags rendered without a closing tag.
const VOID_TAGS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
	"track", "wbr",
];

/// An element with an arbitrary tag name, attributes and children.
///
/// # Example
///
/// ```ignore
/// let badge = Tag::new("span")
///     .class("badge")
///     .hint("Shown on hover")
///     .child(Text::new("?"));
/// ```
#[derive(Debug, Clone)]
pub struct Tag {
	id: ElementId,
	attributes: Attributes,
	children: Vec<AnyElement>,
}

impl Tag {
	/// Creates an empty element named `tag`.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			id: ElementId::generate(),
			attributes: Attributes::new(tag),
			children: Vec::new(),
		}
	}

	/// Adds a class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.attributes.append_class(class);
		self
	}

	/// Sets an inline style declaration.
	pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes
			.append_style(InlineStyle::new(property, value));
		self
	}

	/// Sets a `data-*` attribute (`name` without the prefix).
	pub fn data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.append_data(DataAttribute::new(name, value));
		self
	}

	/// Sets any other attribute.
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.append_attribute(name, value);
		self
	}

	/// Sets the HTML `id` attribute.
	pub fn html_id(mut self, id: impl Into<String>) -> Self {
		self.attributes.set_html_id(id);
		self
	}

	/// Attaches a Bootstrap tooltip showing `text`.
	///
	/// The page body notices the tooltip marker and adds the script that
	/// activates tooltips.
	pub fn hint(self, text: impl Into<String>) -> Self {
		let text: String = text.into();
		let text = html_escape::encode_double_quoted_attribute(&text).into_owned();
		self.data("bs-toggle", "tooltip").data("bs-title", text)
	}

	/// Appends builder content as children.
	pub fn child(mut self, content: impl IntoElements) -> Self {
		self.children.extend(flat_unwrap(content));
		self
	}

	/// Returns the attribute set.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the children.
	pub fn children(&self) -> &[AnyElement] {
		&self.children
	}

	fn is_void(&self) -> bool {
		VOID_TAGS.contains(&self.attributes.tag())
	}
}

impl Element for Tag {
	fn id(&self) -> &str {
		self.id.as_str()
	}

	fn render(&self, cx: &RenderContext) -> String {
		if self.is_void() {
			return self.attributes.void_description();
		}
		let content: String = self.children.iter().map(|child| child.render(cx)).collect();
		self.attributes.description(&content)
	}
}
