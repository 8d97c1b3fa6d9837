//! Attribute sets for element markup.
//!
//! An [`Attributes`] value is the mutable bag of presentation data one
//! element carries: tag name, classes, inline styles, data attributes and
//! any other named attributes. Every category keeps insertion order, and
//! a later assignment to an existing key replaces the value in place.
//!
//! Values are written verbatim. Escaping user content is the job of the
//! element that produced it.

use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// A single CSS declaration, rendered as `property: value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineStyle {
	/// CSS property name (e.g. `white-space`)
	pub property: String,
	/// CSS value (e.g. `pre-wrap`)
	pub value: String,
}

impl InlineStyle {
	/// Creates a new declaration.
	pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			property: property.into(),
			value: value.into(),
		}
	}
}

impl fmt::Display for InlineStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.property, self.value)
	}
}

/// A `data-*` attribute. `name` is stored without the `data-` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataAttribute {
	/// Attribute name without the `data-` prefix
	pub name: String,
	/// Attribute value
	pub value: String,
}

impl DataAttribute {
	/// Creates a new data attribute.
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

impl fmt::Display for DataAttribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "data-{}=\"{}\"", self.name, self.value)
	}
}

/// Tag name, classes, styles and attributes of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
	tag: String,
	id: Option<String>,
	classes: IndexSet<String>,
	styles: IndexMap<String, String>,
	data: IndexMap<String, String>,
	custom: IndexMap<String, String>,
}

impl Default for Attributes {
	fn default() -> Self {
		Self::new("div")
	}
}

impl Attributes {
	/// Creates an empty attribute set for `tag`.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			id: None,
			classes: IndexSet::new(),
			styles: IndexMap::new(),
			data: IndexMap::new(),
			custom: IndexMap::new(),
		}
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Replaces the tag name.
	pub fn set_tag(&mut self, tag: impl Into<String>) {
		self.tag = tag.into();
	}

	/// Returns the HTML `id` attribute, if set.
	pub fn html_id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Sets the HTML `id` attribute.
	pub fn set_html_id(&mut self, id: impl Into<String>) {
		self.id = Some(id.into());
	}

	/// Adds each class that is not already present.
	///
	/// Empty class names are ignored.
	pub fn append_classes<I, S>(&mut self, classes: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for class in classes {
			let class = class.into();
			if !class.is_empty() {
				self.classes.insert(class);
			}
		}
	}

	/// Adds a single class if it is not already present.
	pub fn append_class(&mut self, class: impl Into<String>) {
		self.append_classes([class]);
	}

	/// Sets a style declaration, keeping the position of an existing property.
	pub fn append_style(&mut self, style: InlineStyle) {
		self.styles.insert(style.property, style.value);
	}

	/// Sets a data attribute, keeping the position of an existing name.
	pub fn append_data(&mut self, attribute: DataAttribute) {
		self.data.insert(attribute.name, attribute.value);
	}

	/// Sets any other attribute (e.g. `role`, `aria-label`, `defer`).
	///
	/// An empty value renders as a bare attribute name.
	pub fn append_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.custom.insert(name.into(), value.into());
	}

	/// Merges `other` into `self`.
	///
	/// Classes are appended, everything else overrides by name. The tag of
	/// `self` is kept, as is its HTML id unless `self` has none.
	pub fn merge(&mut self, other: &Attributes) {
		if self.id.is_none() {
			self.id.clone_from(&other.id);
		}
		self.append_classes(other.classes.iter().cloned());
		for (property, value) in &other.styles {
			self.styles.insert(property.clone(), value.clone());
		}
		for (name, value) in &other.data {
			self.data.insert(name.clone(), value.clone());
		}
		for (name, value) in &other.custom {
			self.custom.insert(name.clone(), value.clone());
		}
	}

	/// Iterates over classes in insertion order.
	pub fn classes(&self) -> impl Iterator<Item = &str> {
		self.classes.iter().map(String::as_str)
	}

	/// Returns `true` if `class` is present.
	pub fn has_class(&self, class: &str) -> bool {
		self.classes.contains(class)
	}

	/// Iterates over style declarations in insertion order.
	pub fn styles(&self) -> impl Iterator<Item = InlineStyle> + '_ {
		self.styles
			.iter()
			.map(|(property, value)| InlineStyle::new(property.clone(), value.clone()))
	}

	/// Returns the value of a style property.
	pub fn style(&self, property: &str) -> Option<&str> {
		self.styles.get(property).map(String::as_str)
	}

	/// Iterates over data attributes in insertion order.
	pub fn data_attributes(&self) -> impl Iterator<Item = DataAttribute> + '_ {
		self.data
			.iter()
			.map(|(name, value)| DataAttribute::new(name.clone(), value.clone()))
	}

	/// Returns the value of a data attribute (name without `data-`).
	pub fn data(&self, name: &str) -> Option<&str> {
		self.data.get(name).map(String::as_str)
	}

	/// Returns the value of a custom attribute.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.custom.get(name).map(String::as_str)
	}

	/// Returns `true` if no attribute of any category is set.
	pub fn is_empty(&self) -> bool {
		self.id.is_none()
			&& self.classes.is_empty()
			&& self.styles.is_empty()
			&& self.data.is_empty()
			&& self.custom.is_empty()
	}

	/// Renders the opening tag, `content` and the closing tag.
	///
	/// Attribute categories that are empty are omitted. Output order is
	/// `id`, `class`, `style`, `data-*`, then custom attributes.
	pub fn description(&self, content: &str) -> String {
		let mut output = String::with_capacity(content.len() + 2 * self.tag.len() + 5);
		output.push('<');
		output.push_str(&self.tag);
		self.write_attributes(&mut output);
		output.push('>');
		output.push_str(content);
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
		output
	}

	/// Renders only the opening tag, for void elements such as `<img>`.
	pub fn void_description(&self) -> String {
		let mut output = String::with_capacity(self.tag.len() + 2);
		output.push('<');
		output.push_str(&self.tag);
		self.write_attributes(&mut output);
		output.push('>');
		output
	}

	fn write_attributes(&self, output: &mut String) {
		if let Some(id) = &self.id {
			output.push_str(" id=\"");
			output.push_str(id);
			output.push('"');
		}

		if !self.classes.is_empty() {
			output.push_str(" class=\"");
			for (index, class) in self.classes.iter().enumerate() {
				if index > 0 {
					output.push(' ');
				}
				output.push_str(class);
			}
			output.push('"');
		}

		if !self.styles.is_empty() {
			output.push_str(" style=\"");
			for (index, (property, value)) in self.styles.iter().enumerate() {
				if index > 0 {
					output.push(' ');
				}
				output.push_str(property);
				output.push_str(": ");
				output.push_str(value);
				output.push(';');
			}
			output.push('"');
		}

		for (name, value) in &self.data {
			output.push_str(" data-");
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(value);
			output.push('"');
		}

		for (name, value) in &self.custom {
			output.push(' ');
			output.push_str(name);
			if !value.is_empty() {
				output.push_str("=\"");
				output.push_str(value);
				output.push('"');
			}
		}
	}
}
