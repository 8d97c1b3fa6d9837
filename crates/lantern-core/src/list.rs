//! Ordered sequences of elements.

use crate::builder::{IntoElements, flat_unwrap};
use crate::context::RenderContext;
use crate::element::{AnyElement, Element, ElementId};

/// An ordered sequence of elements that is itself an [`Element`].
///
/// Rendering a list concatenates the renders of its members, in order,
/// with no separator. When a list is nested inside builder content it is
/// spliced into the surrounding sequence rather than kept as one node.
#[derive(Debug, Clone, Default)]
pub struct ElementList {
	id: ElementId,
	items: Vec<AnyElement>,
}

impl ElementList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a list from builder content, flattening nested sequences.
	pub fn from_elements(content: impl IntoElements) -> Self {
		Self {
			id: ElementId::generate(),
			items: flat_unwrap(content),
		}
	}

	/// Appends builder content to the end of the list.
	pub fn push(&mut self, content: impl IntoElements) {
		self.items.extend(flat_unwrap(content));
	}

	/// Returns the members.
	pub fn items(&self) -> &[AnyElement] {
		&self.items
	}

	/// Iterates over the members.
	pub fn iter(&self) -> std::slice::Iter<'_, AnyElement> {
		self.items.iter()
	}

	/// Returns the number of members.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns `true` if the list has no members.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the list with every nested sequence expanded in place.
	pub fn flatten(self) -> Self {
		Self {
			id: self.id,
			items: flat_unwrap(self.items),
		}
	}

	/// Consumes the list and returns its members.
	pub fn into_vec(self) -> Vec<AnyElement> {
		self.items
	}
}

impl Element for ElementList {
	fn id(&self) -> &str {
		self.id.as_str()
	}

	fn render(&self, cx: &RenderContext) -> String {
		self.items.iter().map(|item| item.render(cx)).collect()
	}

	fn take_group(&mut self) -> Option<Vec<AnyElement>> {
		Some(std::mem::take(&mut self.items))
	}
}

impl FromIterator<AnyElement> for ElementList {
	fn from_iter<I: IntoIterator<Item = AnyElement>>(iter: I) -> Self {
		Self::from_elements(iter.into_iter().collect::<Vec<_>>())
	}
}

impl IntoIterator for ElementList {
	type Item = AnyElement;
	type IntoIter = std::vec::IntoIter<AnyElement>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a ElementList {
	type Item = &'a AnyElement;
	type IntoIter = std::slice::Iter<'a, AnyElement>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
