//! The element contract.
//!
//! Every node of a Lantern document implements [`Element`]. Heterogeneous
//! elements are stored as [`AnyElement`] trait objects, which can be cloned
//! like values thanks to [`ElementClone`].

use crate::context::RenderContext;
use std::fmt;
use uuid::Uuid;

/// Unique identifier assigned to an element when it is constructed.
///
/// Identifiers are random v4 UUIDs, so generating them from several threads
/// at once never produces a collision. Copies of an element keep the
/// identifier of the element they were copied from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
	/// Generates a fresh identifier.
	pub fn generate() -> Self {
		Self(Uuid::new_v4().to_string())
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for ElementId {
	fn default() -> Self {
		Self::generate()
	}
}

impl fmt::Display for ElementId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for ElementId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// A boxed element of any concrete type.
pub type AnyElement = Box<dyn Element>;

/// A renderable node of a document.
///
/// `render` must not change the element: given the same element and the
/// same [`RenderContext`] it returns the same string every time. Elements
/// are `Send + Sync` so one tree can be rendered from several threads.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Divider {
///     id: ElementId,
/// }
///
/// impl Element for Divider {
///     fn id(&self) -> &str {
///         self.id.as_str()
///     }
///
///     fn render(&self, _cx: &RenderContext) -> String {
///         "<hr>".to_string()
///     }
/// }
/// ```
pub trait Element: ElementClone + Send + Sync + fmt::Debug {
	/// Returns the identifier assigned at construction.
	fn id(&self) -> &str;

	/// Whether this element belongs to the framework rather than being
	/// composed by the user from other elements.
	fn is_primitive(&self) -> bool {
		true
	}

	/// Renders the element to markup.
	fn render(&self, cx: &RenderContext) -> String;

	/// Hands out the members of a sequence element so the builder can
	/// splice them into the surrounding sequence.
	///
	/// Only sequence adapters return `Some`; the builder discards the
	/// emptied shell afterwards.
	fn take_group(&mut self) -> Option<Vec<AnyElement>> {
		None
	}
}

/// Object-safe cloning for [`Element`] trait objects.
pub trait ElementClone {
	/// Returns a boxed deep copy of this element.
	fn clone_element(&self) -> AnyElement;
}

impl<T> ElementClone for T
where
	T: Element + Clone + 'static,
{
	fn clone_element(&self) -> AnyElement {
		Box::new(self.clone())
	}
}

impl Clone for AnyElement {
	fn clone(&self) -> Self {
		(**self).clone_element()
	}
}
