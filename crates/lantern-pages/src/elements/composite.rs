//! User-defined composite elements.

use lantern_core::{Element, ElementId, ElementList, IntoElements, RenderContext};
use std::fmt;

/// A reusable piece of content built from other elements.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn body(&self) -> impl IntoElements {
///         Tag::new("p").child(Text::new(format!("Hello, {}!", self.name)))
///     }
/// }
///
/// let element = Composite::new(Greeting { name: "Ada".into() });
/// ```
pub trait Component: Clone + Send + Sync + fmt::Debug + 'static {
	/// Returns the content this component expands to.
	fn body(&self) -> impl IntoElements;
}

/// Adapts a [`Component`] to the [`Element`] contract.
///
/// Composites are not primitive: they render whatever their body renders.
#[derive(Debug, Clone)]
pub struct Composite<C> {
	id: ElementId,
	component: C,
}

impl<C: Component> Composite<C> {
	/// Wraps `component`, assigning it a fresh id.
	pub fn new(component: C) -> Self {
		Self {
			id: ElementId::generate(),
			component,
		}
	}

	/// Returns the wrapped component.
	pub fn component(&self) -> &C {
		&self.component
	}

	/// Expands the component into a flat element list.
	pub fn expand(&self) -> ElementList {
		ElementList::from_elements(self.component.body())
	}
}

impl<C: Component> Element for Composite<C> {
	fn id(&self) -> &str {
		self.id.as_str()
	}

	fn is_primitive(&self) -> bool {
		false
	}

	fn render(&self, cx: &RenderContext) -> String {
		self.expand().render(cx)
	}
}
