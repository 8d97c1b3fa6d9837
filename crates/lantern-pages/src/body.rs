//! The document body container.
//!
//! [`Body`] owns the top-level content of a page. Rendering it produces the
//! `<body>` element with the page content followed by the scripts the
//! page needs:
//!
//! 1. the local Bootstrap bundle, when the site serves Bootstrap itself
//! 2. the syntax highlighter, when the page contains highlighted code
//! 3. the tooltip initialiser, when rendered content carries [`TOOLTIP_MARKER`]
//! 4. the core framework script, always
//!
//! Visible line numbers additionally add the `line-numbers` class, an
//! optional `data-start` attribute and an optional `white-space` style.

use crate::context::PublishingContext;
use crate::elements::Script;
use crate::error::Result;
use crate::page::Page;
use lantern_conf::LineNumberVisibility;
use lantern_core::{
	AnyElement, Attributes, DataAttribute, Element, ElementId, InlineStyle, IntoElements,
	RenderContext, flat_unwrap,
};

/// Substring whose presence in rendered content means at least one
/// element wants a Bootstrap tooltip.
pub const TOOLTIP_MARKER: &str = r#"data-bs-toggle="tooltip""#;

const LOCAL_BOOTSTRAP_SCRIPT: &str = "/js/bootstrap.bundle.min.js";
const SYNTAX_HIGHLIGHTING_SCRIPT: &str = "/js/syntax-highlighting.js";
const CORE_SCRIPT: &str = "/js/ignite-core.js";

const TOOLTIP_INIT_CODE: &str = r#"const tooltipTriggerList = document.querySelectorAll('[data-bs-toggle="tooltip"]')
const tooltipList = [...tooltipTriggerList].map(tooltipTriggerEl => new bootstrap.Tooltip(tooltipTriggerEl))"#;

/// Class limiting the page width to Bootstrap's container.
const CONTAINER_CLASS: &str = "container";

/// The `<body>` element of a page.
///
/// Modifiers such as [`ignore_page_gutters`](Self::ignore_page_gutters)
/// return a modified copy and never change the receiver.
#[derive(Debug, Clone)]
pub struct Body {
	id: ElementId,
	attributes: Attributes,
	is_bound_by_container: bool,
	items: Vec<AnyElement>,
}

impl Body {
	/// Creates a body from a builder closure.
	///
	/// # Example
	///
	/// ```ignore
	/// let body = Body::new(|| (Tag::new("h1").child(Text::new("Hi")), footer));
	/// ```
	pub fn new<F, C>(content: F) -> Self
	where
		F: FnOnce() -> C,
		C: IntoElements,
	{
		Self::from_elements(content())
	}

	/// Creates a body from builder content.
	pub fn from_elements(content: impl IntoElements) -> Self {
		Self {
			id: ElementId::generate(),
			attributes: Attributes::new("body"),
			is_bound_by_container: true,
			items: flat_unwrap(content),
		}
	}

	/// Creates a body holding a copy of the page's default content.
	pub fn for_page(page: &Page) -> Self {
		Self::from_elements(page.body().clone())
	}

	/// Creates a body from the page currently being published.
	///
	/// # Errors
	///
	/// Returns [`ContextError::MissingPage`](crate::ContextError::MissingPage)
	/// if the context has no page.
	pub fn from_context(cx: &PublishingContext) -> Result<Self> {
		Ok(Self::for_page(cx.page()?))
	}

	/// Removes the `container` class so content spans the full viewport width.
	pub fn ignore_page_gutters(&self) -> Self {
		let mut copy = self.clone();
		copy.is_bound_by_container = false;
		copy
	}

	/// Returns a copy with `class` added.
	pub fn class(&self, class: impl Into<String>) -> Self {
		let mut copy = self.clone();
		copy.attributes.append_class(class);
		copy
	}

	/// Returns a copy with an inline style declaration set.
	pub fn style(&self, property: impl Into<String>, value: impl Into<String>) -> Self {
		let mut copy = self.clone();
		copy.attributes
			.append_style(InlineStyle::new(property, value));
		copy
	}

	/// Returns a copy with a `data-*` attribute set.
	pub fn data(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let mut copy = self.clone();
		copy.attributes.append_data(DataAttribute::new(name, value));
		copy
	}

	/// Returns the children in render order.
	pub fn items(&self) -> &[AnyElement] {
		&self.items
	}

	/// Returns `true` if the body is limited to the container width.
	pub fn is_bound_by_container(&self) -> bool {
		self.is_bound_by_container
	}

	/// Returns the stored attribute set.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}
}

impl Element for Body {
	fn id(&self) -> &str {
		self.id.as_str()
	}

	fn render(&self, cx: &RenderContext) -> String {
		let mut attributes = self.attributes.clone();
		let mut output: String = self.items.iter().map(|item| item.render(cx)).collect();

		let site = cx.site();
		let local_bootstrap = site.bootstrap.is_local();
		if local_bootstrap {
			output.push_str(&Script::file(LOCAL_BOOTSTRAP_SCRIPT).render(cx));
		}

		let highlighter = cx.uses_syntax_highlighters();
		if highlighter {
			output.push_str(&Script::file(SYNTAX_HIGHLIGHTING_SCRIPT).render(cx));
		}

		if let LineNumberVisibility::Visible { first_line, wrap } =
			site.syntax_highlighter.line_numbers
		{
			attributes.append_class("line-numbers");
			if first_line != 1 {
				attributes.append_data(DataAttribute::new("start", first_line.to_string()));
			}
			if wrap {
				attributes.append_style(InlineStyle::new("white-space", "pre-wrap"));
			}
		}

		let tooltips = output.contains(TOOLTIP_MARKER);
		if tooltips {
			output.push_str(&Script::code(TOOLTIP_INIT_CODE).render(cx));
		}

		output.push_str(&Script::file(CORE_SCRIPT).render(cx));

		attributes.set_tag("body");
		if self.is_bound_by_container {
			attributes.append_class(CONTAINER_CLASS);
		}

		tracing::debug!(
			body_id = %self.id,
			items = self.items.len(),
			local_bootstrap,
			highlighter,
			tooltips,
			"Rendered body"
		);

		attributes.description(&output)
	}
}
