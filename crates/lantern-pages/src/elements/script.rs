//! `<script>` elements.

use lantern_core::{Attributes, Element, ElementId, RenderContext};

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScriptSource {
	File(String),
	Code(String),
}

/// A script referenced by path or embedded inline.
///
/// ```ignore
/// Script::file("/js/app.js").render(&cx);      // <script src="/js/app.js"></script>
/// Script::code("init()").render(&cx);          // <script>init()</script>
/// ```
#[derive(Debug, Clone)]
pub struct Script {
	id: ElementId,
	source: ScriptSource,
	attributes: Attributes,
}

impl Script {
	/// References the script at `path` through a `src` attribute.
	pub fn file(path: impl Into<String>) -> Self {
		let path = path.into();
		let mut attributes = Attributes::new("script");
		attributes.append_attribute("src", path.clone());
		Self {
			id: ElementId::generate(),
			source: ScriptSource::File(path),
			attributes,
		}
	}

	/// Embeds `code` as the script's content.
	pub fn code(code: impl Into<String>) -> Self {
		Self {
			id: ElementId::generate(),
			source: ScriptSource::Code(code.into()),
			attributes: Attributes::new("script"),
		}
	}

	/// Adds an attribute such as `defer` or `type`.
	///
	/// Pass an empty value for a bare boolean attribute.
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.append_attribute(name, value);
		self
	}

	/// Returns the referenced path for file scripts.
	pub fn path(&self) -> Option<&str> {
		match &self.source {
			ScriptSource::File(path) => Some(path),
			ScriptSource::Code(_) => None,
		}
	}
}

impl Element for Script {
	fn id(&self) -> &str {
		self.id.as_str()
	}

	fn render(&self, _cx: &RenderContext) -> String {
		match &self.source {
			ScriptSource::File(_) => self.attributes.description(""),
			ScriptSource::Code(code) => self.attributes.description(code),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_file_script() {
		let script = Script::file("/js/ignite-core.js");
		assert_eq!(script.path(), Some("/js/ignite-core.js"));
		assert_eq!(
			script.render(&RenderContext::default()),
			"<script src=\"/js/ignite-core.js\"></script>"
		);
	}

	#[rstest]
	fn test_code_script() {
		let script = Script::code("console.log(1)");
		assert_eq!(script.path(), None);
		assert_eq!(
			script.render(&RenderContext::default()),
			"<script>console.log(1)</script>"
		);
	}

	#[rstest]
	fn test_extra_attributes_follow_src() {
		let script = Script::file("/js/app.js")
			.attribute("defer", "")
			.attribute("type", "module");
		assert_eq!(
			script.render(&RenderContext::default()),
			"<script src=\"/js/app.js\" defer type=\"module\"></script>"
		);
	}
}
