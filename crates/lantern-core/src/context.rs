//! Read-only state consulted while rendering.

use lantern_conf::SiteConfig;
use std::sync::Arc;

/// Facts about the page currently being rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
	/// At least one element on the page needs the syntax highlighter
	pub uses_syntax_highlighters: bool,
}

/// Configuration handed to every [`Element::render`](crate::Element::render) call.
///
/// A context is never mutated during a render pass. Cloning it is cheap:
/// the site configuration is shared behind an `Arc`, so many pages can be
/// rendered concurrently from the same configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
	site: Arc<SiteConfig>,
	page: PageState,
}

impl RenderContext {
	/// Creates a context for `site` with a default page state.
	pub fn new(site: Arc<SiteConfig>) -> Self {
		Self {
			site,
			page: PageState::default(),
		}
	}

	/// Creates a context with an explicit page state.
	pub fn with_page_state(site: Arc<SiteConfig>, page: PageState) -> Self {
		Self { site, page }
	}

	/// Returns the site configuration.
	pub fn site(&self) -> &SiteConfig {
		&self.site
	}

	/// Returns the shared handle to the site configuration.
	pub fn site_handle(&self) -> Arc<SiteConfig> {
		Arc::clone(&self.site)
	}

	/// Returns the page state.
	pub fn page(&self) -> PageState {
		self.page
	}

	/// Returns `true` if the page uses the syntax highlighter.
	pub fn uses_syntax_highlighters(&self) -> bool {
		self.page.uses_syntax_highlighters
	}

	/// Returns a copy of this context with the highlighter flag replaced.
	pub fn with_syntax_highlighters(mut self, used: bool) -> Self {
		self.page.uses_syntax_highlighters = used;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lantern_conf::BootstrapHosting;
	use rstest::rstest;

	#[rstest]
	fn test_default_context() {
		let cx = RenderContext::default();
		assert_eq!(cx.site().bootstrap, BootstrapHosting::Remote);
		assert!(!cx.uses_syntax_highlighters());
	}

	#[rstest]
	fn test_with_syntax_highlighters_leaves_original() {
		let cx = RenderContext::default();
		let highlighted = cx.clone().with_syntax_highlighters(true);

		assert!(!cx.uses_syntax_highlighters());
		assert!(highlighted.uses_syntax_highlighters());
	}

	#[rstest]
	fn test_site_is_shared() {
		let site = Arc::new(SiteConfig::new().with_bootstrap(BootstrapHosting::Local));
		let cx = RenderContext::new(Arc::clone(&site));
		let copy = cx.clone();

		assert!(Arc::ptr_eq(&cx.site_handle(), &copy.site_handle()));
		assert!(copy.site().bootstrap.is_local());
	}
}
