//! Publishing context: the site configuration plus the current page.

use crate::error::{ContextError, Result};
use crate::page::Page;
use lantern_conf::SiteConfig;
use lantern_core::{PageState, RenderContext};
use std::sync::Arc;

/// Everything the publishing pipeline knows while producing one page.
///
/// The site configuration is shared; each page gets its own context so
/// pages can be rendered in parallel.
#[derive(Debug, Clone, Default)]
pub struct PublishingContext {
	site: Arc<SiteConfig>,
	page: Option<Page>,
}

impl PublishingContext {
	/// Creates a context for `site` with no current page.
	pub fn new(site: Arc<SiteConfig>) -> Self {
		Self { site, page: None }
	}

	/// Creates a context owning `site`.
	pub fn from_config(site: SiteConfig) -> Self {
		Self::new(Arc::new(site))
	}

	/// Sets the page being published.
	pub fn with_page(mut self, page: Page) -> Self {
		self.page = Some(page);
		self
	}

	/// Returns the site configuration.
	pub fn site(&self) -> &SiteConfig {
		&self.site
	}

	/// Returns the page being published.
	///
	/// # Errors
	///
	/// Returns [`ContextError::MissingPage`] if no page has been set.
	pub fn page(&self) -> Result<&Page> {
		self.page.as_ref().ok_or(ContextError::MissingPage)
	}

	/// Builds the read-only context handed to `Element::render`.
	pub fn render_context(&self) -> RenderContext {
		let page = PageState {
			uses_syntax_highlighters: self
				.page
				.as_ref()
				.is_some_and(Page::uses_syntax_highlighters),
		};
		RenderContext::with_page_state(Arc::clone(&self.site), page)
	}
}
