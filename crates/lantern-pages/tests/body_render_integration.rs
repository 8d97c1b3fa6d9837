//! Body rendering integration tests
//!
//! Test Categories:
//! 1. Canonical outputs for the supported site configurations
//! 2. Script ordering
//! 3. Line number presentation
//! 4. Determinism and copy semantics

use insta::assert_snapshot;
use lantern_conf::{BootstrapHosting, LineNumberVisibility, SiteConfig};
use lantern_core::{Branch, Element, ElementList, RenderContext, elements};
use lantern_pages::{
	Body, Component, Composite, Page, PublishingContext, RawHtml, Tag, Text, TOOLTIP_MARKER,
};
use rstest::rstest;
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn context(site: SiteConfig) -> RenderContext {
	RenderContext::new(Arc::new(site))
}

#[derive(Debug, Clone)]
struct Card {
	title: String,
	hint: Option<String>,
}

impl Component for Card {
	fn body(&self) -> impl lantern_core::IntoElements {
		let heading = match &self.hint {
			Some(hint) => Branch::First(
				Tag::new("h5")
					.hint(hint.clone())
					.child(Text::new(self.title.clone())),
			),
			None => Branch::Second(Tag::new("h5").child(Text::new(self.title.clone()))),
		};
		Tag::new("div").class("card").child(heading)
	}
}

// ============================================================================
// Canonical outputs
// ============================================================================

#[rstest]
fn test_empty_body_with_default_configuration() {
	let html = Body::from_elements(()).render(&RenderContext::default());
	assert_snapshot!(html, @r#"<body class="container"><script src="/js/ignite-core.js"></script></body>"#);
}

#[rstest]
fn test_empty_body_with_local_bootstrap() {
	let cx = context(SiteConfig::new().with_bootstrap(BootstrapHosting::Local));
	let html = Body::from_elements(()).render(&cx);
	assert_snapshot!(html, @r#"<body class="container"><script src="/js/bootstrap.bundle.min.js"></script><script src="/js/ignite-core.js"></script></body>"#);
}

#[rstest]
fn test_full_width_body() {
	let html = Body::from_elements(Text::new("wide"))
		.ignore_page_gutters()
		.render(&RenderContext::default());
	assert_snapshot!(html, @r#"<body>wide<script src="/js/ignite-core.js"></script></body>"#);
}

// ============================================================================
// Script ordering
// ============================================================================

#[rstest]
fn test_tooltip_script_position() {
	let cx = context(SiteConfig::new().with_bootstrap(BootstrapHosting::Local))
		.with_syntax_highlighters(true);
	let body = Body::new(|| {
		(
			Tag::new("pre").child(Text::new("fn main() {}")),
			Tag::new("abbr").hint("HyperText Markup Language").child(Text::new("HTML")),
		)
	});
	let html = body.render(&cx);

	let content_end = html.find("</abbr>").unwrap();
	let bootstrap = html.find("/js/bootstrap.bundle.min.js").unwrap();
	let highlighter = html.find("/js/syntax-highlighting.js").unwrap();
	let tooltip = html.find("document.querySelectorAll").unwrap();
	let core = html.find("/js/ignite-core.js").unwrap();

	assert!(content_end < bootstrap);
	assert!(bootstrap < highlighter);
	assert!(highlighter < tooltip);
	assert!(tooltip < core);
	assert!(html.ends_with("<script src=\"/js/ignite-core.js\"></script></body>"));
}

#[rstest]
fn test_tooltip_marker_found_through_composites() {
	let body = Body::new(|| {
		elements![
			Composite::new(Card {
				title: "Plain".to_string(),
				hint: None,
			}),
			Composite::new(Card {
				title: "Hinted".to_string(),
				hint: Some("More".to_string()),
			}),
		]
	});
	let html = body.render(&RenderContext::default());

	assert!(html.contains(TOOLTIP_MARKER));
	assert!(html.contains("new bootstrap.Tooltip(tooltipTriggerEl)"));
}

#[rstest]
fn test_tooltip_marker_in_raw_markup() {
	let body = Body::from_elements(RawHtml::new(
		r#"<a href="/" data-bs-toggle="tooltip" data-bs-title="Home">H</a>"#,
	));
	let html = body.render(&RenderContext::default());
	assert!(html.contains("<script>const tooltipTriggerList"));
}

#[rstest]
fn test_highlighter_flag_from_publishing_context() {
	let publishing = PublishingContext::from_config(SiteConfig::new())
		.with_page(Page::new("Code").with_syntax_highlighters(true));
	let html = Body::from_elements(()).render(&publishing.render_context());

	assert_snapshot!(html, @r#"<body class="container"><script src="/js/syntax-highlighting.js"></script><script src="/js/ignite-core.js"></script></body>"#);
}

// ============================================================================
// Line numbers
// ============================================================================

#[rstest]
fn test_line_numbers_with_start_and_wrap() {
	let cx = context(
		SiteConfig::new().with_line_numbers(LineNumberVisibility::Visible {
			first_line: 5,
			wrap: true,
		}),
	);
	let body = Body::from_elements(());
	let html = body.render(&cx);

	assert!(html.contains("class=\"line-numbers container\""));
	assert!(html.contains("data-start=\"5\""));
	assert!(html.contains("style=\"white-space: pre-wrap;\""));
}

#[rstest]
#[case(1, false, "<body class=\"line-numbers container\">")]
#[case(1, true, "<body class=\"line-numbers container\" style=\"white-space: pre-wrap;\">")]
#[case(10, false, "<body class=\"line-numbers container\" data-start=\"10\">")]
fn test_line_number_variants(#[case] first_line: u32, #[case] wrap: bool, #[case] opening: &str) {
	let cx = context(
		SiteConfig::new().with_line_numbers(LineNumberVisibility::Visible { first_line, wrap }),
	);
	let html = Body::from_elements(()).render(&cx);
	assert!(html.starts_with(opening), "unexpected output: {}", html);
}

#[rstest]
fn test_line_numbers_do_not_change_scripts() {
	let hidden = Body::from_elements(()).render(&RenderContext::default());
	let visible = Body::from_elements(()).render(&context(
		SiteConfig::new().with_line_numbers(LineNumberVisibility::Visible {
			first_line: 2,
			wrap: true,
		}),
	));

	let scripts = |html: &str| html[html.find("<script").unwrap()..].to_string();
	assert_eq!(scripts(&hidden), scripts(&visible));
}

// ============================================================================
// Determinism and copy semantics
// ============================================================================

#[rstest]
fn test_render_twice_is_identical() {
	let cx = context(
		SiteConfig::new()
			.with_bootstrap(BootstrapHosting::Local)
			.with_line_numbers(LineNumberVisibility::Visible {
				first_line: 7,
				wrap: true,
			}),
	)
	.with_syntax_highlighters(true);
	let body = Body::new(|| {
		(
			Tag::new("span").hint("tip"),
			ElementList::from_elements(vec![Text::new("a"), Text::new("b")]),
		)
	});

	assert_eq!(body.render(&cx), body.render(&cx));
}

#[rstest]
fn test_ignore_page_gutters_leaves_receiver() {
	let body = Body::from_elements(Text::new("x"));
	let before = body.render(&RenderContext::default());

	let copy = body.ignore_page_gutters();
	let again = copy.ignore_page_gutters();

	assert!(body.is_bound_by_container());
	assert!(!copy.is_bound_by_container());
	assert!(!again.is_bound_by_container());
	assert_eq!(body.render(&RenderContext::default()), before);
}

#[rstest]
fn test_nested_builder_content_is_flattened() {
	let body = Body::new(|| {
		(
			Text::new("1"),
			vec![
				ElementList::from_elements((Text::new("2"), Text::new("3"))),
				ElementList::new(),
			],
			None::<Text>,
			Some(Text::new("4")),
		)
	});

	assert_eq!(body.items().len(), 4);
	assert!(body.render(&RenderContext::default()).starts_with("<body class=\"container\">1234<script"));
}
