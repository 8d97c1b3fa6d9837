//! Concurrency tests
//!
//! Element ids must not collide when generated from many threads, and a
//! single body must render identically when shared between threads.

use lantern_conf::{BootstrapHosting, LineNumberVisibility, SiteConfig};
use lantern_core::{Element, RenderContext};
use lantern_pages::{Body, Tag, Text};
use rstest::rstest;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[rstest]
fn test_concurrent_construction_yields_unique_ids() {
	let handles: Vec<_> = (0..8)
		.map(|_| {
			thread::spawn(|| {
				(0..500)
					.map(|i| Text::new(i.to_string()).id().to_string())
					.collect::<Vec<_>>()
			})
		})
		.collect();

	let mut ids = HashSet::new();
	for handle in handles {
		for id in handle.join().unwrap() {
			assert!(ids.insert(id), "duplicate element id");
		}
	}
	assert_eq!(ids.len(), 8 * 500);
}

#[rstest]
fn test_shared_body_renders_identically_across_threads() {
	let site = Arc::new(
		SiteConfig::new()
			.with_bootstrap(BootstrapHosting::Local)
			.with_line_numbers(LineNumberVisibility::Visible {
				first_line: 4,
				wrap: false,
			}),
	);
	let body = Arc::new(Body::new(|| {
		(
			Tag::new("h1").child(Text::new("Title")),
			Tag::new("span").hint("tip"),
		)
	}));
	let expected = body.render(&RenderContext::new(Arc::clone(&site)));

	let handles: Vec<_> = (0..8)
		.map(|_| {
			let body = Arc::clone(&body);
			let cx = RenderContext::new(Arc::clone(&site));
			thread::spawn(move || body.render(&cx))
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), expected);
	}
	assert!(body.attributes().is_empty());
}
