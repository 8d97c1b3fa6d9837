//! Error types for lantern-pages

use thiserror::Error;

/// Error type for publishing context lookups
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
	/// Default body content was requested but no page is being published
	#[error("No page is set on the publishing context")]
	MissingPage,
}

/// Result type for publishing context operations
pub type Result<T> = std::result::Result<T, ContextError>;
