//! Error types for lantern-conf

use thiserror::Error;

/// Error type for loading and validating site configuration
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The configuration file could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The configuration file is not valid TOML for [`SiteConfig`](crate::SiteConfig)
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The configuration parsed but holds an unusable value
	#[error("Invalid configuration: {0}")]
	Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
