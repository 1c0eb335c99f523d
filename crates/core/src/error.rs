//! Error types for the quick bar.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by quick bar operations.
#[derive(Debug, Error)]
pub enum Error {
	/// An item was built without any usable search string.
	#[error("quick bar item {0:?} has no search strings")]
	EmptySearchStrings(String),

	/// A query was rejected before reaching the matcher.
	#[error("invalid query: {0}")]
	InvalidQuery(String),

	/// An activation referred to a row that is not in the current list.
	#[error("no item at index {index} (list has {len})")]
	IndexOutOfRange { index: usize, len: usize },

	/// The host failed to carry out an action.
	#[error(transparent)]
	Host(#[from] HostError),

	/// A state snapshot or service registry could not be decoded.
	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// Configuration could not be loaded.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Failures reported by a [`crate::Host`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	#[error("service {domain}.{service} failed: {message}")]
	ServiceCall { domain: String, service: String, message: String },

	#[error("entity {0} is unknown to the host")]
	UnknownEntity(String),

	#[error("host is unavailable: {0}")]
	Unavailable(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or values.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A value parsed but is unusable.
	#[error("invalid value for {field}: {reason}")]
	Invalid { field: &'static str, reason: &'static str },
}

/// Result type for quick bar operations.
pub type Result<T> = std::result::Result<T, Error>;
