//! Quick bar configuration.
//!
//! Configuration is plain TOML; every key is optional:
//!
//! ```toml
//! debounce-ms = 100
//! row-height = 72
//! list-padding = 26
//! max-list-height = 500
//! cache-capacity = 16
//! first-match-can-be-weak = true
//! fold-diacritics = true
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::viewport::Viewport;

/// Tunables for a quick bar session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct QuickBarConfig {
	/// Quiet period after the last keystroke before the list is refiltered.
	pub debounce_ms: u64,
	/// Height of one list row in pixels.
	pub row_height: u32,
	/// Extra list height on top of the rows.
	pub list_padding: u32,
	/// Upper bound on the list height; longer lists scroll.
	pub max_list_height: u32,
	/// Queries remembered per item list.
	pub cache_capacity: usize,
	/// Accept matches whose first character lands mid-word.
	pub first_match_can_be_weak: bool,
	/// Ignore diacritics when matching.
	pub fold_diacritics: bool,
}

impl Default for QuickBarConfig {
	fn default() -> Self {
		Self {
			debounce_ms: 100,
			row_height: 72,
			list_padding: 26,
			max_list_height: 500,
			cache_capacity: 16,
			first_match_can_be_weak: true,
			fold_diacritics: true,
		}
	}
}

impl QuickBarConfig {
	/// Parses and validates configuration from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.row_height == 0 {
			return Err(ConfigError::Invalid {
				field: "row-height",
				reason: "must be at least 1",
			});
		}
		if self.cache_capacity == 0 {
			return Err(ConfigError::Invalid {
				field: "cache-capacity",
				reason: "must be at least 1",
			});
		}
		Ok(())
	}

	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	pub fn viewport(&self) -> Viewport {
		Viewport::new(self.row_height, self.list_padding, self.max_list_height)
	}

	/// Matcher options derived from this configuration.
	pub fn matcher(&self) -> quickbar_matcher::Config {
		quickbar_matcher::Config {
			first_match_can_be_weak: self.first_match_can_be_weak,
			fold_diacritics: self.fold_diacritics,
			sort: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn empty_document_uses_defaults() {
		assert_eq!(QuickBarConfig::from_toml_str("").unwrap(), QuickBarConfig::default());
	}

	#[test]
	fn partial_document_overrides_fields() {
		let config = QuickBarConfig::from_toml_str("debounce-ms = 250\nfold-diacritics = false\n").unwrap();
		assert_eq!(config.debounce(), Duration::from_millis(250));
		assert!(!config.matcher().fold_diacritics);
		assert_eq!(config.row_height, 72);
	}

	#[test]
	fn unknown_keys_are_rejected() {
		assert!(matches!(QuickBarConfig::from_toml_str("debounce = 5"), Err(ConfigError::Toml(_))));
	}

	#[test]
	fn zero_row_height_is_rejected() {
		assert!(matches!(
			QuickBarConfig::from_toml_str("row-height = 0"),
			Err(ConfigError::Invalid { field: "row-height", .. })
		));
	}

	#[test]
	fn load_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "max-list-height = 300").unwrap();
		let config = QuickBarConfig::load(file.path()).unwrap();
		assert_eq!(config.max_list_height, 300);
	}

	#[test]
	fn load_reports_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("quickbar.toml");
		assert!(matches!(QuickBarConfig::load(&missing), Err(ConfigError::Io { .. })));
	}
}
