//! Build-time settings, read from the environment when the crate is compiled.

use std::str::FromStr;

use log::Level;

use crate::model::{StructureKind, registry};

/// Runtime knobs for the app, provided to components through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
	/// Prefix for backend routes; empty means same origin.
	pub api_base_url: String,
	/// Structure shown when the app opens.
	pub default_structure: StructureKind,
	/// Console log threshold.
	pub log_level: Level,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api_base_url: String::new(),
			default_structure: StructureKind::Array,
			log_level: Level::Debug,
		}
	}
}

impl AppConfig {
	/// Settings baked in via `DSE_API_BASE_URL`, `DSE_DEFAULT_STRUCTURE` and
	/// `DSE_LOG_LEVEL`, plus a warning for each value that was ignored.
	pub fn from_build_env() -> (Self, Vec<String>) {
		Self::from_values(
			option_env!("DSE_API_BASE_URL"),
			option_env!("DSE_DEFAULT_STRUCTURE"),
			option_env!("DSE_LOG_LEVEL"),
		)
	}

	/// Applies overrides on top of the defaults. Unusable values are
	/// ignored and described in the returned warnings, which the caller logs
	/// once a logger is installed.
	pub fn from_values(
		api_base_url: Option<&str>,
		default_structure: Option<&str>,
		log_level: Option<&str>,
	) -> (Self, Vec<String>) {
		let mut config = Self::default();
		let mut warnings = Vec::new();
		if let Some(url) = api_base_url {
			config.api_base_url = url.trim_end_matches('/').to_owned();
		}
		if let Some(id) = default_structure {
			match registry::get(id) {
				Ok(desc) => config.default_structure = desc.kind,
				Err(err) => warnings.push(format!("ignoring DSE_DEFAULT_STRUCTURE: {err}")),
			}
		}
		if let Some(level) = log_level {
			match Level::from_str(level) {
				Ok(level) => config.log_level = level,
				Err(_) => warnings.push(format!("ignoring DSE_LOG_LEVEL `{level}`")),
			}
		}
		(config, warnings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_open_array_on_same_origin() {
		let (config, warnings) = AppConfig::from_values(None, None, None);
		assert_eq!(config, AppConfig::default());
		assert!(warnings.is_empty());
		assert_eq!(config.default_structure, StructureKind::Array);
		assert!(config.api_base_url.is_empty());
	}

	#[test]
	fn applies_valid_overrides() {
		let (config, warnings) =
			AppConfig::from_values(Some("http://localhost:3000/"), Some("tree"), Some("warn"));
		assert!(warnings.is_empty());
		assert_eq!(config.api_base_url, "http://localhost:3000");
		assert_eq!(config.default_structure, StructureKind::Tree);
		assert_eq!(config.log_level, Level::Warn);
	}

	#[test]
	fn falls_back_on_unknown_values() {
		let (config, warnings) = AppConfig::from_values(None, Some("heap"), Some("loud"));
		assert_eq!(config.default_structure, StructureKind::Array);
		assert_eq!(config.log_level, Level::Debug);
		assert_eq!(
			warnings,
			[
				"ignoring DSE_DEFAULT_STRUCTURE: no data structure registered under id `heap`",
				"ignoring DSE_LOG_LEVEL `loud`",
			]
		);
	}
}
