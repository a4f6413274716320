// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Switcher configuration loaded from TOML.
//!
//! ```toml
//! dismissal_key = "docs-lang-dismissed"
//!
//! [[locales]]
//! code = "en"
//! label = "English"
//! browser_tags = ["en"]
//!
//! [[locales]]
//! code = "de"
//! label = "Deutsch"
//! prefix = "/de"
//! browser_tags = ["de"]
//!
//! [texts.de]
//! message = "Diese Dokumentation gibt es auch auf Deutsch."
//! action = "Auf Deutsch lesen"
//! dismiss = "Schließen"
//! ```
//!
//! Every field is optional. Omitted locales and texts fall back to the
//! built-in tables.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::gate::DEFAULT_DISMISSAL_KEY;
use crate::locale::{LocaleCatalog, LocaleEntry};
use crate::text::{SuggestionText, TextTable};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
	dismissal_key: Option<String>,
	locales: Option<Vec<LocaleEntry>>,
	texts: Option<BTreeMap<String, SuggestionText>>,
}

/// Validated switcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherConfig {
	dismissal_key: String,
	catalog: Option<LocaleCatalog>,
	texts: Option<TextTable>,
}

impl Default for SwitcherConfig {
	fn default() -> Self {
		Self {
			dismissal_key: DEFAULT_DISMISSAL_KEY.to_string(),
			catalog: None,
			texts: None,
		}
	}
}

impl SwitcherConfig {
	pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
		let raw: RawConfig = toml::from_str(contents)?;
		Self::from_raw(raw)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&contents)?;
		tracing::debug!(path = %path.display(), locales = config.catalog().len(), "loaded switcher config");
		Ok(config)
	}

	fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
		let dismissal_key = match raw.dismissal_key {
			Some(key) if key.trim().is_empty() => {
				return Err(ConfigError::validation("dismissal_key must not be empty"));
			}
			Some(key) => key,
			None => DEFAULT_DISMISSAL_KEY.to_string(),
		};

		let catalog = raw.locales.map(LocaleCatalog::new).transpose()?;

		let texts = match raw.texts {
			Some(texts) => {
				if let Some((code, _)) = texts.iter().find(|(_, text)| !text.is_complete()) {
					return Err(ConfigError::validation(format!(
						"suggestion text for {code} must have a message, action and dismiss label"
					)));
				}
				Some(TextTable::new(texts))
			}
			None => None,
		};

		let config = Self {
			dismissal_key,
			catalog,
			texts,
		};
		config.warn_on_text_coverage();
		config.warn_on_shadowed_aliases();
		Ok(config)
	}

	fn warn_on_shadowed_aliases(&self) {
		for shadowed in self.catalog().shadowed_aliases() {
			tracing::warn!(
				alias = %shadowed.alias,
				locale = %shadowed.later,
				earlier = %shadowed.earlier,
				"browser tag is unreachable, an earlier locale already matches it"
			);
		}
	}

	fn warn_on_text_coverage(&self) {
		let catalog = self.catalog();
		let texts = self.texts();
		for entry in catalog.iter_prefixed() {
			if !texts.contains(&entry.code) {
				tracing::warn!(locale = %entry.code, "no suggestion text configured, locale will never be suggested");
			}
		}
		for code in texts.codes() {
			if catalog.get(code).is_none() {
				tracing::warn!(locale = %code, "suggestion text configured for unknown locale");
			}
		}
	}

	pub fn dismissal_key(&self) -> &str {
		&self.dismissal_key
	}

	pub fn catalog(&self) -> &LocaleCatalog {
		match &self.catalog {
			Some(catalog) => catalog,
			None => LocaleCatalog::builtin(),
		}
	}

	pub fn texts(&self) -> &TextTable {
		match &self.texts {
			Some(texts) => texts,
			None => TextTable::builtin(),
		}
	}
}
