// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The catalog of supported documentation locales.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Code of the built-in default locale.
pub const DEFAULT_LOCALE: &str = "en";

/// A supported locale and the URL prefix that owns its pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
	pub code: String,
	/// Display name, in the locale's own language.
	pub label: String,
	/// Empty for the default locale, which owns the unprefixed root.
	#[serde(default)]
	pub prefix: String,
	/// Lowercase browser tags that resolve to this entry, in priority order.
	pub browser_tags: Vec<String>,
}

impl LocaleEntry {
	pub fn new(code: &str, label: &str, prefix: &str, browser_tags: &[&str]) -> Self {
		Self {
			code: code.to_string(),
			label: label.to_string(),
			prefix: prefix.to_string(),
			browser_tags: browser_tags.iter().map(|t| t.to_string()).collect(),
		}
	}

	pub fn is_default(&self) -> bool {
		self.prefix.is_empty()
	}

	/// Strips this entry's prefix from `path` at a segment boundary.
	///
	/// Returns `None` for the default entry, and when `path` neither equals
	/// the prefix nor continues it with `/`. `/fr` owns `/fr` and `/fr/guide`
	/// but not `/frost`.
	pub fn strip_prefix<'p>(&self, path: &'p str) -> Option<&'p str> {
		if self.prefix.is_empty() {
			return None;
		}
		let rest = path.strip_prefix(self.prefix.as_str())?;
		if rest.is_empty() || rest.starts_with('/') {
			Some(rest)
		} else {
			None
		}
	}

	/// Whether a lowercase browser tag resolves to this entry.
	///
	/// A tag matches an alias exactly, or extends it with a `-` subtag: with
	/// alias `zh`, both `zh` and `zh-xx` match but `zhx` does not.
	pub fn matches_tag(&self, tag: &str) -> bool {
		self.browser_tags.iter().any(|alias| alias_matches(alias, tag))
	}

	/// Link to `page_path` under this locale, keeping `fragment` verbatim.
	pub fn link_to(&self, page_path: &str, fragment: &str) -> String {
		let mut href = String::with_capacity(self.prefix.len() + page_path.len() + fragment.len());
		href.push_str(&self.prefix);
		href.push_str(page_path);
		href.push_str(fragment);
		href
	}
}

pub(crate) fn alias_matches(alias: &str, tag: &str) -> bool {
	match tag.strip_prefix(alias) {
		Some(rest) => rest.is_empty() || rest.starts_with('-'),
		None => false,
	}
}

/// An ordered, validated list of locales.
///
/// Catalog order is priority order for both path and browser tag matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
	entries: Vec<LocaleEntry>,
	default_index: usize,
}

static BUILTIN: Lazy<LocaleCatalog> = Lazy::new(|| LocaleCatalog::from_trusted(builtin_entries()));

pub(crate) fn builtin_entries() -> Vec<LocaleEntry> {
	vec![
		LocaleEntry::new("en", "English", "", &["en"]),
		// `zh-hant` is listed before `zh-hans` so the bare `zh` alias on
		// `zh-hans` does not capture `zh-tw`, `zh-hk` and `zh-mo`.
		LocaleEntry::new(
			"zh-hant",
			"繁體中文",
			"/zh-hant",
			&["zh-tw", "zh-hk", "zh-mo", "zh-hant"],
		),
		LocaleEntry::new(
			"zh-hans",
			"简体中文",
			"/zh-hans",
			&["zh-cn", "zh-sg", "zh-hans", "zh"],
		),
		LocaleEntry::new("ja", "日本語", "/ja", &["ja"]),
		LocaleEntry::new("ko", "한국어", "/ko", &["ko"]),
		LocaleEntry::new("fr", "Français", "/fr", &["fr"]),
		LocaleEntry::new("es", "Español", "/es", &["es"]),
		LocaleEntry::new("ru", "Русский", "/ru", &["ru"]),
		LocaleEntry::new("ar", "العربية", "/ar", &["ar"]),
	]
}

impl LocaleCatalog {
	/// Builds a catalog, checking every entry invariant.
	pub fn new(entries: Vec<LocaleEntry>) -> Result<Self, CatalogError> {
		validate(&entries)?;
		Ok(Self::from_trusted(entries))
	}

	/// The catalog shipped with langgate.
	pub fn builtin() -> &'static LocaleCatalog {
		&BUILTIN
	}

	// Callers guarantee the entries already satisfy `validate`.
	fn from_trusted(entries: Vec<LocaleEntry>) -> Self {
		let default_index = entries.iter().position(LocaleEntry::is_default).unwrap_or(0);
		Self {
			entries,
			default_index,
		}
	}

	pub fn entries(&self) -> &[LocaleEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// The unprefixed locale, used when no prefix matches a path.
	pub fn default_locale(&self) -> &LocaleEntry {
		&self.entries[self.default_index]
	}

	pub fn get(&self, code: &str) -> Option<&LocaleEntry> {
		self.entries.iter().find(|entry| entry.code == code)
	}

	/// Entries with a non-empty prefix, in catalog order.
	pub fn iter_prefixed(&self) -> impl Iterator<Item = &LocaleEntry> {
		self.entries.iter().filter(|entry| !entry.is_default())
	}

	/// Browser aliases no tag can ever reach, because an earlier entry
	/// matches everything they would match.
	///
	/// Such catalogs are valid: catalog order decides, and the later alias
	/// is simply dead.
	pub fn shadowed_aliases(&self) -> Vec<ShadowedAlias<'_>> {
		let mut shadowed = Vec::new();
		for (i, earlier) in self.entries.iter().enumerate() {
			for later in self.entries.iter().skip(i + 1) {
				for alias in &later.browser_tags {
					if earlier.matches_tag(alias) {
						shadowed.push(ShadowedAlias {
							earlier: &earlier.code,
							later: &later.code,
							alias,
						});
					}
				}
			}
		}
		shadowed
	}
}

/// A browser alias made unreachable by an earlier catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowedAlias<'a> {
	pub earlier: &'a str,
	pub later: &'a str,
	pub alias: &'a str,
}

fn validate(entries: &[LocaleEntry]) -> Result<(), CatalogError> {
	if entries.is_empty() {
		return Err(CatalogError::EmptyCatalog);
	}

	let defaults = entries.iter().filter(|e| e.is_default()).count();
	if defaults != 1 {
		return Err(CatalogError::DefaultCount(defaults));
	}

	let mut codes = HashSet::new();
	let mut prefixes = HashSet::new();
	for entry in entries {
		if entry.code.trim().is_empty() || entry.code.trim() != entry.code {
			return Err(CatalogError::InvalidCode(entry.code.clone()));
		}
		if !codes.insert(entry.code.as_str()) {
			return Err(CatalogError::DuplicateCode(entry.code.clone()));
		}

		if !entry.is_default() {
			let prefix = entry.prefix.as_str();
			if !prefix.starts_with('/') || prefix.ends_with('/') || prefix.contains('#') {
				return Err(CatalogError::InvalidPrefix {
					code: entry.code.clone(),
					prefix: entry.prefix.clone(),
				});
			}
			if !prefixes.insert(prefix) {
				return Err(CatalogError::DuplicatePrefix {
					code: entry.code.clone(),
					prefix: entry.prefix.clone(),
				});
			}
		}

		for alias in &entry.browser_tags {
			if alias.is_empty() || alias.chars().any(|c| c.is_uppercase() || c.is_whitespace()) {
				return Err(CatalogError::InvalidAlias {
					code: entry.code.clone(),
					alias: alias.clone(),
				});
			}
		}
	}

	// First match wins, so a shorter prefix listed before a longer one under
	// it would make the longer one unreachable.
	for (i, earlier) in entries.iter().enumerate() {
		for later in entries.iter().skip(i + 1) {
			if earlier.strip_prefix(&later.prefix).is_some() {
				return Err(CatalogError::ShadowedPrefix {
					earlier: earlier.code.clone(),
					later: later.code.clone(),
				});
			}
		}
	}

	Ok(())
}
