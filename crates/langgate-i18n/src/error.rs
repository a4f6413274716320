// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog construction and configuration loading.

use std::path::PathBuf;

/// A locale catalog that violates the entry invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	#[error("Catalog has no entries")]
	EmptyCatalog,

	/// Exactly one entry must have an empty prefix.
	#[error("Catalog must have exactly one default (unprefixed) locale, found {0}")]
	DefaultCount(usize),

	#[error("Invalid locale code: {0:?}")]
	InvalidCode(String),

	#[error("Duplicate locale code: {0}")]
	DuplicateCode(String),

	#[error("Duplicate prefix {prefix} on locale {code}")]
	DuplicatePrefix { code: String, prefix: String },

	/// Prefixes start with `/`, do not end with `/`, and are not just `/`.
	#[error("Invalid prefix {prefix:?} on locale {code}")]
	InvalidPrefix { code: String, prefix: String },

	/// An earlier prefix owns a path segment that a later prefix extends.
	#[error("Prefix of locale {later} is shadowed by earlier locale {earlier}")]
	ShadowedPrefix { earlier: String, later: String },

	/// Aliases are non-empty and lowercase.
	#[error("Invalid browser tag {alias:?} on locale {code}")]
	InvalidAlias { code: String, alias: String },
}

/// Errors raised while loading a [`SwitcherConfig`](crate::SwitcherConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("Invalid locale catalog: {0}")]
	Catalog(#[from] CatalogError),

	#[error("Validation error: {0}")]
	Validation(String),
}

impl ConfigError {
	pub fn validation(msg: impl Into<String>) -> Self {
		Self::Validation(msg.into())
	}
}
