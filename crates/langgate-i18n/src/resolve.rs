// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use std::borrow::Cow;

use crate::locale::{LocaleCatalog, LocaleEntry};

/// The locale a page belongs to and the page's path within that locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale<'a> {
	pub locale: &'a LocaleEntry,
	/// Path with the locale prefix removed. Always starts with `/`.
	pub page_path: String,
}

/// Resolve the locale that owns `path`.
///
/// Prefixed entries are tried in catalog order and the first whose prefix
/// owns `path` wins. When none does, the page belongs to the default locale.
/// A path that does not start with `/` is treated as if it did, so every
/// input resolves and `page_path` always starts with `/`.
///
/// # Example
///
/// ```
/// use langgate_i18n::{resolve_current_locale, LocaleCatalog};
///
/// let catalog = LocaleCatalog::builtin();
///
/// let resolved = resolve_current_locale(catalog, "/fr/guide/intro.html");
/// assert_eq!(resolved.locale.code, "fr");
/// assert_eq!(resolved.page_path, "/guide/intro.html");
///
/// // `/frost` is not under `/fr`
/// let resolved = resolve_current_locale(catalog, "/frost");
/// assert_eq!(resolved.locale.code, "en");
/// assert_eq!(resolved.page_path, "/frost");
/// ```
pub fn resolve_current_locale<'a>(catalog: &'a LocaleCatalog, path: &str) -> ResolvedLocale<'a> {
	let path = normalize_path(path);

	for entry in catalog.iter_prefixed() {
		if let Some(rest) = entry.strip_prefix(&path) {
			let page_path = if rest.is_empty() { "/" } else { rest };
			tracing::debug!(locale = %entry.code, page_path = %page_path, "resolved current locale from path prefix");
			return ResolvedLocale {
				locale: entry,
				page_path: page_path.to_string(),
			};
		}
	}

	let default = catalog.default_locale();
	tracing::debug!(locale = %default.code, page_path = %path, "no locale prefix matched, using default locale");
	ResolvedLocale {
		locale: default,
		page_path: path.into_owned(),
	}
}

fn normalize_path(path: &str) -> Cow<'_, str> {
	if path.starts_with('/') {
		Cow::Borrowed(path)
	} else {
		Cow::Owned(format!("/{path}"))
	}
}

/// Resolve the catalog entry that best matches a visitor's ranked tags.
///
/// Tags are lowercased and tried in order. For each tag, entries are tried
/// in catalog order and, within an entry, aliases in their listed order. A
/// tag matches an alias exactly or by extending it with `-` and a subtag.
/// Tag rank outranks catalog order, which outranks alias order.
///
/// Returns `None` when no tag matches. A match on the default locale is a
/// real match and is returned as such.
///
/// # Example
///
/// ```
/// use langgate_i18n::{resolve_preferred_locale, LocaleCatalog};
///
/// let catalog = LocaleCatalog::builtin();
///
/// let preferred = resolve_preferred_locale(catalog, ["de-DE", "zh-SG", "ja"]);
/// assert_eq!(preferred.map(|e| e.code.as_str()), Some("zh-hans"));
///
/// assert!(resolve_preferred_locale(catalog, ["de", "nl"]).is_none());
/// ```
pub fn resolve_preferred_locale<'a, I, S>(catalog: &'a LocaleCatalog, tags: I) -> Option<&'a LocaleEntry>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	for tag in tags {
		let tag = tag.as_ref().to_lowercase();
		for entry in catalog.entries() {
			if entry.matches_tag(&tag) {
				tracing::debug!(tag = %tag, locale = %entry.code, "resolved preferred locale from browser tag");
				return Some(entry);
			}
		}
		tracing::trace!(tag = %tag, "browser tag matched no locale");
	}

	tracing::debug!("no browser tag matched a supported locale");
	None
}
