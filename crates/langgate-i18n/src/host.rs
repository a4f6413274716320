// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Capabilities supplied by the host page.

/// The current page's location.
pub trait PageLocation {
	/// URL path, e.g. `/fr/guide/intro.html`.
	fn path(&self) -> &str;

	/// URL fragment including its leading `#`, or empty.
	fn fragment(&self) -> &str;
}

/// The visitor's ranked language preferences.
pub trait LanguagePreferences {
	/// Language tags, most preferred first. Case is not significant.
	fn ranked_tags(&self) -> Vec<String>;
}

/// A fixed page location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPage {
	pub path: String,
	pub fragment: String,
}

impl StaticPage {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			fragment: String::new(),
		}
	}

	pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
		self.fragment = fragment.into();
		self
	}
}

impl PageLocation for StaticPage {
	fn path(&self) -> &str {
		&self.path
	}

	fn fragment(&self) -> &str {
		&self.fragment
	}
}

/// Preferences as a browser reports them: a ranked list, plus the single
/// primary language for environments that only expose that.
///
/// An empty `languages` list is treated the same as a missing one and falls
/// back to `language`. Hosts that report an empty list usually have no
/// ranked preferences at all, and the primary language is still a useful
/// signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserLanguages {
	pub languages: Vec<String>,
	pub language: Option<String>,
}

impl BrowserLanguages {
	pub fn new<I, S>(languages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			languages: languages.into_iter().map(Into::into).collect(),
			language: None,
		}
	}

	pub fn primary_only(language: impl Into<String>) -> Self {
		Self {
			languages: Vec::new(),
			language: Some(language.into()),
		}
	}
}

impl LanguagePreferences for BrowserLanguages {
	fn ranked_tags(&self) -> Vec<String> {
		if !self.languages.is_empty() {
			return self.languages.clone();
		}
		self.language.iter().cloned().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_page() {
		let page = StaticPage::new("/ja/index.html").with_fragment("#install");
		assert_eq!(page.path(), "/ja/index.html");
		assert_eq!(page.fragment(), "#install");
		assert_eq!(StaticPage::new("/").fragment(), "");
	}

	#[test]
	fn test_ranked_list_takes_priority() {
		let prefs = BrowserLanguages {
			languages: vec!["fr-FR".to_string(), "en".to_string()],
			language: Some("de".to_string()),
		};
		assert_eq!(prefs.ranked_tags(), vec!["fr-FR", "en"]);
	}

	#[test]
	fn test_falls_back_to_primary_language() {
		assert_eq!(BrowserLanguages::primary_only("ko-KR").ranked_tags(), vec!["ko-KR"]);
	}

	#[test]
	fn test_empty_ranked_list_falls_back_to_primary_language() {
		let prefs = BrowserLanguages {
			languages: Vec::new(),
			language: Some("es-AR".to_string()),
		};
		assert_eq!(prefs.ranked_tags(), vec!["es-AR"]);
	}

	#[test]
	fn test_no_languages_reported() {
		assert!(BrowserLanguages::default().ranked_tags().is_empty());
	}
}
