// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page-load orchestration: the persistent locale switcher and the one-time
//! suggestion banner.

use langgate_store::KeyValueStore;

use crate::config::SwitcherConfig;
use crate::gate::{DismissHandle, GateDecision, Suggestion, SuggestionGate};
use crate::host::{LanguagePreferences, PageLocation};
use crate::locale::{LocaleCatalog, LocaleEntry};
use crate::resolve::{resolve_current_locale, resolve_preferred_locale, ResolvedLocale};
use crate::text::TextTable;

/// One entry of the locale switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherOption {
	pub code: String,
	pub label: String,
	pub href: String,
	pub active: bool,
}

/// The locale switcher: every catalog entry linked to the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherView<'a> {
	pub current: &'a LocaleEntry,
	pub options: Vec<SwitcherOption>,
}

impl<'a> SwitcherView<'a> {
	pub fn build(catalog: &LocaleCatalog, resolved: &ResolvedLocale<'a>, fragment: &str) -> Self {
		let options = catalog
			.entries()
			.iter()
			.map(|entry| SwitcherOption {
				code: entry.code.clone(),
				label: entry.label.clone(),
				href: entry.link_to(&resolved.page_path, fragment),
				active: entry.code == resolved.locale.code,
			})
			.collect();

		Self {
			current: resolved.locale,
			options,
		}
	}

	pub fn active(&self) -> Option<&SwitcherOption> {
		self.options.iter().find(|option| option.active)
	}
}

/// Parse state of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
	Loading,
	Ready,
}

/// A suggestion ready to render, with its dismissal transition.
#[derive(Debug)]
pub struct Banner<'a, S: ?Sized> {
	pub suggestion: Suggestion,
	pub dismiss: DismissHandle<'a, S>,
}

/// A banner waiting for the document to finish parsing.
///
/// Consumed by [`PendingBanner::ready`]. There is no cancel and no timeout:
/// dropping it means the banner is never shown.
#[derive(Debug)]
pub struct PendingBanner<'a, S: ?Sized> {
	banner: Banner<'a, S>,
}

impl<'a, S: ?Sized> PendingBanner<'a, S> {
	/// The document is ready; hand the banner over for insertion.
	pub fn ready(self) -> Banner<'a, S> {
		tracing::debug!(suggested = %self.banner.suggestion.code, "document ready, inserting banner");
		self.banner
	}

	pub fn suggestion(&self) -> &Suggestion {
		&self.banner.suggestion
	}
}

/// When the banner may be inserted.
#[derive(Debug)]
pub enum BannerInsertion<'a, S: ?Sized> {
	Now(Banner<'a, S>),
	WhenReady(PendingBanner<'a, S>),
}

impl<'a, S: ?Sized> BannerInsertion<'a, S> {
	pub fn suggestion(&self) -> &Suggestion {
		match self {
			BannerInsertion::Now(banner) => &banner.suggestion,
			BannerInsertion::WhenReady(pending) => pending.suggestion(),
		}
	}
}

/// Everything computed for one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedState<'a> {
	pub current_locale: &'a LocaleEntry,
	/// Always starts with `/`.
	pub page_path: String,
	pub preferred_locale: Option<&'a LocaleEntry>,
	pub suggestion_shown: bool,
}

#[derive(Debug)]
pub struct PageLocale<'a, S: ?Sized> {
	pub state: ResolvedState<'a>,
	pub switcher: SwitcherView<'a>,
	pub decision: GateDecision,
	pub banner: Option<BannerInsertion<'a, S>>,
}

/// Resolves locales for a page and wires up the switcher and banner.
pub struct LangSwitcher<'a, S: ?Sized> {
	catalog: &'a LocaleCatalog,
	gate: SuggestionGate<'a, S>,
}

impl<'a, S: KeyValueStore + ?Sized> LangSwitcher<'a, S> {
	pub fn new(
		catalog: &'a LocaleCatalog,
		texts: &'a TextTable,
		store: &'a S,
		dismissal_key: &'a str,
	) -> Self {
		Self {
			catalog,
			gate: SuggestionGate::new(store, dismissal_key, texts),
		}
	}

	pub fn from_config(config: &'a SwitcherConfig, store: &'a S) -> Self {
		Self::new(config.catalog(), config.texts(), store, config.dismissal_key())
	}

	pub fn catalog(&self) -> &'a LocaleCatalog {
		self.catalog
	}

	pub fn gate(&self) -> &SuggestionGate<'a, S> {
		&self.gate
	}

	/// Runs the page-load flow once.
	pub fn initialize<P, L>(&self, page: &P, preferences: &L, document: DocumentState) -> PageLocale<'a, S>
	where
		P: PageLocation + ?Sized,
		L: LanguagePreferences + ?Sized,
	{
		let fragment = page.fragment();
		let resolved = resolve_current_locale(self.catalog, page.path());
		let switcher = SwitcherView::build(self.catalog, &resolved, fragment);

		let preferred = resolve_preferred_locale(self.catalog, preferences.ranked_tags());
		let decision = self.gate.evaluate(resolved.locale, preferred, &resolved.page_path, fragment);

		let banner = decision.suggestion().map(|suggestion| {
			let banner = Banner {
				suggestion: suggestion.clone(),
				dismiss: self.gate.dismiss_handle(suggestion),
			};
			match document {
				DocumentState::Ready => BannerInsertion::Now(banner),
				DocumentState::Loading => BannerInsertion::WhenReady(PendingBanner { banner }),
			}
		});

		tracing::debug!(
			current = %resolved.locale.code,
			page_path = %resolved.page_path,
			preferred = preferred.map(|e| e.code.as_str()).unwrap_or("none"),
			suggestion = decision.is_suggest(),
			"page locale initialized"
		);

		PageLocale {
			state: ResolvedState {
				current_locale: resolved.locale,
				page_path: resolved.page_path,
				preferred_locale: preferred,
				suggestion_shown: decision.is_suggest(),
			},
			switcher,
			decision,
			banner,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::gate::{SuppressReason, DEFAULT_DISMISSAL_KEY};
	use crate::host::{BrowserLanguages, StaticPage};
	use langgate_store::MemoryStore;

	fn switcher(store: &MemoryStore) -> LangSwitcher<'_, MemoryStore> {
		LangSwitcher::new(
			LocaleCatalog::builtin(),
			TextTable::builtin(),
			store,
			DEFAULT_DISMISSAL_KEY,
		)
	}

	#[test]
	fn test_switcher_lists_every_locale_once() {
		let resolved = resolve_current_locale(LocaleCatalog::builtin(), "/ja/guide.html");
		let view = SwitcherView::build(LocaleCatalog::builtin(), &resolved, "#top");

		assert_eq!(view.current.code, "ja");
		assert_eq!(view.options.len(), 9);
		assert_eq!(view.options.iter().filter(|o| o.active).count(), 1);
		assert_eq!(view.active().map(|o| o.code.as_str()), Some("ja"));

		let hrefs: Vec<&str> = view.options.iter().map(|o| o.href.as_str()).collect();
		assert_eq!(hrefs[0], "/guide.html#top");
		assert!(hrefs.contains(&"/zh-hans/guide.html#top"));
		assert!(hrefs.contains(&"/ar/guide.html#top"));
	}

	#[test]
	fn test_accessors_expose_catalog_and_gate() {
		let store = MemoryStore::with_entry(DEFAULT_DISMISSAL_KEY, "ko");
		let switcher = switcher(&store);

		assert_eq!(switcher.catalog(), LocaleCatalog::builtin());
		assert_eq!(switcher.gate().read_dismissal().as_deref(), Some("ko"));
	}

	#[test]
	fn test_initialize_on_root_with_matching_preference() {
		let store = MemoryStore::new();
		let page = StaticPage::new("/");
		let prefs = BrowserLanguages::new(["en-US", "fr"]);

		let result = switcher(&store).initialize(&page, &prefs, DocumentState::Ready);

		assert_eq!(result.state.current_locale.code, "en");
		assert_eq!(result.state.preferred_locale.map(|e| e.code.as_str()), Some("en"));
		assert!(!result.state.suggestion_shown);
		assert_eq!(result.decision, GateDecision::Suppressed(SuppressReason::SameLocale));
		assert!(result.banner.is_none());
	}

	#[test]
	fn test_initialize_ready_document_inserts_now() {
		let store = MemoryStore::new();
		let page = StaticPage::new("/guide/intro.html").with_fragment("#usage");
		let prefs = BrowserLanguages::new(["ja-JP"]);

		let result = switcher(&store).initialize(&page, &prefs, DocumentState::Ready);

		assert!(result.state.suggestion_shown);
		match result.banner {
			Some(BannerInsertion::Now(banner)) => {
				assert_eq!(banner.suggestion.href, "/ja/guide/intro.html#usage");
				assert_eq!(banner.dismiss.code(), "ja");
			}
			other => panic!("expected immediate banner, got {other:?}"),
		}
	}

	#[test]
	fn test_initialize_loading_document_defers() {
		let store = MemoryStore::new();
		let page = StaticPage::new("/fr/index.html");
		let prefs = BrowserLanguages::new(["ko"]);

		let result = switcher(&store).initialize(&page, &prefs, DocumentState::Loading);

		let pending = match result.banner {
			Some(BannerInsertion::WhenReady(pending)) => pending,
			other => panic!("expected deferred banner, got {other:?}"),
		};
		assert_eq!(pending.suggestion().code, "ko");

		let banner = pending.ready();
		assert_eq!(banner.suggestion.href, "/ko/index.html");
		let closed = banner.dismiss.dismiss();
		assert!(closed.persisted);
		assert_eq!(store.get(DEFAULT_DISMISSAL_KEY).unwrap().as_deref(), Some("ko"));
	}

	#[test]
	fn test_state_keeps_page_path_without_prefix() {
		let store = MemoryStore::new();
		let page = StaticPage::new("/zh-hant");
		let prefs = BrowserLanguages::default();

		let result = switcher(&store).initialize(&page, &prefs, DocumentState::Ready);

		assert_eq!(result.state.current_locale.code, "zh-hant");
		assert_eq!(result.state.page_path, "/");
		assert_eq!(result.decision, GateDecision::Suppressed(SuppressReason::NoPreference));
		assert_eq!(result.switcher.options[0].href, "/");
	}
}
