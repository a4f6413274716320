// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page loads driven through `LangSwitcher`, one visitor at a time.

use langgate_i18n::{
	BannerInsertion, BrowserLanguages, DocumentState, GateDecision, LangSwitcher, StaticPage,
	SuppressReason, SwitcherConfig,
};
use langgate_store::{JsonFileStore, KeyValueStore, MemoryStore, UnavailableStore};

fn load<S: KeyValueStore + ?Sized>(
	config: &SwitcherConfig,
	store: &S,
	path: &str,
	tags: &[&str],
) -> GateDecision {
	let switcher = LangSwitcher::from_config(config, store);
	let page = StaticPage::new(path);
	let prefs = BrowserLanguages::new(tags.iter().copied());
	switcher.initialize(&page, &prefs, DocumentState::Ready).decision
}

fn dismiss_current<S: KeyValueStore + ?Sized>(
	config: &SwitcherConfig,
	store: &S,
	path: &str,
	tags: &[&str],
) -> String {
	let switcher = LangSwitcher::from_config(config, store);
	let page = StaticPage::new(path);
	let prefs = BrowserLanguages::new(tags.iter().copied());
	match switcher.initialize(&page, &prefs, DocumentState::Ready).banner {
		Some(BannerInsertion::Now(banner)) => banner.dismiss.dismiss().code,
		_ => panic!("expected a banner on {path}"),
	}
}

#[test]
fn test_english_visitor_on_root_sees_nothing() {
	let config = SwitcherConfig::default();
	let store = MemoryStore::new();

	assert_eq!(
		load(&config, &store, "/", &["en"]),
		GateDecision::Suppressed(SuppressReason::SameLocale)
	);
}

#[test]
fn test_japanese_visitor_dismisses_then_prefers_korean() {
	let config = SwitcherConfig::default();
	let store = MemoryStore::new();

	assert!(load(&config, &store, "/guide.html", &["ja"]).is_suggest());
	assert_eq!(dismiss_current(&config, &store, "/guide.html", &["ja"]), "ja");

	assert_eq!(
		load(&config, &store, "/guide.html", &["ja"]),
		GateDecision::Suppressed(SuppressReason::Dismissed)
	);

	let decision = load(&config, &store, "/guide.html", &["ko", "ja"]);
	assert_eq!(decision.suggestion().map(|s| s.code.as_str()), Some("ko"));
}

#[test]
fn test_visitor_already_on_preferred_locale() {
	let config = SwitcherConfig::default();
	let store = MemoryStore::new();

	assert_eq!(
		load(&config, &store, "/zh-hans/index.html", &["zh-CN"]),
		GateDecision::Suppressed(SuppressReason::SameLocale)
	);
}

#[test]
fn test_suggestion_from_localized_page_keeps_page_path() {
	let config = SwitcherConfig::default();
	let store = MemoryStore::new();

	let decision = load(&config, &store, "/ru/api/types.html", &["es-MX"]);
	assert_eq!(
		decision.suggestion().map(|s| s.href.as_str()),
		Some("/es/api/types.html")
	);
}

#[test]
fn test_dismissal_survives_across_store_instances() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("profile").join("storage.json");
	let config = SwitcherConfig::default();

	let first_visit = JsonFileStore::new(&path);
	assert_eq!(dismiss_current(&config, &first_visit, "/", &["ar"]), "ar");

	let second_visit = JsonFileStore::new(&path);
	assert_eq!(
		load(&config, &second_visit, "/", &["ar"]),
		GateDecision::Suppressed(SuppressReason::Dismissed)
	);
}

#[test]
fn test_disabled_storage_never_blocks_the_page() {
	let config = SwitcherConfig::default();
	let store = UnavailableStore::new("storage disabled");

	assert_eq!(dismiss_current(&config, &store, "/", &["fr"]), "fr");
	// Nothing was persisted, so the next load suggests again.
	assert!(load(&config, &store, "/", &["fr"]).is_suggest());
}

#[test]
fn test_configured_catalog_and_key() {
	let config = SwitcherConfig::from_toml_str(
		r#"
		dismissal_key = "docs-lang"

		[[locales]]
		code = "en"
		label = "English"
		browser_tags = ["en"]

		[[locales]]
		code = "de"
		label = "Deutsch"
		prefix = "/de"
		browser_tags = ["de"]

		[[locales]]
		code = "nl"
		label = "Nederlands"
		prefix = "/nl"
		browser_tags = ["nl"]

		[texts.de]
		message = "Diese Dokumentation gibt es auch auf Deutsch."
		action = "Auf Deutsch lesen"
		dismiss = "Schließen"
		"#,
	)
	.unwrap();
	let store = MemoryStore::new();

	assert!(load(&config, &store, "/", &["de-AT"]).is_suggest());
	// Dutch has no banner text.
	assert_eq!(
		load(&config, &store, "/", &["nl"]),
		GateDecision::Suppressed(SuppressReason::MissingText)
	);

	dismiss_current(&config, &store, "/", &["de"]);
	assert_eq!(store.get("docs-lang").unwrap().as_deref(), Some("de"));
}

#[test]
fn test_deferred_banner_waits_for_ready() {
	let config = SwitcherConfig::default();
	let store = MemoryStore::new();
	let switcher = LangSwitcher::from_config(&config, &store);

	let page = StaticPage::new("/").with_fragment("#faq");
	let prefs = BrowserLanguages::primary_only("zh-TW");
	let result = switcher.initialize(&page, &prefs, DocumentState::Loading);

	// The switcher itself is available before the document is ready.
	assert_eq!(result.switcher.current.code, "en");

	let Some(BannerInsertion::WhenReady(pending)) = result.banner else {
		panic!("expected a deferred banner");
	};
	let banner = pending.ready();
	assert_eq!(banner.suggestion.code, "zh-hant");
	assert_eq!(banner.suggestion.href, "/zh-hant/#faq");
}
