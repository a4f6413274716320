// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale selection for multi-language documentation sites.
//!
//! Given the current page's URL and the visitor's ranked browser languages,
//! this crate works out which locale the page belongs to, builds the
//! locale switcher (every locale linked to the same page), and decides
//! whether to offer a one-time banner suggesting a better-matching locale.
//!
//! # Components
//!
//! - [`LocaleCatalog`]: the ordered, validated list of supported locales
//! - [`resolve_current_locale`] / [`resolve_preferred_locale`]: pure
//!   resolution from a URL path and from browser language tags
//! - [`SuggestionGate`]: gates the suggestion banner and owns the
//!   persisted dismissal record
//! - [`LangSwitcher`]: runs the whole page-load flow against host
//!   capabilities ([`PageLocation`], [`LanguagePreferences`]) and a
//!   [`KeyValueStore`](langgate_store::KeyValueStore)
//!
//! # Example
//!
//! ```
//! use langgate_i18n::{
//!     BannerInsertion, BrowserLanguages, DocumentState, LangSwitcher, StaticPage, SwitcherConfig,
//! };
//! use langgate_store::MemoryStore;
//!
//! let config = SwitcherConfig::default();
//! let store = MemoryStore::new();
//! let switcher = LangSwitcher::from_config(&config, &store);
//!
//! let page = StaticPage::new("/guide/intro.html").with_fragment("#install");
//! let prefs = BrowserLanguages::new(["fr-CA", "en"]);
//! let result = switcher.initialize(&page, &prefs, DocumentState::Ready);
//!
//! assert_eq!(result.state.current_locale.code, "en");
//! assert_eq!(result.switcher.options.len(), 9);
//!
//! if let Some(BannerInsertion::Now(banner)) = result.banner {
//!     assert_eq!(banner.suggestion.href, "/fr/guide/intro.html#install");
//!     // The visitor declines; the next load will not suggest French again.
//!     banner.dismiss.dismiss();
//! }
//! ```

mod config;
mod error;
mod gate;
mod host;
mod locale;
mod resolve;
mod switcher;
mod text;

pub use config::SwitcherConfig;
pub use error::{CatalogError, ConfigError};
pub use gate::{
	should_suggest, BannerClosed, DismissHandle, GateDecision, SuggestionGate, Suggestion,
	SuppressReason, DEFAULT_DISMISSAL_KEY,
};
pub use host::{BrowserLanguages, LanguagePreferences, PageLocation, StaticPage};
pub use locale::{LocaleCatalog, LocaleEntry, ShadowedAlias, DEFAULT_LOCALE};
pub use resolve::{resolve_current_locale, resolve_preferred_locale, ResolvedLocale};
pub use switcher::{
	Banner, BannerInsertion, DocumentState, LangSwitcher, PageLocale, PendingBanner, ResolvedState,
	SwitcherOption, SwitcherView,
};
pub use text::{SuggestionText, TextTable};
