// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Deciding whether to suggest a different locale, and remembering when a
//! visitor declines.

use langgate_store::KeyValueStore;

use crate::locale::LocaleEntry;
use crate::text::{SuggestionText, TextTable};

/// Storage key the dismissal record is kept under unless configured.
pub const DEFAULT_DISMISSAL_KEY: &str = "yuuka-lang-notification-dismissed";

/// Whether a preferred locale is worth suggesting, ignoring text coverage.
pub fn should_suggest(
	current: &LocaleEntry,
	preferred: Option<&LocaleEntry>,
	dismissed: Option<&str>,
) -> bool {
	match preferred {
		Some(preferred) => preferred.code != current.code && dismissed != Some(preferred.code.as_str()),
		None => false,
	}
}

/// Why no suggestion is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
	/// No browser tag matched a supported locale.
	NoPreference,
	/// The visitor is already reading their preferred locale.
	SameLocale,
	/// The visitor dismissed a suggestion for this locale before.
	Dismissed,
	/// The preferred locale has no banner text.
	MissingText,
}

/// A locale switch to offer the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
	pub code: String,
	pub label: String,
	/// The current page under the suggested locale's prefix, fragment kept.
	pub href: String,
	pub text: SuggestionText,
}

/// Outcome of evaluating the gate for one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
	Suggest(Suggestion),
	Suppressed(SuppressReason),
}

impl GateDecision {
	pub fn is_suggest(&self) -> bool {
		matches!(self, GateDecision::Suggest(_))
	}

	pub fn suggestion(&self) -> Option<&Suggestion> {
		match self {
			GateDecision::Suggest(suggestion) => Some(suggestion),
			GateDecision::Suppressed(_) => None,
		}
	}

	pub fn into_suggestion(self) -> Option<Suggestion> {
		match self {
			GateDecision::Suggest(suggestion) => Some(suggestion),
			GateDecision::Suppressed(_) => None,
		}
	}
}

/// Gates the suggestion banner and owns the dismissal record.
///
/// Store failures never escape: a failed read counts as no record, and a
/// failed write leaves the dismissal in effect for the current page only.
pub struct SuggestionGate<'a, S: ?Sized> {
	store: &'a S,
	dismissal_key: &'a str,
	texts: &'a TextTable,
}

impl<'a, S: KeyValueStore + ?Sized> SuggestionGate<'a, S> {
	pub fn new(store: &'a S, dismissal_key: &'a str, texts: &'a TextTable) -> Self {
		Self {
			store,
			dismissal_key,
			texts,
		}
	}

	/// Reads the code of the last dismissed locale.
	pub fn read_dismissal(&self) -> Option<String> {
		match self.store.get(self.dismissal_key) {
			Ok(record) => record,
			Err(e) => {
				tracing::warn!(key = %self.dismissal_key, error = %e, "failed to read dismissal record, treating as absent");
				None
			}
		}
	}

	/// Evaluates the gate against an already read dismissal record.
	///
	/// Checks run in order: a preferred locale exists, it differs from the
	/// current one, it was not dismissed, and it has banner text.
	pub fn decide(
		&self,
		current: &LocaleEntry,
		preferred: Option<&LocaleEntry>,
		dismissed: Option<&str>,
		page_path: &str,
		fragment: &str,
	) -> GateDecision {
		let decision = match preferred {
			None => GateDecision::Suppressed(SuppressReason::NoPreference),
			Some(preferred) if preferred.code == current.code => {
				GateDecision::Suppressed(SuppressReason::SameLocale)
			}
			Some(preferred) if dismissed == Some(preferred.code.as_str()) => {
				GateDecision::Suppressed(SuppressReason::Dismissed)
			}
			Some(preferred) => match self.texts.get(&preferred.code) {
				Some(text) => GateDecision::Suggest(Suggestion {
					code: preferred.code.clone(),
					label: preferred.label.clone(),
					href: preferred.link_to(page_path, fragment),
					text: text.clone(),
				}),
				None => GateDecision::Suppressed(SuppressReason::MissingText),
			},
		};

		match &decision {
			GateDecision::Suggest(suggestion) => {
				tracing::debug!(current = %current.code, suggested = %suggestion.code, href = %suggestion.href, "suggesting locale switch");
			}
			GateDecision::Suppressed(reason) => {
				tracing::debug!(current = %current.code, reason = ?reason, "locale suggestion suppressed");
			}
		}
		decision
	}

	/// Reads the dismissal record and evaluates the gate.
	pub fn evaluate(
		&self,
		current: &LocaleEntry,
		preferred: Option<&LocaleEntry>,
		page_path: &str,
		fragment: &str,
	) -> GateDecision {
		// No preference or same locale never needs the store.
		if !should_suggest(current, preferred, None) {
			return self.decide(current, preferred, None, page_path, fragment);
		}
		let dismissed = self.read_dismissal();
		self.decide(current, preferred, dismissed.as_deref(), page_path, fragment)
	}

	/// A handle that records the visitor declining `suggestion`.
	pub fn dismiss_handle(&self, suggestion: &Suggestion) -> DismissHandle<'a, S> {
		DismissHandle {
			store: self.store,
			dismissal_key: self.dismissal_key,
			code: suggestion.code.clone(),
		}
	}
}

/// Signal to the renderer that the banner should close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerClosed {
	/// Code written to the dismissal record.
	pub code: String,
	/// False when the store rejected the write; the dismissal then lasts
	/// only for the current page.
	pub persisted: bool,
}

/// The banner's single transition. Consumed on use, so a banner is
/// dismissed at most once.
pub struct DismissHandle<'a, S: ?Sized> {
	store: &'a S,
	dismissal_key: &'a str,
	code: String,
}

impl<'a, S: KeyValueStore + ?Sized> DismissHandle<'a, S> {
	pub fn code(&self) -> &str {
		&self.code
	}

	/// Overwrites the dismissal record with the suggested code.
	pub fn dismiss(self) -> BannerClosed {
		let persisted = match self.store.set(self.dismissal_key, &self.code) {
			Ok(()) => {
				tracing::debug!(key = %self.dismissal_key, code = %self.code, "dismissal recorded");
				true
			}
			Err(e) => {
				tracing::warn!(key = %self.dismissal_key, code = %self.code, error = %e, "failed to persist dismissal");
				false
			}
		};
		BannerClosed {
			code: self.code,
			persisted,
		}
	}
}

impl<S: ?Sized> std::fmt::Debug for DismissHandle<'_, S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DismissHandle")
			.field("dismissal_key", &self.dismissal_key)
			.field("code", &self.code)
			.finish_non_exhaustive()
	}
}
