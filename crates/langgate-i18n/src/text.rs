// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display text for the language suggestion banner.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Banner text, written in the language being suggested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionText {
	pub message: String,
	/// Label of the link that switches locale.
	pub action: String,
	/// Label of the button that dismisses the banner.
	pub dismiss: String,
}

impl SuggestionText {
	pub fn new(message: &str, action: &str, dismiss: &str) -> Self {
		Self {
			message: message.to_string(),
			action: action.to_string(),
			dismiss: dismiss.to_string(),
		}
	}

	pub(crate) fn is_complete(&self) -> bool {
		!self.message.trim().is_empty()
			&& !self.action.trim().is_empty()
			&& !self.dismiss.trim().is_empty()
	}
}

/// Suggestion text keyed by locale code.
///
/// A locale without an entry is never suggested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
	texts: BTreeMap<String, SuggestionText>,
}

static BUILTIN: Lazy<TextTable> = Lazy::new(|| {
	let texts = [
		(
			"zh-hans",
			SuggestionText::new("此文档也有简体中文版本。", "切换到中文", "不再提示"),
		),
		(
			"zh-hant",
			SuggestionText::new("此文件也有繁體中文版本。", "切換到中文", "不再提示"),
		),
		(
			"ja",
			SuggestionText::new(
				"このドキュメントには日本語版もあります。",
				"日本語に切替",
				"閉じる",
			),
		),
		(
			"ko",
			SuggestionText::new("이 문서는 한국어로도 제공됩니다.", "한국어로 전환", "닫기"),
		),
		(
			"fr",
			SuggestionText::new(
				"Cette documentation est disponible en français.",
				"Passer au français",
				"Fermer",
			),
		),
		(
			"es",
			SuggestionText::new(
				"Esta documentación está disponible en español.",
				"Cambiar a español",
				"Cerrar",
			),
		),
		(
			"ru",
			SuggestionText::new(
				"Документация доступна на русском языке.",
				"Перейти на русский",
				"Закрыть",
			),
		),
		(
			"ar",
			SuggestionText::new(
				"هذه الوثائق متاحة أيضًا باللغة العربية.",
				"التبديل إلى العربية",
				"إغلاق",
			),
		),
	];

	TextTable::from_iter(texts.into_iter().map(|(code, text)| (code.to_string(), text)))
});

impl TextTable {
	pub fn new(texts: BTreeMap<String, SuggestionText>) -> Self {
		Self { texts }
	}

	/// The table shipped with langgate. English has no entry.
	pub fn builtin() -> &'static TextTable {
		&BUILTIN
	}

	pub fn get(&self, code: &str) -> Option<&SuggestionText> {
		self.texts.get(code)
	}

	pub fn contains(&self, code: &str) -> bool {
		self.texts.contains_key(code)
	}

	pub fn codes(&self) -> impl Iterator<Item = &str> {
		self.texts.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.texts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.texts.is_empty()
	}
}

impl FromIterator<(String, SuggestionText)> for TextTable {
	fn from_iter<I: IntoIterator<Item = (String, SuggestionText)>>(iter: I) -> Self {
		Self {
			texts: iter.into_iter().collect(),
		}
	}
}
