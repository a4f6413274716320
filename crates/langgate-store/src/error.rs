// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

/// Errors returned by [`KeyValueStore`](crate::KeyValueStore) implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Storage is disabled or otherwise not reachable.
	#[error("Storage unavailable: {0}")]
	Unavailable(String),

	#[error("Corrupt store file {path}: {message}")]
	Corrupt { path: PathBuf, message: String },
}

impl StoreError {
	pub fn unavailable(reason: impl Into<String>) -> Self {
		Self::Unavailable(reason.into())
	}

	pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
		Self::Corrupt {
			path: path.into(),
			message: message.into(),
		}
	}
}
