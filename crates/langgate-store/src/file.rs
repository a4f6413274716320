// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// A store persisted as a flat JSON object of string values.
///
/// The file is created on first write. Writes go to a sibling temporary file
/// that is then renamed over the original, so a crash never leaves a
/// half-written store behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_map(&self) -> Result<Map<String, Value>, StoreError> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
			Err(e) => return Err(e.into()),
		};
		if contents.trim().is_empty() {
			return Ok(Map::new());
		}

		match serde_json::from_str::<Value>(&contents) {
			Ok(Value::Object(map)) => Ok(map),
			Ok(_) => Err(StoreError::corrupt(&self.path, "expected a JSON object")),
			Err(e) => Err(StoreError::corrupt(&self.path, e.to_string())),
		}
	}

	fn write_map(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent)?;
			}
		}

		let json = serde_json::to_string_pretty(map)?;
		let tmp_path = self.path.with_extension("json.tmp");
		fs::write(&tmp_path, json)?;
		fs::rename(&tmp_path, &self.path)?;
		Ok(())
	}
}

impl KeyValueStore for JsonFileStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		let map = self.read_map()?;
		Ok(map.get(key).and_then(Value::as_str).map(str::to_string))
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		let mut map = match self.read_map() {
			Ok(map) => map,
			Err(StoreError::Corrupt { path, message }) => {
				tracing::warn!(path = %path.display(), error = %message, "replacing corrupt store file");
				Map::new()
			}
			Err(e) => return Err(e),
		};
		map.insert(key.to_string(), Value::String(value.to_string()));
		self.write_map(&map)?;
		tracing::debug!(path = %self.path.display(), key = %key, "store value written");
		Ok(())
	}
}
