// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::StoreError;

/// A string key-value store with fallible reads and writes.
///
/// Callers decide what a failure means. The suggestion gate treats a failed
/// read as an absent value and a failed write as a no-op.
pub trait KeyValueStore {
	/// Returns the value stored under `key`, or `None` when nothing is stored.
	fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		(**self).set(key, value)
	}
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		(**self).set(key, value)
	}
}

/// In-process store. Values live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryStore {
	values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store pre-populated with a single entry.
	pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
		let store = Self::new();
		store.values.lock().insert(key.into(), value.into());
		store
	}

	pub fn len(&self) -> usize {
		self.values.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.lock().is_empty()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.values.lock().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
		self.values.lock().insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Store for hosts where persistent storage is disabled. Every call fails.
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore {
	reason: String,
}

impl UnavailableStore {
	pub fn new(reason: impl Into<String>) -> Self {
		Self {
			reason: reason.into(),
		}
	}
}

impl KeyValueStore for UnavailableStore {
	fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
		Err(StoreError::unavailable(self.reason.clone()))
	}

	fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
		Err(StoreError::unavailable(self.reason.clone()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_memory_store_missing_key() {
		let store = MemoryStore::new();
		assert_eq!(store.get("missing").unwrap(), None);
		assert!(store.is_empty());
	}

	#[test]
	fn test_memory_store_overwrites() {
		let store = MemoryStore::with_entry("dismissed", "ja");
		store.set("dismissed", "ko").unwrap();

		assert_eq!(store.get("dismissed").unwrap().as_deref(), Some("ko"));
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn test_unavailable_store_fails_both_ways() {
		let store = UnavailableStore::new("storage disabled");

		assert!(matches!(
			store.get("dismissed"),
			Err(StoreError::Unavailable(_))
		));
		assert!(matches!(
			store.set("dismissed", "ja"),
			Err(StoreError::Unavailable(_))
		));
	}

	#[test]
	fn test_store_through_reference_and_box() {
		let store = MemoryStore::new();
		let by_ref: &dyn KeyValueStore = &store;
		by_ref.set("k", "v").unwrap();

		let boxed: Box<dyn KeyValueStore> = Box::new(MemoryStore::with_entry("k", "w"));
		assert_eq!(boxed.get("k").unwrap().as_deref(), Some("w"));
		assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
	}

	proptest! {
		/// The last write for a key is the one that is read back.
		#[test]
		fn last_write_wins(values in proptest::collection::vec("[a-z-]{0,12}", 1..8)) {
			let store = MemoryStore::new();
			for value in &values {
				store.set("dismissed", value).unwrap();
			}
			prop_assert_eq!(store.get("dismissed").unwrap(), values.last().cloned());
		}
	}
}
