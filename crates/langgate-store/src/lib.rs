// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Key-value storage for the langgate dismissal record.
//!
//! The suggestion banner remembers the locale a visitor declined in a single
//! string value. Hosts provide the backing storage; this crate defines the
//! contract and ships the implementations langgate needs:
//!
//! - [`MemoryStore`]: in-process map, session-only persistence
//! - [`JsonFileStore`]: a JSON object file, one per browser profile or user
//! - [`UnavailableStore`]: storage that is disabled; every call fails
//!
//! # Example
//!
//! ```
//! use langgate_store::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("dismissed", "ja").unwrap();
//! assert_eq!(store.get("dismissed").unwrap().as_deref(), Some("ja"));
//! ```

mod error;
mod file;
mod store;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use store::{KeyValueStore, MemoryStore, UnavailableStore};
