//! History and favorites persistence.
//!
//! This is the imperative shell around the pure core: [`HistoryStore`] owns
//! two ordered collections of [`Transformation`]s, applies the
//! de-duplication and eviction rules, and writes each changed collection
//! back to a [`KeyValueStore`] before returning.
//!
//! Storage failures never reach the caller. A slot that cannot be read or
//! decoded loads as empty; a failed write leaves the in-memory collections as
//! the source of truth for the session. Both cases are reported through
//! `tracing` at `warn` level.
//!
//! # Example
//!
//! ```rust
//! use namecloak::core::Transformation;
//! use namecloak::store::{HistoryStore, MemoryStore};
//!
//! let backend = MemoryStore::new();
//! let mut store = HistoryStore::open(backend.clone());
//!
//! let ada = Transformation::new("Ada", "Αdα");
//! store.add_to_history(ada.clone());
//! store.toggle_favorite(&ada);
//! assert!(store.is_favorite(&ada));
//!
//! // A second store over the same backend sees the persisted state.
//! let reopened = HistoryStore::open(backend);
//! assert_eq!(reopened.history(), store.history());
//! assert_eq!(reopened.favorites(), store.favorites());
//! ```

use crate::config::StoreConfig;
use crate::core::Transformation;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

pub mod backend;
pub mod codec;
pub mod error;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use codec::SlotFormat;
pub use error::StoreError;

/// History length used when no configuration overrides it
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded history plus unbounded favorites, persisted per slot.
///
/// Methods take `&mut self` and do no locking; use [`SharedHistoryStore`]
/// when several threads need the same store.
#[derive(Debug)]
pub struct HistoryStore<B: KeyValueStore> {
    backend: B,
    config: StoreConfig,
    history: Vec<Transformation>,
    favorites: Vec<Transformation>,
}

impl<B: KeyValueStore> HistoryStore<B> {
    /// Open a store with the default configuration, loading both slots.
    pub fn open(backend: B) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    /// Open a store with an explicit configuration, loading both slots.
    ///
    /// A stored history longer than the configured capacity is truncated in
    /// memory to its most recent entries; the slot is rewritten on the next
    /// change. A capacity of zero is replaced with the default.
    pub fn with_config(backend: B, config: StoreConfig) -> Self {
        let config = config.sanitized();
        let mut history = load_slot(&backend, &config.history_key, config.format);
        let favorites = load_slot(&backend, &config.favorites_key, config.format);
        history.truncate(config.history_capacity);

        debug!(
            history = history.len(),
            favorites = favorites.len(),
            "loaded transformation store"
        );

        Self {
            backend,
            config,
            history,
            favorites,
        }
    }

    /// History, most recent first.
    pub fn history(&self) -> &[Transformation] {
        &self.history
    }

    /// Favorites, most recently added first.
    pub fn favorites(&self) -> &[Transformation] {
        &self.favorites
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Record a transformation at the front of history.
    ///
    /// Does nothing, and writes nothing, if an entry with the same
    /// `(original, transformed)` pair is already present. When the history
    /// grows past capacity the oldest entry is dropped. Returns whether the
    /// entry was inserted.
    pub fn add_to_history(&mut self, transformation: Transformation) -> bool {
        if self
            .history
            .iter()
            .any(|existing| existing.same_content(&transformation))
        {
            return false;
        }

        self.history.insert(0, transformation);
        self.history.truncate(self.config.history_capacity);
        self.persist_history();
        true
    }

    /// Add the transformation to favorites, or remove the favorite with the
    /// same text pair if there is one. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, transformation: &Transformation) -> bool {
        let now_favorite = match self
            .favorites
            .iter()
            .position(|existing| existing.same_content(transformation))
        {
            Some(index) => {
                self.favorites.remove(index);
                false
            }
            None => {
                self.favorites.insert(0, transformation.clone());
                true
            }
        };
        self.persist_favorites();
        now_favorite
    }

    /// Whether a favorite shares the transformation's text pair.
    pub fn is_favorite(&self, transformation: &Transformation) -> bool {
        self.favorites
            .iter()
            .any(|existing| existing.same_content(transformation))
    }

    /// Remove the history entry with the same id, along with any favorite
    /// sharing its text pair. Returns whether an entry was found.
    pub fn remove_from_history(&mut self, transformation: &Transformation) -> bool {
        let Some(index) = self
            .history
            .iter()
            .position(|existing| existing.id == transformation.id)
        else {
            return false;
        };

        let removed = self.history.remove(index);
        if let Some(favorite) = self
            .favorites
            .iter()
            .position(|existing| existing.same_content(&removed))
        {
            self.favorites.remove(favorite);
        }

        self.persist_history();
        self.persist_favorites();
        true
    }

    /// Clear history and favorites, including favorites that no longer
    /// appear in history. Both slots are deleted from the backend; a missing
    /// slot loads as empty.
    pub fn remove_all_history(&mut self) {
        self.history.clear();
        self.favorites.clear();
        clear_slot(&mut self.backend, &self.config.history_key);
        clear_slot(&mut self.backend, &self.config.favorites_key);
    }

    fn persist_history(&mut self) {
        persist_slot(
            &mut self.backend,
            &self.config.history_key,
            self.config.format,
            &self.history,
        );
    }

    fn persist_favorites(&mut self) {
        persist_slot(
            &mut self.backend,
            &self.config.favorites_key,
            self.config.format,
            &self.favorites,
        );
    }
}

fn load_slot<B: KeyValueStore>(backend: &B, key: &str, format: SlotFormat) -> Vec<Transformation> {
    let bytes = match backend.read(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(slot = key, error = %e, "failed to read slot, starting empty");
            return Vec::new();
        }
    };

    match format.decode(&bytes) {
        Ok(records) => records,
        Err(e) => {
            warn!(slot = key, error = %e, "failed to decode slot, starting empty");
            Vec::new()
        }
    }
}

fn persist_slot<B: KeyValueStore>(
    backend: &mut B,
    key: &str,
    format: SlotFormat,
    records: &[Transformation],
) {
    let result = format
        .encode(records)
        .and_then(|bytes| backend.write(key, &bytes));
    match result {
        Ok(()) => debug!(slot = key, count = records.len(), "persisted slot"),
        Err(e) => warn!(slot = key, error = %e, "failed to persist slot, keeping in-memory state"),
    }
}

fn clear_slot<B: KeyValueStore>(backend: &mut B, key: &str) {
    match backend.remove(key) {
        Ok(()) => debug!(slot = key, "cleared slot"),
        Err(e) => warn!(slot = key, error = %e, "failed to clear slot, keeping in-memory state"),
    }
}

/// Thread-safe handle to a [`HistoryStore`].
///
/// Each operation, including its persistence write, runs under one lock, so
/// concurrent add, toggle and remove calls cannot lose each other's updates.
/// Accessors return owned snapshots.
#[derive(Debug)]
pub struct SharedHistoryStore<B: KeyValueStore> {
    inner: Arc<Mutex<HistoryStore<B>>>,
}

impl<B: KeyValueStore> Clone for SharedHistoryStore<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: KeyValueStore> SharedHistoryStore<B> {
    pub fn new(store: HistoryStore<B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HistoryStore<B>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn history(&self) -> Vec<Transformation> {
        self.lock().history().to_vec()
    }

    pub fn favorites(&self) -> Vec<Transformation> {
        self.lock().favorites().to_vec()
    }

    pub fn add_to_history(&self, transformation: Transformation) -> bool {
        self.lock().add_to_history(transformation)
    }

    pub fn toggle_favorite(&self, transformation: &Transformation) -> bool {
        self.lock().toggle_favorite(transformation)
    }

    pub fn is_favorite(&self, transformation: &Transformation) -> bool {
        self.lock().is_favorite(transformation)
    }

    pub fn remove_from_history(&self, transformation: &Transformation) -> bool {
        self.lock().remove_from_history(transformation)
    }

    pub fn remove_all_history(&self) {
        self.lock().remove_all_history()
    }

    /// Run `f` with exclusive access to the underlying store.
    pub fn with<R>(&self, f: impl FnOnce(&mut HistoryStore<B>) -> R) -> R {
        f(&mut self.lock())
    }
}
