//! In-memory memoization of pure string-keyed computations.
//!
//! Parsing a notename is a pure function of its text, so results can be
//! shared between calls and threads. A memo never changes observable
//! results; it only skips repeated work.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use log::trace;

/// Default number of entries kept before a memo is flushed.
pub const DEFAULT_MEMO_CAPACITY: usize = 4096;

/// A thread-safe, capacity-bounded memo keyed by exact input text.
///
/// When the memo is full it is cleared before the next insertion.
pub struct Memo<V> {
    name: &'static str,
    capacity: usize,
    entries: OnceLock<RwLock<HashMap<String, V>>>,
}

impl<V: Clone> Memo<V> {
    /// Creates an empty memo. Usable in `static` items.
    pub const fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity,
            entries: OnceLock::new(),
        }
    }

    fn entries(&self) -> &RwLock<HashMap<String, V>> {
        self.entries.get_or_init(|| RwLock::new(HashMap::new()))
    }

    /// Returns the memoized value for `key`, computing it with `compute` on a miss.
    ///
    /// Errors are returned to the caller and never stored.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: &str,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(key) {
            trace!("{} memo hit for '{}'", self.name, key);
            return Ok(value);
        }

        let value = compute()?;
        let mut entries = self
            .entries()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity {
            trace!("{} memo full ({} entries), clearing", self.name, entries.len());
            entries.clear();
        }
        entries.insert(key.to_string(), value.clone());
        Ok(value)
    }

    /// Returns the memoized value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.entries()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been memoized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
