//! Ledger store interface and in-memory implementations.
//!
//! Handlers see the ledger only through [`KvStore`], a byte-level ordered
//! key/value map. [`MemoryStore`] is the process-wide store; [`CacheStore`]
//! buffers one step's writes over a parent store so the step can be
//! committed or discarded as a whole.

use std::collections::{BTreeMap, BTreeSet};

use pairlist_types::Result;

/// Ordered key/value store.
///
/// Iteration order is byte-lexicographic on keys, identical on every replica.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<()>;

    fn remove(&mut self, key: &[u8]) -> Result<()>;

    /// All entries whose key starts with `prefix`, in key order.
    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>>;

    fn has(&self, key: &[u8]) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Remove stale data. Unlike [`KvStore::remove`], a prune is kept even
    /// when the surrounding step is discarded.
    fn prune(&mut self, key: &[u8]) -> Result<()> {
        self.remove(key)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// `BTreeMap`-backed store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &[u8]) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        Ok(self
            .entries
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// CacheStore
// ---------------------------------------------------------------------------

/// Write-buffering overlay over a parent store.
///
/// Reads see buffered writes first. Nothing reaches the parent until
/// [`CacheStore::commit`]; [`CacheStore::discard`] (or dropping the cache)
/// throws the buffered writes away.
pub struct CacheStore<'a> {
    parent: &'a mut dyn KvStore,
    /// `None` marks a buffered delete.
    pending: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
    /// Keys pruned during the step; applied on commit and on discard.
    pruned: BTreeSet<Vec<u8>>,
}

impl<'a> CacheStore<'a> {
    pub fn new(parent: &'a mut dyn KvStore) -> Self {
        Self {
            parent,
            pending: BTreeMap::new(),
            pruned: BTreeSet::new(),
        }
    }

    /// Number of buffered writes and deletes.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Flush buffered writes to the parent in key order.
    pub fn commit(self) -> Result<()> {
        let Self {
            parent,
            pending,
            pruned,
        } = self;
        for (key, value) in pending {
            match value {
                Some(v) => parent.set(&key, &v)?,
                None if pruned.contains(&key) => parent.prune(&key)?,
                None => parent.remove(&key)?,
            }
        }
        Ok(())
    }

    /// Drop buffered writes, keeping only prunes.
    pub fn discard(self) -> Result<()> {
        let Self { parent, pruned, .. } = self;
        for key in pruned {
            parent.prune(&key)?;
        }
        Ok(())
    }
}

impl KvStore for CacheStore<'_> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        match self.pending.get(key) {
            Some(buffered) => Ok(buffered.clone()),
            None => self.parent.get(key),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.pending.insert(key.to_vec(), Some(value.to_vec()));
        Ok(())
    }

    fn remove(&mut self, key: &[u8]) -> Result<()> {
        self.pending.insert(key.to_vec(), None);
        Ok(())
    }

    fn prune(&mut self, key: &[u8]) -> Result<()> {
        self.pruned.insert(key.to_vec());
        self.remove(key)
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> =
            self.parent.scan_prefix(prefix)?.into_iter().collect();
        for (key, value) in self
            .pending
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
        {
            match value {
                Some(v) => {
                    merged.insert(key.clone(), v.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }
        Ok(merged.into_iter().collect())
    }
}
