//! JSON record encoding on top of [`KvStore`].

use pairlist_types::{DexError, Result};
use serde::{Serialize, de::DeserializeOwned};

use crate::store::KvStore;

pub(crate) fn load<T: DeserializeOwned>(store: &dyn KvStore, key: &[u8]) -> Result<Option<T>> {
    store
        .get(key)?
        .map(|bytes| serde_json::from_slice::<T>(&bytes))
        .transpose()
        .map_err(DexError::from)
}

pub(crate) fn save<T: Serialize>(store: &mut dyn KvStore, key: &[u8], value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value)?;
    store.set(key, &bytes)
}

/// Decode every record under `prefix`, in key order.
pub(crate) fn load_prefix<T: DeserializeOwned>(store: &dyn KvStore, prefix: &[u8]) -> Result<Vec<T>> {
    store
        .scan_prefix(prefix)?
        .into_iter()
        .map(|(_, bytes)| serde_json::from_slice::<T>(&bytes).map_err(DexError::from))
        .collect()
}
