//! Determinism digest for cross-replica comparison.
//!
//! Two replicas that executed the same steps must hold byte-identical
//! stores. The state root is a SHA-256 over every entry in key order, which
//! allows that comparison without shipping the full store.

use pairlist_types::Result;
use sha2::{Digest, Sha256};

use crate::store::KvStore;

/// Compute the state root of `store`.
///
/// `SHA-256("pairlist:state_root:v1:" || n || for each entry: len(k) || k || len(v) || v)`
pub fn state_root(store: &dyn KvStore) -> Result<[u8; 32]> {
    let entries = store.scan_prefix(&[])?;

    let mut hasher = Sha256::new();
    hasher.update(b"pairlist:state_root:v1:");
    hasher.update((entries.len() as u64).to_le_bytes());
    for (key, value) in &entries {
        hasher.update((key.len() as u64).to_le_bytes());
        hasher.update(key);
        hasher.update((value.len() as u64).to_le_bytes());
        hasher.update(value);
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    Ok(root)
}

/// Hex-encoded [`state_root`], handy for logs.
pub fn state_root_hex(store: &dyn KvStore) -> Result<String> {
    Ok(hex::encode(state_root(store)?))
}
