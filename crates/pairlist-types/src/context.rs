//! Per-step execution context supplied by the replicated state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Ledger height, ledger time and raw transaction bytes of the step being
/// executed. Handlers never consult the wall clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepContext {
    pub block_height: i64,
    pub block_time: DateTime<Utc>,
    pub tx_bytes: Vec<u8>,
}

impl StepContext {
    #[must_use]
    pub fn new(block_height: i64, block_time: DateTime<Utc>) -> Self {
        Self {
            block_height,
            block_time,
            tx_bytes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tx_bytes(mut self, tx_bytes: impl Into<Vec<u8>>) -> Self {
        self.tx_bytes = tx_bytes.into();
        self
    }

    /// Upper-case hex SHA-256 of the transaction bytes.
    #[must_use]
    pub fn tx_hash(&self) -> String {
        hex::encode_upper(Sha256::digest(&self.tx_bytes))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn tx_hash_of_empty_bytes() {
        let ctx = StepContext::new(1, Utc.timestamp_opt(0, 0).unwrap());
        assert_eq!(
            ctx.tx_hash(),
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn tx_hash_depends_on_bytes() {
        let t = Utc.timestamp_opt(0, 0).unwrap();
        let a = StepContext::new(1, t).with_tx_bytes(b"tx-a".to_vec());
        let b = StepContext::new(1, t).with_tx_bytes(b"tx-b".to_vec());
        assert_ne!(a.tx_hash(), b.tx_hash());
        assert_eq!(a.tx_hash().len(), 64);
    }
}
