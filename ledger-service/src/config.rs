//! Configuration for the ledger service

use std::env;

/// Configuration for the ledger service
#[derive(Debug, Clone)]
pub struct LedgerServiceConfig {
    /// Log every recorded transaction at info level
    pub transaction_logging: bool,
    /// Compare withdrawal requests by magnitude instead of raw signed value
    pub normalize_withdrawals: bool,
}

impl Default for LedgerServiceConfig {
    fn default() -> Self {
        Self {
            transaction_logging: env::var("TRANSACTION_LOGGING")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            normalize_withdrawals: env::var("NORMALIZE_WITHDRAWALS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl LedgerServiceConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a new configuration with custom values
    pub fn new(transaction_logging: bool, normalize_withdrawals: bool) -> Self {
        Self {
            transaction_logging,
            normalize_withdrawals,
        }
    }
}
