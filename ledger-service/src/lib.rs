//! Ledger service for managing accounts and their transaction history

pub mod service;
pub mod repository;
pub mod config;

pub use service::LedgerService;
pub use service::WithdrawalOutcome;
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use config::LedgerServiceConfig;
