//! Repository for account data

use async_trait::async_trait;
use common::error::Result;
use common::model::account::Account;
use dashmap::DashMap;
use tracing::debug;

/// Account repository trait defining the interface for account data storage
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Look up an account by its account number
    ///
    /// Unknown account numbers resolve to a fresh empty account rather
    /// than an error; "not found" is not a distinct case in this contract.
    async fn find_by_id(&self, account_number: &str) -> Result<Account>;

    /// Persist an account, overwriting any prior state under its number
    async fn save(&self, account: Account) -> Result<()>;
}

/// In-memory repository for account data
pub struct InMemoryAccountRepository {
    /// Latest account state by account number
    pub accounts: DashMap<String, Account>,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory account repository
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    /// Look up an account by its account number
    async fn find_by_id(&self, account_number: &str) -> Result<Account> {
        debug!("Looking up account: {}", account_number);

        Ok(self
            .accounts
            .get(account_number)
            .map(|a| a.clone())
            .unwrap_or_else(|| Account::new(account_number.to_string())))
    }

    /// Persist an account under its account number
    async fn save(&self, account: Account) -> Result<()> {
        debug!("Saving account: {}", account.account_number);

        self.accounts
            .insert(account.account_number.clone(), account);
        Ok(())
    }
}
