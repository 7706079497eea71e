//! Ledger service implementation

use std::sync::Arc;

use common::error::{Result, ErrorExt};
use common::model::account::Account;
use common::money::Amount;
use tracing::{debug, info};

use crate::config::LedgerServiceConfig;
use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Ledger service recording deposits and withdrawals against accounts
pub struct LedgerService {
    /// Repository for account data
    repo: Arc<dyn AccountRepository>,
    /// Service configuration
    config: LedgerServiceConfig,
}

/// Outcome of a withdrawal request
///
/// Both variants carry the account state as stored after the call, so the
/// caller can report the balance without a second lookup. Ignoring the
/// variant reproduces the historical fire-and-forget behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum WithdrawalOutcome {
    /// The withdrawal was applied and recorded
    Completed(Account),
    /// The balance could not cover the request; nothing was recorded
    InsufficientFunds(Account),
}

impl WithdrawalOutcome {
    /// Whether the withdrawal was applied
    pub fn is_completed(&self) -> bool {
        matches!(self, WithdrawalOutcome::Completed(_))
    }

    /// The account state as stored after the call
    pub fn account(&self) -> &Account {
        match self {
            WithdrawalOutcome::Completed(account) => account,
            WithdrawalOutcome::InsufficientFunds(account) => account,
        }
    }
}

impl LedgerService {
    /// Create a new ledger service backed by in-memory storage
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryAccountRepository::new()),
            config: LedgerServiceConfig::default(),
        }
    }

    /// Create a new ledger service with a configuration
    pub fn with_config(config: &LedgerServiceConfig) -> Self {
        Self {
            repo: Arc::new(InMemoryAccountRepository::new()),
            config: config.clone(),
        }
    }

    /// Create a new ledger service with a specific repository
    pub fn with_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self {
            repo,
            config: LedgerServiceConfig::default(),
        }
    }

    /// Deposit funds into an account
    ///
    /// The magnitude of `amount` is credited regardless of its sign, so a
    /// negative input deposits its absolute value. Returns the updated
    /// account as stored.
    pub async fn deposit(&self, account_number: &str, amount: Amount) -> Result<Account> {
        info!("Depositing {} to account {}", amount, account_number);

        // Load the current state, or an empty account for a new number
        let account = self.repo.find_by_id(account_number).await
            .with_context(|| format!("Failed to retrieve account {}", account_number))?;

        // Apply the credit
        let updated = account.operate(amount.abs());

        // Save and return
        self.repo.save(updated.clone()).await
            .with_context(|| format!("Failed to save account {} after deposit", account_number))?;

        self.log_recorded(&updated);
        Ok(updated)
    }

    /// Withdraw funds from an account
    ///
    /// The request proceeds only when it fits the current balance; the raw
    /// signed `amount` is compared unless `normalize_withdrawals` is set, in
    /// which case the magnitude is compared. An accepted request debits the
    /// magnitude of `amount`. A rejected request records nothing but still
    /// writes the unchanged account back, and is reported through
    /// `WithdrawalOutcome` rather than an error.
    pub async fn withdraw(&self, account_number: &str, amount: Amount) -> Result<WithdrawalOutcome> {
        info!("Withdrawing {} from account {}", amount, account_number);

        // Load the current state, or an empty account for a new number
        let account = self.repo.find_by_id(account_number).await
            .with_context(|| format!("Failed to retrieve account {}", account_number))?;

        // Sufficiency check
        let requested = if self.config.normalize_withdrawals {
            amount.abs()
        } else {
            amount
        };

        if requested <= account.current_balance {
            // Apply the debit
            let updated = account.operate(-amount.abs());

            // Save and return
            self.repo.save(updated.clone()).await
                .with_context(|| format!("Failed to save account {} after withdrawal", account_number))?;

            self.log_recorded(&updated);
            Ok(WithdrawalOutcome::Completed(updated))
        } else {
            debug!(
                "Rejecting withdrawal of {} from account {}: balance is {}",
                amount, account_number, account.current_balance
            );

            // Write the unchanged state back, matching the accepted path
            self.repo.save(account.clone()).await
                .with_context(|| format!("Failed to save account {} after rejected withdrawal", account_number))?;

            Ok(WithdrawalOutcome::InsufficientFunds(account))
        }
    }

    /// Get an account by its account number
    ///
    /// A never-seen account number yields an empty account rather than an
    /// error.
    pub async fn retrieve_account(&self, account_number: &str) -> Result<Account> {
        self.repo.find_by_id(account_number).await
            .with_context(|| format!("Failed to retrieve account {}", account_number))
    }

    /// Log the transaction just recorded on an account
    fn log_recorded(&self, account: &Account) {
        if let Some(transaction) = account.last_transaction() {
            if self.config.transaction_logging {
                info!(
                    "Recorded transaction of {} on account {}, balance is now {}",
                    transaction.amount, account.account_number, transaction.balance
                );
            } else {
                debug!(
                    "Recorded transaction of {} on account {}, balance is now {}",
                    transaction.amount, account.account_number, transaction.balance
                );
            }
        }
    }
}
