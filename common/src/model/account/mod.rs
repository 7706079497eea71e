//! Account model and transaction history types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Amount;

/// Account model
///
/// Value entity holding the account identity, the current balance, and the
/// ordered transaction history. Operations never mutate an account in
/// place: `operate` returns the successor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account number, unique key in the repository
    pub account_number: String,
    /// Current balance, equal to the balance of the last transaction
    pub current_balance: Amount,
    /// Transaction history in application order
    pub transactions: Vec<Transaction>,
}

/// Record of one balance-affecting operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Signed delta applied by the operation
    pub amount: Amount,
    /// Running balance immediately after this transaction
    pub balance: Amount,
    /// Moment the transaction was recorded
    pub date: DateTime<Utc>,
}

impl Account {
    /// Create a new empty account
    pub fn new(account_number: String) -> Self {
        Self {
            account_number,
            current_balance: 0,
            transactions: Vec::new(),
        }
    }

    /// Apply a signed delta, returning the updated account
    ///
    /// The receiver is left untouched. The returned account carries the
    /// adjusted balance and a history extended by one transaction stamped
    /// with the current time.
    pub fn operate(&self, delta: Amount) -> Account {
        let balance = self.current_balance + delta;
        let mut transactions = self.transactions.clone();
        transactions.push(Transaction {
            amount: delta,
            balance,
            date: Utc::now(),
        });

        Account {
            account_number: self.account_number.clone(),
            current_balance: balance,
            transactions,
        }
    }

    /// Most recent transaction, if any
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }
}
