use chrono::Utc;
use common::model::account::Account;
use ledger_service::{AccountRepository, InMemoryAccountRepository};

#[tokio::test]
async fn test_find_unknown_account() {
    let repo = InMemoryAccountRepository::new();

    // Verify basic operations
    assert!(repo.accounts.is_empty());

    // A miss resolves to an empty account
    let account = repo.find_by_id("007").await.unwrap();
    assert_eq!(account.account_number, "007");
    assert_eq!(account.current_balance, 0);
    assert!(account.transactions.is_empty());

    // The lookup alone must not create state
    assert!(repo.accounts.is_empty());
}

#[tokio::test]
async fn test_save_and_find() {
    let repo = InMemoryAccountRepository::new();

    // Save an account with some history
    let account = Account::new("12345".to_string()).operate(100);
    repo.save(account.clone()).await.unwrap();

    // Check it was added
    assert_eq!(repo.accounts.len(), 1);
    assert!(repo.accounts.contains_key("12345"));

    // The stored state round-trips
    let found = repo.find_by_id("12345").await.unwrap();
    assert_eq!(found, account);
}

#[tokio::test]
async fn test_save_overwrites_previous_state() {
    let repo = InMemoryAccountRepository::new();

    // Save an initial state
    let account = Account::new("12345".to_string()).operate(100);
    repo.save(account).await.unwrap();

    // Save a successor state under the same number
    let account = repo.find_by_id("12345").await.unwrap().operate(-40);
    repo.save(account).await.unwrap();

    // Only the latest state remains
    assert_eq!(repo.accounts.len(), 1);
    let found = repo.find_by_id("12345").await.unwrap();
    assert_eq!(found.current_balance, 60);
    assert_eq!(found.transactions.len(), 2);
}

#[tokio::test]
async fn test_accounts_are_isolated() {
    let repo = InMemoryAccountRepository::new();

    // Save state under two different numbers
    repo.save(Account::new("A".to_string()).operate(100)).await.unwrap();
    repo.save(Account::new("B".to_string()).operate(30)).await.unwrap();

    // Updating one leaves the other untouched
    let b = repo.find_by_id("B").await.unwrap().operate(-5);
    repo.save(b).await.unwrap();

    let a = repo.find_by_id("A").await.unwrap();
    let b = repo.find_by_id("B").await.unwrap();
    assert_eq!(a.current_balance, 100);
    assert_eq!(a.transactions.len(), 1);
    assert_eq!(b.current_balance, 25);
    assert_eq!(b.transactions.len(), 2);
}

#[tokio::test]
async fn test_direct_map_access() {
    let repo = InMemoryAccountRepository::new();

    // Add an account directly
    let account = Account::new("999".to_string()).operate(500);
    repo.accounts.insert(account.account_number.clone(), account);

    // Check it was added
    assert_eq!(repo.accounts.len(), 1);
    let stored = repo.accounts.get("999").map(|a| a.clone()).unwrap();
    assert_eq!(stored.current_balance, 500);
}

#[tokio::test]
async fn test_operate_appends_transaction() {
    let account = Account::new("12345".to_string());

    let updated = account.operate(100);

    // The successor state carries the new transaction
    assert_eq!(updated.current_balance, 100);
    assert_eq!(updated.transactions.len(), 1);
    assert_eq!(updated.transactions[0].amount, 100);
    assert_eq!(updated.transactions[0].balance, 100);

    // The receiver is untouched
    assert_eq!(account.current_balance, 0);
    assert!(account.transactions.is_empty());
}

#[tokio::test]
async fn test_operate_chains_running_balance() {
    let account = Account::new("12345".to_string())
        .operate(100)
        .operate(-50)
        .operate(5);

    assert_eq!(account.current_balance, 55);

    // Each transaction records the balance right after it was applied
    let expected = [(100, 100), (-50, 50), (5, 55)];
    assert_eq!(account.transactions.len(), expected.len());
    for (transaction, (amount, balance)) in account.transactions.iter().zip(expected) {
        assert_eq!(transaction.amount, amount);
        assert_eq!(transaction.balance, balance);
    }

    // The last transaction agrees with the current balance
    let last = account.last_transaction().unwrap();
    assert_eq!(last.balance, account.current_balance);
}

#[tokio::test]
async fn test_operate_allows_negative_balance() {
    // The entity itself enforces no floor on the balance
    let account = Account::new("12345".to_string()).operate(-25);

    assert_eq!(account.current_balance, -25);
    assert_eq!(account.transactions[0].amount, -25);
    assert_eq!(account.transactions[0].balance, -25);
}

#[tokio::test]
async fn test_transaction_dates_are_ordered() {
    let before = Utc::now();
    let account = Account::new("12345".to_string()).operate(10).operate(20);
    let after = Utc::now();

    let first = &account.transactions[0];
    let second = &account.transactions[1];

    // Application order matches chronological order
    assert!(first.date <= second.date);
    assert!(before <= first.date);
    assert!(second.date <= after);
}
