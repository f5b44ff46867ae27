// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use passbook::application::AccountService;
use passbook::domain::Cents;
use passbook::storage::BalanceStore;
use tempfile::TempDir;

/// Helper to create a test service over a temporary balance file
pub fn test_service() -> Result<(AccountService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = open_service(&temp_dir);
    Ok((service, temp_dir))
}

/// Open a service over the balance file inside the given temp dir.
/// Opening a second service on the same directory simulates a fresh process
/// run against the same persisted state.
pub fn open_service(temp_dir: &TempDir) -> AccountService {
    AccountService::new(open_store(temp_dir))
}

/// Open a store handle over the balance file inside the given temp dir.
pub fn open_store(temp_dir: &TempDir) -> BalanceStore {
    BalanceStore::new(temp_dir.path().join("balance.json"))
}

/// Read the persisted balance directly, bypassing the service under test.
pub fn persisted_balance(temp_dir: &TempDir) -> Result<Cents> {
    open_store(temp_dir).read()
}
