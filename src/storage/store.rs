use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::domain::Cents;

/// Balance seeded the first time the store is used with no prior state.
pub const INITIAL_BALANCE: Cents = 100_000;

/// On-disk record. The balance is stored in whole units with a decimal
/// fraction (`{"balance":1000.0}`) so the file stays hand-editable.
#[derive(Debug, Serialize, Deserialize)]
struct BalanceRecord {
    balance: f64,
}

/// Persists the single account balance to a JSON file.
///
/// The store keeps nothing in memory: every `read` goes back to the file and
/// every `write` lands on disk before returning, so the file is the single
/// source of truth across operations and process restarts.
pub struct BalanceStore {
    path: PathBuf,
}

impl BalanceStore {
    /// Create a store backed by the given file path.
    /// The file itself is created lazily on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seed the store with the initial balance if no state exists yet.
    /// Idempotent: an existing file is left untouched.
    pub fn initialize(&self) -> Result<()> {
        if !self.path.exists() {
            self.write(INITIAL_BALANCE)?;
        }
        Ok(())
    }

    /// Read the current balance, seeding the store first if it is empty.
    pub fn read(&self) -> Result<Cents> {
        self.initialize()?;

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read balance file {}", self.path.display()))?;
        let record: BalanceRecord = serde_json::from_str(&data)
            .with_context(|| format!("Corrupt balance file {}", self.path.display()))?;

        cents_from_units(record.balance)
            .with_context(|| format!("Corrupt balance file {}", self.path.display()))
    }

    /// Overwrite the persisted balance with the given value.
    pub fn write(&self, balance: Cents) -> Result<()> {
        let record = BalanceRecord {
            balance: units_from_cents(balance),
        };
        let data = serde_json::to_string(&record).context("Failed to encode balance")?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write balance file {}", self.path.display()))
    }
}

fn units_from_cents(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Convert a stored unit value to cents, rounding at two fraction digits.
/// Non-finite and negative values are corrupt state: no completed operation
/// can produce them.
fn cents_from_units(units: f64) -> Result<Cents> {
    ensure!(units.is_finite(), "balance is not a finite number");
    ensure!(units >= 0.0, "balance is negative");
    Ok((units * 100.0).round() as Cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(temp: &TempDir) -> BalanceStore {
        BalanceStore::new(temp.path().join("balance.json"))
    }

    #[test]
    fn test_read_rejects_corrupt_state() -> Result<()> {
        let temp = TempDir::new()?;
        let store = test_store(&temp);
        for data in [
            "",
            "not json",
            "{}",
            r#"{"balance":"abc"}"#,
            r#"{"balance":-5.0}"#,
        ] {
            fs::write(store.path(), data)?;
            assert!(store.read().is_err(), "accepted corrupt state: {:?}", data);
        }
        Ok(())
    }

    #[test]
    fn test_read_accepts_integer_balance() -> Result<()> {
        let temp = TempDir::new()?;
        let store = test_store(&temp);
        fs::write(store.path(), r#"{"balance": 1000}"#)?;
        assert_eq!(store.read()?, 100_000);
        Ok(())
    }

    #[test]
    fn test_unit_conversion_rounds_at_two_digits() {
        assert_eq!(cents_from_units(12.34).unwrap(), 1234);
        assert_eq!(cents_from_units(0.1 + 0.2).unwrap(), 30);
        assert!(cents_from_units(f64::NAN).is_err());
        assert!(cents_from_units(-0.01).is_err());
    }
}
