use crate::domain::{Cents, parse_amount};
use crate::storage::BalanceStore;

use super::AppError;

/// Application service providing the account operations.
/// This is the primary interface for any client (CLI, API, TUI, etc.).
pub struct AccountService {
    store: BalanceStore,
}

/// Result of a credit or debit call.
///
/// Validation and funds rejections are ordinary outcomes carrying a
/// user-facing message; storage failures are not outcomes and surface as
/// `AppError::Storage` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { balance: Cents },
    Failure { message: String },
}

impl Outcome {
    fn rejected(reason: AppError) -> Self {
        Outcome::Failure {
            message: reason.to_string(),
        }
    }
}

impl AccountService {
    /// Create a service over the given balance store.
    pub fn new(store: BalanceStore) -> Self {
        Self { store }
    }

    /// Current balance, straight from the store.
    pub fn view_balance(&self) -> Result<Cents, AppError> {
        Ok(self.store.read()?)
    }

    /// Add a positive amount to the balance.
    ///
    /// The raw input is validated before the store is touched; rejected
    /// input leaves persisted state untouched.
    pub fn credit(&self, amount_input: &str) -> Result<Outcome, AppError> {
        let amount = match parse_amount(amount_input) {
            Ok(amount) => amount,
            Err(_) => return Ok(Outcome::rejected(AppError::InvalidAmount)),
        };

        let balance = self.store.read()?;
        let updated = match balance.checked_add(amount) {
            Some(updated) => updated,
            None => return Ok(Outcome::rejected(AppError::InvalidAmount)),
        };

        self.store.write(updated)?;
        Ok(Outcome::Success { balance: updated })
    }

    /// Subtract a positive amount from the balance.
    ///
    /// Debits that would drive the balance negative are rejected without
    /// writing, so persisted state is unchanged.
    pub fn debit(&self, amount_input: &str) -> Result<Outcome, AppError> {
        let amount = match parse_amount(amount_input) {
            Ok(amount) => amount,
            Err(_) => return Ok(Outcome::rejected(AppError::InvalidAmount)),
        };

        let balance = self.store.read()?;
        if balance < amount {
            return Ok(Outcome::rejected(AppError::InsufficientFunds));
        }

        let updated = balance - amount;
        self.store.write(updated)?;
        Ok(Outcome::Success { balance: updated })
    }
}
