use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount.")]
    InvalidAmount,

    #[error("Insufficient funds for this debit.")]
    InsufficientFunds,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
