use aries_vcx_wallet::errors::error::VcxWalletError;
use thiserror::Error as ThisError;

pub type VcxLedgerResult<T> = Result<T, VcxLedgerError>;

#[derive(Debug, ThisError)]
pub enum VcxLedgerError {
    #[error("Ledger item not found")]
    LedgerItemNotFound,
    #[error("Invalid ledger response {0}")]
    InvalidLedgerResponse(String),
    #[error("Ledger transaction rejected: {0}")]
    TransactionRejected(String),
    #[error("Pool ledger connect: {0}")]
    PoolLedgerConnect(String),
    #[error("Duplicated ledger item: {0}")]
    DuplicatedItem(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Wallet error: {0}")]
    WalletError(#[from] VcxWalletError),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown error: {0}")]
    UnknownError(String),
}
