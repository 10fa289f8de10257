use aries_vcx_wallet::errors::error::VcxWalletError;
use thiserror::Error as ThisError;

pub type VcxAnoncredsResult<T> = Result<T, VcxAnoncredsError>;

#[derive(Debug, ThisError)]
pub enum VcxAnoncredsError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Wallet error: {0}")]
    WalletError(#[from] VcxWalletError),
    #[error("Revocation registry is full: {0}")]
    RevocationRegistryFull(String),
    #[error("IO error: {0}")]
    IOError(String),
    #[error("Unknown error: {0}")]
    UnknownError(String),
    #[error("Invalid attributes structure: {0}")]
    InvalidAttributesStructure(String),
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
    #[error("Duplicate link secret: {0}")]
    DuplicationMasterSecret(String),
}
