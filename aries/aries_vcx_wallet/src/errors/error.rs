use std::{fmt, string::FromUtf8Error};

use thiserror::Error as ThisError;

use crate::wallet::base_wallet::record_category::RecordCategory;

pub type VcxWalletResult<T> = Result<T, VcxWalletError>;

pub struct NotFoundInfo(Option<(RecordCategory, String)>);

impl NotFoundInfo {
    pub fn new(category: RecordCategory, name: &str) -> Self {
        Self(Some((category, name.to_string())))
    }

    pub fn new_without_details() -> Self {
        Self(None)
    }
}

impl fmt::Debug for NotFoundInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            None => write!(f, "no details provided"),
            Some(payload) => write!(f, "category: {}, name: {}", payload.0, payload.1),
        }
    }
}

impl fmt::Display for NotFoundInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, ThisError)]
pub enum VcxWalletError {
    #[error("Duplicate record error: {0}")]
    DuplicateRecord(String),
    #[error("Unexpected UTF-8 error: {0}")]
    NotUtf8(FromUtf8Error),
    #[error("String is not base58: {0}")]
    NotBase58(bs58::decode::Error),
    #[error("Could not find record in wallet: {0}")]
    RecordNotFound(NotFoundInfo),
    #[error("Unknown record category: {0}")]
    UnknownRecordCategory(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(serde_json::Error),
    #[error("Wallet is closed")]
    WalletClosed,
    #[error("Unknown error: {0}")]
    Unknown(Box<dyn std::error::Error + Send + Sync>),
}

impl VcxWalletError {
    pub fn unknown_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unknown(Box::new(err))
    }

    pub fn record_not_found(category: RecordCategory, name: &str) -> Self {
        Self::RecordNotFound(NotFoundInfo::new(category, name))
    }

    pub fn is_record_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_))
    }
}
