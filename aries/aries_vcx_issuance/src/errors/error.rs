use std::fmt;

pub mod prelude {
    pub use super::{err_msg, AriesVcxError, AriesVcxErrorKind, VcxResult};
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum AriesVcxErrorKind {
    // Common
    #[error("Object is in invalid state for requested operation")]
    InvalidState,
    #[error("Invalid Configuration")]
    InvalidConfiguration,
    #[error("Invalid input parameter")]
    InvalidInput,
    #[error("Invalid parameter format")]
    InvalidParameterFormat,
    #[error("Unable to serialize")]
    SerializationError,

    // Records
    #[error("Record not found")]
    RecordNotFound,
    #[error("Record is in invalid state for requested operation")]
    RecordInInvalidState,
    #[error("Record already exists in the wallet")]
    DuplicationWalletRecord,
    #[error("Wallet storage is unavailable")]
    InvalidStorage,

    // Messages
    #[error("Invalid message format")]
    InvalidMessage,
    #[error("Message failed in post")]
    PostMessageFailed,

    // Revocation
    #[error("Revocation registry is full")]
    RevocationRegistryFull,
    #[error("Invalid Revocation Details")]
    InvalidRevocationDetails,

    // Ledger
    #[error("Ledger rejected submitted request.")]
    InvalidLedgerResponse,
    #[error("Ledger item not found.")]
    LedgerItemNotFound,

    #[error("Unknown Error")]
    UnknownError,
}

#[derive(thiserror::Error)]
pub struct AriesVcxError {
    msg: String,
    kind: AriesVcxErrorKind,
}

fn format_error(err: &AriesVcxError, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", err.kind(), err.msg())
}

impl fmt::Display for AriesVcxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_error(self, f)
    }
}

impl fmt::Debug for AriesVcxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_error(self, f)
    }
}

impl AriesVcxError {
    fn new(kind: AriesVcxErrorKind, msg: String) -> Self {
        AriesVcxError { msg, kind }
    }

    pub fn from_msg<D>(kind: AriesVcxErrorKind, msg: D) -> AriesVcxError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new(kind, msg.to_string())
    }

    pub fn kind(&self) -> AriesVcxErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Prepends context while keeping the kind.
    #[must_use]
    pub fn extend<D>(self, msg: D) -> AriesVcxError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new(self.kind, format!("{}: {}", msg, self.msg))
    }

    #[must_use]
    pub fn map<D>(self, kind: AriesVcxErrorKind, msg: D) -> AriesVcxError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new(kind, msg.to_string())
    }
}

pub fn err_msg<D>(kind: AriesVcxErrorKind, msg: D) -> AriesVcxError
where
    D: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    AriesVcxError::from_msg(kind, msg)
}

pub type VcxResult<T> = Result<T, AriesVcxError>;
