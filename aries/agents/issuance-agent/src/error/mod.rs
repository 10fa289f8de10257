mod convertors;

use thiserror::Error;

pub type AgentResult<T> = Result<T, AgentError>;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum AgentErrorKind {
    #[error("Invalid arguments")]
    InvalidArguments,
    #[error("Invalid state")]
    InvalidState,
    #[error("Invalid configuration")]
    InvalidConfiguration,
    #[error("Invalid input")]
    InvalidInput,
    #[error("Invalid parameter format")]
    InvalidParameterFormat,
    #[error("Serialization error")]
    SerializationError,
    #[error("Record not found")]
    RecordNotFound,
    #[error("Record in invalid state")]
    RecordInInvalidState,
    #[error("Record already exists")]
    DuplicationWalletRecord,
    #[error("Invalid storage")]
    InvalidStorage,
    #[error("Invalid message")]
    InvalidMessage,
    #[error("Message delivery failed")]
    PostMessageFailed,
    #[error("Revocation registry is full")]
    RevocationRegistryFull,
    #[error("Invalid revocation details")]
    InvalidRevocationDetails,
    #[error("Invalid ledger response")]
    InvalidLedgerResponse,
    #[error("Ledger item not found")]
    LedgerItemNotFound,
    #[error("Unknown error")]
    UnknownError,
}

#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AgentError {
    pub message: String,
    pub kind: AgentErrorKind,
}

impl AgentError {
    pub fn from_msg(kind: AgentErrorKind, msg: &str) -> Self {
        AgentError {
            kind,
            message: msg.to_string(),
        }
    }

    pub fn from_kind(kind: AgentErrorKind) -> Self {
        let message = kind.to_string();
        AgentError { message, kind }
    }

    pub fn kind(&self) -> AgentErrorKind {
        self.kind
    }

    /// Prefixes the message with the step which failed, keeping the kind.
    pub fn extend(self, context: impl std::fmt::Display) -> Self {
        AgentError {
            message: format!("{context}: {}", self.message),
            kind: self.kind,
        }
    }
}
