use thiserror::Error;

pub type MsgTypeResult<T> = Result<T, MsgTypeError>;

#[derive(Debug, Error)]
pub enum MsgTypeError {
    #[error("Unknown message type prefix: {0}")]
    UnknownPrefix(String),
    #[error("Unsupported protocol: {0}")]
    UnknownProtocol(String),
    #[error("Unsupported protocol version {minor} for protocol {protocol}")]
    UnsupportedMinorVersion { protocol: String, minor: u8 },
    #[error("Unknown message kind {kind} for protocol {protocol}")]
    UnknownMsgKind { protocol: String, kind: String },
    #[error("Message type is not in the form <protocol>/<version>/<kind>: {0}")]
    InvalidMessageType(String),
}

impl MsgTypeError {
    pub fn unknown_kind(protocol: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownMsgKind {
            protocol: protocol.into(),
            kind: kind.into(),
        }
    }
}
