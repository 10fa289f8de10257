use std::convert::From;

use aries_vcx_issuance::{
    aries_vcx_anoncreds::errors::error::VcxAnoncredsError,
    aries_vcx_ledger::errors::error::VcxLedgerError,
    aries_vcx_wallet::errors::error::VcxWalletError,
    errors::error::{AriesVcxError, AriesVcxErrorKind},
};

use crate::error::*;

impl From<AriesVcxErrorKind> for AgentErrorKind {
    fn from(kind: AriesVcxErrorKind) -> Self {
        match kind {
            AriesVcxErrorKind::InvalidState => AgentErrorKind::InvalidState,
            AriesVcxErrorKind::InvalidConfiguration => AgentErrorKind::InvalidConfiguration,
            AriesVcxErrorKind::InvalidInput => AgentErrorKind::InvalidInput,
            AriesVcxErrorKind::InvalidParameterFormat => AgentErrorKind::InvalidParameterFormat,
            AriesVcxErrorKind::SerializationError => AgentErrorKind::SerializationError,
            AriesVcxErrorKind::RecordNotFound => AgentErrorKind::RecordNotFound,
            AriesVcxErrorKind::RecordInInvalidState => AgentErrorKind::RecordInInvalidState,
            AriesVcxErrorKind::DuplicationWalletRecord => AgentErrorKind::DuplicationWalletRecord,
            AriesVcxErrorKind::InvalidStorage => AgentErrorKind::InvalidStorage,
            AriesVcxErrorKind::InvalidMessage => AgentErrorKind::InvalidMessage,
            AriesVcxErrorKind::PostMessageFailed => AgentErrorKind::PostMessageFailed,
            AriesVcxErrorKind::RevocationRegistryFull => AgentErrorKind::RevocationRegistryFull,
            AriesVcxErrorKind::InvalidRevocationDetails => {
                AgentErrorKind::InvalidRevocationDetails
            }
            AriesVcxErrorKind::InvalidLedgerResponse => AgentErrorKind::InvalidLedgerResponse,
            AriesVcxErrorKind::LedgerItemNotFound => AgentErrorKind::LedgerItemNotFound,
            AriesVcxErrorKind::UnknownError => AgentErrorKind::UnknownError,
        }
    }
}

impl From<AriesVcxError> for AgentError {
    fn from(err: AriesVcxError) -> AgentError {
        let kind = AgentErrorKind::from(err.kind());
        error!("AriesVCX Error: {}", err);
        AgentError {
            message: err.msg().to_string(),
            kind,
        }
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(serde_err: serde_json::Error) -> AgentError {
        let kind = AgentErrorKind::SerializationError;
        let message = format!("(De)serialization failed; err: {:?}", serde_err.to_string());
        AgentError { message, kind }
    }
}

impl From<VcxWalletError> for AgentError {
    fn from(err: VcxWalletError) -> Self {
        AriesVcxError::from(err).into()
    }
}

impl From<VcxLedgerError> for AgentError {
    fn from(err: VcxLedgerError) -> Self {
        AriesVcxError::from(err).into()
    }
}

impl From<VcxAnoncredsError> for AgentError {
    fn from(err: VcxAnoncredsError) -> Self {
        AriesVcxError::from(err).into()
    }
}

impl From<anoncreds_types::Error> for AgentError {
    fn from(err: anoncreds_types::Error) -> Self {
        AriesVcxError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use aries_vcx_issuance::aries_vcx_wallet::wallet::base_wallet::record_category::RecordCategory;

    use super::*;

    #[test]
    fn test_kinds_survive_the_agent_boundary() {
        let err = AgentError::from(VcxAnoncredsError::RevocationRegistryFull("r1".into()));
        assert_eq!(err.kind(), AgentErrorKind::RevocationRegistryFull);

        let err = AgentError::from(VcxWalletError::record_not_found(
            RecordCategory::IssuanceRecord,
            "t1",
        ));
        assert_eq!(err.kind(), AgentErrorKind::RecordNotFound);

        let err = AgentError::from(VcxLedgerError::LedgerItemNotFound);
        assert_eq!(err.kind(), AgentErrorKind::LedgerItemNotFound);

        let err = AgentError::from(VcxWalletError::WalletClosed);
        assert_eq!(err.kind(), AgentErrorKind::InvalidStorage);
    }

    #[test]
    fn test_extend_keeps_kind() {
        let err = AgentError::from_msg(AgentErrorKind::RecordNotFound, "no record t1")
            .extend("Unable to revoke credential t1");
        assert_eq!(err.kind(), AgentErrorKind::RecordNotFound);
        assert_eq!(
            err.to_string(),
            "Record not found: Unable to revoke credential t1: no record t1"
        );
    }
}
