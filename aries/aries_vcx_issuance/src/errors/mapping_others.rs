use aries_vcx_anoncreds::errors::error::VcxAnoncredsError;
use aries_vcx_ledger::errors::error::VcxLedgerError;
use messages::decorators::attachment::AttachmentError;

use super::error::{AriesVcxError, AriesVcxErrorKind};

impl From<serde_json::Error> for AriesVcxError {
    fn from(err: serde_json::Error) -> Self {
        AriesVcxError::from_msg(AriesVcxErrorKind::SerializationError, err.to_string())
    }
}

impl From<url::ParseError> for AriesVcxError {
    fn from(err: url::ParseError) -> Self {
        AriesVcxError::from_msg(AriesVcxErrorKind::InvalidConfiguration, err.to_string())
    }
}

impl From<AttachmentError> for AriesVcxError {
    fn from(err: AttachmentError) -> Self {
        AriesVcxError::from_msg(AriesVcxErrorKind::InvalidMessage, err.to_string())
    }
}

impl From<anoncreds_types::Error> for AriesVcxError {
    fn from(err: anoncreds_types::Error) -> Self {
        use anoncreds_types::ErrorKind;

        let kind = match err.kind() {
            ErrorKind::RevocationRegistryFull => AriesVcxErrorKind::RevocationRegistryFull,
            ErrorKind::InvalidUserRevocId | ErrorKind::CredentialRevoked => {
                AriesVcxErrorKind::InvalidRevocationDetails
            }
            ErrorKind::InvalidState => AriesVcxErrorKind::InvalidState,
            ErrorKind::Input | ErrorKind::ConversionError | ErrorKind::ValidationError => {
                AriesVcxErrorKind::InvalidInput
            }
            ErrorKind::Unexpected => AriesVcxErrorKind::UnknownError,
        };
        AriesVcxError::from_msg(kind, err.to_string())
    }
}

impl From<VcxLedgerError> for AriesVcxError {
    fn from(value: VcxLedgerError) -> Self {
        match value {
            VcxLedgerError::LedgerItemNotFound => {
                Self::from_msg(AriesVcxErrorKind::LedgerItemNotFound, value.to_string())
            }
            VcxLedgerError::InvalidLedgerResponse(_)
            | VcxLedgerError::TransactionRejected(_)
            | VcxLedgerError::PoolLedgerConnect(_)
            | VcxLedgerError::DuplicatedItem(_) => {
                Self::from_msg(AriesVcxErrorKind::InvalidLedgerResponse, value.to_string())
            }
            VcxLedgerError::WalletError(err) => err.into(),
            VcxLedgerError::InvalidJson(_) => {
                Self::from_msg(AriesVcxErrorKind::SerializationError, value.to_string())
            }
            VcxLedgerError::InvalidState(_) => {
                Self::from_msg(AriesVcxErrorKind::InvalidState, value.to_string())
            }
            VcxLedgerError::InvalidInput(_) => {
                Self::from_msg(AriesVcxErrorKind::InvalidInput, value.to_string())
            }
            VcxLedgerError::UnknownError(_) => {
                Self::from_msg(AriesVcxErrorKind::UnknownError, value.to_string())
            }
        }
    }
}

impl From<VcxAnoncredsError> for AriesVcxError {
    fn from(value: VcxAnoncredsError) -> Self {
        match value {
            VcxAnoncredsError::RevocationRegistryFull(_) => {
                Self::from_msg(AriesVcxErrorKind::RevocationRegistryFull, value.to_string())
            }
            VcxAnoncredsError::WalletError(err) => err.into(),
            VcxAnoncredsError::InvalidJson(_) => {
                Self::from_msg(AriesVcxErrorKind::SerializationError, value.to_string())
            }
            VcxAnoncredsError::InvalidInput(_)
            | VcxAnoncredsError::InvalidAttributesStructure(_)
            | VcxAnoncredsError::InvalidSchema(_)
            | VcxAnoncredsError::DuplicationMasterSecret(_) => {
                Self::from_msg(AriesVcxErrorKind::InvalidInput, value.to_string())
            }
            VcxAnoncredsError::InvalidState(_) => {
                Self::from_msg(AriesVcxErrorKind::InvalidState, value.to_string())
            }
            VcxAnoncredsError::IOError(_) | VcxAnoncredsError::UnknownError(_) => {
                Self::from_msg(AriesVcxErrorKind::UnknownError, value.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_full_survives_conversion() {
        let err: AriesVcxError = VcxAnoncredsError::RevocationRegistryFull("reg".into()).into();
        assert_eq!(err.kind(), AriesVcxErrorKind::RevocationRegistryFull);
    }

    #[test]
    fn test_ledger_not_found_maps_to_kind() {
        let err: AriesVcxError = VcxLedgerError::LedgerItemNotFound.into();
        assert_eq!(err.kind(), AriesVcxErrorKind::LedgerItemNotFound);

        let err: AriesVcxError = VcxLedgerError::TransactionRejected("nope".into()).into();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidLedgerResponse);
    }
}
