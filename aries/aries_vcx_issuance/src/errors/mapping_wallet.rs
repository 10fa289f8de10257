use aries_vcx_wallet::errors::error::VcxWalletError;

use super::error::{AriesVcxError, AriesVcxErrorKind};

impl From<VcxWalletError> for AriesVcxError {
    fn from(value: VcxWalletError) -> Self {
        match value {
            VcxWalletError::DuplicateRecord(_) => Self::from_msg(
                AriesVcxErrorKind::DuplicationWalletRecord,
                value.to_string(),
            ),
            VcxWalletError::RecordNotFound(_) => {
                Self::from_msg(AriesVcxErrorKind::RecordNotFound, value.to_string())
            }
            VcxWalletError::WalletClosed => {
                Self::from_msg(AriesVcxErrorKind::InvalidStorage, value.to_string())
            }
            VcxWalletError::UnknownRecordCategory(_) | VcxWalletError::InvalidInput(_) => {
                Self::from_msg(AriesVcxErrorKind::InvalidInput, value.to_string())
            }
            VcxWalletError::InvalidJson(_) => {
                Self::from_msg(AriesVcxErrorKind::SerializationError, value.to_string())
            }
            VcxWalletError::NotUtf8(_) | VcxWalletError::NotBase58(_) => {
                Self::from_msg(AriesVcxErrorKind::InvalidParameterFormat, value.to_string())
            }
            VcxWalletError::Unknown(_) => {
                Self::from_msg(AriesVcxErrorKind::UnknownError, value.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use aries_vcx_wallet::wallet::base_wallet::record_category::RecordCategory;

    use super::*;

    #[test]
    fn test_wallet_errors_map_to_storage_kinds() {
        let not_found: AriesVcxError =
            VcxWalletError::record_not_found(RecordCategory::Credential, "abc").into();
        assert_eq!(not_found.kind(), AriesVcxErrorKind::RecordNotFound);

        let closed: AriesVcxError = VcxWalletError::WalletClosed.into();
        assert_eq!(closed.kind(), AriesVcxErrorKind::InvalidStorage);
    }
}
