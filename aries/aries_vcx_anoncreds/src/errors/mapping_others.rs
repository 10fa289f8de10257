use anoncreds_types::{Error as AnoncredsTypesError, ErrorKind as AnoncredsTypesErrorKind};

use super::error::VcxAnoncredsError;

impl From<serde_json::Error> for VcxAnoncredsError {
    fn from(value: serde_json::Error) -> Self {
        VcxAnoncredsError::InvalidJson(value.to_string())
    }
}

impl From<AnoncredsTypesError> for VcxAnoncredsError {
    fn from(err: AnoncredsTypesError) -> Self {
        match err.kind() {
            AnoncredsTypesErrorKind::RevocationRegistryFull => {
                VcxAnoncredsError::RevocationRegistryFull(err.to_string())
            }
            AnoncredsTypesErrorKind::InvalidState => VcxAnoncredsError::InvalidState(err.to_string()),
            AnoncredsTypesErrorKind::Input
            | AnoncredsTypesErrorKind::ConversionError
            | AnoncredsTypesErrorKind::ValidationError
            | AnoncredsTypesErrorKind::InvalidUserRevocId => {
                VcxAnoncredsError::InvalidInput(err.to_string())
            }
            AnoncredsTypesErrorKind::CredentialRevoked | AnoncredsTypesErrorKind::Unexpected => {
                VcxAnoncredsError::UnknownError(err.to_string())
            }
        }
    }
}
