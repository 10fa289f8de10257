use std::sync::PoisonError;

use super::error::VcxLedgerError;

impl<T> From<PoisonError<T>> for VcxLedgerError {
    fn from(err: PoisonError<T>) -> Self {
        VcxLedgerError::InvalidState(err.to_string())
    }
}

impl From<anoncreds_types::Error> for VcxLedgerError {
    fn from(err: anoncreds_types::Error) -> Self {
        VcxLedgerError::InvalidLedgerResponse(err.to_string())
    }
}
