use crate::errors::error::VcxLedgerError;

pub mod base_ledger;
pub mod dialect;
pub mod type_conversion;

/// Turns a ledger miss into `None`, leaving every other failure untouched.
pub fn map_error_not_found_to_none<T, E>(res: Result<T, E>) -> Result<Option<T>, VcxLedgerError>
where
    E: Into<VcxLedgerError>,
{
    match res {
        Ok(response) => Ok(Some(response)),
        Err(err) => {
            let err_converted = Into::<VcxLedgerError>::into(err);
            match err_converted {
                VcxLedgerError::LedgerItemNotFound => Ok(None),
                _ => Err(err_converted),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_error_not_found_to_none() {
        let found: Result<u32, VcxLedgerError> = Ok(1);
        assert_eq!(map_error_not_found_to_none(found).unwrap(), Some(1));

        let missing: Result<u32, VcxLedgerError> = Err(VcxLedgerError::LedgerItemNotFound);
        assert_eq!(map_error_not_found_to_none(missing).unwrap(), None);

        let failed: Result<u32, VcxLedgerError> =
            Err(VcxLedgerError::PoolLedgerConnect("timeout".into()));
        assert!(map_error_not_found_to_none(failed).is_err());
    }
}
