use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::errors::error::VcxWalletError;

const CREDENTIAL: &str = "VCX_CREDENTIAL";
const SCHEMA: &str = "VCX_SCHEMA";
const CRED_DEF: &str = "VCX_CRED_DEF";
const REV_REG: &str = "VCX_REV_REG";
const DID: &str = "Indy::Did";
const LINK_SECRET: &str = "VCX_LINK_SECRET";
const CRED_DEF_RECORD: &str = "VCX_CRED_DEF_RECORD";
const REV_REG_RECORD: &str = "VCX_REV_REG_RECORD";
const ISSUANCE_RECORD: &str = "VCX_ISSUANCE_RECORD";
const CONNECTION: &str = "VCX_CONNECTION";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordCategory {
    #[default]
    Credential,
    Schema,
    CredDef,
    RevReg,
    Did,
    LinkSecret,
    /// Agent-side bookkeeping, kept apart from the provider's private key material.
    CredDefRecord,
    RevRegRecord,
    IssuanceRecord,
    Connection,
}

impl FromStr for RecordCategory {
    type Err = VcxWalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CREDENTIAL => Ok(RecordCategory::Credential),
            SCHEMA => Ok(RecordCategory::Schema),
            CRED_DEF => Ok(RecordCategory::CredDef),
            REV_REG => Ok(RecordCategory::RevReg),
            DID => Ok(RecordCategory::Did),
            LINK_SECRET => Ok(RecordCategory::LinkSecret),
            CRED_DEF_RECORD => Ok(RecordCategory::CredDefRecord),
            REV_REG_RECORD => Ok(RecordCategory::RevRegRecord),
            ISSUANCE_RECORD => Ok(RecordCategory::IssuanceRecord),
            CONNECTION => Ok(RecordCategory::Connection),
            _ => Err(VcxWalletError::UnknownRecordCategory(s.into())),
        }
    }
}

impl Display for RecordCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = match self {
            RecordCategory::Credential => CREDENTIAL,
            RecordCategory::Schema => SCHEMA,
            RecordCategory::CredDef => CRED_DEF,
            RecordCategory::RevReg => REV_REG,
            RecordCategory::Did => DID,
            RecordCategory::LinkSecret => LINK_SECRET,
            RecordCategory::CredDefRecord => CRED_DEF_RECORD,
            RecordCategory::RevRegRecord => REV_REG_RECORD,
            RecordCategory::IssuanceRecord => ISSUANCE_RECORD,
            RecordCategory::Connection => CONNECTION,
        };

        write!(f, "{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_category_roundtrips_through_display() {
        for category in [
            RecordCategory::Credential,
            RecordCategory::Schema,
            RecordCategory::CredDef,
            RecordCategory::RevReg,
            RecordCategory::Did,
            RecordCategory::LinkSecret,
            RecordCategory::CredDefRecord,
            RecordCategory::RevRegRecord,
            RecordCategory::IssuanceRecord,
            RecordCategory::Connection,
        ] {
            assert_eq!(category.to_string().parse::<RecordCategory>().unwrap(), category);
        }
        assert!("nope".parse::<RecordCategory>().is_err());
    }
}
