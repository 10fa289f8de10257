use std::str::FromStr;

use serde_json::Value;

use crate::{
    data_types::identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId,
        rev_reg_def_id::RevocationRegistryDefinitionId, rev_reg_tag::RevocationRegistryTag,
    },
    utils::validation::Validatable,
};

pub const CL_ACCUM: &str = "CL_ACCUM";

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum RegistryType {
    #[default]
    CL_ACCUM,
}

impl FromStr for RegistryType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CL_ACCUM => Ok(Self::CL_ACCUM),
            _ => Err(err_msg!(ConversionError, "Invalid registry type: {s}")),
        }
    }
}

/// Whether a freshly allocated index is valid straight away, or only after its bit
/// is explicitly flipped in the status list.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum IssuanceType {
    #[default]
    ISSUANCE_BY_DEFAULT,
    ISSUANCE_ON_DEMAND,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDefinitionValue {
    #[serde(default)]
    pub issuance_type: IssuanceType,
    pub max_cred_num: u32,
    pub public_keys: RevocationRegistryDefinitionValuePublicKeys,
    pub tails_hash: String,
    pub tails_location: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDefinitionValuePublicKeys {
    pub accum_key: Value,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDefinition {
    pub id: RevocationRegistryDefinitionId,
    pub issuer_id: IssuerId,
    pub revoc_def_type: RegistryType,
    pub tag: String,
    pub cred_def_id: CredentialDefinitionId,
    pub value: RevocationRegistryDefinitionValue,
}

impl RevocationRegistryDefinition {
    /// Declared number of credentials the registry can hold.
    pub fn capacity(&self) -> u32 {
        self.value.max_cred_num
    }

    pub fn registry_tag(&self) -> Option<RevocationRegistryTag> {
        self.tag.parse().ok()
    }
}

impl Validatable for RevocationRegistryDefinition {
    fn validate(&self) -> Result<(), crate::error::Error> {
        self.cred_def_id.validate()?;
        self.issuer_id.validate()?;
        if self.value.max_cred_num == 0 {
            return Err(err_msg!(Input, "Revocation registry capacity must be positive"));
        }
        Ok(())
    }
}
