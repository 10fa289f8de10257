//! Wire form of the AnonCreds specification: unversioned objects with qualified issuer
//! ids, schemas referenced by id, and registries published as full status lists. Object
//! ids are resource addresses and are not part of the documents.

use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId,
        rev_reg_def_id::RevocationRegistryDefinitionId, schema_id::SchemaId,
    },
    ledger::{
        cred_def::{CredentialDefinition, CredentialDefinitionData, SignatureType},
        rev_reg_def::{
            IssuanceType, RegistryType, RevocationRegistryDefinition,
            RevocationRegistryDefinitionValue, RevocationRegistryDefinitionValuePublicKeys,
        },
        rev_status_list::{serde_revocation_list, RevocationStatusList},
        schema::Schema,
    },
};
use bitvec::vec::BitVec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::error::VcxLedgerError, ledger::type_conversion::Convert};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnoncredsSchema {
    pub issuer_id: String,
    pub name: String,
    pub version: String,
    pub attr_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnoncredsCredentialDefinition {
    pub issuer_id: String,
    pub schema_id: String,
    #[serde(rename = "type")]
    pub signature_type: SignatureType,
    pub tag: String,
    pub value: CredentialDefinitionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnoncredsRevocationRegistryDefinition {
    pub issuer_id: String,
    pub revoc_def_type: RegistryType,
    pub cred_def_id: String,
    pub tag: String,
    pub value: AnoncredsRevocationRegistryDefinitionValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnoncredsRevocationRegistryDefinitionValue {
    pub public_keys: AnoncredsPublicKeys,
    pub max_cred_num: u32,
    pub tails_location: String,
    pub tails_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnoncredsPublicKeys {
    pub accum_key: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnoncredsRevocationStatusList {
    pub rev_reg_def_id: String,
    pub issuer_id: String,
    #[serde(with = "serde_revocation_list")]
    pub revocation_list: BitVec,
    pub current_accumulator: Value,
    pub timestamp: u64,
}

impl Convert for AnoncredsSchema {
    type Args = SchemaId;
    type Target = Schema;
    type Error = VcxLedgerError;

    fn convert(self, id: Self::Args) -> Result<Self::Target, Self::Error> {
        Ok(Schema {
            id,
            seq_no: None,
            name: self.name,
            version: self.version,
            attr_names: self.attr_names.into(),
            issuer_id: IssuerId::new(self.issuer_id)?,
        })
    }
}

impl TryFrom<&Schema> for AnoncredsSchema {
    type Error = VcxLedgerError;

    fn try_from(value: &Schema) -> Result<Self, Self::Error> {
        Ok(AnoncredsSchema {
            issuer_id: value.issuer_id.0.clone(),
            name: value.name.clone(),
            version: value.version.clone(),
            attr_names: value.attr_names.0.clone(),
        })
    }
}

impl Convert for AnoncredsCredentialDefinition {
    type Args = CredentialDefinitionId;
    type Target = CredentialDefinition;
    type Error = VcxLedgerError;

    fn convert(self, id: Self::Args) -> Result<Self::Target, Self::Error> {
        Ok(CredentialDefinition {
            id,
            schema_id: SchemaId::new(self.schema_id)?,
            signature_type: self.signature_type,
            tag: self.tag,
            value: self.value,
            issuer_id: IssuerId::new(self.issuer_id)?,
        })
    }
}

impl TryFrom<&CredentialDefinition> for AnoncredsCredentialDefinition {
    type Error = VcxLedgerError;

    fn try_from(value: &CredentialDefinition) -> Result<Self, Self::Error> {
        if value.schema_id.as_seq_no().is_some() {
            return Err(VcxLedgerError::InvalidInput(format!(
                "Credential definition {} references its schema by sequence number",
                value.id
            )));
        }
        Ok(AnoncredsCredentialDefinition {
            issuer_id: value.issuer_id.0.clone(),
            schema_id: value.schema_id.0.clone(),
            signature_type: value.signature_type,
            tag: value.tag.clone(),
            value: value.value.clone(),
        })
    }
}

impl Convert for AnoncredsRevocationRegistryDefinition {
    type Args = RevocationRegistryDefinitionId;
    type Target = RevocationRegistryDefinition;
    type Error = VcxLedgerError;

    fn convert(self, id: Self::Args) -> Result<Self::Target, Self::Error> {
        Ok(RevocationRegistryDefinition {
            id,
            issuer_id: IssuerId::new(self.issuer_id)?,
            revoc_def_type: self.revoc_def_type,
            tag: self.tag,
            cred_def_id: CredentialDefinitionId::new(self.cred_def_id)?,
            value: RevocationRegistryDefinitionValue {
                // the only policy AnonCreds registries support
                issuance_type: IssuanceType::ISSUANCE_BY_DEFAULT,
                max_cred_num: self.value.max_cred_num,
                public_keys: RevocationRegistryDefinitionValuePublicKeys {
                    accum_key: self.value.public_keys.accum_key,
                },
                tails_hash: self.value.tails_hash,
                tails_location: self.value.tails_location,
            },
        })
    }
}

impl TryFrom<&RevocationRegistryDefinition> for AnoncredsRevocationRegistryDefinition {
    type Error = VcxLedgerError;

    fn try_from(value: &RevocationRegistryDefinition) -> Result<Self, Self::Error> {
        if value.value.issuance_type != IssuanceType::ISSUANCE_BY_DEFAULT {
            return Err(VcxLedgerError::InvalidInput(format!(
                "Registry {} uses {:?}, which AnonCreds ledgers cannot express",
                value.id, value.value.issuance_type
            )));
        }
        Ok(AnoncredsRevocationRegistryDefinition {
            issuer_id: value.issuer_id.0.clone(),
            revoc_def_type: value.revoc_def_type,
            cred_def_id: value.cred_def_id.0.clone(),
            tag: value.tag.clone(),
            value: AnoncredsRevocationRegistryDefinitionValue {
                public_keys: AnoncredsPublicKeys {
                    accum_key: value.value.public_keys.accum_key.clone(),
                },
                max_cred_num: value.value.max_cred_num,
                tails_location: value.value.tails_location.clone(),
                tails_hash: value.value.tails_hash.clone(),
            },
        })
    }
}

impl Convert for AnoncredsRevocationStatusList {
    type Args = ();
    type Target = RevocationStatusList;
    type Error = VcxLedgerError;

    fn convert(self, (): Self::Args) -> Result<Self::Target, Self::Error> {
        Ok(RevocationStatusList {
            rev_reg_def_id: RevocationRegistryDefinitionId::new(self.rev_reg_def_id)?,
            issuer_id: IssuerId::new(self.issuer_id)?,
            revocation_list: self.revocation_list,
            current_accumulator: Some(self.current_accumulator),
            timestamp: Some(self.timestamp),
        })
    }
}

impl TryFrom<&RevocationStatusList> for AnoncredsRevocationStatusList {
    type Error = VcxLedgerError;

    fn try_from(value: &RevocationStatusList) -> Result<Self, Self::Error> {
        let current_accumulator = value.current_accumulator.clone().ok_or_else(|| {
            VcxLedgerError::InvalidInput(format!(
                "Status list of {} has no accumulator to publish",
                value.rev_reg_def_id
            ))
        })?;
        Ok(AnoncredsRevocationStatusList {
            rev_reg_def_id: value.rev_reg_def_id.0.clone(),
            issuer_id: value.issuer_id.0.clone(),
            revocation_list: value.revocation_list.clone(),
            current_accumulator,
            timestamp: value.timestamp.unwrap_or_default(),
        })
    }
}
