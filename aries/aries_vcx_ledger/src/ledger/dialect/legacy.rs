//! Wire form used by indy-node ledgers: versioned `ver: "1.0"` documents, credential
//! definitions referencing their schema by transaction sequence number, and registry
//! entries carrying issued/revoked index deltas.

use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId,
        rev_reg_def_id::RevocationRegistryDefinitionId, schema_id::SchemaId,
    },
    ledger::{
        cred_def::{CredentialDefinition, CredentialDefinitionData},
        rev_reg_def::{
            IssuanceType, RevocationRegistryDefinition, RevocationRegistryDefinitionValue,
            RevocationRegistryDefinitionValuePublicKeys,
        },
        rev_reg_delta::{RevocationRegistryDelta, RevocationRegistryDeltaValue},
        schema::Schema,
    },
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::error::VcxLedgerError, ledger::type_conversion::Convert};

const LEGACY_VERSION: &str = "1.0";

fn issuer_from_id(id: &str) -> Result<IssuerId, VcxLedgerError> {
    id.split(':')
        .next()
        .filter(|issuer| !issuer.is_empty())
        .map(IssuerId::new_unchecked)
        .ok_or_else(|| VcxLedgerError::InvalidLedgerResponse(format!("Malformed ledger id {id}")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaV1 {
    pub ver: String,
    pub id: String,
    pub name: String,
    pub version: String,
    pub attr_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDefinitionV1 {
    pub ver: String,
    pub id: String,
    pub schema_id: String,
    #[serde(rename = "type")]
    pub signature_type: String,
    pub tag: String,
    pub value: CredentialDefinitionValueV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialDefinitionValueV1 {
    pub primary: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDefinitionV1 {
    pub ver: String,
    pub id: String,
    pub revoc_def_type: String,
    pub tag: String,
    pub cred_def_id: String,
    pub value: RevocationRegistryDefinitionValueV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDefinitionValueV1 {
    pub issuance_type: IssuanceType,
    pub max_cred_num: u32,
    pub public_keys: PublicKeysV1,
    pub tails_hash: String,
    pub tails_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeysV1 {
    pub accum_key: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevocationRegistryDeltaV1 {
    pub ver: String,
    pub value: RevocationRegistryDeltaValueV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDeltaValueV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_accum: Option<Value>,
    pub accum: Value,
    #[serde(default)]
    pub issued: Vec<u32>,
    #[serde(default)]
    pub revoked: Vec<u32>,
}

impl Convert for SchemaV1 {
    type Args = ();
    type Target = Schema;
    type Error = VcxLedgerError;

    fn convert(self, (): Self::Args) -> Result<Self::Target, Self::Error> {
        Ok(Schema {
            issuer_id: issuer_from_id(&self.id)?,
            id: SchemaId::new_unchecked(self.id),
            seq_no: self.seq_no,
            name: self.name,
            version: self.version,
            attr_names: self.attr_names.into(),
        })
    }
}

impl TryFrom<&Schema> for SchemaV1 {
    type Error = VcxLedgerError;

    fn try_from(value: &Schema) -> Result<Self, Self::Error> {
        Ok(SchemaV1 {
            ver: LEGACY_VERSION.to_string(),
            id: SchemaId::new_legacy(&value.issuer_id, &value.name, &value.version).0,
            name: value.name.clone(),
            version: value.version.clone(),
            attr_names: value.attr_names.0.clone(),
            seq_no: value.seq_no,
        })
    }
}

impl Convert for CredentialDefinitionV1 {
    type Args = ();
    type Target = CredentialDefinition;
    type Error = VcxLedgerError;

    fn convert(self, (): Self::Args) -> Result<Self::Target, Self::Error> {
        Ok(CredentialDefinition {
            issuer_id: issuer_from_id(&self.id)?,
            id: CredentialDefinitionId::new_unchecked(self.id),
            schema_id: SchemaId::new_unchecked(self.schema_id),
            signature_type: self.signature_type.parse()?,
            tag: self.tag,
            value: CredentialDefinitionData {
                primary: self.value.primary,
                revocation: self.value.revocation,
            },
        })
    }
}

impl CredentialDefinitionV1 {
    /// Legacy ledgers only accept a schema reference by sequence number; the schema id
    /// is kept when no sequence number is known.
    pub fn from_canonical(cred_def: &CredentialDefinition, schema_seq_no: Option<u32>) -> Self {
        let schema_ref =
            schema_seq_no.map_or_else(|| cred_def.schema_id.0.clone(), |n| n.to_string());
        Self {
            ver: LEGACY_VERSION.to_string(),
            id: cred_def.id.0.clone(),
            schema_id: schema_ref,
            signature_type: "CL".to_string(),
            tag: cred_def.tag.clone(),
            value: CredentialDefinitionValueV1 {
                primary: cred_def.value.primary.clone(),
                revocation: cred_def.value.revocation.clone(),
            },
        }
    }
}

impl Convert for RevocationRegistryDefinitionV1 {
    type Args = ();
    type Target = RevocationRegistryDefinition;
    type Error = VcxLedgerError;

    fn convert(self, (): Self::Args) -> Result<Self::Target, Self::Error> {
        Ok(RevocationRegistryDefinition {
            issuer_id: issuer_from_id(&self.id)?,
            id: RevocationRegistryDefinitionId::new_unchecked(self.id),
            revoc_def_type: self.revoc_def_type.parse()?,
            tag: self.tag,
            cred_def_id: CredentialDefinitionId::new_unchecked(self.cred_def_id),
            value: RevocationRegistryDefinitionValue {
                issuance_type: self.value.issuance_type,
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

impl TryFrom<&RevocationRegistryDefinition> for RevocationRegistryDefinitionV1 {
    type Error = VcxLedgerError;

    fn try_from(value: &RevocationRegistryDefinition) -> Result<Self, Self::Error> {
        Ok(RevocationRegistryDefinitionV1 {
            ver: LEGACY_VERSION.to_string(),
            id: value.id.0.clone(),
            revoc_def_type: "CL_ACCUM".to_string(),
            tag: value.tag.clone(),
            cred_def_id: value.cred_def_id.0.clone(),
            value: RevocationRegistryDefinitionValueV1 {
                issuance_type: value.value.issuance_type,
                max_cred_num: value.value.max_cred_num,
                public_keys: PublicKeysV1 {
                    accum_key: value.value.public_keys.accum_key.clone(),
                },
                tails_hash: value.value.tails_hash.clone(),
                tails_location: value.value.tails_location.clone(),
            },
        })
    }
}

/// `Args` are the registry the entry was written against and the ledger transaction time,
/// neither of which is part of the entry document.
impl Convert for RevocationRegistryDeltaV1 {
    type Args = (RevocationRegistryDefinitionId, u64);
    type Target = RevocationRegistryDelta;
    type Error = VcxLedgerError;

    fn convert(self, (rev_reg_def_id, txn_time): Self::Args) -> Result<Self::Target, Self::Error> {
        Ok(RevocationRegistryDelta {
            rev_reg_def_id,
            value: RevocationRegistryDeltaValue {
                prev_accum: self.value.prev_accum,
                accum: self.value.accum,
                issued: self.value.issued,
                revoked: self.value.revoked,
            },
            timestamp: txn_time,
        })
    }
}

impl TryFrom<&RevocationRegistryDelta> for RevocationRegistryDeltaV1 {
    type Error = VcxLedgerError;

    fn try_from(value: &RevocationRegistryDelta) -> Result<Self, Self::Error> {
        Ok(RevocationRegistryDeltaV1 {
            ver: LEGACY_VERSION.to_string(),
            value: RevocationRegistryDeltaValueV1 {
                prev_accum: value.value.prev_accum.clone(),
                accum: value.value.accum.clone(),
                issued: value.value.issued.clone(),
                revoked: value.value.revoked.clone(),
            },
        })
    }
}
