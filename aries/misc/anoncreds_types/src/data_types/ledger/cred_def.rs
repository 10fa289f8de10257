use std::str::FromStr;

use serde_json::Value;

use crate::{
    data_types::identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId, schema_id::SchemaId,
    },
    utils::validation::Validatable,
};

pub const CL_SIGNATURE_TYPE: &str = "CL";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureType {
    #[default]
    CL,
}

impl FromStr for SignatureType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CL_SIGNATURE_TYPE => Ok(Self::CL),
            _ => Err(err_msg!(ConversionError, "Invalid signature type: {s}")),
        }
    }
}

/// Public key material of the definition. Opaque to everything but the crypto provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialDefinitionData {
    pub primary: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDefinition {
    pub id: CredentialDefinitionId,
    /// Either a schema id, or the schema's ledger sequence number when read back
    /// from a legacy ledger.
    pub schema_id: SchemaId,
    #[serde(rename = "type")]
    pub signature_type: SignatureType,
    pub tag: String,
    pub value: CredentialDefinitionData,
    pub issuer_id: IssuerId,
}

impl CredentialDefinition {
    pub fn supports_revocation(&self) -> bool {
        self.value.revocation.is_some()
    }

    /// Replaces a sequence number schema reference with the canonical schema id.
    /// Returns whether a rewrite happened.
    pub fn resolve_schema_reference(&mut self, schema_id: &SchemaId) -> bool {
        if self.schema_id.as_seq_no().is_some() {
            self.schema_id = schema_id.clone();
            true
        } else {
            false
        }
    }
}

impl Validatable for CredentialDefinition {
    fn validate(&self) -> Result<(), crate::error::Error> {
        if self.schema_id.as_seq_no().is_none() {
            self.schema_id.validate()?;
        }
        self.id.validate()?;
        self.issuer_id.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_cred_def() -> CredentialDefinition {
        serde_json::from_value(json!({
            "id": "V4SGRU86Z58d6TV7PBUe6f:3:CL:20:tag",
            "schemaId": "20",
            "type": "CL",
            "tag": "tag",
            "value": { "primary": { "n": "1" } },
            "issuerId": "V4SGRU86Z58d6TV7PBUe6f"
        }))
        .unwrap()
    }

    #[test]
    fn test_cred_def_validates_with_seq_no_schema_reference() {
        let cred_def = legacy_cred_def();
        assert!(cred_def.validate().is_ok());
        assert!(!cred_def.supports_revocation());
    }

    #[test]
    fn test_resolve_schema_reference() {
        let mut cred_def = legacy_cred_def();
        let schema_id = SchemaId::new_unchecked("V4SGRU86Z58d6TV7PBUe6f:2:gvt:1.0");

        assert!(cred_def.resolve_schema_reference(&schema_id));
        assert_eq!(cred_def.schema_id, schema_id);
        assert!(!cred_def.resolve_schema_reference(&schema_id));
    }
}
