use std::collections::HashMap;

use serde_json::Value;

use crate::data_types::identifiers::{
    cred_def_id::CredentialDefinitionId, rev_reg_def_id::RevocationRegistryDefinitionId,
    schema_id::SchemaId,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Credential {
    pub schema_id: SchemaId,
    pub cred_def_id: CredentialDefinitionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev_reg_id: Option<RevocationRegistryDefinitionId>,
    pub values: CredentialValues,
    pub signature: Value,
    pub signature_correctness_proof: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev_reg: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness: Option<Value>,
}

/// Raw value of an attribute next to its integer encoding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeValues {
    pub raw: String,
    pub encoded: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CredentialValues(pub HashMap<String, AttributeValues>);

impl CredentialValues {
    pub fn add(&mut self, name: impl Into<String>, raw: impl Into<String>, encoded: impl Into<String>) {
        self.0.insert(
            name.into(),
            AttributeValues {
                raw: raw.into(),
                encoded: encoded.into(),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValues> {
        self.0.get(name)
    }
}
