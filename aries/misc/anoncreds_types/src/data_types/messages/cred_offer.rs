use serde_json::Value;

use crate::{
    data_types::identifiers::{cred_def_id::CredentialDefinitionId, schema_id::SchemaId},
    utils::validation::Validatable,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CredentialOffer {
    pub schema_id: SchemaId,
    pub cred_def_id: CredentialDefinitionId,
    pub key_correctness_proof: Value,
    pub nonce: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
}

impl Validatable for CredentialOffer {
    fn validate(&self) -> Result<(), crate::error::Error> {
        self.schema_id.validate()?;
        self.cred_def_id.validate()?;
        if self.nonce.is_empty() {
            return Err(err_msg!(Input, "Credential offer carries no nonce"));
        }
        Ok(())
    }
}
