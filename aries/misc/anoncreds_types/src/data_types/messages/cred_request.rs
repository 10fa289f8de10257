use serde_json::Value;

use crate::{
    data_types::identifiers::cred_def_id::CredentialDefinitionId, utils::validation::Validatable,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CredentialRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prover_did: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy: Option<String>,
    pub cred_def_id: CredentialDefinitionId,
    pub blinded_ms: Value,
    pub blinded_ms_correctness_proof: Value,
    pub nonce: String,
}

impl Validatable for CredentialRequest {
    fn validate(&self) -> Result<(), crate::error::Error> {
        self.cred_def_id.validate()?;
        match (&self.prover_did, &self.entropy) {
            (Some(_), Some(_)) => Err(err_msg!(
                Input,
                "Prover did and entropy must not both be supplied"
            )),
            (None, None) => Err(err_msg!(Input, "Prover did or entropy must be supplied")),
            _ => Ok(()),
        }
    }
}

/// Holder-side secret state needed to process the credential answering a request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CredentialRequestMetadata {
    pub link_secret_blinding_data: Value,
    pub nonce: String,
    pub link_secret_name: String,
}
