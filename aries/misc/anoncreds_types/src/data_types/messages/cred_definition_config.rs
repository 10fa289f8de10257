use typed_builder::TypedBuilder;

use crate::{
    data_types::{
        identifiers::{issuer_id::IssuerId, schema_id::SchemaId},
        ledger::cred_def::SignatureType,
    },
    utils::validation::Validatable,
};

#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
pub struct CredentialDefinitionConfig {
    pub issuer_id: IssuerId,
    pub schema_id: SchemaId,
    #[builder(default = String::from("default"), setter(into))]
    #[serde(default = "default_tag")]
    pub tag: String,
    #[builder(default)]
    #[serde(default)]
    pub signature_type: SignatureType,
    #[builder(default)]
    #[serde(default)]
    pub support_revocation: bool,
}

fn default_tag() -> String {
    "default".to_string()
}

impl Validatable for CredentialDefinitionConfig {
    fn validate(&self) -> Result<(), crate::error::Error> {
        self.issuer_id.validate()?;
        self.schema_id.validate()?;
        if self.tag.is_empty() {
            return Err(err_msg!(Input, "Credential definition tag must not be empty"));
        }
        Ok(())
    }
}
