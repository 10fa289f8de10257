use std::{collections::BTreeSet, path::Path, sync::Arc};

use anoncreds_types::data_types::{
    identifiers::{cred_def_id::CredentialDefinitionId, issuer_id::IssuerId, schema_id::SchemaId},
    ledger::{
        cred_def::CredentialDefinition,
        rev_reg_def::{IssuanceType, RevocationRegistryDefinition},
        rev_status_list::RevocationStatusList,
        schema::{AttributeNames, Schema},
    },
    messages::{
        cred_definition_config::CredentialDefinitionConfig,
        cred_offer::CredentialOffer,
        cred_request::{CredentialRequest, CredentialRequestMetadata},
        credential::{Credential, CredentialValues},
    },
};
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;
use async_trait::async_trait;

use super::tails::TailsFile;
use crate::errors::error::VcxAnoncredsResult;

pub type CredentialId = String;
pub type LinkSecretId = String;

/// Binds a credential being issued to one slot of a revocation registry.
#[derive(Debug, Clone)]
pub struct CredentialRevocationConfig {
    pub rev_reg_def: RevocationRegistryDefinition,
    pub status_list: RevocationStatusList,
    /// 1-based index of the slot; must not exceed the registry's declared capacity.
    pub registry_idx: u32,
    pub tails: Arc<TailsFile>,
}

/// Trait defining the zero-knowledge credential operations the issuance engine relies on.
/// Implementations treat key material as opaque and keep private parts in the wallet.
///
/// Issuing against a registry slot beyond the registry's capacity fails with
/// [`crate::errors::error::VcxAnoncredsError::RevocationRegistryFull`].
#[async_trait]
pub trait BaseAnonCreds: std::fmt::Debug + Send + Sync {
    async fn issuer_create_schema(
        &self,
        issuer_did: &IssuerId,
        name: &str,
        version: &str,
        attrs: AttributeNames,
    ) -> VcxAnoncredsResult<Schema>;

    async fn issuer_create_and_store_credential_def(
        &self,
        wallet: &impl BaseWallet,
        schema_id: &SchemaId,
        schema_json: Schema,
        config: CredentialDefinitionConfig,
    ) -> VcxAnoncredsResult<CredentialDefinition>;

    async fn issuer_create_credential_offer(
        &self,
        wallet: &impl BaseWallet,
        cred_def_id: &CredentialDefinitionId,
    ) -> VcxAnoncredsResult<CredentialOffer>;

    async fn issuer_create_credential(
        &self,
        wallet: &impl BaseWallet,
        cred_offer_json: CredentialOffer,
        cred_req_json: CredentialRequest,
        cred_values_json: CredentialValues,
        revocation_config: Option<CredentialRevocationConfig>,
    ) -> VcxAnoncredsResult<Credential>;

    #[allow(clippy::too_many_arguments)]
    async fn issuer_create_and_store_revoc_reg(
        &self,
        wallet: &impl BaseWallet,
        issuer_did: &IssuerId,
        cred_def_id: &CredentialDefinitionId,
        tails_dir: &Path,
        max_creds: u32,
        tag: &str,
        issuance_type: IssuanceType,
    ) -> VcxAnoncredsResult<(RevocationRegistryDefinition, RevocationStatusList)>;

    /// Flips the given indices and recomputes the accumulator, returning the new list
    /// stamped with `timestamp`.
    #[allow(clippy::too_many_arguments)]
    async fn update_revocation_status_list(
        &self,
        wallet: &impl BaseWallet,
        rev_reg_def: &RevocationRegistryDefinition,
        current_list: RevocationStatusList,
        issued: BTreeSet<u32>,
        revoked: BTreeSet<u32>,
        timestamp: u64,
    ) -> VcxAnoncredsResult<RevocationStatusList>;

    async fn prover_create_link_secret(
        &self,
        wallet: &impl BaseWallet,
        link_secret_id: &LinkSecretId,
    ) -> VcxAnoncredsResult<()>;

    async fn prover_create_credential_req(
        &self,
        wallet: &impl BaseWallet,
        prover_did: &str,
        cred_offer_json: CredentialOffer,
        cred_def_json: CredentialDefinition,
        link_secret_id: &LinkSecretId,
    ) -> VcxAnoncredsResult<(CredentialRequest, CredentialRequestMetadata)>;

    /// Verifies the credential against its definition (and registry, when revocable) and
    /// stores it, returning the id it is stored under.
    async fn prover_store_credential(
        &self,
        wallet: &impl BaseWallet,
        cred_req_metadata_json: CredentialRequestMetadata,
        cred_json: Credential,
        cred_def_json: CredentialDefinition,
        rev_reg_def_json: Option<RevocationRegistryDefinition>,
    ) -> VcxAnoncredsResult<CredentialId>;

    /// Stored credential in the prover's JSON form: `referent`, `attrs`, `schema_id`,
    /// `cred_def_id`, `rev_reg_id` and `cred_rev_id`.
    async fn prover_get_credential(
        &self,
        wallet: &impl BaseWallet,
        cred_id: &CredentialId,
    ) -> VcxAnoncredsResult<String>;

    async fn prover_delete_credential(
        &self,
        wallet: &impl BaseWallet,
        cred_id: &CredentialId,
    ) -> VcxAnoncredsResult<()>;
}
