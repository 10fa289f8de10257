use std::fmt::Debug;

use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId,
        rev_reg_def_id::RevocationRegistryDefinitionId, schema_id::SchemaId,
    },
    ledger::{
        cred_def::CredentialDefinition, rev_reg_def::RevocationRegistryDefinition,
        rev_reg_delta::RevocationRegistryDelta, rev_status_list::RevocationStatusList,
        schema::Schema,
    },
};
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;
use async_trait::async_trait;

use crate::errors::error::VcxLedgerResult;

#[async_trait]
pub trait AnoncredsLedgerRead: Debug + Send + Sync {
    async fn get_schema(&self, schema_id: &SchemaId) -> VcxLedgerResult<Schema>;

    async fn get_cred_def(
        &self,
        cred_def_id: &CredentialDefinitionId,
    ) -> VcxLedgerResult<CredentialDefinition>;

    async fn get_rev_reg_def_json(
        &self,
        rev_reg_id: &RevocationRegistryDefinitionId,
    ) -> VcxLedgerResult<RevocationRegistryDefinition>;

    /// Status list as of the latest registry entry.
    async fn get_rev_status_list(
        &self,
        rev_reg_id: &RevocationRegistryDefinitionId,
    ) -> VcxLedgerResult<RevocationStatusList>;
}

#[async_trait]
pub trait AnoncredsLedgerWrite: Debug + Send + Sync {
    /// Writes the schema, returning it as stored, with the sequence number the ledger
    /// assigned if it assigns any.
    async fn publish_schema(
        &self,
        wallet: &impl BaseWallet,
        schema_json: Schema,
        submitter_did: &IssuerId,
    ) -> VcxLedgerResult<Schema>;

    async fn publish_cred_def(
        &self,
        wallet: &impl BaseWallet,
        cred_def_json: CredentialDefinition,
        submitter_did: &IssuerId,
    ) -> VcxLedgerResult<()>;

    async fn publish_rev_reg_def(
        &self,
        wallet: &impl BaseWallet,
        rev_reg_def: RevocationRegistryDefinition,
        submitter_did: &IssuerId,
    ) -> VcxLedgerResult<()>;

    async fn publish_rev_reg_delta(
        &self,
        wallet: &impl BaseWallet,
        rev_reg_id: &RevocationRegistryDefinitionId,
        rev_reg_entry_json: RevocationRegistryDelta,
        submitter_did: &IssuerId,
    ) -> VcxLedgerResult<()>;
}
