use std::sync::Arc;

use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId,
        rev_reg_def_id::RevocationRegistryDefinitionId, rev_reg_tag::RevocationRegistryTag,
        schema_id::SchemaId,
    },
    ledger::cred_def::CredentialDefinition,
    messages::cred_definition_config::CredentialDefinitionConfig,
};
use aries_vcx_anoncreds::anoncreds::base_anoncreds::BaseAnonCreds;
use aries_vcx_issuance::common::primitives::credential_definition::create_and_publish_cred_def;
use aries_vcx_ledger::ledger::base_ledger::{AnoncredsLedgerRead, AnoncredsLedgerWrite};
use aries_vcx_wallet::wallet::{
    base_wallet::{record_category::RecordCategory, BaseWallet},
    record_tags::RecordTags,
};
use serde::{Deserialize, Serialize};

use crate::{
    agent::agent_config::{DefinitionConfig, IssuancePolicy},
    error::*,
    handlers::revocation_registry::ServiceRevocationRegistries,
    storage::{agent_storage_wallet::AgentStorageWallet, StorageRecord},
};

/// A published credential definition with the revocation settings it was created with.
/// `current_rev_reg_id` names the registry new credentials are bound to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub id: CredentialDefinitionId,
    pub issuer_id: IssuerId,
    pub schema_id: SchemaId,
    pub tag: String,
    pub support_revocation: bool,
    pub max_credential_count: u32,
    pub auto_scale: bool,
    pub issuance_policy: IssuancePolicy,
    pub current_rev_reg_id: Option<RevocationRegistryDefinitionId>,
    pub cred_def: CredentialDefinition,
}

impl StorageRecord for DefinitionRecord {
    const CATEGORY: RecordCategory = RecordCategory::CredDefRecord;

    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn tags(&self) -> RecordTags {
        RecordTags::default()
            .with("schema_id", self.schema_id.to_string())
            .with("issuer_id", self.issuer_id.to_string())
    }
}

pub struct ServiceCredentialDefinitions<W, A, L> {
    ledger: Arc<L>,
    anoncreds: Arc<A>,
    wallet: Arc<W>,
    cred_defs: AgentStorageWallet<W, DefinitionRecord>,
    service_rev_regs: Arc<ServiceRevocationRegistries<W, A, L>>,
}

impl<W, A, L> ServiceCredentialDefinitions<W, A, L>
where
    W: BaseWallet,
    A: BaseAnonCreds,
    L: AnoncredsLedgerRead + AnoncredsLedgerWrite,
{
    pub fn new(
        ledger: Arc<L>,
        anoncreds: Arc<A>,
        wallet: Arc<W>,
        service_rev_regs: Arc<ServiceRevocationRegistries<W, A, L>>,
    ) -> Self {
        Self {
            cred_defs: AgentStorageWallet::new("cred-defs", wallet.clone()),
            ledger,
            anoncreds,
            wallet,
            service_rev_regs,
        }
    }

    /// Publishes a credential definition and, when revocation is enabled, its first
    /// revocation registry.
    pub async fn create_cred_def(
        &self,
        config: DefinitionConfig,
    ) -> AgentResult<CredentialDefinitionId> {
        if config.enable_revocation {
            if !self.service_rev_regs.has_tails_base_uri() {
                return Err(AgentError::from_msg(
                    AgentErrorKind::InvalidConfiguration,
                    "Revocable credential definitions require a tails base uri",
                ));
            }
            if config.max_credential_count == 0 {
                return Err(AgentError::from_msg(
                    AgentErrorKind::InvalidConfiguration,
                    "Revocation registries must hold at least one credential",
                ));
            }
        }

        let cred_def_config = CredentialDefinitionConfig::builder()
            .issuer_id(config.issuer_id.clone())
            .schema_id(config.schema_id.clone())
            .tag(config.tag.clone())
            .support_revocation(config.enable_revocation)
            .build();
        let (_, cred_def) = create_and_publish_cred_def(
            self.wallet.as_ref(),
            self.anoncreds.as_ref(),
            self.ledger.as_ref(),
            self.ledger.as_ref(),
            cred_def_config,
        )
        .await?;

        let current_rev_reg_id = if config.enable_revocation {
            let rev_reg = self
                .service_rev_regs
                .create_rev_reg(
                    &cred_def.id,
                    RevocationRegistryTag::first(config.max_credential_count),
                    config.issuance_policy.into(),
                )
                .await
                .map_err(|err| {
                    err.extend(format!(
                        "Unable to provision revocation registry of {}",
                        cred_def.id
                    ))
                })?;
            Some(rev_reg.id)
        } else {
            None
        };

        let record = DefinitionRecord {
            id: cred_def.id.clone(),
            issuer_id: config.issuer_id,
            schema_id: config.schema_id,
            tag: config.tag,
            support_revocation: config.enable_revocation,
            max_credential_count: config.max_credential_count,
            auto_scale: config.auto_scale,
            issuance_policy: config.issuance_policy,
            current_rev_reg_id,
            cred_def,
        };
        self.cred_defs.insert(&record).await?;
        info!("Created credential definition {}", record.id);
        Ok(record.id)
    }

    pub async fn get_cred_def(
        &self,
        cred_def_id: &CredentialDefinitionId,
    ) -> AgentResult<DefinitionRecord> {
        self.cred_defs.get(&cred_def_id.to_string()).await
    }

    pub async fn find_by_schema_id(
        &self,
        schema_id: &SchemaId,
    ) -> AgentResult<Vec<DefinitionRecord>> {
        self.cred_defs
            .find_by(RecordTags::default().with("schema_id", schema_id.to_string()))
            .await
    }
}
