use std::{collections::BTreeSet, path::PathBuf, sync::Arc};

use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId,
        rev_reg_def_id::RevocationRegistryDefinitionId, rev_reg_tag::RevocationRegistryTag,
    },
    ledger::{
        rev_reg_def::{IssuanceType, RevocationRegistryDefinition},
        rev_status_list::RevocationStatusList,
    },
    messages::{
        cred_offer::CredentialOffer,
        cred_request::CredentialRequest,
        credential::{Credential, CredentialValues},
    },
};
use aries_vcx_anoncreds::anoncreds::{
    base_anoncreds::{BaseAnonCreds, CredentialRevocationConfig},
    tails::TailsFileCache,
};
use aries_vcx_issuance::common::primitives::revocation_registry::{
    create_and_publish_rev_reg, now_timestamp, publish_status_list_update,
};
use aries_vcx_ledger::ledger::base_ledger::AnoncredsLedgerWrite;
use aries_vcx_wallet::wallet::{
    base_wallet::{record_category::RecordCategory, BaseWallet},
    record_tags::RecordTags,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::*,
    handlers::credential_definition::DefinitionRecord,
    storage::{agent_storage_wallet::AgentStorageWallet, keyed_locks::KeyedLocks, StorageRecord},
};

/// Local state of one revocation registry. `issued_indices` are the slots handed out to
/// credentials, `revoked_indices` the subset revoked by this agent and published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevocationRegistryRecord {
    pub id: RevocationRegistryDefinitionId,
    pub cred_def_id: CredentialDefinitionId,
    pub tag: RevocationRegistryTag,
    pub rev_reg_def: RevocationRegistryDefinition,
    pub status_list: RevocationStatusList,
    /// 1-based; exceeds the capacity once the registry is exhausted.
    pub next_free_index: u32,
    pub issued_indices: BTreeSet<u32>,
    pub revoked_indices: BTreeSet<u32>,
}

impl RevocationRegistryRecord {
    pub fn capacity(&self) -> u32 {
        self.rev_reg_def.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.next_free_index > self.capacity()
    }

    pub fn issuance_type(&self) -> IssuanceType {
        self.rev_reg_def.value.issuance_type
    }
}

impl StorageRecord for RevocationRegistryRecord {
    const CATEGORY: RecordCategory = RecordCategory::RevRegRecord;

    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn tags(&self) -> RecordTags {
        RecordTags::default().with("cred_def_id", self.cred_def_id.to_string())
    }
}

/// A credential signed by the allocator, with the registry slot it was bound to.
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    pub credential: Credential,
    pub rev_reg_id: Option<RevocationRegistryDefinitionId>,
    pub index: Option<u32>,
}

pub struct ServiceRevocationRegistries<W, A, L> {
    ledger: Arc<L>,
    anoncreds: Arc<A>,
    wallet: Arc<W>,
    issuer_did: IssuerId,
    tails_dir: PathBuf,
    tails_base_uri: Option<Url>,
    tails_cache: Arc<TailsFileCache>,
    rev_regs: AgentStorageWallet<W, RevocationRegistryRecord>,
    cred_defs: AgentStorageWallet<W, DefinitionRecord>,
    registry_locks: KeyedLocks,
    definition_locks: KeyedLocks,
}

impl<W, A, L> ServiceRevocationRegistries<W, A, L>
where
    W: BaseWallet,
    A: BaseAnonCreds,
    L: AnoncredsLedgerWrite,
{
    pub fn new(
        ledger: Arc<L>,
        anoncreds: Arc<A>,
        wallet: Arc<W>,
        issuer_did: IssuerId,
        tails_dir: PathBuf,
        tails_base_uri: Option<Url>,
        tails_cache: Arc<TailsFileCache>,
    ) -> Self {
        Self {
            rev_regs: AgentStorageWallet::new("rev-regs", wallet.clone()),
            cred_defs: AgentStorageWallet::new("cred-defs", wallet.clone()),
            registry_locks: KeyedLocks::new(),
            definition_locks: KeyedLocks::new(),
            ledger,
            anoncreds,
            wallet,
            issuer_did,
            tails_dir,
            tails_base_uri,
            tails_cache,
        }
    }

    pub fn has_tails_base_uri(&self) -> bool {
        self.tails_base_uri.is_some()
    }

    /// Creates, publishes and stores a registry. Does not touch the definition's
    /// current-registry pointer.
    pub async fn create_rev_reg(
        &self,
        cred_def_id: &CredentialDefinitionId,
        tag: RevocationRegistryTag,
        issuance_type: IssuanceType,
    ) -> AgentResult<RevocationRegistryRecord> {
        let tails_base_uri = self.tails_base_uri.as_ref().ok_or_else(|| {
            AgentError::from_msg(
                AgentErrorKind::InvalidConfiguration,
                "Revocation requires a tails base uri",
            )
        })?;
        let (rev_reg_def, status_list) = create_and_publish_rev_reg(
            self.wallet.as_ref(),
            self.anoncreds.as_ref(),
            self.ledger.as_ref(),
            &self.issuer_did,
            cred_def_id,
            &self.tails_dir,
            tails_base_uri,
            tag,
            issuance_type,
        )
        .await?;
        let record = RevocationRegistryRecord {
            id: rev_reg_def.id.clone(),
            cred_def_id: cred_def_id.clone(),
            tag,
            rev_reg_def,
            status_list,
            next_free_index: 1,
            issued_indices: BTreeSet::new(),
            revoked_indices: BTreeSet::new(),
        };
        self.rev_regs.insert(&record).await?;
        info!("Stored revocation registry {} for {cred_def_id}", record.id);
        Ok(record)
    }

    pub async fn get_rev_reg(
        &self,
        rev_reg_id: &RevocationRegistryDefinitionId,
    ) -> AgentResult<RevocationRegistryRecord> {
        self.rev_regs.get(&rev_reg_id.to_string()).await
    }

    /// Registries of a definition, oldest first.
    pub async fn list_rev_regs(
        &self,
        cred_def_id: &CredentialDefinitionId,
    ) -> AgentResult<Vec<RevocationRegistryRecord>> {
        let mut rev_regs = self
            .rev_regs
            .find_by(RecordTags::default().with("cred_def_id", cred_def_id.to_string()))
            .await?;
        rev_regs.sort_by_key(|rev_reg| rev_reg.tag.ordinal);
        Ok(rev_regs)
    }

    /// Signs a credential of `cred_def_id`, binding it to the next free slot of the
    /// definition's current registry when the definition is revocable. An exhausted
    /// registry is replaced once when the definition auto-scales.
    pub async fn issue_credential(
        &self,
        cred_def_id: &CredentialDefinitionId,
        offer: CredentialOffer,
        request: CredentialRequest,
        values: CredentialValues,
    ) -> AgentResult<IssuedCredential> {
        let definition = self.cred_defs.get(&cred_def_id.to_string()).await?;
        if !definition.support_revocation {
            let credential = self
                .anoncreds
                .issuer_create_credential(self.wallet.as_ref(), offer, request, values, None)
                .await?;
            return Ok(IssuedCredential {
                credential,
                rev_reg_id: None,
                index: None,
            });
        }
        let rev_reg_id = definition.current_rev_reg_id.clone().ok_or_else(|| {
            AgentError::from_msg(
                AgentErrorKind::InvalidState,
                &format!("Credential definition {cred_def_id} has no active revocation registry"),
            )
        })?;

        match self
            .issue_against(&rev_reg_id, offer.clone(), request.clone(), values.clone())
            .await
        {
            Err(err)
                if err.kind() == AgentErrorKind::RevocationRegistryFull && definition.auto_scale =>
            {
                let next = self.scale_up(cred_def_id, &rev_reg_id).await?;
                self.issue_against(&next, offer, request, values).await
            }
            res => res,
        }
    }

    async fn issue_against(
        &self,
        rev_reg_id: &RevocationRegistryDefinitionId,
        offer: CredentialOffer,
        request: CredentialRequest,
        values: CredentialValues,
    ) -> AgentResult<IssuedCredential> {
        let _guard = self.registry_locks.lock(&rev_reg_id.to_string()).await?;
        let mut record = self.get_rev_reg(rev_reg_id).await?;
        if record.is_full() {
            return Err(AgentError::from_msg(
                AgentErrorKind::RevocationRegistryFull,
                &format!(
                    "Revocation registry {rev_reg_id} has no free slot (capacity {})",
                    record.capacity()
                ),
            ));
        }
        let index = record.next_free_index;
        let tails = self
            .tails_cache
            .open(&self.tails_dir, &record.rev_reg_def.value.tails_hash)?;
        let revocation_config = CredentialRevocationConfig {
            rev_reg_def: record.rev_reg_def.clone(),
            status_list: record.status_list.clone(),
            registry_idx: index,
            tails,
        };
        let credential = self
            .anoncreds
            .issuer_create_credential(
                self.wallet.as_ref(),
                offer,
                request,
                values,
                Some(revocation_config),
            )
            .await?;

        if record.issuance_type() == IssuanceType::ISSUANCE_ON_DEMAND {
            let next = self
                .anoncreds
                .update_revocation_status_list(
                    self.wallet.as_ref(),
                    &record.rev_reg_def,
                    record.status_list.clone(),
                    BTreeSet::from([index]),
                    BTreeSet::new(),
                    now_timestamp(),
                )
                .await?;
            publish_status_list_update(
                self.wallet.as_ref(),
                self.ledger.as_ref(),
                &self.issuer_did,
                &record.status_list,
                &next,
            )
            .await?;
            record.status_list = next;
        }

        record.next_free_index = index + 1;
        record.issued_indices.insert(index);
        self.rev_regs.update(&record).await?;
        debug!("Allocated index {index} of revocation registry {rev_reg_id}");
        Ok(IssuedCredential {
            credential,
            rev_reg_id: Some(rev_reg_id.clone()),
            index: Some(index),
        })
    }

    /// Replaces the exhausted `full` registry as the definition's current one. Callers
    /// racing on the same exhausted registry all end up on a single successor.
    async fn scale_up(
        &self,
        cred_def_id: &CredentialDefinitionId,
        full: &RevocationRegistryDefinitionId,
    ) -> AgentResult<RevocationRegistryDefinitionId> {
        let _guard = self.definition_locks.lock(&cred_def_id.to_string()).await?;
        let mut definition = self.cred_defs.get(&cred_def_id.to_string()).await?;
        match &definition.current_rev_reg_id {
            Some(current) if current != full => return Ok(current.clone()),
            _ => {}
        }

        let exhausted = self.get_rev_reg(full).await?;
        let tag = RevocationRegistryTag::next_after(
            &exhausted.rev_reg_def.tag,
            definition.max_credential_count,
        );
        warn!(
            "Revocation registry {full} is full, creating registry {tag} for {cred_def_id}"
        );
        let next = self
            .create_rev_reg(cred_def_id, tag, definition.issuance_policy.into())
            .await?;
        definition.current_rev_reg_id = Some(next.id.clone());
        self.cred_defs.update(&definition).await?;
        Ok(next.id)
    }

    /// Publishes the revocation of `index` and records it. Local state only changes
    /// once the ledger accepted the entry.
    pub async fn revoke_index(
        &self,
        rev_reg_id: &RevocationRegistryDefinitionId,
        index: u32,
    ) -> AgentResult<()> {
        let _guard = self.registry_locks.lock(&rev_reg_id.to_string()).await?;
        let mut record = self.get_rev_reg(rev_reg_id).await?;
        if !record.issued_indices.contains(&index) {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidRevocationDetails,
                &format!("Index {index} of revocation registry {rev_reg_id} was never issued"),
            ));
        }
        if record.revoked_indices.contains(&index) {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidRevocationDetails,
                &format!("Index {index} of revocation registry {rev_reg_id} is already revoked"),
            ));
        }

        let next = self
            .anoncreds
            .update_revocation_status_list(
                self.wallet.as_ref(),
                &record.rev_reg_def,
                record.status_list.clone(),
                BTreeSet::new(),
                BTreeSet::from([index]),
                now_timestamp(),
            )
            .await?;
        publish_status_list_update(
            self.wallet.as_ref(),
            self.ledger.as_ref(),
            &self.issuer_did,
            &record.status_list,
            &next,
        )
        .await?;

        record.status_list = next;
        record.revoked_indices.insert(index);
        self.rev_regs.update(&record).await?;
        info!("Revoked index {index} of revocation registry {rev_reg_id}");
        Ok(())
    }

    pub async fn is_revoked(
        &self,
        rev_reg_id: &RevocationRegistryDefinitionId,
        index: u32,
    ) -> AgentResult<bool> {
        let record = self.get_rev_reg(rev_reg_id).await?;
        Ok(record.revoked_indices.contains(&index))
    }
}
