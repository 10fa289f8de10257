use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

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
use aries_vcx_ledger::{
    errors::error::{VcxLedgerError, VcxLedgerResult},
    ledger::{
        base_ledger::{AnoncredsLedgerRead, AnoncredsLedgerWrite},
        dialect::LedgerDialect,
    },
};
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;
use async_trait::async_trait;

/// Kinds of ledger transactions, for write accounting and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerWriteKind {
    Schema,
    CredDef,
    RevRegDef,
    RevRegEntry,
}

#[derive(Debug, Default)]
struct LedgerState {
    last_seq_no: u32,
    schemas: HashMap<SchemaId, String>,
    cred_defs: HashMap<CredentialDefinitionId, String>,
    rev_reg_defs: HashMap<RevocationRegistryDefinitionId, String>,
    rev_reg_entries: HashMap<RevocationRegistryDefinitionId, Vec<(String, u64)>>,
    pending_failures: HashMap<LedgerWriteKind, u32>,
    writes: HashMap<LedgerWriteKind, u32>,
}

/// In-process ledger storing documents in the wire form of its dialect, so every read goes
/// through the same decoding a remote ledger response would. Legacy ledgers assign
/// transaction sequence numbers to schemas.
#[derive(Debug, Default)]
pub struct MockLedger {
    dialect: LedgerDialect,
    state: Mutex<LedgerState>,
}

impl MockLedger {
    pub fn new(dialect: LedgerDialect) -> Self {
        Self {
            dialect,
            state: Mutex::default(),
        }
    }

    pub fn dialect(&self) -> LedgerDialect {
        self.dialect
    }

    /// Rejects the next `count` writes of `kind`.
    pub fn fail_next_writes(&self, kind: LedgerWriteKind, count: u32) {
        if let Ok(mut state) = self.state.lock() {
            state.pending_failures.insert(kind, count);
        }
    }

    /// Number of accepted writes of `kind`.
    pub fn write_count(&self, kind: LedgerWriteKind) -> u32 {
        self.state
            .lock()
            .map(|state| state.writes.get(&kind).copied().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Raw document stored for a schema, as a remote ledger would return it.
    pub fn raw_schema(&self, schema_id: &SchemaId) -> Option<String> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.schemas.get(schema_id).cloned())
    }

    /// Raw document stored for a credential definition.
    pub fn raw_cred_def(&self, cred_def_id: &CredentialDefinitionId) -> Option<String> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.cred_defs.get(cred_def_id).cloned())
    }

    fn lock(&self) -> VcxLedgerResult<MutexGuard<'_, LedgerState>> {
        Ok(self.state.lock()?)
    }

    fn begin_write(state: &mut LedgerState, kind: LedgerWriteKind) -> VcxLedgerResult<()> {
        if let Some(remaining) = state.pending_failures.get_mut(&kind) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(VcxLedgerError::TransactionRejected(format!(
                    "{kind:?} write rejected"
                )));
            }
        }
        Ok(())
    }

    fn commit_write(state: &mut LedgerState, kind: LedgerWriteKind) {
        *state.writes.entry(kind).or_default() += 1;
    }

    fn rev_reg_def(
        &self,
        state: &LedgerState,
        rev_reg_id: &RevocationRegistryDefinitionId,
    ) -> VcxLedgerResult<RevocationRegistryDefinition> {
        let raw = state
            .rev_reg_defs
            .get(rev_reg_id)
            .ok_or(VcxLedgerError::LedgerItemNotFound)?;
        self.dialect.decode_rev_reg_def(rev_reg_id, raw)
    }

    /// Replays every entry of a registry; `None` while no entry was written.
    fn replay_entries(
        &self,
        state: &LedgerState,
        rev_reg_def: &RevocationRegistryDefinition,
    ) -> VcxLedgerResult<Option<RevocationStatusList>> {
        let Some(entries) = state.rev_reg_entries.get(&rev_reg_def.id) else {
            return Ok(None);
        };
        let mut list = None;
        for (raw, txn_time) in entries {
            list = Some(
                self.dialect
                    .decode_rev_reg_entry(raw, rev_reg_def, list, *txn_time)?,
            );
        }
        Ok(list)
    }
}

#[async_trait]
impl AnoncredsLedgerRead for MockLedger {
    async fn get_schema(&self, schema_id: &SchemaId) -> VcxLedgerResult<Schema> {
        let state = self.lock()?;
        let raw = state
            .schemas
            .get(schema_id)
            .ok_or(VcxLedgerError::LedgerItemNotFound)?;
        self.dialect.decode_schema(schema_id, raw)
    }

    async fn get_cred_def(
        &self,
        cred_def_id: &CredentialDefinitionId,
    ) -> VcxLedgerResult<CredentialDefinition> {
        let state = self.lock()?;
        let raw = state
            .cred_defs
            .get(cred_def_id)
            .ok_or(VcxLedgerError::LedgerItemNotFound)?;
        self.dialect.decode_cred_def(cred_def_id, raw)
    }

    async fn get_rev_reg_def_json(
        &self,
        rev_reg_id: &RevocationRegistryDefinitionId,
    ) -> VcxLedgerResult<RevocationRegistryDefinition> {
        let state = self.lock()?;
        self.rev_reg_def(&state, rev_reg_id)
    }

    async fn get_rev_status_list(
        &self,
        rev_reg_id: &RevocationRegistryDefinitionId,
    ) -> VcxLedgerResult<RevocationStatusList> {
        let state = self.lock()?;
        let rev_reg_def = self.rev_reg_def(&state, rev_reg_id)?;
        self.replay_entries(&state, &rev_reg_def)?
            .ok_or(VcxLedgerError::LedgerItemNotFound)
    }
}

#[async_trait]
impl AnoncredsLedgerWrite for MockLedger {
    async fn publish_schema(
        &self,
        _wallet: &impl BaseWallet,
        schema_json: Schema,
        submitter_did: &IssuerId,
    ) -> VcxLedgerResult<Schema> {
        let mut state = self.lock()?;
        Self::begin_write(&mut state, LedgerWriteKind::Schema)?;
        if state.schemas.contains_key(&schema_json.id) {
            return Err(VcxLedgerError::DuplicatedItem(schema_json.id.to_string()));
        }
        debug!("publish_schema >> {} by {submitter_did}", schema_json.id);

        let mut schema = schema_json;
        if self.dialect == LedgerDialect::Legacy {
            state.last_seq_no += 1;
            schema.seq_no = Some(state.last_seq_no);
        }
        let raw = self.dialect.encode_schema(&schema)?;
        state.schemas.insert(schema.id.clone(), raw);
        Self::commit_write(&mut state, LedgerWriteKind::Schema);
        Ok(schema)
    }

    async fn publish_cred_def(
        &self,
        _wallet: &impl BaseWallet,
        cred_def_json: CredentialDefinition,
        submitter_did: &IssuerId,
    ) -> VcxLedgerResult<()> {
        let mut state = self.lock()?;
        Self::begin_write(&mut state, LedgerWriteKind::CredDef)?;
        if state.cred_defs.contains_key(&cred_def_json.id) {
            return Err(VcxLedgerError::DuplicatedItem(cred_def_json.id.to_string()));
        }
        let schema = match state.schemas.get(&cred_def_json.schema_id) {
            Some(raw) => self.dialect.decode_schema(&cred_def_json.schema_id, raw)?,
            None => {
                return Err(VcxLedgerError::TransactionRejected(format!(
                    "Schema {} of {} is not on the ledger",
                    cred_def_json.schema_id, cred_def_json.id
                )))
            }
        };
        debug!("publish_cred_def >> {} by {submitter_did}", cred_def_json.id);

        let raw = self.dialect.encode_cred_def(&cred_def_json, schema.seq_no)?;
        state.cred_defs.insert(cred_def_json.id, raw);
        Self::commit_write(&mut state, LedgerWriteKind::CredDef);
        Ok(())
    }

    async fn publish_rev_reg_def(
        &self,
        _wallet: &impl BaseWallet,
        rev_reg_def: RevocationRegistryDefinition,
        submitter_did: &IssuerId,
    ) -> VcxLedgerResult<()> {
        let mut state = self.lock()?;
        Self::begin_write(&mut state, LedgerWriteKind::RevRegDef)?;
        if state.rev_reg_defs.contains_key(&rev_reg_def.id) {
            return Err(VcxLedgerError::DuplicatedItem(rev_reg_def.id.to_string()));
        }
        if !state.cred_defs.contains_key(&rev_reg_def.cred_def_id) {
            return Err(VcxLedgerError::TransactionRejected(format!(
                "Credential definition {} of {} is not on the ledger",
                rev_reg_def.cred_def_id, rev_reg_def.id
            )));
        }
        debug!("publish_rev_reg_def >> {} by {submitter_did}", rev_reg_def.id);

        let raw = self.dialect.encode_rev_reg_def(&rev_reg_def)?;
        state.rev_reg_defs.insert(rev_reg_def.id, raw);
        Self::commit_write(&mut state, LedgerWriteKind::RevRegDef);
        Ok(())
    }

    async fn publish_rev_reg_delta(
        &self,
        _wallet: &impl BaseWallet,
        rev_reg_id: &RevocationRegistryDefinitionId,
        rev_reg_entry_json: RevocationRegistryDelta,
        submitter_did: &IssuerId,
    ) -> VcxLedgerResult<()> {
        let mut state = self.lock()?;
        Self::begin_write(&mut state, LedgerWriteKind::RevRegEntry)?;
        let rev_reg_def = self
            .rev_reg_def(&state, rev_reg_id)
            .map_err(|_| {
                VcxLedgerError::TransactionRejected(format!("Registry {rev_reg_id} is not on the ledger"))
            })?;
        let mut resulting_list = match self.replay_entries(&state, &rev_reg_def)? {
            Some(list) => list,
            None => RevocationStatusList::new(
                rev_reg_def.id.clone(),
                rev_reg_def.issuer_id.clone(),
                rev_reg_def.value.issuance_type,
                rev_reg_def.value.max_cred_num,
                None,
                None,
            ),
        };
        resulting_list.apply_delta(&rev_reg_entry_json)?;
        debug!(
            "publish_rev_reg_delta >> {rev_reg_id} by {submitter_did}, issued: {:?}, revoked: {:?}",
            rev_reg_entry_json.value.issued, rev_reg_entry_json.value.revoked
        );

        let raw = self
            .dialect
            .encode_rev_reg_entry(&rev_reg_entry_json, &resulting_list)?;
        state
            .rev_reg_entries
            .entry(rev_reg_id.clone())
            .or_default()
            .push((raw, rev_reg_entry_json.timestamp));
        Self::commit_write(&mut state, LedgerWriteKind::RevRegEntry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anoncreds_types::data_types::ledger::{
        cred_def::CredentialDefinitionData,
        rev_reg_def::{
            IssuanceType, RegistryType, RevocationRegistryDefinitionValue,
            RevocationRegistryDefinitionValuePublicKeys,
        },
    };
    use aries_vcx_wallet::wallet::memory::InMemoryWallet;
    use serde_json::json;

    use super::*;

    fn issuer() -> IssuerId {
        IssuerId::new_unchecked("V4SGRU86Z58d6TV7PBUe6f")
    }

    fn schema() -> Schema {
        Schema {
            id: SchemaId::new_legacy(&issuer(), "gvt", "1.0"),
            seq_no: None,
            name: "gvt".into(),
            version: "1.0".into(),
            attr_names: vec!["name".to_string()].into(),
            issuer_id: issuer(),
        }
    }

    fn cred_def(schema: &Schema) -> CredentialDefinition {
        CredentialDefinition {
            id: CredentialDefinitionId::new_legacy_for_schema(
                &issuer(),
                &schema.id,
                schema.seq_no,
                "default",
            ),
            schema_id: schema.id.clone(),
            signature_type: Default::default(),
            tag: "default".into(),
            value: CredentialDefinitionData {
                primary: json!({ "n": "1" }),
                revocation: Some(json!({ "g": "1" })),
            },
            issuer_id: issuer(),
        }
    }

    fn rev_reg_def(cred_def: &CredentialDefinition) -> RevocationRegistryDefinition {
        RevocationRegistryDefinition {
            id: RevocationRegistryDefinitionId::new_legacy(&issuer(), &cred_def.id, "1-3"),
            issuer_id: issuer(),
            revoc_def_type: RegistryType::CL_ACCUM,
            tag: "1-3".into(),
            cred_def_id: cred_def.id.clone(),
            value: RevocationRegistryDefinitionValue {
                issuance_type: IssuanceType::ISSUANCE_BY_DEFAULT,
                max_cred_num: 3,
                public_keys: RevocationRegistryDefinitionValuePublicKeys {
                    accum_key: json!({ "z": "1" }),
                },
                tails_hash: "hash".into(),
                tails_location: "https://tails.example.com/hash".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_legacy_ledger_assigns_seq_no_and_references_schema_by_it() {
        let wallet = InMemoryWallet::new("ledger");
        let ledger = MockLedger::new(LedgerDialect::Legacy);

        let schema = ledger.publish_schema(&wallet, schema(), &issuer()).await.unwrap();
        assert_eq!(schema.seq_no, Some(1));

        let cred_def = cred_def(&schema);
        ledger
            .publish_cred_def(&wallet, cred_def.clone(), &issuer())
            .await
            .unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&ledger.raw_cred_def(&cred_def.id).unwrap()).unwrap();
        assert_eq!(raw["schemaId"], json!("1"));

        let read = ledger.get_cred_def(&cred_def.id).await.unwrap();
        assert_eq!(read.schema_id.as_seq_no(), Some(1));
        assert_eq!(ledger.write_count(LedgerWriteKind::CredDef), 1);
    }

    #[tokio::test]
    async fn test_duplicate_schema_rejected() {
        let wallet = InMemoryWallet::new("ledger");
        let ledger = MockLedger::new(LedgerDialect::Anoncreds);
        ledger.publish_schema(&wallet, schema(), &issuer()).await.unwrap();

        let err = ledger
            .publish_schema(&wallet, schema(), &issuer())
            .await
            .unwrap_err();
        assert!(matches!(err, VcxLedgerError::DuplicatedItem(_)));
        assert_eq!(ledger.write_count(LedgerWriteKind::Schema), 1);
    }

    #[tokio::test]
    async fn test_status_list_replays_entries() {
        for dialect in [LedgerDialect::Legacy, LedgerDialect::Anoncreds] {
            let wallet = InMemoryWallet::new("ledger");
            let ledger = MockLedger::new(dialect);
            let schema = ledger.publish_schema(&wallet, schema(), &issuer()).await.unwrap();
            let cred_def = cred_def(&schema);
            ledger
                .publish_cred_def(&wallet, cred_def.clone(), &issuer())
                .await
                .unwrap();
            let rev_reg_def = rev_reg_def(&cred_def);
            ledger
                .publish_rev_reg_def(&wallet, rev_reg_def.clone(), &issuer())
                .await
                .unwrap();
            assert!(matches!(
                ledger.get_rev_status_list(&rev_reg_def.id).await.unwrap_err(),
                VcxLedgerError::LedgerItemNotFound
            ));

            let mut previous = RevocationStatusList::new(
                rev_reg_def.id.clone(),
                issuer(),
                IssuanceType::ISSUANCE_BY_DEFAULT,
                3,
                None,
                None,
            );
            for (timestamp, index) in [(10, None), (20, Some(2)), (30, Some(3))] {
                let mut next = previous.clone();
                if let Some(index) = index {
                    next.revoke(index).unwrap();
                }
                next.current_accumulator = Some(json!(format!("accum_{timestamp}")));
                next.timestamp = Some(timestamp);
                let delta = next.delta_from(&previous).unwrap();
                ledger
                    .publish_rev_reg_delta(&wallet, &rev_reg_def.id, delta, &issuer())
                    .await
                    .unwrap();
                previous = next;
            }

            let list = ledger.get_rev_status_list(&rev_reg_def.id).await.unwrap();
            assert_eq!(list.revoked_indices(), vec![2, 3]);
            assert_eq!(list.timestamp, Some(30));
            assert_eq!(list.current_accumulator, Some(json!("accum_30")));
        }
    }

    #[tokio::test]
    async fn test_injected_failure_rejects_only_requested_writes() {
        let wallet = InMemoryWallet::new("ledger");
        let ledger = MockLedger::new(LedgerDialect::Legacy);
        ledger.fail_next_writes(LedgerWriteKind::Schema, 1);

        let err = ledger
            .publish_schema(&wallet, schema(), &issuer())
            .await
            .unwrap_err();
        assert!(matches!(err, VcxLedgerError::TransactionRejected(_)));
        assert!(ledger.get_schema(&schema().id).await.is_err());

        ledger.publish_schema(&wallet, schema(), &issuer()).await.unwrap();
        assert_eq!(ledger.write_count(LedgerWriteKind::Schema), 1);
    }
}
