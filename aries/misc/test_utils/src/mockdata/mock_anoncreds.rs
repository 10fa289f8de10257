use std::{
    collections::{hash_map::DefaultHasher, BTreeSet, HashMap},
    hash::{Hash, Hasher},
    path::Path,
    sync::atomic::{AtomicU32, Ordering},
};

use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId,
        rev_reg_def_id::RevocationRegistryDefinitionId, schema_id::SchemaId,
    },
    ledger::{
        cred_def::{CredentialDefinition, CredentialDefinitionData},
        rev_reg_def::{
            IssuanceType, RegistryType, RevocationRegistryDefinition,
            RevocationRegistryDefinitionValue, RevocationRegistryDefinitionValuePublicKeys,
        },
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
use aries_vcx_anoncreds::{
    anoncreds::base_anoncreds::{
        BaseAnonCreds, CredentialId, CredentialRevocationConfig, LinkSecretId,
    },
    errors::error::{VcxAnoncredsError, VcxAnoncredsResult},
};
use aries_vcx_wallet::{
    errors::error::VcxWalletError,
    wallet::{
        base_wallet::{record::Record, record_category::RecordCategory, BaseWallet},
        record_tags::RecordTags,
    },
};
use async_trait::async_trait;
use serde_json::json;

fn digest(input: &str) -> String {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Accumulator of a status list, a pure function of the registry and its revoked set.
fn accumulator(rev_reg_id: &RevocationRegistryDefinitionId, list: &RevocationStatusList) -> String {
    digest(&format!("{rev_reg_id}:{:?}", list.revoked_indices()))
}

/// Deterministic stand-in for the crypto provider. Key material is plain JSON derived from
/// the object ids; private parts are kept as wallet records so wallet failures surface the
/// way they do with a real provider. Registry capacity is enforced.
#[derive(Debug, Default)]
pub struct MockAnoncreds {
    nonce: AtomicU32,
    credentials_issued: AtomicU32,
}

impl MockAnoncreds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of credentials signed so far.
    pub fn credentials_issued(&self) -> u32 {
        self.credentials_issued.load(Ordering::SeqCst)
    }

    fn next_nonce(&self) -> String {
        (self.nonce.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }

    async fn add_private_record(
        wallet: &impl BaseWallet,
        category: RecordCategory,
        name: &str,
        value: String,
        tags: RecordTags,
    ) -> VcxAnoncredsResult<()> {
        let record = Record::builder()
            .category(category)
            .name(name)
            .value(value)
            .tags(tags)
            .build();
        wallet.add_record(record).await?;
        Ok(())
    }

    fn check_revocation_slot(config: &CredentialRevocationConfig) -> VcxAnoncredsResult<()> {
        let capacity = config.rev_reg_def.capacity();
        if config.registry_idx == 0 {
            return Err(VcxAnoncredsError::InvalidInput(format!(
                "Registry index of {} is 1-based",
                config.rev_reg_def.id
            )));
        }
        if config.registry_idx > capacity {
            return Err(VcxAnoncredsError::RevocationRegistryFull(format!(
                "Index {} exceeds capacity {} of {}",
                config.registry_idx, capacity, config.rev_reg_def.id
            )));
        }
        if config.status_list.rev_reg_def_id != config.rev_reg_def.id {
            return Err(VcxAnoncredsError::InvalidInput(format!(
                "Status list of {} given for registry {}",
                config.status_list.rev_reg_def_id, config.rev_reg_def.id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BaseAnonCreds for MockAnoncreds {
    async fn issuer_create_schema(
        &self,
        issuer_did: &IssuerId,
        name: &str,
        version: &str,
        attrs: AttributeNames,
    ) -> VcxAnoncredsResult<Schema> {
        if attrs.0.is_empty() {
            return Err(VcxAnoncredsError::InvalidSchema(
                "Schema needs at least one attribute".into(),
            ));
        }
        Ok(Schema {
            id: SchemaId::new_legacy(issuer_did, name, version),
            seq_no: None,
            name: name.to_string(),
            version: version.to_string(),
            attr_names: attrs,
            issuer_id: issuer_did.clone(),
        })
    }

    async fn issuer_create_and_store_credential_def(
        &self,
        wallet: &impl BaseWallet,
        schema_id: &SchemaId,
        schema_json: Schema,
        config: CredentialDefinitionConfig,
    ) -> VcxAnoncredsResult<CredentialDefinition> {
        let id = CredentialDefinitionId::new_legacy_for_schema(
            &config.issuer_id,
            schema_id,
            schema_json.seq_no,
            &config.tag,
        );
        let revocation = config
            .support_revocation
            .then(|| json!({ "g": digest(&format!("{id}:revocation")) }));
        let cred_def = CredentialDefinition {
            id: id.clone(),
            schema_id: schema_id.clone(),
            signature_type: config.signature_type,
            tag: config.tag.clone(),
            value: CredentialDefinitionData {
                primary: json!({
                    "n": digest(&format!("{id}:primary")),
                    "r": schema_json.attr_names.0,
                }),
                revocation,
            },
            issuer_id: config.issuer_id.clone(),
        };

        let private_key = json!({ "schema_id": schema_id, "p_key": digest(&id.0) });
        Self::add_private_record(
            wallet,
            RecordCategory::CredDef,
            &id.0,
            private_key.to_string(),
            RecordTags::default().with("schema_id", schema_id.0.clone()),
        )
        .await?;
        Ok(cred_def)
    }

    async fn issuer_create_credential_offer(
        &self,
        wallet: &impl BaseWallet,
        cred_def_id: &CredentialDefinitionId,
    ) -> VcxAnoncredsResult<CredentialOffer> {
        let private_key = wallet.get_record(RecordCategory::CredDef, &cred_def_id.0).await?;
        let private_key: serde_json::Value = serde_json::from_str(private_key.value())?;
        let schema_id = private_key["schema_id"]
            .as_str()
            .map(SchemaId::new_unchecked)
            .ok_or_else(|| VcxAnoncredsError::InvalidState("Corrupted private key".into()))?;

        Ok(CredentialOffer {
            schema_id,
            cred_def_id: cred_def_id.clone(),
            key_correctness_proof: json!({ "c": digest(&cred_def_id.0) }),
            nonce: self.next_nonce(),
            method_name: None,
        })
    }

    async fn issuer_create_credential(
        &self,
        wallet: &impl BaseWallet,
        cred_offer_json: CredentialOffer,
        cred_req_json: CredentialRequest,
        cred_values_json: CredentialValues,
        revocation_config: Option<CredentialRevocationConfig>,
    ) -> VcxAnoncredsResult<Credential> {
        if cred_req_json.cred_def_id != cred_offer_json.cred_def_id {
            return Err(VcxAnoncredsError::InvalidInput(format!(
                "Request for {} does not answer offer of {}",
                cred_req_json.cred_def_id, cred_offer_json.cred_def_id
            )));
        }
        wallet
            .get_record(RecordCategory::CredDef, &cred_offer_json.cred_def_id.0)
            .await?;

        let (rev_reg_id, rev_reg, witness) = match &revocation_config {
            Some(config) => {
                Self::check_revocation_slot(config)?;
                (
                    Some(config.rev_reg_def.id.clone()),
                    Some(json!({ "accum": config.status_list.current_accumulator })),
                    Some(json!({ "idx": config.registry_idx, "tails": config.tails.hash() })),
                )
            }
            None => (None, None, None),
        };

        self.credentials_issued.fetch_add(1, Ordering::SeqCst);
        Ok(Credential {
            schema_id: cred_offer_json.schema_id,
            cred_def_id: cred_offer_json.cred_def_id,
            rev_reg_id,
            values: cred_values_json,
            signature: json!({ "nonce": cred_req_json.nonce, "m": cred_req_json.blinded_ms }),
            signature_correctness_proof: json!({ "se": digest(&cred_req_json.nonce) }),
            rev_reg,
            witness,
        })
    }

    async fn issuer_create_and_store_revoc_reg(
        &self,
        wallet: &impl BaseWallet,
        issuer_did: &IssuerId,
        cred_def_id: &CredentialDefinitionId,
        tails_dir: &Path,
        max_creds: u32,
        tag: &str,
        issuance_type: IssuanceType,
    ) -> VcxAnoncredsResult<(RevocationRegistryDefinition, RevocationStatusList)> {
        if max_creds == 0 {
            return Err(VcxAnoncredsError::InvalidInput(
                "Registry capacity must be positive".into(),
            ));
        }
        let id = RevocationRegistryDefinitionId::new_legacy(issuer_did, cred_def_id, tag);
        let tails_hash = digest(&format!("{id}:tails"));
        let rev_reg_def = RevocationRegistryDefinition {
            id: id.clone(),
            issuer_id: issuer_did.clone(),
            revoc_def_type: RegistryType::CL_ACCUM,
            tag: tag.to_string(),
            cred_def_id: cred_def_id.clone(),
            value: RevocationRegistryDefinitionValue {
                issuance_type,
                max_cred_num: max_creds,
                public_keys: RevocationRegistryDefinitionValuePublicKeys {
                    accum_key: json!({ "z": digest(&id.0) }),
                },
                tails_location: tails_dir.join(&tails_hash).to_string_lossy().into_owned(),
                tails_hash,
            },
        };
        let mut status_list = RevocationStatusList::new(
            id.clone(),
            issuer_did.clone(),
            issuance_type,
            max_creds,
            None,
            Some(0),
        );
        status_list.current_accumulator = Some(json!(accumulator(&id, &status_list)));

        Self::add_private_record(
            wallet,
            RecordCategory::RevReg,
            &id.0,
            json!({ "cred_def_id": cred_def_id }).to_string(),
            RecordTags::default(),
        )
        .await?;
        Ok((rev_reg_def, status_list))
    }

    async fn update_revocation_status_list(
        &self,
        wallet: &impl BaseWallet,
        rev_reg_def: &RevocationRegistryDefinition,
        current_list: RevocationStatusList,
        issued: BTreeSet<u32>,
        revoked: BTreeSet<u32>,
        timestamp: u64,
    ) -> VcxAnoncredsResult<RevocationStatusList> {
        wallet
            .get_record(RecordCategory::RevReg, &rev_reg_def.id.0)
            .await?;
        let mut list = current_list;
        for index in issued {
            list.activate(index)?;
        }
        for index in revoked {
            list.revoke(index)?;
        }
        list.current_accumulator = Some(json!(accumulator(&rev_reg_def.id, &list)));
        list.timestamp = Some(timestamp);
        Ok(list)
    }

    async fn prover_create_link_secret(
        &self,
        wallet: &impl BaseWallet,
        link_secret_id: &LinkSecretId,
    ) -> VcxAnoncredsResult<()> {
        let secret = digest(&format!("{link_secret_id}:secret"));
        let record = Record::builder()
            .category(RecordCategory::LinkSecret)
            .name(link_secret_id.as_str())
            .value(secret)
            .build();
        match wallet.add_record(record).await {
            Err(VcxWalletError::DuplicateRecord(_)) => Err(
                VcxAnoncredsError::DuplicationMasterSecret(link_secret_id.to_string()),
            ),
            other => Ok(other?),
        }
    }

    async fn prover_create_credential_req(
        &self,
        wallet: &impl BaseWallet,
        prover_did: &str,
        cred_offer_json: CredentialOffer,
        cred_def_json: CredentialDefinition,
        link_secret_id: &LinkSecretId,
    ) -> VcxAnoncredsResult<(CredentialRequest, CredentialRequestMetadata)> {
        if cred_def_json.id != cred_offer_json.cred_def_id {
            return Err(VcxAnoncredsError::InvalidInput(format!(
                "Offer of {} does not match definition {}",
                cred_offer_json.cred_def_id, cred_def_json.id
            )));
        }
        if cred_def_json.schema_id != cred_offer_json.schema_id {
            return Err(VcxAnoncredsError::InvalidInput(format!(
                "Definition {} references schema {}, offer names {}",
                cred_def_json.id, cred_def_json.schema_id, cred_offer_json.schema_id
            )));
        }
        let link_secret = wallet
            .get_record(RecordCategory::LinkSecret, link_secret_id)
            .await?;
        let blinding = digest(&format!("{}:{}", link_secret.value(), cred_offer_json.nonce));

        let nonce = self.next_nonce();
        let request = CredentialRequest {
            prover_did: Some(prover_did.to_string()),
            entropy: None,
            cred_def_id: cred_def_json.id,
            blinded_ms: json!({ "u": blinding }),
            blinded_ms_correctness_proof: json!({ "c": digest(&blinding) }),
            nonce: nonce.clone(),
        };
        let metadata = CredentialRequestMetadata {
            link_secret_blinding_data: json!({ "v_prime": blinding }),
            nonce,
            link_secret_name: link_secret_id.to_string(),
        };
        Ok((request, metadata))
    }

    async fn prover_store_credential(
        &self,
        wallet: &impl BaseWallet,
        cred_req_metadata_json: CredentialRequestMetadata,
        cred_json: Credential,
        cred_def_json: CredentialDefinition,
        rev_reg_def_json: Option<RevocationRegistryDefinition>,
    ) -> VcxAnoncredsResult<CredentialId> {
        if cred_json.cred_def_id != cred_def_json.id {
            return Err(VcxAnoncredsError::InvalidInput(format!(
                "Credential of {} checked against definition {}",
                cred_json.cred_def_id, cred_def_json.id
            )));
        }
        if cred_json.signature["nonce"] != json!(cred_req_metadata_json.nonce) {
            return Err(VcxAnoncredsError::InvalidInput(
                "Credential does not answer the stored request".into(),
            ));
        }
        match (&cred_json.rev_reg_id, &rev_reg_def_json) {
            (None, _) => {}
            (Some(rev_reg_id), Some(rev_reg_def)) if *rev_reg_id == rev_reg_def.id => {}
            (Some(rev_reg_id), _) => {
                return Err(VcxAnoncredsError::InvalidInput(format!(
                    "Revocable credential needs registry definition {rev_reg_id}"
                )))
            }
        }

        let cred_id = digest(&format!(
            "{}:{}",
            cred_req_metadata_json.nonce, cred_json.cred_def_id
        ));
        let mut tags = RecordTags::default()
            .with("schema_id", cred_json.schema_id.0.clone())
            .with("cred_def_id", cred_json.cred_def_id.0.clone());
        if let Some(rev_reg_id) = &cred_json.rev_reg_id {
            tags = tags.with("rev_reg_id", rev_reg_id.0.clone());
        }
        Self::add_private_record(
            wallet,
            RecordCategory::Credential,
            &cred_id,
            serde_json::to_string(&cred_json)?,
            tags,
        )
        .await?;
        Ok(cred_id)
    }

    async fn prover_get_credential(
        &self,
        wallet: &impl BaseWallet,
        cred_id: &CredentialId,
    ) -> VcxAnoncredsResult<String> {
        let record = wallet
            .get_record(RecordCategory::Credential, cred_id)
            .await?;
        let cred: Credential = serde_json::from_str(record.value())?;
        let attrs: HashMap<&str, &str> = cred
            .values
            .0
            .iter()
            .map(|(name, value)| (name.as_str(), value.raw.as_str()))
            .collect();
        let cred_rev_id = cred
            .witness
            .as_ref()
            .and_then(|witness| witness["idx"].as_u64());
        Ok(json!({
            "referent": cred_id,
            "attrs": attrs,
            "schema_id": cred.schema_id,
            "cred_def_id": cred.cred_def_id,
            "rev_reg_id": cred.rev_reg_id,
            "cred_rev_id": cred_rev_id,
        })
        .to_string())
    }

    async fn prover_delete_credential(
        &self,
        wallet: &impl BaseWallet,
        cred_id: &CredentialId,
    ) -> VcxAnoncredsResult<()> {
        wallet
            .delete_record(RecordCategory::Credential, cred_id)
            .await?;
        Ok(())
    }
}
