use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, rev_reg_def_id::RevocationRegistryDefinitionId,
        schema_id::SchemaId,
    },
    messages::{
        cred_offer::CredentialOffer,
        cred_request::{CredentialRequest, CredentialRequestMetadata},
        credential::Credential,
    },
};
use aries_vcx_issuance::{
    messages::msg_fields::protocols::cred_issuance::CredentialAttr,
    protocols::issuance::state::{CredentialRole, CredentialState, Trigger},
};
use aries_vcx_wallet::wallet::{
    base_wallet::{record_category::RecordCategory, BaseWallet},
    record_tags::RecordTags,
};
use serde::{Deserialize, Serialize};

use crate::{
    agent::agent_config::RetryConfig,
    error::*,
    storage::{agent_storage_wallet::AgentStorageWallet, StorageRecord},
};

/// One side of a credential exchange, keyed by the thread id of the offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub id: String,
    pub role: CredentialRole,
    pub state: CredentialState,
    pub connection_id: Option<String>,
    pub cred_def_id: CredentialDefinitionId,
    pub schema_id: SchemaId,
    pub offer: CredentialOffer,
    pub preview: Vec<CredentialAttr>,
    pub request: Option<CredentialRequest>,
    pub request_metadata: Option<CredentialRequestMetadata>,
    pub credential: Option<Credential>,
    pub rev_reg_id: Option<RevocationRegistryDefinitionId>,
    pub cred_rev_index: Option<u32>,
    /// Id of the credential in the holder's wallet.
    pub stored_credential_id: Option<String>,
}

impl CredentialRecord {
    pub fn new(
        id: impl Into<String>,
        role: CredentialRole,
        connection_id: Option<String>,
        offer: CredentialOffer,
        preview: Vec<CredentialAttr>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            state: CredentialState::Offered,
            connection_id,
            cred_def_id: offer.cred_def_id.clone(),
            schema_id: offer.schema_id.clone(),
            offer,
            preview,
            request: None,
            request_metadata: None,
            credential: None,
            rev_reg_id: None,
            cred_rev_index: None,
            stored_credential_id: None,
        }
    }

    /// State `trigger` would move the record to, without applying it.
    pub fn next_state(&self, trigger: Trigger) -> AgentResult<CredentialState> {
        self.state.transition(trigger).map_err(|err| {
            AgentError::from(err).extend(format!("Credential record {}", self.id))
        })
    }
}

impl StorageRecord for CredentialRecord {
    const CATEGORY: RecordCategory = RecordCategory::IssuanceRecord;

    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn tags(&self) -> RecordTags {
        let tags = RecordTags::default()
            .with("state", self.state.as_ref())
            .with("role", self.role.as_ref())
            .with("cred_def_id", self.cred_def_id.to_string())
            .with("schema_id", self.schema_id.to_string());
        match &self.connection_id {
            Some(connection_id) => tags.with("connection_id", connection_id.clone()),
            None => tags,
        }
    }
}

/// Loads a record an incoming message refers to, retrying while it is not found.
pub async fn get_with_retry<W: BaseWallet>(
    storage: &AgentStorageWallet<W, CredentialRecord>,
    id: &str,
    retry: RetryConfig,
) -> AgentResult<CredentialRecord> {
    let mut attempt = 0;
    loop {
        match storage.get(id).await {
            Err(err) if err.kind() == AgentErrorKind::RecordNotFound && attempt < retry.attempts => {
                attempt += 1;
                let delay = retry.delay(attempt);
                debug!("Credential record {id} not found, retrying in {delay:?}");
                tokio::time::sleep(delay).await;
            }
            res => return res,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use aries_vcx_wallet::wallet::memory::InMemoryWallet;
    use serde_json::json;

    use super::*;

    fn offer() -> CredentialOffer {
        CredentialOffer {
            schema_id: SchemaId::new_unchecked("V4SGRU86Z58d6TV7PBUe6f:2:gvt:1.0"),
            cred_def_id: CredentialDefinitionId::new_unchecked(
                "V4SGRU86Z58d6TV7PBUe6f:3:CL:20:default",
            ),
            key_correctness_proof: json!({}),
            nonce: "1".into(),
            method_name: None,
        }
    }

    #[test]
    fn test_tags_follow_state() {
        let mut record =
            CredentialRecord::new("t1", CredentialRole::Issuer, Some("c1".into()), offer(), vec![]);
        record.state = record.next_state(Trigger::Request).unwrap();

        let tags = record.tags();
        assert!(tags.get("state").is_some_and(|v| v == "requested"));
        assert!(tags.get("role").is_some_and(|v| v == "issuer"));
        assert!(tags.get("connection_id").is_some_and(|v| v == "c1"));
    }

    #[test]
    fn test_illegal_transition_names_record() {
        let record = CredentialRecord::new("t1", CredentialRole::Holder, None, offer(), vec![]);
        let err = record.next_state(Trigger::Revoke).unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::RecordInInvalidState);
        assert!(err.message.starts_with("Credential record t1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_finds_late_record() {
        let storage = Arc::new(AgentStorageWallet::new(
            "records",
            Arc::new(InMemoryWallet::new("records")),
        ));
        let writer = {
            let storage = storage.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(150)).await;
                storage
                    .insert(&CredentialRecord::new(
                        "t1",
                        CredentialRole::Issuer,
                        None,
                        offer(),
                        vec![],
                    ))
                    .await
                    .unwrap();
            })
        };

        let record = get_with_retry(&storage, "t1", RetryConfig::default())
            .await
            .unwrap();
        assert_eq!(record.id, "t1");
        writer.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_gives_up() {
        let storage: AgentStorageWallet<_, CredentialRecord> =
            AgentStorageWallet::new("records", Arc::new(InMemoryWallet::new("records")));
        let started = tokio::time::Instant::now();
        let err = get_with_retry(&storage, "t1", RetryConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::RecordNotFound);
        assert_eq!(started.elapsed(), Duration::from_millis(100 + 400 + 900));
    }
}
