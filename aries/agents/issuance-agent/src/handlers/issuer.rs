use std::sync::Arc;

use anoncreds_types::data_types::identifiers::cred_def_id::CredentialDefinitionId;
use aries_vcx_anoncreds::anoncreds::base_anoncreds::BaseAnonCreds;
use aries_vcx_issuance::{
    common::credentials::encoding::{encode_attributes, validate_attributes},
    handlers::util::thread_id_of,
    messages::{
        msg_fields::protocols::{
            cred_issuance::{
                v1::{
                    ack::AckCredentialV1, issue_credential::IssueCredentialV1,
                    offer_credential::OfferCredentialV1, request_credential::RequestCredentialV1,
                },
                CredentialAttr,
            },
            revocation::revoke::Revoke,
        },
        AriesMessage,
    },
    protocols::{
        issuance::{
            builders::{
                build_credential_msg, build_credential_offer_msg,
                build_credential_problem_report, request_from_msg,
            },
            state::{CredentialRole, CredentialState, Trigger},
        },
        revocation_notification::build_revocation_notification,
    },
};
use aries_vcx_ledger::ledger::base_ledger::{AnoncredsLedgerRead, AnoncredsLedgerWrite};
use aries_vcx_wallet::wallet::{base_wallet::BaseWallet, record_tags::RecordTags};
use uuid::Uuid;

use crate::{
    agent::agent_config::RetryConfig,
    error::*,
    handlers::{
        connection::ServiceConnections,
        credential_definition::ServiceCredentialDefinitions,
        credential_record::{get_with_retry, CredentialRecord},
        revocation_registry::ServiceRevocationRegistries,
    },
    storage::{agent_storage_wallet::AgentStorageWallet, keyed_locks::KeyedLocks},
};

pub struct ServiceCredentialsIssuer<W, A, L> {
    anoncreds: Arc<A>,
    wallet: Arc<W>,
    retry: RetryConfig,
    creds_issuer: AgentStorageWallet<W, CredentialRecord>,
    record_locks: KeyedLocks,
    service_connections: Arc<ServiceConnections<W>>,
    service_cred_defs: Arc<ServiceCredentialDefinitions<W, A, L>>,
    service_rev_regs: Arc<ServiceRevocationRegistries<W, A, L>>,
}

impl<W, A, L> ServiceCredentialsIssuer<W, A, L>
where
    W: BaseWallet,
    A: BaseAnonCreds,
    L: AnoncredsLedgerRead + AnoncredsLedgerWrite,
{
    pub fn new(
        anoncreds: Arc<A>,
        wallet: Arc<W>,
        retry: RetryConfig,
        service_connections: Arc<ServiceConnections<W>>,
        service_cred_defs: Arc<ServiceCredentialDefinitions<W, A, L>>,
        service_rev_regs: Arc<ServiceRevocationRegistries<W, A, L>>,
    ) -> Self {
        Self {
            creds_issuer: AgentStorageWallet::new("creds-issuer", wallet.clone()),
            record_locks: KeyedLocks::new(),
            anoncreds,
            wallet,
            retry,
            service_connections,
            service_cred_defs,
            service_rev_regs,
        }
    }

    async fn get_issuer_record(&self, thread_id: &str) -> AgentResult<CredentialRecord> {
        let record = self.creds_issuer.get(thread_id).await?;
        ensure_issuer(&record)?;
        Ok(record)
    }

    async fn send_if_connected(
        &self,
        record: &CredentialRecord,
        message: impl Into<AriesMessage>,
    ) -> AgentResult<()> {
        match &record.connection_id {
            Some(connection_id) => {
                self.service_connections
                    .send_message(connection_id, message)
                    .await
            }
            None => Ok(()),
        }
    }

    /// Opens a new issuance thread. The offer is sent when a connection is given.
    pub async fn create_offer(
        &self,
        cred_def_id: &CredentialDefinitionId,
        attributes: Option<Vec<CredentialAttr>>,
        connection_id: Option<&str>,
    ) -> AgentResult<OfferCredentialV1> {
        let definition = self.service_cred_defs.get_cred_def(cred_def_id).await?;
        let preview = attributes.unwrap_or_default();
        validate_attributes(&preview)?;
        if let Some(connection_id) = connection_id {
            self.service_connections.get_by_id(connection_id).await?;
        }

        let offer = self
            .anoncreds
            .issuer_create_credential_offer(self.wallet.as_ref(), cred_def_id)
            .await?;
        let thread_id = Uuid::new_v4().to_string();
        let msg = build_credential_offer_msg(&thread_id, &offer, preview.clone(), None)?;

        let mut record = CredentialRecord::new(
            &thread_id,
            CredentialRole::Issuer,
            connection_id.map(String::from),
            offer,
            preview,
        );
        record.schema_id = definition.schema_id;
        self.creds_issuer.insert(&record).await?;
        info!("Created credential offer {thread_id} of {cred_def_id}");

        self.send_if_connected(&record, msg.clone()).await?;
        Ok(msg)
    }

    pub async fn process_credential_request(
        &self,
        request: RequestCredentialV1,
        connection_id: Option<&str>,
    ) -> AgentResult<String> {
        let thread_id = thread_id_of(&AriesMessage::from(request.clone())).to_string();
        let cred_request = request_from_msg(&request)?;
        let _guard = self.record_locks.lock(&thread_id).await?;
        let mut record = get_with_retry(&self.creds_issuer, &thread_id, self.retry).await?;
        ensure_issuer(&record)?;
        let state = record.next_state(Trigger::Request)?;
        if cred_request.cred_def_id != record.cred_def_id {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidMessage,
                &format!(
                    "Request of {thread_id} is for {}, offer was for {}",
                    cred_request.cred_def_id, record.cred_def_id
                ),
            ));
        }

        record.request = Some(cred_request);
        if record.connection_id.is_none() {
            record.connection_id = connection_id.map(String::from);
        }
        record.state = state;
        self.creds_issuer.update(&record).await?;
        info!("Received credential request on {thread_id}");
        Ok(thread_id)
    }

    /// Signs the requested credential. `attributes`, when given, replace the values of
    /// the offer preview.
    pub async fn create_credential(
        &self,
        thread_id: &str,
        attributes: Option<Vec<CredentialAttr>>,
    ) -> AgentResult<IssueCredentialV1> {
        let _guard = self.record_locks.lock(thread_id).await?;
        let mut record = self.get_issuer_record(thread_id).await?;
        let state = record.next_state(Trigger::Issue)?;
        let request = record.request.clone().ok_or_else(|| {
            AgentError::from_msg(
                AgentErrorKind::InvalidState,
                &format!("Credential record {thread_id} holds no request"),
            )
        })?;
        if let Some(attributes) = attributes {
            record.preview = attributes;
        }
        let values = encode_attributes(&record.preview)?;

        let issued = self
            .service_rev_regs
            .issue_credential(&record.cred_def_id, record.offer.clone(), request, values)
            .await
            .map_err(|err| err.extend(format!("Unable to issue credential {thread_id}")))?;
        let msg = build_credential_msg(thread_id, &issued.credential, record.connection_id.is_some())?;

        record.credential = Some(issued.credential);
        record.rev_reg_id = issued.rev_reg_id;
        record.cred_rev_index = issued.index;
        record.state = state;
        self.creds_issuer.update(&record).await.map_err(|err| {
            err.extend(format!(
                "Credential {thread_id} was issued (registry {:?}, index {:?}) but not recorded",
                record.rev_reg_id, record.cred_rev_index
            ))
        })?;
        info!("Issued credential {thread_id}");

        self.send_if_connected(&record, msg.clone()).await?;
        Ok(msg)
    }

    pub async fn process_credential_ack(&self, ack: AckCredentialV1) -> AgentResult<()> {
        let message = AriesMessage::from(ack);
        let thread_id = thread_id_of(&message);
        let record = get_with_retry(&self.creds_issuer, thread_id, self.retry).await?;
        ensure_issuer(&record)?;
        if record.state != CredentialState::Issued {
            return Err(AgentError::from_msg(
                AgentErrorKind::RecordInInvalidState,
                &format!("Ack on {thread_id}, which is {}", record.state),
            ));
        }
        info!("Holder acknowledged credential {thread_id}");
        Ok(())
    }

    pub async fn reject(&self, thread_id: &str, comment: Option<String>) -> AgentResult<()> {
        let _guard = self.record_locks.lock(thread_id).await?;
        let mut record = self.get_issuer_record(thread_id).await?;
        record.state = record.next_state(Trigger::Reject)?;
        self.creds_issuer.update(&record).await?;
        info!("Rejected credential {thread_id}");
        self.send_if_connected(&record, build_credential_problem_report(thread_id, comment))
            .await
    }

    /// Revokes an issued credential. The record only becomes Revoked once the ledger
    /// accepted the registry entry. Returns the notification when `notify` is set; it is
    /// also sent when the record has a connection.
    pub async fn revoke(&self, thread_id: &str, notify: bool) -> AgentResult<Option<Revoke>> {
        let _guard = self.record_locks.lock(thread_id).await?;
        let mut record = self.get_issuer_record(thread_id).await?;
        let state = record.next_state(Trigger::Revoke)?;
        let (Some(rev_reg_id), Some(index)) = (record.rev_reg_id.clone(), record.cred_rev_index)
        else {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidRevocationDetails,
                &format!("Credential {thread_id} was issued without a revocation registry"),
            ));
        };

        self.service_rev_regs
            .revoke_index(&rev_reg_id, index)
            .await
            .map_err(|err| err.extend(format!("Unable to revoke credential {thread_id}")))?;
        record.state = state;
        self.creds_issuer.update(&record).await?;
        info!("Revoked credential {thread_id}");

        if !notify {
            return Ok(None);
        }
        let notification = build_revocation_notification(&rev_reg_id, index, thread_id, None);
        self.send_if_connected(&record, notification.clone()).await?;
        Ok(Some(notification))
    }

    pub async fn is_revoked(&self, thread_id: &str) -> AgentResult<bool> {
        let record = self.get_issuer_record(thread_id).await?;
        match (&record.rev_reg_id, record.cred_rev_index) {
            (Some(rev_reg_id), Some(index)) => {
                self.service_rev_regs.is_revoked(rev_reg_id, index).await
            }
            _ => Ok(false),
        }
    }

    pub async fn get(&self, thread_id: &str) -> AgentResult<CredentialRecord> {
        self.get_issuer_record(thread_id).await
    }

    pub async fn get_state(&self, thread_id: &str) -> AgentResult<CredentialState> {
        Ok(self.get(thread_id).await?.state)
    }

    /// Issuer records matching `query`; all of them when `None`.
    pub async fn list(&self, query: Option<RecordTags>) -> AgentResult<Vec<CredentialRecord>> {
        let query = query
            .unwrap_or_default()
            .with("role", CredentialRole::Issuer.as_ref());
        self.creds_issuer.find_by(query).await
    }

    pub async fn delete(&self, thread_id: &str) -> AgentResult<()> {
        let _guard = self.record_locks.lock(thread_id).await?;
        self.get_issuer_record(thread_id).await?;
        self.creds_issuer.remove(thread_id).await?;
        info!("Deleted credential record {thread_id}");
        Ok(())
    }
}

fn ensure_issuer(record: &CredentialRecord) -> AgentResult<()> {
    if record.role != CredentialRole::Issuer {
        return Err(AgentError::from_msg(
            AgentErrorKind::InvalidState,
            &format!("Credential record {} belongs to the holder", record.id),
        ));
    }
    Ok(())
}
