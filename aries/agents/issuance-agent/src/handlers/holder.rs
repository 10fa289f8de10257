use std::sync::Arc;

use aries_vcx_anoncreds::anoncreds::base_anoncreds::BaseAnonCreds;
use aries_vcx_issuance::{
    common::{
        credentials::{encoding::validate_attributes, get_cred_rev_id},
        primitives::credential_definition::resolve_cred_def,
    },
    messages::{
        msg_fields::protocols::{
            cred_issuance::v1::{
                issue_credential::IssueCredentialV1, offer_credential::OfferCredentialV1,
                request_credential::RequestCredentialV1,
            },
            revocation::revoke::Revoke,
        },
        AriesMessage,
    },
    protocols::{
        issuance::{
            builders::{
                build_credential_ack, build_credential_problem_report,
                build_credential_request_msg, credential_from_msg, offer_from_msg,
            },
            state::{CredentialRole, CredentialState, Trigger},
        },
        revocation_notification::{build_revocation_ack, parse_notification_credential_id},
    },
};
use aries_vcx_ledger::ledger::base_ledger::AnoncredsLedgerRead;
use aries_vcx_wallet::wallet::{base_wallet::BaseWallet, record_tags::RecordTags};

use crate::{
    agent::agent_config::RetryConfig,
    error::*,
    handlers::{
        connection::ServiceConnections,
        credential_record::{get_with_retry, CredentialRecord},
    },
    storage::{agent_storage_wallet::AgentStorageWallet, keyed_locks::KeyedLocks},
};

pub const DEFAULT_LINK_SECRET_ID: &str = "main";

pub struct ServiceCredentialsHolder<W, A, L> {
    ledger: Arc<L>,
    anoncreds: Arc<A>,
    wallet: Arc<W>,
    retry: RetryConfig,
    link_secret_id: String,
    creds_holder: AgentStorageWallet<W, CredentialRecord>,
    record_locks: KeyedLocks,
    service_connections: Arc<ServiceConnections<W>>,
}

impl<W, A, L> ServiceCredentialsHolder<W, A, L>
where
    W: BaseWallet,
    A: BaseAnonCreds,
    L: AnoncredsLedgerRead,
{
    pub fn new(
        ledger: Arc<L>,
        anoncreds: Arc<A>,
        wallet: Arc<W>,
        retry: RetryConfig,
        service_connections: Arc<ServiceConnections<W>>,
    ) -> Self {
        Self {
            creds_holder: AgentStorageWallet::new("creds-holder", wallet.clone()),
            record_locks: KeyedLocks::new(),
            link_secret_id: DEFAULT_LINK_SECRET_ID.to_string(),
            ledger,
            anoncreds,
            wallet,
            retry,
            service_connections,
        }
    }

    pub fn link_secret_id(&self) -> &str {
        &self.link_secret_id
    }

    async fn get_holder_record(&self, thread_id: &str) -> AgentResult<CredentialRecord> {
        let record = self.creds_holder.get(thread_id).await?;
        ensure_holder(&record)?;
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

    pub async fn process_offer(
        &self,
        offer: OfferCredentialV1,
        connection_id: Option<&str>,
    ) -> AgentResult<String> {
        let thread_id = offer
            .decorators
            .thread
            .as_ref()
            .map_or(offer.id.clone(), |thread| thread.thid.clone());
        let cred_offer = offer_from_msg(&offer)?;
        let preview = offer.content.credential_preview.attributes;
        validate_attributes(&preview)?;

        let record = CredentialRecord::new(
            &thread_id,
            CredentialRole::Holder,
            connection_id.map(String::from),
            cred_offer,
            preview,
        );
        self.creds_holder.insert(&record).await?;
        info!(
            "Received credential offer {thread_id} of {}",
            record.cred_def_id
        );
        Ok(thread_id)
    }

    /// Answers the offer of `thread_id`. Connectionless exchanges get a fresh DID.
    pub async fn create_request(&self, thread_id: &str) -> AgentResult<RequestCredentialV1> {
        let _guard = self.record_locks.lock(thread_id).await?;
        let mut record = self.get_holder_record(thread_id).await?;
        let state = record.next_state(Trigger::Request)?;

        let prover_did = match &record.connection_id {
            Some(connection_id) => {
                self.service_connections
                    .get_by_id(connection_id)
                    .await?
                    .pairwise_did
            }
            None => self
                .wallet
                .create_and_store_my_did(None, None)
                .await?
                .did()
                .to_string(),
        };
        let cred_def =
            resolve_cred_def(self.ledger.as_ref(), &record.cred_def_id, &record.schema_id).await?;
        let (request, metadata) = self
            .anoncreds
            .prover_create_credential_req(
                self.wallet.as_ref(),
                &prover_did,
                record.offer.clone(),
                cred_def,
                &self.link_secret_id,
            )
            .await
            .map_err(|err| {
                AgentError::from(err).extend(format!("Unable to build request for {thread_id}"))
            })?;
        let msg = build_credential_request_msg(thread_id, &request)?;

        record.request = Some(request);
        record.request_metadata = Some(metadata);
        record.state = state;
        self.creds_holder.update(&record).await?;
        info!("Created credential request on {thread_id}");

        self.send_if_connected(&record, msg.clone()).await?;
        Ok(msg)
    }

    /// Verifies and stores the issued credential. Sends an ack when the issuer asked for
    /// one and the record has a connection.
    pub async fn process_credential(
        &self,
        credential: IssueCredentialV1,
        connection_id: Option<&str>,
    ) -> AgentResult<String> {
        let thread_id = credential.decorators.thread.thid.clone();
        let cred = credential_from_msg(&credential)?;
        let _guard = self.record_locks.lock(&thread_id).await?;
        let mut record = get_with_retry(&self.creds_holder, &thread_id, self.retry).await?;
        ensure_holder(&record)?;
        let state = record.next_state(Trigger::Issue)?;
        let metadata = record.request_metadata.clone().ok_or_else(|| {
            AgentError::from_msg(
                AgentErrorKind::InvalidState,
                &format!("Credential record {thread_id} holds no request metadata"),
            )
        })?;
        if cred.cred_def_id != record.cred_def_id {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidMessage,
                &format!(
                    "Credential on {thread_id} is of {}, offer was of {}",
                    cred.cred_def_id, record.cred_def_id
                ),
            ));
        }

        let cred_def =
            resolve_cred_def(self.ledger.as_ref(), &record.cred_def_id, &record.schema_id).await?;
        let rev_reg_def = match &cred.rev_reg_id {
            Some(rev_reg_id) => Some(self.ledger.get_rev_reg_def_json(rev_reg_id).await?),
            None => None,
        };
        let stored_credential_id = self
            .anoncreds
            .prover_store_credential(
                self.wallet.as_ref(),
                metadata,
                cred.clone(),
                cred_def,
                rev_reg_def,
            )
            .await
            .map_err(|err| {
                AgentError::from(err).extend(format!("Unable to store credential {thread_id}"))
            })?;

        let cred_rev_index = match &cred.rev_reg_id {
            Some(_) => Some(
                get_cred_rev_id(self.wallet.as_ref(), self.anoncreds.as_ref(), &stored_credential_id)
                    .await?,
            ),
            None => None,
        };

        record.rev_reg_id = cred.rev_reg_id.clone();
        record.cred_rev_index = cred_rev_index;
        record.credential = Some(cred);
        record.stored_credential_id = Some(stored_credential_id);
        if record.connection_id.is_none() {
            record.connection_id = connection_id.map(String::from);
        }
        record.state = state;
        self.creds_holder.update(&record).await?;
        info!("Stored credential {thread_id}");

        if credential.decorators.please_ack.is_some() {
            self.send_if_connected(&record, build_credential_ack(&thread_id))
                .await?;
        }
        Ok(thread_id)
    }

    /// Marks the credential named by an issuer's revocation notification as revoked.
    /// The notification's parent thread is the issuance thread.
    pub async fn process_revocation_notification(&self, notification: Revoke) -> AgentResult<String> {
        let (rev_reg_id, index) =
            parse_notification_credential_id(&notification.content.credential_id)?;
        let thread_id = notification
            .decorators
            .thread
            .as_ref()
            .and_then(|thread| thread.pthid.clone())
            .ok_or_else(|| {
                AgentError::from_msg(
                    AgentErrorKind::InvalidMessage,
                    "Revocation notification does not reference an issuance thread",
                )
            })?;

        let _guard = self.record_locks.lock(&thread_id).await?;
        let mut record = self.get_holder_record(&thread_id).await?;
        let state = record.next_state(Trigger::Revoke)?;
        if record.rev_reg_id.as_ref() != Some(&rev_reg_id) {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidRevocationDetails,
                &format!(
                    "Notification names registry {rev_reg_id}, credential {thread_id} belongs to \
                     {:?}",
                    record.rev_reg_id
                ),
            ));
        }
        if record.cred_rev_index != Some(index) {
            return Err(AgentError::from_msg(
                AgentErrorKind::InvalidRevocationDetails,
                &format!(
                    "Notification names index {index}, credential {thread_id} holds {:?}",
                    record.cred_rev_index
                ),
            ));
        }
        record.state = state;
        self.creds_holder.update(&record).await?;
        info!("Credential {thread_id} was revoked by its issuer");

        if notification.decorators.please_ack.is_some() {
            self.send_if_connected(&record, build_revocation_ack(&notification))
                .await?;
        }
        Ok(thread_id)
    }

    pub async fn reject(&self, thread_id: &str, comment: Option<String>) -> AgentResult<()> {
        let _guard = self.record_locks.lock(thread_id).await?;
        let mut record = self.get_holder_record(thread_id).await?;
        record.state = record.next_state(Trigger::Reject)?;
        self.creds_holder.update(&record).await?;
        info!("Rejected credential offer {thread_id}");
        self.send_if_connected(&record, build_credential_problem_report(thread_id, comment))
            .await
    }

    pub async fn get(&self, thread_id: &str) -> AgentResult<CredentialRecord> {
        self.get_holder_record(thread_id).await
    }

    pub async fn get_state(&self, thread_id: &str) -> AgentResult<CredentialState> {
        Ok(self.get(thread_id).await?.state)
    }

    pub async fn list(&self, query: Option<RecordTags>) -> AgentResult<Vec<CredentialRecord>> {
        let query = query
            .unwrap_or_default()
            .with("role", CredentialRole::Holder.as_ref());
        self.creds_holder.find_by(query).await
    }

    /// Removes the record and, best effort, the credential stored for it.
    pub async fn delete(&self, thread_id: &str) -> AgentResult<()> {
        let _guard = self.record_locks.lock(thread_id).await?;
        let record = self.get_holder_record(thread_id).await?;
        if let Some(stored_credential_id) = &record.stored_credential_id {
            if let Err(err) = self
                .anoncreds
                .prover_delete_credential(self.wallet.as_ref(), stored_credential_id)
                .await
            {
                warn!("Unable to delete stored credential {stored_credential_id}: {err}");
            }
        }
        self.creds_holder.remove(thread_id).await?;
        info!("Deleted credential record {thread_id}");
        Ok(())
    }
}

fn ensure_holder(record: &CredentialRecord) -> AgentResult<()> {
    if record.role != CredentialRole::Holder {
        return Err(AgentError::from_msg(
            AgentErrorKind::InvalidState,
            &format!("Credential record {} belongs to the issuer", record.id),
        ));
    }
    Ok(())
}
