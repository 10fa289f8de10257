use std::sync::Arc;

use aries_vcx_issuance::messages::AriesMessage;
use aries_vcx_wallet::wallet::{
    base_wallet::{record_category::RecordCategory, BaseWallet},
    record_tags::RecordTags,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::*,
    storage::{agent_storage_wallet::AgentStorageWallet, StorageRecord},
    transport::MessageSender,
};

/// An established pairwise relationship. `pairwise_did` is our side of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub pairwise_did: String,
    pub their_did: String,
    pub label: Option<String>,
}

impl StorageRecord for Connection {
    const CATEGORY: RecordCategory = RecordCategory::Connection;

    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn tags(&self) -> RecordTags {
        RecordTags::default().with("their_did", self.their_did.clone())
    }
}

pub struct ServiceConnections<W> {
    wallet: Arc<W>,
    sender: Arc<dyn MessageSender>,
    connections: AgentStorageWallet<W, Connection>,
}

impl<W: BaseWallet> ServiceConnections<W> {
    pub fn new(wallet: Arc<W>, sender: Arc<dyn MessageSender>) -> Self {
        Self {
            connections: AgentStorageWallet::new("connections", wallet.clone()),
            wallet,
            sender,
        }
    }

    pub async fn create_connection(
        &self,
        their_did: &str,
        label: Option<String>,
    ) -> AgentResult<String> {
        let did_data = self.wallet.create_and_store_my_did(None, None).await?;
        let connection = Connection {
            id: Uuid::new_v4().to_string(),
            pairwise_did: did_data.did().to_string(),
            their_did: their_did.to_string(),
            label,
        };
        let id = self.connections.insert(&connection).await?;
        info!("Created connection {id} with {their_did}");
        Ok(id)
    }

    pub async fn get_by_id(&self, connection_id: &str) -> AgentResult<Connection> {
        self.connections.get(connection_id).await
    }

    pub async fn list(&self) -> AgentResult<Vec<Connection>> {
        self.connections.find_by(RecordTags::default()).await
    }

    pub async fn send_message(
        &self,
        connection_id: &str,
        message: impl Into<AriesMessage>,
    ) -> AgentResult<()> {
        let connection = self.get_by_id(connection_id).await?;
        let message = message.into();
        debug!("Sending {} over connection {connection_id}", message.id());
        self.sender
            .send_message(&connection, message)
            .await
            .map_err(|err| {
                AgentError::from_msg(AgentErrorKind::PostMessageFailed, &err.message)
                    .extend(format!("Unable to deliver message to {connection_id}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use aries_vcx_issuance::protocols::issuance::builders::build_credential_ack;
    use aries_vcx_wallet::wallet::memory::InMemoryWallet;

    use super::*;
    use crate::transport::MockMessageSender;

    #[tokio::test]
    async fn test_send_message_uses_stored_connection() {
        let mut sender = MockMessageSender::new();
        sender
            .expect_send_message()
            .withf(|connection, _| connection.their_did == "their-did")
            .times(1)
            .returning(|_, _| Ok(()));
        let service =
            ServiceConnections::new(Arc::new(InMemoryWallet::new("conn")), Arc::new(sender));

        let id = service
            .create_connection("their-did", Some("alice".into()))
            .await
            .unwrap();
        service
            .send_message(&id, build_credential_ack("thread-1"))
            .await
            .unwrap();
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported() {
        let mut sender = MockMessageSender::new();
        sender.expect_send_message().returning(|_, _| {
            Err(AgentError::from_msg(AgentErrorKind::UnknownError, "endpoint down"))
        });
        let service =
            ServiceConnections::new(Arc::new(InMemoryWallet::new("conn")), Arc::new(sender));
        let id = service.create_connection("their-did", None).await.unwrap();

        let err = service
            .send_message(&id, build_credential_ack("thread-1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::PostMessageFailed);
        assert!(err.message.contains("endpoint down"));
    }

    #[tokio::test]
    async fn test_unknown_connection() {
        let service = ServiceConnections::new(
            Arc::new(InMemoryWallet::new("conn")),
            Arc::new(MockMessageSender::new()),
        );
        let err = service
            .send_message("missing", build_credential_ack("thread-1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AgentErrorKind::RecordNotFound);
    }
}
