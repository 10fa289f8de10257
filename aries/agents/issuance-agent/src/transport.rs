use async_trait::async_trait;
use aries_vcx_issuance::messages::AriesMessage;

use crate::{error::*, handlers::connection::Connection};

/// Delivery of protocol messages to the other side of a connection. Encryption and
/// routing are the implementor's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, connection: &Connection, message: AriesMessage)
        -> AgentResult<()>;
}
