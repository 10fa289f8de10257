//! Module containing the `revocation notification` protocol messages, as defined in the [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0721-revocation-notification-v2/README.md>).

pub mod ack;
pub mod revoke;

use derive_more::From;
use serde::{Serialize, Serializer};
use serde_json::Value;

use self::{ack::AckRevoke, revoke::Revoke};
use crate::msg_types::{parse_kind, MsgWithType, Protocol, RevocationTypeV2_0};

const PROTOCOL: Protocol = Protocol::RevocationV2_0;

#[derive(Clone, Debug, From, PartialEq)]
pub enum Revocation {
    Revoke(Revoke),
    Ack(AckRevoke),
}

impl Revocation {
    pub fn id(&self) -> &str {
        match self {
            Self::Revoke(msg) => &msg.id,
            Self::Ack(msg) => &msg.id,
        }
    }

    pub(crate) fn from_kind(kind: &str, value: Value) -> Result<Self, serde_json::Error> {
        match parse_kind(PROTOCOL, kind)? {
            RevocationTypeV2_0::Revoke => serde_json::from_value::<Revoke>(value).map(From::from),
            RevocationTypeV2_0::Ack => serde_json::from_value::<AckRevoke>(value).map(From::from),
        }
    }

    pub(crate) fn delayed_serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Revoke(v) => {
                MsgWithType::new(PROTOCOL, RevocationTypeV2_0::Revoke, v).serialize(serializer)
            }
            Self::Ack(v) => {
                MsgWithType::new(PROTOCOL, RevocationTypeV2_0::Ack, v).serialize(serializer)
            }
        }
    }
}

impl From<Revoke> for crate::AriesMessage {
    fn from(value: Revoke) -> Self {
        Self::Revocation(value.into())
    }
}

impl From<AckRevoke> for crate::AriesMessage {
    fn from(value: AckRevoke) -> Self {
        Self::Revocation(value.into())
    }
}
