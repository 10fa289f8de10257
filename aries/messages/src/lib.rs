#![allow(clippy::module_inception)]
#![allow(clippy::derive_partial_eq_without_eq)]
#![allow(clippy::large_enum_variant)]

pub mod decorators;
pub mod error;
pub mod misc;
pub mod msg_fields;
pub mod msg_parts;
pub mod msg_types;

use derive_more::From;
use msg_fields::protocols::{
    cred_issuance::v1::CredentialIssuanceV1, notification::ack::Ack,
    report_problem::ProblemReport, revocation::Revocation,
};
use msg_types::{MessageType, NotificationTypeV1_0, Protocol, ReportProblemTypeV1_0};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::msg_types::MsgWithType;

/// Enum that can represent any message of the implemented protocols.
///
/// It abstracts away the `@type` field and uses it to determine how
/// to deserialize the input into the correct message type.
///
/// It also automatically appends the correct `@type` field when serializing
/// a message.
#[derive(Clone, Debug, From, PartialEq)]
pub enum AriesMessage {
    CredentialIssuance(CredentialIssuanceV1),
    Revocation(Revocation),
    Notification(Ack),
    ReportProblem(ProblemReport),
}

impl AriesMessage {
    /// The `@id` of the wrapped message.
    pub fn id(&self) -> &str {
        match self {
            Self::CredentialIssuance(msg) => msg.id(),
            Self::Revocation(msg) => msg.id(),
            Self::Notification(msg) => &msg.id,
            Self::ReportProblem(msg) => &msg.id,
        }
    }
}

impl<'de> Deserialize<'de> for AriesMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;
        let msg_type = value
            .as_object_mut()
            .and_then(|obj| obj.remove("@type"))
            .ok_or_else(|| D::Error::missing_field("@type"))?;
        let msg_type = msg_type
            .as_str()
            .ok_or_else(|| D::Error::custom("@type must be a string"))?;
        let msg_type = MessageType::try_from(msg_type).map_err(D::Error::custom)?;

        Self::from_parts(msg_type, value).map_err(D::Error::custom)
    }
}

impl AriesMessage {
    fn from_parts(msg_type: MessageType<'_>, value: Value) -> Result<Self, serde_json::Error> {
        let MessageType { protocol, kind } = msg_type;
        match protocol {
            Protocol::CredentialIssuanceV1_0 => {
                CredentialIssuanceV1::from_kind(kind, value).map(From::from)
            }
            Protocol::RevocationV2_0 => Revocation::from_kind(kind, value).map(From::from),
            Protocol::NotificationV1_0 => {
                msg_types::expect_kind(protocol, kind, NotificationTypeV1_0::Ack)?;
                serde_json::from_value(value).map(Self::Notification)
            }
            Protocol::ReportProblemV1_0 => {
                msg_types::expect_kind(protocol, kind, ReportProblemTypeV1_0::ProblemReport)?;
                serde_json::from_value(value).map(Self::ReportProblem)
            }
        }
    }
}

impl Serialize for AriesMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::CredentialIssuance(msg) => msg.delayed_serialize(serializer),
            Self::Revocation(msg) => msg.delayed_serialize(serializer),
            Self::Notification(msg) => MsgWithType::new(
                Protocol::NotificationV1_0,
                NotificationTypeV1_0::Ack,
                msg,
            )
            .serialize(serializer),
            Self::ReportProblem(msg) => MsgWithType::new(
                Protocol::ReportProblemV1_0,
                ReportProblemTypeV1_0::ProblemReport,
                msg,
            )
            .serialize(serializer),
        }
    }
}

impl std::fmt::Display for AriesMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
