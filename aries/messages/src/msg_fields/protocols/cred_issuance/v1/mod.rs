pub mod ack;
pub mod issue_credential;
pub mod offer_credential;
pub mod problem_report;
pub mod request_credential;

use derive_more::From;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use self::{
    ack::AckCredentialV1, issue_credential::IssueCredentialV1,
    offer_credential::OfferCredentialV1, problem_report::CredIssuanceV1ProblemReport,
    request_credential::RequestCredentialV1,
};
use super::CredentialAttr;
use crate::msg_types::{
    parse_kind, type_string, CredentialIssuanceTypeV1_0, MsgWithType, Protocol,
};

const PROTOCOL: Protocol = Protocol::CredentialIssuanceV1_0;

#[derive(Clone, Debug, From, PartialEq)]
pub enum CredentialIssuanceV1 {
    OfferCredential(OfferCredentialV1),
    RequestCredential(RequestCredentialV1),
    IssueCredential(IssueCredentialV1),
    Ack(AckCredentialV1),
    ProblemReport(CredIssuanceV1ProblemReport),
}

impl CredentialIssuanceV1 {
    pub fn id(&self) -> &str {
        match self {
            Self::OfferCredential(msg) => &msg.id,
            Self::RequestCredential(msg) => &msg.id,
            Self::IssueCredential(msg) => &msg.id,
            Self::Ack(msg) => &msg.id,
            Self::ProblemReport(msg) => &msg.id,
        }
    }

    pub(crate) fn from_kind(kind: &str, value: Value) -> Result<Self, serde_json::Error> {
        match parse_kind(PROTOCOL, kind)? {
            CredentialIssuanceTypeV1_0::OfferCredential => {
                serde_json::from_value::<OfferCredentialV1>(value).map(From::from)
            }
            CredentialIssuanceTypeV1_0::RequestCredential => {
                serde_json::from_value::<RequestCredentialV1>(value).map(From::from)
            }
            CredentialIssuanceTypeV1_0::IssueCredential => {
                serde_json::from_value::<IssueCredentialV1>(value).map(From::from)
            }
            CredentialIssuanceTypeV1_0::Ack => {
                serde_json::from_value::<AckCredentialV1>(value).map(From::from)
            }
            CredentialIssuanceTypeV1_0::ProblemReport => {
                serde_json::from_value::<CredIssuanceV1ProblemReport>(value).map(From::from)
            }
            CredentialIssuanceTypeV1_0::CredentialPreview => Err(serde::de::Error::custom(
                format!("{kind} is not a standalone message"),
            )),
        }
    }

    pub(crate) fn delayed_serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use CredentialIssuanceTypeV1_0 as Kind;
        match self {
            Self::OfferCredential(v) => {
                MsgWithType::new(PROTOCOL, Kind::OfferCredential, v).serialize(serializer)
            }
            Self::RequestCredential(v) => {
                MsgWithType::new(PROTOCOL, Kind::RequestCredential, v).serialize(serializer)
            }
            Self::IssueCredential(v) => {
                MsgWithType::new(PROTOCOL, Kind::IssueCredential, v).serialize(serializer)
            }
            Self::Ack(v) => MsgWithType::new(PROTOCOL, Kind::Ack, v).serialize(serializer),
            Self::ProblemReport(v) => {
                MsgWithType::new(PROTOCOL, Kind::ProblemReport, v).serialize(serializer)
            }
        }
    }
}

/// Attribute preview sent along with an offer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CredentialPreviewV1 {
    #[serde(rename = "@type")]
    msg_type: String,
    pub attributes: Vec<CredentialAttr>,
}

impl CredentialPreviewV1 {
    pub fn new(attributes: Vec<CredentialAttr>) -> Self {
        Self {
            msg_type: type_string(PROTOCOL, CredentialIssuanceTypeV1_0::CredentialPreview),
            attributes,
        }
    }
}

macro_rules! into_aries_msg {
    ($($msg:ty),+) => {
        $(
            impl From<$msg> for crate::AriesMessage {
                fn from(value: $msg) -> Self {
                    Self::CredentialIssuance(CredentialIssuanceV1::from(value))
                }
            }
        )+
    };
}

into_aries_msg!(
    OfferCredentialV1,
    RequestCredentialV1,
    IssueCredentialV1,
    AckCredentialV1,
    CredIssuanceV1ProblemReport
);
