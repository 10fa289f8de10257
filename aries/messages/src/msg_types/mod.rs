//! Message type resolution. A `@type` is made of a protocol URI, a version and a message kind,
//! e.g. `https://didcomm.org/issue-credential/1.0/offer-credential`.
//!
//! Minor versions are resolved to the highest one we implement for the given major version,
//! so `issue-credential/1.3` is handled as `issue-credential/1.0`.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use strum_macros::{AsRefStr, EnumString};

use crate::error::{MsgTypeError, MsgTypeResult};

const DIDCOMM_ORG_PREFIX: &str = "https://didcomm.org";
const DID_SOV_PREFIX: &str = "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Protocol {
    CredentialIssuanceV1_0,
    RevocationV2_0,
    NotificationV1_0,
    ReportProblemV1_0,
}

impl Protocol {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CredentialIssuanceV1_0 => "issue-credential",
            Self::RevocationV2_0 => "revocation_notification",
            Self::NotificationV1_0 => "notification",
            Self::ReportProblemV1_0 => "report-problem",
        }
    }

    pub const fn version(self) -> (u8, u8) {
        match self {
            Self::RevocationV2_0 => (2, 0),
            _ => (1, 0),
        }
    }

    fn resolve(name: &str, major: u8, minor: u8) -> MsgTypeResult<Self> {
        // every implemented protocol is the x.0 release of its major version
        let protocol = match (name, major) {
            ("issue-credential", 1) => Self::CredentialIssuanceV1_0,
            ("revocation_notification", 2) => Self::RevocationV2_0,
            ("notification", 1) => Self::NotificationV1_0,
            ("report-problem", 1) => Self::ReportProblemV1_0,
            _ => return Err(MsgTypeError::UnknownProtocol(format!("{name}/{major}.{minor}"))),
        };
        Ok(protocol)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor) = self.version();
        write!(f, "{DIDCOMM_ORG_PREFIX}/{}/{major}.{minor}", self.name())
    }
}

impl Serialize for Protocol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl FromStr for Protocol {
    type Err = MsgTypeError;

    /// Parses a `<prefix>/<name>/<major>.<minor>` protocol URI.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = strip_prefix(s)?;
        let (name, version) = rest
            .split_once('/')
            .ok_or_else(|| MsgTypeError::InvalidMessageType(s.to_owned()))?;
        let (major, minor) = parse_version(version)
            .ok_or_else(|| MsgTypeError::InvalidMessageType(s.to_owned()))?;
        Self::resolve(name, major, minor)
    }
}

fn strip_prefix(s: &str) -> MsgTypeResult<&str> {
    [DIDCOMM_ORG_PREFIX, DID_SOV_PREFIX]
        .iter()
        .find_map(|prefix| s.strip_prefix(prefix))
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| MsgTypeError::UnknownPrefix(s.to_owned()))
}

fn parse_version(version: &str) -> Option<(u8, u8)> {
    let (major, minor) = version.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

/// Parsed `@type` field: the resolved protocol and the raw message kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MessageType<'a> {
    pub protocol: Protocol,
    pub kind: &'a str,
}

impl<'a> TryFrom<&'a str> for MessageType<'a> {
    type Error = MsgTypeError;

    fn try_from(msg_type: &'a str) -> Result<Self, Self::Error> {
        let (protocol, kind) = msg_type
            .rsplit_once('/')
            .ok_or_else(|| MsgTypeError::InvalidMessageType(msg_type.to_owned()))?;
        Ok(Self {
            protocol: protocol.parse()?,
            kind,
        })
    }
}

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum CredentialIssuanceTypeV1_0 {
    OfferCredential,
    RequestCredential,
    IssueCredential,
    CredentialPreview,
    Ack,
    ProblemReport,
}

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum RevocationTypeV2_0 {
    Revoke,
    Ack,
}

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum NotificationTypeV1_0 {
    Ack,
    ProblemReport,
}

#[derive(Copy, Clone, Debug, AsRefStr, EnumString, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum ReportProblemTypeV1_0 {
    ProblemReport,
}

/// Parses a message kind string into the kind enum of `protocol`.
pub fn parse_kind<K>(protocol: Protocol, kind: &str) -> Result<K, serde_json::Error>
where
    K: FromStr,
{
    K::from_str(kind).map_err(|_| {
        serde::de::Error::custom(MsgTypeError::unknown_kind(protocol.to_string(), kind))
    })
}

pub(crate) fn expect_kind<K>(protocol: Protocol, kind: &str, expected: K) -> Result<(), serde_json::Error>
where
    K: FromStr + PartialEq,
{
    if parse_kind::<K>(protocol, kind)? == expected {
        Ok(())
    } else {
        Err(serde::de::Error::custom(MsgTypeError::unknown_kind(
            protocol.to_string(),
            kind,
        )))
    }
}

/// Full `@type` string of a message kind.
pub fn type_string(protocol: Protocol, kind: impl AsRef<str>) -> String {
    format!("{protocol}/{}", kind.as_ref())
}

/// Serialization helper that prepends the `@type` field to a message.
#[derive(Serialize)]
pub(crate) struct MsgWithType<'a, T> {
    #[serde(rename = "@type")]
    msg_type: String,
    #[serde(flatten)]
    message: &'a T,
}

impl<'a, T> MsgWithType<'a, T> {
    pub fn new(protocol: Protocol, kind: impl AsRef<str>, message: &'a T) -> Self {
        Self {
            msg_type: type_string(protocol, kind),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_display() {
        assert_eq!(
            Protocol::CredentialIssuanceV1_0.to_string(),
            "https://didcomm.org/issue-credential/1.0"
        );
        assert_eq!(
            Protocol::RevocationV2_0.to_string(),
            "https://didcomm.org/revocation_notification/2.0"
        );
    }

    #[test]
    fn test_msg_type_resolution() {
        let msg_type =
            MessageType::try_from("https://didcomm.org/issue-credential/1.255/offer-credential")
                .unwrap();
        assert_eq!(msg_type.protocol, Protocol::CredentialIssuanceV1_0);
        assert_eq!(msg_type.kind, "offer-credential");
    }

    #[test]
    fn test_msg_type_legacy_prefix() {
        let msg_type = MessageType::try_from(
            "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/issue-credential/1.0/request-credential",
        )
        .unwrap();
        assert_eq!(msg_type.protocol, Protocol::CredentialIssuanceV1_0);
        assert_eq!(
            parse_kind::<CredentialIssuanceTypeV1_0>(msg_type.protocol, msg_type.kind).unwrap(),
            CredentialIssuanceTypeV1_0::RequestCredential
        );
    }

    #[test]
    fn test_unsupported_major_version() {
        let err = MessageType::try_from("https://didcomm.org/issue-credential/2.0/offer-credential")
            .unwrap_err();
        assert!(matches!(err, MsgTypeError::UnknownProtocol(_)));
    }

    #[test]
    fn test_revocation_kinds() {
        assert_eq!(RevocationTypeV2_0::Revoke.as_ref(), "revoke");
        assert_eq!(
            type_string(Protocol::RevocationV2_0, RevocationTypeV2_0::Revoke),
            "https://didcomm.org/revocation_notification/2.0/revoke"
        );
    }
}
