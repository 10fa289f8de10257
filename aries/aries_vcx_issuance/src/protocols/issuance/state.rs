use std::fmt;

use strum_macros::{AsRefStr, Display, EnumString};

use crate::errors::error::{AriesVcxError, AriesVcxErrorKind, VcxResult};

/// Lifecycle of a credential exchange, shared by issuer and holder records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CredentialState {
    Offered,
    Requested,
    Issued,
    Rejected,
    Revoked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum Trigger {
    Request,
    Issue,
    Reject,
    Revoke,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CredentialRole {
    Issuer,
    Holder,
}

const TRANSITIONS: &[(CredentialState, Trigger, CredentialState)] = &[
    (CredentialState::Offered, Trigger::Request, CredentialState::Requested),
    (CredentialState::Requested, Trigger::Issue, CredentialState::Issued),
    (CredentialState::Offered, Trigger::Reject, CredentialState::Rejected),
    (CredentialState::Requested, Trigger::Reject, CredentialState::Rejected),
    (CredentialState::Issued, Trigger::Revoke, CredentialState::Revoked),
];

impl CredentialState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Revoked)
    }

    /// States from which `trigger` is a legal edge.
    pub fn sources(trigger: Trigger) -> Vec<CredentialState> {
        TRANSITIONS
            .iter()
            .filter(|(_, t, _)| *t == trigger)
            .map(|(from, _, _)| *from)
            .collect()
    }

    /// Target state of `trigger` from `self`, or `RecordInInvalidState` naming the
    /// states the trigger is legal in.
    pub fn transition(self, trigger: Trigger) -> VcxResult<CredentialState> {
        TRANSITIONS
            .iter()
            .find(|(from, t, _)| *from == self && *t == trigger)
            .map(|(_, _, to)| *to)
            .ok_or_else(|| {
                AriesVcxError::from_msg(
                    AriesVcxErrorKind::RecordInInvalidState,
                    format!(
                        "{trigger} requires state {}, record is {self}",
                        StateList(&Self::sources(trigger))
                    ),
                )
            })
    }
}

struct StateList<'a>(&'a [CredentialState]);

impl fmt::Display for StateList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(AsRef::as_ref).collect();
        write!(f, "{}", names.join(" | "))
    }
}
