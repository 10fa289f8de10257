//! Module containing the `issue credential` protocol messages, as defined in the [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0036-issue-credential/README.md>).

pub mod v1;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// A single attribute of a credential preview.
///
/// The mime type is kept as received; interpreting it is up to the attribute codec.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct CredentialAttr {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub value: String,
    #[builder(default, setter(strip_option, into))]
    #[serde(rename = "mime-type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}
