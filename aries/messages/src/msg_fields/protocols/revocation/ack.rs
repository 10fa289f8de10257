use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    msg_fields::protocols::notification::ack::{AckContent, AckDecorators},
    msg_parts::MsgParts,
};

pub type AckRevoke = MsgParts<AckRevokeContent, AckDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
#[serde(transparent)]
pub struct AckRevokeContent {
    pub inner: AckContent,
}

impl From<AckContent> for AckRevokeContent {
    fn from(value: AckContent) -> Self {
        Self { inner: value }
    }
}
