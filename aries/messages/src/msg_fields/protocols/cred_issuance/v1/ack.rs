use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    msg_fields::protocols::notification::ack::{Ack, AckContent, AckDecorators},
    msg_parts::MsgParts,
};

pub type AckCredentialV1 = MsgParts<AckCredentialV1Content, AckDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
#[serde(transparent)]
pub struct AckCredentialV1Content {
    pub inner: AckContent,
}

impl From<AckContent> for AckCredentialV1Content {
    fn from(value: AckContent) -> Self {
        Self { inner: value }
    }
}

impl From<AckCredentialV1> for Ack {
    fn from(value: AckCredentialV1) -> Self {
        Self::builder()
            .id(value.id)
            .content(value.content.inner)
            .decorators(value.decorators)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        decorators::thread::tests::make_extended_thread,
        misc::test_utils,
        msg_fields::protocols::notification::ack::AckStatus,
        msg_types::{CredentialIssuanceTypeV1_0, Protocol},
    };

    #[test]
    fn test_minimal_ack_cred() {
        let content: AckCredentialV1Content = AckContent::builder().status(AckStatus::Ok).build().into();
        let decorators = AckDecorators::builder()
            .thread(make_extended_thread())
            .build();

        let expected = json!({
            "status": "OK",
            "~thread": decorators.thread
        });

        let msg = AckCredentialV1::builder()
            .id("test")
            .content(content)
            .decorators(decorators)
            .build();

        test_utils::test_constructed_msg(
            msg,
            Protocol::CredentialIssuanceV1_0,
            CredentialIssuanceTypeV1_0::Ack.as_ref(),
            expected,
        );
    }
}
