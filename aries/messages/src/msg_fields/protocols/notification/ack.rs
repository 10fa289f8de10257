use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    decorators::{thread::Thread, timing::Timing},
    msg_parts::MsgParts,
};

pub type Ack = MsgParts<AckContent, AckDecorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct AckContent {
    pub status: AckStatus,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct AckDecorators {
    #[serde(rename = "~thread")]
    pub thread: Thread,
    #[builder(default, setter(strip_option))]
    #[serde(rename = "~timing")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AckStatus {
    Ok,
    Fail,
    Pending,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        decorators::thread::tests::make_extended_thread,
        misc::test_utils,
        msg_types::{NotificationTypeV1_0, Protocol},
    };

    #[test]
    fn test_minimal_ack() {
        let msg = Ack::builder()
            .id("test")
            .content(AckContent::builder().status(AckStatus::Ok).build())
            .decorators(AckDecorators::builder().thread(make_extended_thread()).build())
            .build();

        let expected = json!({
            "status": "OK",
            "~thread": msg.decorators.thread,
        });

        test_utils::test_constructed_msg(
            msg,
            Protocol::NotificationV1_0,
            NotificationTypeV1_0::Ack.as_ref(),
            expected,
        );
    }
}
