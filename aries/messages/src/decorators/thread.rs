use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Struct representing the `~thread` decorator from its [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/concepts/0008-message-id-and-threading/README.md>).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TypedBuilder)]
pub struct Thread {
    #[builder(setter(into))]
    pub thid: String,
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pthid: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_order: Option<u32>,
}

impl Thread {
    pub fn new(thid: impl Into<String>) -> Self {
        Self::builder().thid(thid).build()
    }
}

#[cfg(test)]
pub mod tests {
    use serde_json::json;

    use super::*;
    use crate::misc::test_utils;

    pub fn make_minimal_thread() -> Thread {
        Thread::new("test")
    }

    pub fn make_extended_thread() -> Thread {
        Thread::builder()
            .thid("test")
            .pthid("test_pthid")
            .sender_order(5)
            .build()
    }

    #[test]
    fn test_minimal_thread() {
        test_utils::test_serde(make_minimal_thread(), json!({ "thid": "test" }));
    }

    #[test]
    fn test_extended_thread() {
        test_utils::test_serde(
            make_extended_thread(),
            json!({ "thid": "test", "pthid": "test_pthid", "sender_order": 5 }),
        );
    }
}
