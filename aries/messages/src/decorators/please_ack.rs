use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Struct representing the `~please_ack` decorators from its [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0317-please-ack/README.md>).
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, TypedBuilder)]
pub struct PleaseAck {
    // Required by the RFC, but older agents omit it entirely.
    #[serde(default)]
    pub on: Vec<AckOn>,
}

impl PleaseAck {
    pub fn on_receipt() -> Self {
        Self::builder().on(vec![AckOn::Receipt]).build()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AckOn {
    Receipt,
    Outcome,
}

#[cfg(test)]
pub mod tests {
    use serde_json::json;

    use super::*;
    use crate::misc::test_utils;

    pub fn make_minimal_please_ack() -> PleaseAck {
        PleaseAck::on_receipt()
    }

    #[test]
    fn test_minimal_please_ack() {
        test_utils::test_serde(make_minimal_please_ack(), json!({ "on": ["RECEIPT"] }));
    }

    #[test]
    fn test_please_ack_without_on() {
        let please_ack: PleaseAck = serde_json::from_value(json!({})).unwrap();
        assert!(please_ack.on.is_empty());
    }
}
