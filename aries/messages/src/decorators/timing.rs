use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::misc::utils;

/// Struct representing the `~timing` decorator from its [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/features/0032-message-timing/README.md>).
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, TypedBuilder)]
pub struct Timing {
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    #[serde(serialize_with = "utils::serialize_opt_datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_time: Option<DateTime<Utc>>,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    #[serde(serialize_with = "utils::serialize_opt_datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_time: Option<DateTime<Utc>>,
}

impl Timing {
    pub fn now() -> Self {
        Self::builder().out_time(Utc::now()).build()
    }
}

#[cfg(test)]
pub mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::misc::test_utils::{self, OptDateTimeRfc3339};

    pub fn make_extended_timing() -> Timing {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        Timing::builder().in_time(dt).out_time(dt).build()
    }

    #[test]
    fn test_extended_timing() {
        let timing = make_extended_timing();
        let expected = json!({
            "in_time": OptDateTimeRfc3339(&timing.in_time),
            "out_time": OptDateTimeRfc3339(&timing.out_time),
        });

        test_utils::test_serde(timing, expected);
    }
}
