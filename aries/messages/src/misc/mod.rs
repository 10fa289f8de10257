mod mime_type;
pub(crate) mod utils;

use serde::{Deserialize, Serialize};

pub use mime_type::MimeType;

/// Placeholder for messages that carry no decorators.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct NoDecorators {}

#[cfg(test)]
pub mod test_utils {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};

    use super::utils;
    use crate::{
        msg_types::{type_string, Protocol},
        AriesMessage,
    };

    pub struct OptDateTimeRfc3339<'a>(pub &'a Option<DateTime<Utc>>);

    impl Serialize for OptDateTimeRfc3339<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            utils::serialize_opt_datetime(self.0, serializer)
        }
    }

    /// Checks that `msg` serializes to `expected` plus its `@id` and `@type`,
    /// and parses back into the same message.
    pub fn test_constructed_msg<M>(msg: M, protocol: Protocol, kind: &str, mut expected: Value)
    where
        AriesMessage: From<M>,
    {
        let msg = AriesMessage::from(msg);
        let obj = expected.as_object_mut().expect("JSON object");
        obj.insert("@id".to_owned(), json!(msg.id()));
        obj.insert("@type".to_owned(), json!(type_string(protocol, kind)));

        test_serde(msg, expected);
    }

    pub fn test_serde<T>(value: T, expected: Value)
    where
        T: for<'de> Deserialize<'de> + Serialize + std::fmt::Debug + PartialEq,
    {
        assert_eq!(serde_json::to_value(&value).unwrap(), expected);

        let deserialized = T::deserialize(expected.clone()).unwrap();
        assert_eq!(deserialized, value);

        let deserialized = T::deserialize(&expected).unwrap();
        assert_eq!(deserialized, value);
    }
}
