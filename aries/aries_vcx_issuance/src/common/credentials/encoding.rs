//! Attribute codec. Every credential attribute travels as a `raw` string next to the
//! integer `encoded` form the signature scheme commits to. 32-bit integers encode as
//! themselves; anything else encodes as the big-endian integer of its SHA-256 digest.

use anoncreds_types::data_types::messages::credential::CredentialValues;
use base64::{engine::general_purpose, Engine};
use messages::msg_fields::protocols::cred_issuance::CredentialAttr;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::errors::error::{AriesVcxError, AriesVcxErrorKind, VcxResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
pub enum AttributeMimeType {
    #[strum(serialize = "text/plain")]
    Plain,
    #[strum(serialize = "image/png")]
    Png,
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "application/json")]
    Json,
}

impl AttributeMimeType {
    /// Attributes without a mime type are plain text.
    pub fn parse(mime_type: Option<&str>) -> VcxResult<Self> {
        match mime_type {
            None => Ok(Self::Plain),
            Some(mime_type) => mime_type.parse().map_err(|_| {
                AriesVcxError::from_msg(
                    AriesVcxErrorKind::InvalidParameterFormat,
                    format!("Unsupported attribute mime type: {mime_type}"),
                )
            }),
        }
    }

    fn validate_raw(self, name: &str, raw: &str) -> VcxResult<()> {
        let valid = match self {
            Self::Plain => true,
            Self::Json => serde_json::from_str::<serde_json::Value>(raw).is_ok(),
            Self::Png | Self::Jpeg => general_purpose::STANDARD.decode(raw).is_ok(),
        };
        if valid {
            Ok(())
        } else {
            Err(AriesVcxError::from_msg(
                AriesVcxErrorKind::InvalidParameterFormat,
                format!("Value of attribute {name} is not valid {self}"),
            ))
        }
    }
}

pub fn encode(raw: &str) -> String {
    match raw.parse::<i32>() {
        Ok(val) => val.to_string(),
        Err(_) => {
            let digest = Sha256::digest(raw.as_bytes());
            BigUint::from_bytes_be(&digest).to_string()
        }
    }
}

/// Checks that `encoded` is the encoding of `raw`.
pub fn validate(raw: &str, encoded: &str) -> VcxResult<()> {
    let expected = encode(raw);
    if expected == encoded {
        Ok(())
    } else {
        Err(AriesVcxError::from_msg(
            AriesVcxErrorKind::InvalidParameterFormat,
            format!("Encoded value {encoded} does not match raw value {raw}, expected {expected}"),
        ))
    }
}

pub fn validate_attribute(attr: &CredentialAttr) -> VcxResult<()> {
    AttributeMimeType::parse(attr.mime_type.as_deref())?.validate_raw(&attr.name, &attr.value)
}

pub fn validate_attributes(attrs: &[CredentialAttr]) -> VcxResult<()> {
    for (position, attr) in attrs.iter().enumerate() {
        if attrs[..position].iter().any(|other| other.name == attr.name) {
            return Err(AriesVcxError::from_msg(
                AriesVcxErrorKind::InvalidParameterFormat,
                format!("Attribute {} is listed more than once", attr.name),
            ));
        }
        validate_attribute(attr)?;
    }
    Ok(())
}

/// Validates the attributes and builds the raw/encoded pairs handed to the signer.
pub fn encode_attributes(attrs: &[CredentialAttr]) -> VcxResult<CredentialValues> {
    trace!("encode_attributes >>> attributes: {:?}", attrs);
    validate_attributes(attrs)?;
    let mut values = CredentialValues::default();
    for attr in attrs {
        values.add(attr.name.clone(), attr.value.clone(), encode(&attr.value));
    }
    Ok(values)
}

#[cfg(test)]
pub mod unit_tests {
    use super::*;

    fn attr(name: &str, value: &str, mime_type: Option<&str>) -> CredentialAttr {
        let attr = CredentialAttr::builder().name(name).value(value);
        match mime_type {
            Some(mime_type) => attr.mime_type(mime_type).build(),
            None => attr.build(),
        }
    }

    #[test]
    fn test_encode_hashes_strings() {
        assert_eq!(
            encode("101 Wilson Lane"),
            "68086943237164982734333428280784300550565381723532936263016368251445461241953"
        );
        assert_eq!(
            encode("Alice"),
            "27034640024117331033063128044004318218486816931520886405535659934417438781507"
        );
        assert_eq!(
            encode(""),
            "102987336249554097029535212322581322789799900648198034993379397001115665086549"
        );
    }

    #[test]
    fn test_encode_keeps_32_bit_integers() {
        assert_eq!(encode("87121"), "87121");
        assert_eq!(encode("-2147483648"), "-2147483648");
        assert_ne!(encode("2147483648"), "2147483648");
    }

    #[test]
    fn test_validate_round_trip() {
        for raw in ["Test", "87121", "{\"a\":1}", "aGVsbG8="] {
            validate(raw, &encode(raw)).unwrap();
        }
        let err = validate("Test", "1").unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidParameterFormat);
    }

    #[test]
    fn test_supported_mime_types() {
        validate_attribute(&attr("name", "Test", None)).unwrap();
        validate_attribute(&attr("name", "Test", Some("text/plain"))).unwrap();
        validate_attribute(&attr("doc", "{\"a\":1}", Some("application/json"))).unwrap();
        validate_attribute(&attr("photo", "aGVsbG8=", Some("image/png"))).unwrap();
        validate_attribute(&attr("photo", "aGVsbG8=", Some("image/jpeg"))).unwrap();
    }

    #[test]
    fn test_unsupported_mime_type_fails() {
        let err = validate_attribute(&attr("name", "Test", Some("text/html"))).unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidParameterFormat);
    }

    #[test]
    fn test_value_must_match_mime_type() {
        let err = validate_attribute(&attr("doc", "{not json", Some("application/json")))
            .unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidParameterFormat);

        let err = validate_attribute(&attr("photo", "not base64!", Some("image/png"))).unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidParameterFormat);
    }

    #[test]
    fn test_encode_attributes() {
        let values = encode_attributes(&[attr("name", "Test", None), attr("age", "25", None)])
            .unwrap();
        let name = values.get("name").unwrap();
        assert_eq!(name.raw, "Test");
        assert_eq!(
            name.encoded,
            "37624419805439260122109877671597282370833625459492083204494327308667894128165"
        );
        assert_eq!(values.get("age").unwrap().encoded, "25");

        let err = encode_attributes(&[attr("name", "a", None), attr("name", "b", None)])
            .unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidParameterFormat);
    }
}
