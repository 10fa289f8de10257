use base64::{engine::general_purpose, Engine};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use typed_builder::TypedBuilder;

use crate::misc::MimeType;

/// Struct representing the `~attach` decorator from its [RFC](<https://github.com/hyperledger/aries-rfcs/blob/main/concepts/0017-attachments/README.md>).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TypedBuilder)]
pub struct Attachment {
    #[builder(default, setter(strip_option, into))]
    #[serde(rename = "@id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(rename = "mime-type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<MimeType>,
    pub data: AttachmentData,
}

impl Attachment {
    /// Attachment carrying `bytes` as base64.
    pub fn base64(id: impl Into<String>, mime_type: MimeType, bytes: &[u8]) -> Self {
        Self::builder()
            .id(id)
            .mime_type(mime_type)
            .data(AttachmentData::builder()
                .content(AttachmentType::Base64(general_purpose::STANDARD.encode(bytes)))
                .build())
            .build()
    }

    /// Raw bytes of the attachment content.
    pub fn decoded_content(&self) -> Result<Vec<u8>, AttachmentError> {
        match &self.data.content {
            AttachmentType::Base64(encoded) => Ok(general_purpose::STANDARD.decode(encoded)?),
            AttachmentType::Json(value) => Ok(serde_json::to_vec(value)?),
            AttachmentType::Links(_) => Err(AttachmentError::UnsupportedContent),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TypedBuilder)]
pub struct AttachmentData {
    #[serde(flatten)]
    pub content: AttachmentType,
}

/// Enum representing the different attachment content types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Base64(String),
    Json(Value),
    Links(Vec<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("Attachment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Attachment JSON could not be serialized: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Attachment content type is not supported")]
    UnsupportedContent,
}

#[cfg(test)]
pub mod tests {
    use serde_json::json;

    use super::*;
    use crate::misc::test_utils;

    pub fn make_extended_attachment() -> Attachment {
        Attachment::base64("libindy-cred-offer-0", MimeType::Json, br#"{"nonce":"1"}"#)
    }

    #[test]
    fn test_base64_attachment() {
        let attachment = make_extended_attachment();
        let expected = json!({
            "@id": "libindy-cred-offer-0",
            "mime-type": "application/json",
            "data": { "base64": "eyJub25jZSI6IjEifQ==" }
        });

        test_utils::test_serde(attachment.clone(), expected);
        assert_eq!(attachment.decoded_content().unwrap(), br#"{"nonce":"1"}"#);
    }

    #[test]
    fn test_json_attachment() {
        let attachment = Attachment::builder()
            .data(
                AttachmentData::builder()
                    .content(AttachmentType::Json(json!({"nonce": "1"})))
                    .build(),
            )
            .build();

        let expected = json!({ "data": { "json": { "nonce": "1" } } });
        test_utils::test_serde(attachment.clone(), expected);
        assert_eq!(attachment.decoded_content().unwrap(), br#"{"nonce":"1"}"#);
    }

    #[test]
    fn test_links_attachment_has_no_inline_content() {
        let attachment = Attachment::builder()
            .data(
                AttachmentData::builder()
                    .content(AttachmentType::Links(vec!["https://example.org".into()]))
                    .build(),
            )
            .build();
        assert!(matches!(
            attachment.decoded_content(),
            Err(AttachmentError::UnsupportedContent)
        ));
    }
}
