use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::CredentialPreviewV1;
use crate::{
    decorators::{attachment::Attachment, thread::Thread, timing::Timing},
    msg_parts::MsgParts,
};

pub type OfferCredentialV1 = MsgParts<OfferCredentialV1Content, OfferCredentialV1Decorators>;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct OfferCredentialV1Content {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub credential_preview: CredentialPreviewV1,
    #[serde(rename = "offers~attach")]
    pub offers_attach: Vec<Attachment>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq, TypedBuilder)]
pub struct OfferCredentialV1Decorators {
    #[builder(default, setter(strip_option))]
    #[serde(rename = "~thread")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread: Option<Thread>,
    #[builder(default, setter(strip_option))]
    #[serde(rename = "~timing")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        decorators::attachment::tests::make_extended_attachment,
        misc::test_utils,
        msg_fields::protocols::cred_issuance::CredentialAttr,
        msg_types::{CredentialIssuanceTypeV1_0, Protocol},
    };

    #[test]
    fn test_minimal_offer_cred() {
        let attribute = CredentialAttr::builder()
            .name("name")
            .value("Test")
            .mime_type("text/plain")
            .build();
        let content = OfferCredentialV1Content::builder()
            .credential_preview(CredentialPreviewV1::new(vec![attribute]))
            .offers_attach(vec![make_extended_attachment()])
            .build();

        let expected = json!({
            "offers~attach": content.offers_attach,
            "credential_preview": {
                "@type": "https://didcomm.org/issue-credential/1.0/credential-preview",
                "attributes": [{ "name": "name", "value": "Test", "mime-type": "text/plain" }]
            }
        });

        let msg = OfferCredentialV1::builder()
            .id("test")
            .content(content)
            .decorators(OfferCredentialV1Decorators::default())
            .build();

        test_utils::test_constructed_msg(
            msg,
            Protocol::CredentialIssuanceV1_0,
            CredentialIssuanceTypeV1_0::OfferCredential.as_ref(),
            expected,
        );
    }
}
