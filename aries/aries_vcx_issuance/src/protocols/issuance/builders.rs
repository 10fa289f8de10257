//! Construction and parsing of the issue-credential 1.0 messages. Crypto payloads travel
//! as base64 JSON attachments.

use anoncreds_types::data_types::messages::{
    cred_offer::CredentialOffer, cred_request::CredentialRequest, credential::Credential,
};
use messages::{
    decorators::{please_ack::PleaseAck, thread::Thread, timing::Timing},
    msg_fields::protocols::{
        cred_issuance::{
            v1::{
                ack::{AckCredentialV1, AckCredentialV1Content},
                issue_credential::{
                    IssueCredentialV1, IssueCredentialV1Content, IssueCredentialV1Decorators,
                },
                offer_credential::{
                    OfferCredentialV1, OfferCredentialV1Content, OfferCredentialV1Decorators,
                },
                problem_report::CredIssuanceV1ProblemReport,
                request_credential::{
                    RequestCredentialV1, RequestCredentialV1Content, RequestCredentialV1Decorators,
                },
                CredentialPreviewV1,
            },
            CredentialAttr,
        },
        notification::ack::{AckContent, AckDecorators, AckStatus},
    },
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    errors::error::{AriesVcxError, AriesVcxErrorKind, VcxResult},
    protocols::common::build_problem_report_msg,
};

pub const OFFER_ATTACHMENT_ID: &str = "libindy-cred-offer-0";
pub const REQUEST_ATTACHMENT_ID: &str = "libindy-cred-request-0";
pub const CREDENTIAL_ATTACHMENT_ID: &str = "libindy-cred-0";

fn parse_attachment<T: DeserializeOwned>(attach: &str, what: &str) -> VcxResult<T> {
    serde_json::from_str(attach).map_err(|err| {
        AriesVcxError::from_msg(
            AriesVcxErrorKind::InvalidMessage,
            format!("Attachment does not hold a {what}: {err}"),
        )
    })
}

/// The offer opens the thread, so its id is the thread id.
pub fn build_credential_offer_msg(
    thread_id: &str,
    offer: &CredentialOffer,
    preview: Vec<CredentialAttr>,
    comment: Option<String>,
) -> VcxResult<OfferCredentialV1> {
    let attach = make_attach_from_str!(serde_json::to_string(offer)?, OFFER_ATTACHMENT_ID);
    let content = OfferCredentialV1Content::builder()
        .credential_preview(CredentialPreviewV1::new(preview))
        .offers_attach(vec![attach]);
    let content = match comment {
        Some(comment) => content.comment(comment).build(),
        None => content.build(),
    };
    let decorators = OfferCredentialV1Decorators::builder()
        .timing(Timing::now())
        .build();

    Ok(OfferCredentialV1::builder()
        .id(thread_id)
        .content(content)
        .decorators(decorators)
        .build())
}

pub fn build_credential_request_msg(
    thread_id: &str,
    request: &CredentialRequest,
) -> VcxResult<RequestCredentialV1> {
    let attach = make_attach_from_str!(serde_json::to_string(request)?, REQUEST_ATTACHMENT_ID);
    let content = RequestCredentialV1Content::builder()
        .requests_attach(vec![attach])
        .build();
    let decorators = RequestCredentialV1Decorators::builder()
        .thread(Thread::new(thread_id))
        .timing(Timing::now())
        .build();

    Ok(RequestCredentialV1::builder()
        .id(Uuid::new_v4().to_string())
        .content(content)
        .decorators(decorators)
        .build())
}

pub fn build_credential_msg(
    thread_id: &str,
    credential: &Credential,
    please_ack: bool,
) -> VcxResult<IssueCredentialV1> {
    let attach = make_attach_from_str!(serde_json::to_string(credential)?, CREDENTIAL_ATTACHMENT_ID);
    let content = IssueCredentialV1Content::builder()
        .credentials_attach(vec![attach])
        .build();
    let decorators = IssueCredentialV1Decorators::builder()
        .thread(Thread::new(thread_id))
        .timing(Timing::now());
    let decorators = if please_ack {
        decorators.please_ack(PleaseAck::on_receipt()).build()
    } else {
        decorators.build()
    };

    Ok(IssueCredentialV1::builder()
        .id(Uuid::new_v4().to_string())
        .content(content)
        .decorators(decorators)
        .build())
}

pub fn build_credential_ack(thread_id: &str) -> AckCredentialV1 {
    let content = AckCredentialV1Content::from(AckContent::builder().status(AckStatus::Ok).build());
    let decorators = AckDecorators::builder()
        .thread(Thread::new(thread_id))
        .timing(Timing::now())
        .build();

    AckCredentialV1::builder()
        .id(Uuid::new_v4().to_string())
        .content(content)
        .decorators(decorators)
        .build()
}

/// Tells the other party the thread was abandoned.
pub fn build_credential_problem_report(
    thread_id: &str,
    comment: Option<String>,
) -> CredIssuanceV1ProblemReport {
    let report = build_problem_report_msg(comment, thread_id);
    CredIssuanceV1ProblemReport::builder()
        .id(report.id)
        .content(report.content.into())
        .decorators(report.decorators)
        .build()
}

pub fn offer_from_msg(msg: &OfferCredentialV1) -> VcxResult<CredentialOffer> {
    let attach = get_attach_as_string!(&msg.content.offers_attach);
    parse_attachment(&attach, "credential offer")
}

pub fn request_from_msg(msg: &RequestCredentialV1) -> VcxResult<CredentialRequest> {
    let attach = get_attach_as_string!(&msg.content.requests_attach);
    parse_attachment(&attach, "credential request")
}

pub fn credential_from_msg(msg: &IssueCredentialV1) -> VcxResult<Credential> {
    let attach = get_attach_as_string!(&msg.content.credentials_attach);
    parse_attachment(&attach, "credential")
}

#[cfg(test)]
pub mod unit_tests {
    use anoncreds_types::data_types::identifiers::{
        cred_def_id::CredentialDefinitionId, schema_id::SchemaId,
    };
    use messages::{decorators::attachment::Attachment, misc::MimeType, AriesMessage};
    use serde_json::json;

    use super::*;
    use crate::handlers::util::{thread_id_of, verify_thread_id};

    pub fn _credential_offer() -> CredentialOffer {
        CredentialOffer {
            schema_id: SchemaId::new_unchecked("V4SGRU86Z58d6TV7PBUe6f:2:gvt:1.0"),
            cred_def_id: CredentialDefinitionId::new_unchecked(
                "V4SGRU86Z58d6TV7PBUe6f:3:CL:V4SGRU86Z58d6TV7PBUe6f:2:gvt:1.0:default",
            ),
            key_correctness_proof: json!({"c": "1"}),
            nonce: "1234".to_string(),
            method_name: None,
        }
    }

    #[test]
    fn test_offer_round_trips_through_attachment() {
        let preview = vec![CredentialAttr::builder().name("name").value("Test").build()];
        let msg =
            build_credential_offer_msg("thread-1", &_credential_offer(), preview, None).unwrap();

        assert_eq!(msg.id, "thread-1");
        assert_eq!(msg.content.offers_attach[0].id.as_deref(), Some(OFFER_ATTACHMENT_ID));
        assert_eq!(offer_from_msg(&msg).unwrap(), _credential_offer());

        let aries_msg = AriesMessage::from(msg);
        assert_eq!(thread_id_of(&aries_msg), "thread-1");
        verify_thread_id("thread-1", &aries_msg).unwrap();
    }

    #[test]
    fn test_credential_msg_threads_and_acks() {
        let ack = build_credential_ack("thread-1");
        assert_eq!(ack.decorators.thread.thid, "thread-1");
        assert_eq!(ack.content.inner.status, AckStatus::Ok);

        let aries_msg = AriesMessage::from(ack);
        let err = verify_thread_id("thread-2", &aries_msg).unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidMessage);
    }

    #[test]
    fn test_malformed_attachment_is_invalid_message() {
        let preview = vec![CredentialAttr::builder().name("name").value("Test").build()];
        let mut msg =
            build_credential_offer_msg("thread-1", &_credential_offer(), preview, None).unwrap();

        msg.content.offers_attach = vec![Attachment::base64(
            OFFER_ATTACHMENT_ID,
            MimeType::Json,
            b"{\"nonce\": 1}",
        )];
        let err = offer_from_msg(&msg).unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidMessage);

        msg.content.offers_attach = vec![];
        let err = offer_from_msg(&msg).unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidMessage);
    }

    #[test]
    fn test_problem_report_stays_on_thread() {
        let report = build_credential_problem_report("thread-1", Some("rejected".into()));
        assert_eq!(report.content.inner.description.code, "rejected");

        let aries_msg = AriesMessage::from(report);
        verify_thread_id("thread-1", &aries_msg).unwrap();
    }
}
