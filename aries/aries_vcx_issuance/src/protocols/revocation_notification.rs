use anoncreds_types::data_types::identifiers::rev_reg_def_id::RevocationRegistryDefinitionId;
use messages::{
    decorators::{please_ack::PleaseAck, thread::Thread, timing::Timing},
    msg_fields::protocols::{
        notification::ack::{AckContent, AckDecorators, AckStatus},
        revocation::{
            ack::{AckRevoke, AckRevokeContent},
            revoke::{RevocationFormat, Revoke, RevokeContent, RevokeDecorators},
        },
    },
};
use uuid::Uuid;

use crate::errors::error::{AriesVcxError, AriesVcxErrorKind, VcxResult};

/// `<rev_reg_id>::<cred_rev_id>`, the credential reference of the `indy-anoncreds` format.
pub fn notification_credential_id(rev_reg_id: &RevocationRegistryDefinitionId, index: u32) -> String {
    format!("{rev_reg_id}::{index}")
}

pub fn parse_notification_credential_id(
    credential_id: &str,
) -> VcxResult<(RevocationRegistryDefinitionId, u32)> {
    let parsed = credential_id
        .rsplit_once("::")
        .and_then(|(rev_reg_id, index)| Some((rev_reg_id, index.parse::<u32>().ok()?)));
    match parsed {
        Some((rev_reg_id, index)) if !rev_reg_id.is_empty() => {
            Ok((RevocationRegistryDefinitionId::new_unchecked(rev_reg_id), index))
        }
        _ => Err(AriesVcxError::from_msg(
            AriesVcxErrorKind::InvalidMessage,
            format!("Malformed revoked credential reference {credential_id}"),
        )),
    }
}

/// Notification asking the holder to acknowledge receipt. `thread_id` is the thread of
/// the issuance the credential came from.
pub fn build_revocation_notification(
    rev_reg_id: &RevocationRegistryDefinitionId,
    index: u32,
    thread_id: &str,
    comment: Option<String>,
) -> Revoke {
    let content = RevokeContent::builder()
        .credential_id(notification_credential_id(rev_reg_id, index))
        .revocation_format(RevocationFormat::IndyAnoncreds);
    let content = match comment {
        Some(comment) => content.comment(comment).build(),
        None => content.build(),
    };
    let decorators = RevokeDecorators::builder()
        .please_ack(PleaseAck::on_receipt())
        .thread(Thread::builder().thid(Uuid::new_v4().to_string()).pthid(thread_id).build())
        .timing(Timing::now())
        .build();

    Revoke::builder()
        .id(Uuid::new_v4().to_string())
        .content(content)
        .decorators(decorators)
        .build()
}

/// Receipt of `notification`, on the notification's own thread.
pub fn build_revocation_ack(notification: &Revoke) -> AckRevoke {
    let thid = notification
        .decorators
        .thread
        .as_ref()
        .map_or(notification.id.as_str(), |thread| thread.thid.as_str());
    let content = AckRevokeContent::from(AckContent::builder().status(AckStatus::Ok).build());
    let decorators = AckDecorators::builder()
        .thread(Thread::new(thid))
        .timing(Timing::now())
        .build();

    AckRevoke::builder()
        .id(Uuid::new_v4().to_string())
        .content(content)
        .decorators(decorators)
        .build()
}
