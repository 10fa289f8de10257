use messages::{
    msg_fields::protocols::{
        cred_issuance::v1::CredentialIssuanceV1, report_problem::ProblemReport,
        revocation::Revocation,
    },
    AriesMessage,
};

#[cfg(test)]
use crate::errors::error::{AriesVcxError, AriesVcxErrorKind, VcxResult};

#[cfg(test)]
macro_rules! matches_thread_id {
    ($msg:expr, $id:expr) => {
        $msg.decorators.thread.thid == $id || $msg.decorators.thread.pthid.as_deref() == Some($id)
    };
}

#[cfg(test)]
macro_rules! matches_opt_thread_id {
    ($msg:expr, $id:expr) => {
        match $msg.decorators.thread.as_ref() {
            Some(t) => t.thid == $id || t.pthid.as_deref() == Some($id),
            None => true,
        }
    };
}

#[rustfmt::skip] // formatting the let-else chain makes it harder to read
macro_rules! get_attach_as_string {
    ($attachments:expr) => {{
        let err_fn = |attach: Option<&messages::decorators::attachment::Attachment>| {
            Err($crate::errors::error::AriesVcxError::from_msg(
                $crate::errors::error::AriesVcxErrorKind::InvalidMessage,
                format!("Attachment is not base 64 encoded JSON: {:?}", attach),
            ))
        };

        let Some(attach) = $attachments.first() else { return err_fn(None); };
        let Ok(bytes) = attach.decoded_content() else { return err_fn(Some(attach)); };
        let Ok(attach_string) = String::from_utf8(bytes) else { return err_fn(Some(attach)); };

        attach_string
    }};
}

macro_rules! make_attach_from_str {
    ($str_attach:expr, $id:expr) => {{
        messages::decorators::attachment::Attachment::base64(
            $id,
            messages::misc::MimeType::Json,
            $str_attach.as_bytes(),
        )
    }};
}

pub(crate) use get_attach_as_string;
pub(crate) use make_attach_from_str;

/// Thread an incoming message belongs to. Messages opening a thread carry no `~thread`
/// decorator and are their own thread.
pub fn thread_id_of(message: &AriesMessage) -> &str {
    fn opt_thid<'a>(thread: Option<&'a messages::decorators::thread::Thread>, id: &'a str) -> &'a str {
        thread.map_or(id, |t| t.thid.as_str())
    }

    match message {
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::OfferCredential(msg)) => {
            opt_thid(msg.decorators.thread.as_ref(), &msg.id)
        }
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::RequestCredential(msg)) => {
            opt_thid(msg.decorators.thread.as_ref(), &msg.id)
        }
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::IssueCredential(msg)) => {
            &msg.decorators.thread.thid
        }
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::Ack(msg)) => {
            &msg.decorators.thread.thid
        }
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::ProblemReport(msg)) => {
            opt_thid(msg.decorators.thread.as_ref(), &msg.id)
        }
        AriesMessage::Revocation(Revocation::Revoke(msg)) => {
            opt_thid(msg.decorators.thread.as_ref(), &msg.id)
        }
        AriesMessage::Revocation(Revocation::Ack(msg)) => &msg.decorators.thread.thid,
        AriesMessage::Notification(msg) => &msg.decorators.thread.thid,
        AriesMessage::ReportProblem(ProblemReport { id, decorators, .. }) => {
            opt_thid(decorators.thread.as_ref(), id)
        }
    }
}

#[cfg(test)]
pub fn verify_thread_id(thread_id: &str, message: &AriesMessage) -> VcxResult<()> {
    let is_match = match message {
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::OfferCredential(msg)) => {
            msg.id == thread_id || matches_opt_thread_id!(msg, thread_id)
        }
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::RequestCredential(msg)) => {
            matches_opt_thread_id!(msg, thread_id)
        }
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::IssueCredential(msg)) => {
            matches_thread_id!(msg, thread_id)
        }
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::Ack(msg)) => {
            matches_thread_id!(msg, thread_id)
        }
        AriesMessage::CredentialIssuance(CredentialIssuanceV1::ProblemReport(msg)) => {
            matches_opt_thread_id!(msg, thread_id)
        }
        AriesMessage::Revocation(Revocation::Revoke(msg)) => {
            matches_opt_thread_id!(msg, thread_id)
        }
        AriesMessage::Revocation(Revocation::Ack(msg)) => matches_thread_id!(msg, thread_id),
        AriesMessage::Notification(msg) => matches_thread_id!(msg, thread_id),
        AriesMessage::ReportProblem(msg) => matches_opt_thread_id!(msg, thread_id),
    };

    if !is_match {
        return Err(AriesVcxError::from_msg(
            AriesVcxErrorKind::InvalidMessage,
            format!(
                "Cannot handle message {:?}: thread id does not match, expected {:?}",
                message, thread_id
            ),
        ));
    };
    Ok(())
}
