use std::collections::HashMap;

use aries_vcx_anoncreds::anoncreds::base_anoncreds::BaseAnonCreds;
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;

use crate::errors::error::{AriesVcxError, AriesVcxErrorKind, VcxResult};

pub mod encoding;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProverCredential {
    pub referent: String,
    pub attrs: HashMap<String, String>,
    pub schema_id: String,
    pub cred_def_id: String,
    pub rev_reg_id: Option<String>,
    pub cred_rev_id: Option<u32>,
}

pub async fn get_prover_credential(
    wallet: &impl BaseWallet,
    anoncreds: &impl BaseAnonCreds,
    cred_id: &str,
) -> VcxResult<ProverCredential> {
    let cred_json = anoncreds
        .prover_get_credential(wallet, &cred_id.to_string())
        .await?;
    serde_json::from_str::<ProverCredential>(&cred_json).map_err(|err| {
        AriesVcxError::from_msg(
            AriesVcxErrorKind::SerializationError,
            format!("Failed to deserialize stored credential {cred_id}: {err}"),
        )
    })
}

/// Index the stored credential occupies in its revocation registry.
pub async fn get_cred_rev_id(
    wallet: &impl BaseWallet,
    anoncreds: &impl BaseAnonCreds,
    cred_id: &str,
) -> VcxResult<u32> {
    get_prover_credential(wallet, anoncreds, cred_id)
        .await?
        .cred_rev_id
        .ok_or_else(|| {
            AriesVcxError::from_msg(
                AriesVcxErrorKind::InvalidRevocationDetails,
                format!("Credential {cred_id} carries no revocation index"),
            )
        })
}
