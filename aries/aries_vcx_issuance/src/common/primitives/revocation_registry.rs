use std::path::Path;

use anoncreds_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, issuer_id::IssuerId,
        rev_reg_tag::RevocationRegistryTag,
    },
    ledger::{
        rev_reg_def::{IssuanceType, RevocationRegistryDefinition},
        rev_status_list::RevocationStatusList,
    },
};
use aries_vcx_anoncreds::anoncreds::base_anoncreds::BaseAnonCreds;
use aries_vcx_ledger::ledger::base_ledger::AnoncredsLedgerWrite;
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;
use chrono::Utc;
use url::Url;

use crate::errors::error::{AriesVcxError, VcxResult};

/// Public location holders download the tails file from.
pub fn tails_location(tails_base_uri: &Url, tails_hash: &str) -> String {
    format!("{}/{}", tails_base_uri.as_str().trim_end_matches('/'), tails_hash)
}

pub fn now_timestamp() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

/// Generates a registry, points its tails location at `tails_base_uri` and writes the
/// definition and its initial entry to the ledger.
#[allow(clippy::too_many_arguments)]
pub async fn create_and_publish_rev_reg(
    wallet: &impl BaseWallet,
    anoncreds: &impl BaseAnonCreds,
    ledger: &impl AnoncredsLedgerWrite,
    issuer_did: &IssuerId,
    cred_def_id: &CredentialDefinitionId,
    tails_dir: &Path,
    tails_base_uri: &Url,
    tag: RevocationRegistryTag,
    issuance_type: IssuanceType,
) -> VcxResult<(RevocationRegistryDefinition, RevocationStatusList)> {
    trace!(
        "create_and_publish_rev_reg >>> issuer_did: {}, cred_def_id: {}, tails_dir: {}, tag: {}, \
         issuance_type: {:?}",
        issuer_did,
        cred_def_id,
        tails_dir.display(),
        tag,
        issuance_type
    );
    let (mut rev_reg_def, status_list) = anoncreds
        .issuer_create_and_store_revoc_reg(
            wallet,
            issuer_did,
            cred_def_id,
            tails_dir,
            tag.capacity,
            &tag.to_string(),
            issuance_type,
        )
        .await?;
    rev_reg_def.value.tails_location = tails_location(tails_base_uri, &rev_reg_def.value.tails_hash);

    ledger
        .publish_rev_reg_def(wallet, rev_reg_def.clone(), issuer_did)
        .await
        .map_err(|err| {
            AriesVcxError::from(err).extend(format!(
                "Unable to publish revocation registry definition {}",
                rev_reg_def.id
            ))
        })?;

    let baseline = RevocationStatusList::new(
        rev_reg_def.id.clone(),
        issuer_did.clone(),
        issuance_type,
        rev_reg_def.capacity(),
        None,
        None,
    );
    publish_status_list_update(wallet, ledger, issuer_did, &baseline, &status_list).await?;
    info!(
        "Published revocation registry {} with capacity {}",
        rev_reg_def.id,
        rev_reg_def.capacity()
    );
    Ok((rev_reg_def, status_list))
}

/// Writes the registry entry turning `previous` into `next`.
pub async fn publish_status_list_update(
    wallet: &impl BaseWallet,
    ledger: &impl AnoncredsLedgerWrite,
    issuer_did: &IssuerId,
    previous: &RevocationStatusList,
    next: &RevocationStatusList,
) -> VcxResult<()> {
    let delta = next.delta_from(previous)?;
    trace!(
        "publish_status_list_update >>> rev_reg_id: {}, issued: {:?}, revoked: {:?}",
        next.rev_reg_def_id,
        delta.value.issued,
        delta.value.revoked
    );
    ledger
        .publish_rev_reg_delta(wallet, &next.rev_reg_def_id, delta, issuer_did)
        .await
        .map_err(|err| {
            AriesVcxError::from(err).extend(format!(
                "Unable to publish entry of revocation registry {}",
                next.rev_reg_def_id
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tails_location() {
        let base = Url::parse("https://tails.example.com/hashes/").unwrap();
        assert_eq!(
            tails_location(&base, "4Ymg"),
            "https://tails.example.com/hashes/4Ymg"
        );

        let base = Url::parse("https://tails.example.com").unwrap();
        assert_eq!(tails_location(&base, "4Ymg"), "https://tails.example.com/4Ymg");
    }
}
