use anoncreds_types::{
    data_types::{
        identifiers::{issuer_id::IssuerId, schema_id::SchemaId},
        ledger::schema::{AttributeNames, Schema},
    },
    utils::validation::Validatable,
};
use aries_vcx_anoncreds::anoncreds::base_anoncreds::BaseAnonCreds;
use aries_vcx_ledger::ledger::base_ledger::{AnoncredsLedgerRead, AnoncredsLedgerWrite};
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;

use crate::errors::error::{AriesVcxError, AriesVcxErrorKind, VcxResult};

/// Builds the schema and writes it to the ledger. The returned schema carries the
/// sequence number the ledger assigned, if any.
pub async fn create_and_publish_schema(
    wallet: &impl BaseWallet,
    anoncreds: &impl BaseAnonCreds,
    ledger: &impl AnoncredsLedgerWrite,
    submitter_did: &IssuerId,
    name: &str,
    version: &str,
    attr_names: AttributeNames,
) -> VcxResult<Schema> {
    trace!(
        "create_and_publish_schema >>> submitter_did: {}, name: {}, version: {}, attr_names: {:?}",
        submitter_did,
        name,
        version,
        attr_names
    );
    let schema = anoncreds
        .issuer_create_schema(submitter_did, name, version, attr_names)
        .await?;
    schema.validate()?;

    let expected_id = SchemaId::new_legacy(submitter_did, name, version);
    if schema.id.is_legacy() && schema.id != expected_id {
        return Err(AriesVcxError::from_msg(
            AriesVcxErrorKind::InvalidState,
            format!("Schema id {} does not match {}", schema.id, expected_id),
        ));
    }

    let published = ledger
        .publish_schema(wallet, schema, submitter_did)
        .await
        .map_err(|err| {
            AriesVcxError::from(err).extend(format!("Unable to publish schema {name} {version}"))
        })?;
    info!(
        "Published schema {} (seq_no: {:?})",
        published.id, published.seq_no
    );
    Ok(published)
}

/// Schema as written on the ledger. A miss surfaces as `LedgerItemNotFound`.
pub async fn resolve_schema(
    ledger: &impl AnoncredsLedgerRead,
    schema_id: &SchemaId,
) -> VcxResult<Schema> {
    ledger.get_schema(schema_id).await.map_err(|err| {
        AriesVcxError::from(err).extend(format!("Unable to resolve schema {schema_id}"))
    })
}
