use anoncreds_types::{
    data_types::{
        identifiers::{cred_def_id::CredentialDefinitionId, schema_id::SchemaId},
        ledger::{cred_def::CredentialDefinition, schema::Schema},
        messages::cred_definition_config::CredentialDefinitionConfig,
    },
    utils::validation::Validatable,
};
use aries_vcx_anoncreds::anoncreds::base_anoncreds::BaseAnonCreds;
use aries_vcx_ledger::ledger::base_ledger::{AnoncredsLedgerRead, AnoncredsLedgerWrite};
use aries_vcx_wallet::wallet::base_wallet::BaseWallet;

use super::credential_schema::resolve_schema;
use crate::errors::error::{AriesVcxError, AriesVcxErrorKind, VcxResult};

/// Resolves the schema from the ledger, generates the definition keys and publishes the
/// public part. Returns the schema alongside the definition.
pub async fn create_and_publish_cred_def(
    wallet: &impl BaseWallet,
    anoncreds: &impl BaseAnonCreds,
    ledger_read: &impl AnoncredsLedgerRead,
    ledger_write: &impl AnoncredsLedgerWrite,
    config: CredentialDefinitionConfig,
) -> VcxResult<(Schema, CredentialDefinition)> {
    trace!("create_and_publish_cred_def >>> config: {:?}", config);
    config.validate().map_err(|err| {
        AriesVcxError::from_msg(AriesVcxErrorKind::InvalidConfiguration, err.to_string())
    })?;

    let schema_id = config.schema_id.clone();
    let schema = resolve_schema(ledger_read, &schema_id).await?;
    let issuer_id = config.issuer_id.clone();
    let cred_def = anoncreds
        .issuer_create_and_store_credential_def(wallet, &schema_id, schema.clone(), config)
        .await?;

    ledger_write
        .publish_cred_def(wallet, cred_def.clone(), &issuer_id)
        .await
        .map_err(|err| {
            AriesVcxError::from(err)
                .extend(format!("Unable to publish credential definition {}", cred_def.id))
        })?;
    info!(
        "Published credential definition {} for schema {}",
        cred_def.id, schema.id
    );
    Ok((schema, cred_def))
}

/// Fetches a credential definition and replaces a sequence number schema reference, as
/// legacy ledgers return it, with `schema_id`. The sequence number must be the one the
/// ledger assigned to `schema_id`.
pub async fn resolve_cred_def(
    ledger: &impl AnoncredsLedgerRead,
    cred_def_id: &CredentialDefinitionId,
    schema_id: &SchemaId,
) -> VcxResult<CredentialDefinition> {
    trace!(
        "resolve_cred_def >>> cred_def_id: {}, schema_id: {}",
        cred_def_id,
        schema_id
    );
    let mut cred_def = ledger.get_cred_def(cred_def_id).await.map_err(|err| {
        AriesVcxError::from(err)
            .extend(format!("Unable to resolve credential definition {cred_def_id}"))
    })?;

    if let Some(seq_no) = cred_def.schema_id.as_seq_no() {
        let schema = resolve_schema(ledger, schema_id).await?;
        if schema.seq_no.is_some_and(|schema_seq_no| schema_seq_no != seq_no) {
            return Err(AriesVcxError::from_msg(
                AriesVcxErrorKind::InvalidLedgerResponse,
                format!(
                    "Credential definition {cred_def_id} references schema #{seq_no}, but \
                     {schema_id} was written as #{:?}",
                    schema.seq_no
                ),
            ));
        }
        cred_def.resolve_schema_reference(schema_id);
        debug!("Rewrote schema reference #{seq_no} of {cred_def_id} to {schema_id}");
    } else if &cred_def.schema_id != schema_id {
        return Err(AriesVcxError::from_msg(
            AriesVcxErrorKind::InvalidLedgerResponse,
            format!(
                "Credential definition {cred_def_id} belongs to schema {}, not {schema_id}",
                cred_def.schema_id
            ),
        ));
    }
    Ok(cred_def)
}

#[cfg(test)]
mod tests {
    use anoncreds_types::data_types::identifiers::issuer_id::IssuerId;
    use aries_vcx_ledger::ledger::dialect::LedgerDialect;
    use aries_vcx_wallet::wallet::memory::InMemoryWallet;
    use test_utils::{
        constants::{ISSUER_DID, SCHEMA_ATTRIBUTES, SCHEMA_NAME},
        mockdata::{mock_anoncreds::MockAnoncreds, mock_ledger::MockLedger},
    };

    use super::*;
    use crate::common::primitives::credential_schema::create_and_publish_schema;

    async fn publish_schema(
        wallet: &InMemoryWallet,
        anoncreds: &MockAnoncreds,
        ledger: &MockLedger,
        version: &str,
    ) -> Schema {
        let attrs: Vec<String> = SCHEMA_ATTRIBUTES.iter().map(|a| a.to_string()).collect();
        create_and_publish_schema(
            wallet,
            anoncreds,
            ledger,
            &IssuerId::new(ISSUER_DID).unwrap(),
            SCHEMA_NAME,
            version,
            attrs.into(),
        )
        .await
        .unwrap()
    }

    async fn publish_cred_def(
        wallet: &InMemoryWallet,
        anoncreds: &MockAnoncreds,
        ledger: &MockLedger,
        schema_id: &SchemaId,
    ) -> CredentialDefinition {
        let config = CredentialDefinitionConfig::builder()
            .issuer_id(IssuerId::new(ISSUER_DID).unwrap())
            .schema_id(schema_id.clone())
            .build();
        let (_, cred_def) = create_and_publish_cred_def(wallet, anoncreds, ledger, ledger, config)
            .await
            .unwrap();
        cred_def
    }

    #[tokio::test]
    async fn test_legacy_seq_no_reference_is_resolved() {
        let wallet = InMemoryWallet::new("cred-def");
        let anoncreds = MockAnoncreds::new();
        let ledger = MockLedger::new(LedgerDialect::Legacy);
        let schema = publish_schema(&wallet, &anoncreds, &ledger, "1.0").await;
        let other = publish_schema(&wallet, &anoncreds, &ledger, "2.0").await;
        let cred_def = publish_cred_def(&wallet, &anoncreds, &ledger, &schema.id).await;

        let on_ledger = ledger.get_cred_def(&cred_def.id).await.unwrap();
        assert_eq!(on_ledger.schema_id.as_seq_no(), schema.seq_no);

        let resolved = resolve_cred_def(&ledger, &cred_def.id, &schema.id)
            .await
            .unwrap();
        assert_eq!(resolved.schema_id, schema.id);

        let err = resolve_cred_def(&ledger, &cred_def.id, &other.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidLedgerResponse);
    }

    #[tokio::test]
    async fn test_qualified_reference_must_match_schema() {
        let wallet = InMemoryWallet::new("cred-def");
        let anoncreds = MockAnoncreds::new();
        let ledger = MockLedger::new(LedgerDialect::Anoncreds);
        let schema = publish_schema(&wallet, &anoncreds, &ledger, "1.0").await;
        let other = publish_schema(&wallet, &anoncreds, &ledger, "2.0").await;
        let cred_def = publish_cred_def(&wallet, &anoncreds, &ledger, &schema.id).await;

        let resolved = resolve_cred_def(&ledger, &cred_def.id, &schema.id)
            .await
            .unwrap();
        assert_eq!(resolved.id, cred_def.id);
        assert_eq!(resolved.schema_id, schema.id);

        let err = resolve_cred_def(&ledger, &cred_def.id, &other.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::InvalidLedgerResponse);
    }

    #[tokio::test]
    async fn test_unknown_schema_is_not_found() {
        let wallet = InMemoryWallet::new("cred-def");
        let config = CredentialDefinitionConfig::builder()
            .issuer_id(IssuerId::new(ISSUER_DID).unwrap())
            .schema_id(SchemaId::new_legacy(
                &IssuerId::new(ISSUER_DID).unwrap(),
                SCHEMA_NAME,
                "9.9",
            ))
            .build();
        let ledger = MockLedger::new(LedgerDialect::Legacy);
        let err = create_and_publish_cred_def(&wallet, &MockAnoncreds::new(), &ledger, &ledger, config)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), AriesVcxErrorKind::LedgerItemNotFound);
    }
}
