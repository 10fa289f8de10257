use std::sync::Arc;

use anoncreds_types::data_types::{
    identifiers::{issuer_id::IssuerId, schema_id::SchemaId},
    ledger::schema::{AttributeNames, Schema},
};
use aries_vcx_anoncreds::anoncreds::base_anoncreds::BaseAnonCreds;
use aries_vcx_issuance::common::primitives::credential_schema::create_and_publish_schema;
use aries_vcx_ledger::ledger::base_ledger::AnoncredsLedgerWrite;
use aries_vcx_wallet::wallet::{
    base_wallet::{record_category::RecordCategory, BaseWallet},
    record_tags::RecordTags,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::*,
    storage::{agent_storage_wallet::AgentStorageWallet, StorageRecord},
};

/// Local copy of a published schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRecord {
    pub id: SchemaId,
    pub issuer_id: IssuerId,
    pub name: String,
    pub version: String,
    pub attr_names: AttributeNames,
    pub seq_no: Option<u32>,
}

impl From<Schema> for SchemaRecord {
    fn from(schema: Schema) -> Self {
        Self {
            id: schema.id,
            issuer_id: schema.issuer_id,
            name: schema.name,
            version: schema.version,
            attr_names: schema.attr_names,
            seq_no: schema.seq_no,
        }
    }
}

impl StorageRecord for SchemaRecord {
    const CATEGORY: RecordCategory = RecordCategory::Schema;

    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn tags(&self) -> RecordTags {
        RecordTags::default()
            .with("name", self.name.clone())
            .with("version", self.version.clone())
            .with("issuer_id", self.issuer_id.to_string())
    }
}

pub struct ServiceSchemas<W, A, L> {
    ledger: Arc<L>,
    anoncreds: Arc<A>,
    wallet: Arc<W>,
    schemas: AgentStorageWallet<W, SchemaRecord>,
}

impl<W, A, L> ServiceSchemas<W, A, L>
where
    W: BaseWallet,
    A: BaseAnonCreds,
    L: AnoncredsLedgerWrite,
{
    pub fn new(ledger: Arc<L>, anoncreds: Arc<A>, wallet: Arc<W>) -> Self {
        Self {
            schemas: AgentStorageWallet::new("schemas", wallet.clone()),
            ledger,
            anoncreds,
            wallet,
        }
    }

    pub async fn create_schema(
        &self,
        issuer_id: &IssuerId,
        name: &str,
        version: &str,
        attributes: Vec<String>,
    ) -> AgentResult<SchemaId> {
        let schema = create_and_publish_schema(
            self.wallet.as_ref(),
            self.anoncreds.as_ref(),
            self.ledger.as_ref(),
            issuer_id,
            name,
            version,
            AttributeNames(attributes),
        )
        .await?;
        let record = SchemaRecord::from(schema);
        self.schemas.insert(&record).await?;
        Ok(record.id)
    }

    pub async fn get_schema(&self, schema_id: &SchemaId) -> AgentResult<SchemaRecord> {
        self.schemas.get(&schema_id.to_string()).await
    }

    pub async fn find_schemas(
        &self,
        name: Option<&str>,
        version: Option<&str>,
    ) -> AgentResult<Vec<SchemaRecord>> {
        let mut query = RecordTags::default();
        if let Some(name) = name {
            query = query.with("name", name);
        }
        if let Some(version) = version {
            query = query.with("version", version);
        }
        self.schemas.find_by(query).await
    }
}
