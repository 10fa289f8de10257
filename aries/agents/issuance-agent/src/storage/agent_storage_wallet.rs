use std::{marker::PhantomData, sync::Arc};

use aries_vcx_issuance::aries_vcx_wallet::wallet::{
    base_wallet::{record::Record, BaseWallet},
    record_tags::RecordTags,
};

use super::StorageRecord;
use crate::error::*;

/// Typed view over one record category of the wallet.
pub struct AgentStorageWallet<W, T> {
    name: String,
    wallet: Arc<W>,
    _record: PhantomData<fn() -> T>,
}

impl<W: BaseWallet, T: StorageRecord> AgentStorageWallet<W, T> {
    pub fn new(name: &str, wallet: Arc<W>) -> Self {
        Self {
            name: name.to_string(),
            wallet,
            _record: PhantomData,
        }
    }

    pub async fn get(&self, id: &str) -> AgentResult<T> {
        let record = self
            .wallet
            .get_record(T::CATEGORY, id)
            .await
            .map_err(|err| {
                AgentError::from(err).extend(format!("{}: unable to load {id}", self.name))
            })?;
        Ok(serde_json::from_str(record.value())?)
    }

    pub async fn insert(&self, value: &T) -> AgentResult<String> {
        let id = value.record_id();
        trace!("{}::insert >>> id: {id}", self.name);
        let record = Record::builder()
            .category(T::CATEGORY)
            .name(id.clone())
            .value(serde_json::to_string(value)?)
            .tags(value.tags())
            .build();
        self.wallet.add_record(record).await?;
        Ok(id)
    }

    /// Persists a record which must already exist.
    pub async fn update(&self, value: &T) -> AgentResult<()> {
        let id = value.record_id();
        trace!("{}::update >>> id: {id}", self.name);
        self.wallet
            .update_record_value(T::CATEGORY, &id, &serde_json::to_string(value)?)
            .await?;
        self.wallet
            .update_record_tags(T::CATEGORY, &id, value.tags())
            .await?;
        Ok(())
    }

    pub async fn find_by(&self, query: RecordTags) -> AgentResult<Vec<T>> {
        let filter = (!query.is_empty()).then(|| query.into());
        self.wallet
            .search_record(T::CATEGORY, filter)
            .await?
            .iter()
            .map(|record| serde_json::from_str(record.value()).map_err(AgentError::from))
            .collect()
    }

    pub async fn remove(&self, id: &str) -> AgentResult<()> {
        trace!("{}::remove >>> id: {id}", self.name);
        Ok(self.wallet.delete_record(T::CATEGORY, id).await?)
    }

    pub async fn contains_key(&self, id: &str) -> AgentResult<bool> {
        match self.wallet.get_record(T::CATEGORY, id).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_record_not_found() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
