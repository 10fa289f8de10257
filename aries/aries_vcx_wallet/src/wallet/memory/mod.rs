use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        RwLock, RwLockReadGuard, RwLockWriteGuard,
    },
};

use async_trait::async_trait;

use crate::{
    errors::error::{VcxWalletError, VcxWalletResult},
    wallet::{
        base_wallet::{
            did_data::DidData, did_wallet::DidWallet, record::Record,
            record_category::RecordCategory, record_wallet::RecordWallet,
            search_filter::SearchFilter, BaseWallet,
        },
        record_tags::RecordTags,
        utils::{bytes_to_bs58, seed_bytes},
    },
};

type RecordKey = (RecordCategory, String);

/// Volatile wallet keeping every record in process memory. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryWallet {
    name: String,
    store: RwLock<HashMap<RecordKey, Record>>,
    closed: AtomicBool,
}

impl InMemoryWallet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn ensure_open(&self) -> VcxWalletResult<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(VcxWalletError::WalletClosed);
        }
        Ok(())
    }

    fn lock_store_read(&self) -> VcxWalletResult<RwLockReadGuard<'_, HashMap<RecordKey, Record>>> {
        self.ensure_open()?;
        self.store.read().map_err(|err| {
            error!("Unable to read-lock wallet {}: {:?}", self.name, err);
            VcxWalletError::InvalidInput(format!("Wallet {} lock is poisoned", self.name))
        })
    }

    fn lock_store_write(
        &self,
    ) -> VcxWalletResult<RwLockWriteGuard<'_, HashMap<RecordKey, Record>>> {
        self.ensure_open()?;
        self.store.write().map_err(|err| {
            error!("Unable to write-lock wallet {}: {:?}", self.name, err);
            VcxWalletError::InvalidInput(format!("Wallet {} lock is poisoned", self.name))
        })
    }

    fn with_record<F>(&self, category: RecordCategory, name: &str, update: F) -> VcxWalletResult<()>
    where
        F: FnOnce(&mut Record),
    {
        let mut store = self.lock_store_write()?;
        match store.get_mut(&(category, name.to_string())) {
            Some(record) => {
                update(record);
                Ok(())
            }
            None => Err(VcxWalletError::record_not_found(category, name)),
        }
    }
}

#[async_trait]
impl RecordWallet for InMemoryWallet {
    async fn add_record(&self, record: Record) -> VcxWalletResult<()> {
        let mut store = self.lock_store_write()?;
        let key = (*record.category(), record.name().to_string());
        if store.contains_key(&key) {
            return Err(VcxWalletError::DuplicateRecord(format!(
                "category: {}, name: {}",
                key.0, key.1
            )));
        }
        trace!("add_record >> category: {}, name: {}", key.0, key.1);
        store.insert(key, record);
        Ok(())
    }

    async fn get_record(&self, category: RecordCategory, name: &str) -> VcxWalletResult<Record> {
        let store = self.lock_store_read()?;
        store
            .get(&(category, name.to_string()))
            .cloned()
            .ok_or_else(|| VcxWalletError::record_not_found(category, name))
    }

    async fn update_record_tags(
        &self,
        category: RecordCategory,
        name: &str,
        new_tags: RecordTags,
    ) -> VcxWalletResult<()> {
        self.with_record(category, name, |record| record.set_tags(new_tags))
    }

    async fn update_record_value(
        &self,
        category: RecordCategory,
        name: &str,
        new_value: &str,
    ) -> VcxWalletResult<()> {
        self.with_record(category, name, |record| record.set_value(new_value))
    }

    async fn delete_record(&self, category: RecordCategory, name: &str) -> VcxWalletResult<()> {
        let mut store = self.lock_store_write()?;
        store
            .remove(&(category, name.to_string()))
            .map(|_| ())
            .ok_or_else(|| VcxWalletError::record_not_found(category, name))
    }

    async fn search_record(
        &self,
        category: RecordCategory,
        search_filter: Option<SearchFilter>,
    ) -> VcxWalletResult<Vec<Record>> {
        let store = self.lock_store_read()?;
        let mut records: Vec<Record> = store
            .iter()
            .filter(|((record_category, _), _)| *record_category == category)
            .filter(|(_, record)| {
                search_filter
                    .as_ref()
                    .map_or(true, |filter| filter.matches(record.tags()))
            })
            .map(|(_, record)| record.clone())
            .collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(records)
    }
}

#[async_trait]
impl DidWallet for InMemoryWallet {
    async fn create_and_store_my_did(
        &self,
        seed: Option<&str>,
        _did_method_name: Option<&str>,
    ) -> VcxWalletResult<DidData> {
        let key = seed_bytes(seed);
        let verkey = bytes_to_bs58(&key);
        let did = bytes_to_bs58(&key[0..16]);
        let did_data = DidData::new(&did, &verkey);

        let record = Record::builder()
            .category(RecordCategory::Did)
            .name(did.clone())
            .value(serde_json::to_string(&did_data)?)
            .build();
        self.add_record(record).await?;
        Ok(did_data)
    }

    async fn key_count(&self) -> VcxWalletResult<usize> {
        Ok(self.search_record(RecordCategory::Did, None).await?.len())
    }

    async fn key_for_did(&self, did: &str) -> VcxWalletResult<String> {
        let record = self.get_record(RecordCategory::Did, did).await?;
        let did_data: DidData = serde_json::from_str(record.value())?;
        Ok(did_data.verkey().to_string())
    }
}

#[async_trait]
impl BaseWallet for InMemoryWallet {
    async fn close_wallet(&self) -> VcxWalletResult<()> {
        info!("Closing in-memory wallet {}", self.name);
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, value: &str, tags: RecordTags) -> Record {
        Record::builder()
            .category(RecordCategory::Credential)
            .name(name)
            .value(value)
            .tags(tags)
            .build()
    }

    #[tokio::test]
    async fn record_wallet_should_create_and_get_record() {
        let wallet = InMemoryWallet::new("test");
        wallet
            .add_record(record("foo", "bar", RecordTags::default()))
            .await
            .unwrap();

        let res = wallet
            .get_record(RecordCategory::Credential, "foo")
            .await
            .unwrap();
        assert_eq!("bar", res.value());

        let err = wallet
            .add_record(record("foo", "baz", RecordTags::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, VcxWalletError::DuplicateRecord(_)));
    }

    #[tokio::test]
    async fn record_wallet_should_delete_record() {
        let wallet = InMemoryWallet::new("test");
        wallet
            .add_record(record("foo", "bar", RecordTags::default()))
            .await
            .unwrap();

        wallet
            .delete_record(RecordCategory::Credential, "foo")
            .await
            .unwrap();

        let err = wallet
            .get_record(RecordCategory::Credential, "foo")
            .await
            .unwrap_err();
        assert!(err.is_record_not_found());
    }

    #[tokio::test]
    async fn record_wallet_should_update_value_and_tags() {
        let wallet = InMemoryWallet::new("test");
        let tags = RecordTags::default().with("a", "b");
        wallet
            .add_record(record("foo", "xxx", tags.clone()))
            .await
            .unwrap();

        wallet
            .update_record_value(RecordCategory::Credential, "foo", "yyy")
            .await
            .unwrap();
        let res = wallet
            .get_record(RecordCategory::Credential, "foo")
            .await
            .unwrap();
        assert_eq!("yyy", res.value());
        assert_eq!(&tags, res.tags());

        let new_tags = RecordTags::default().with("c", "d");
        wallet
            .update_record_tags(RecordCategory::Credential, "foo", new_tags.clone())
            .await
            .unwrap();
        let res = wallet
            .get_record(RecordCategory::Credential, "foo")
            .await
            .unwrap();
        assert_eq!(&new_tags, res.tags());
    }

    #[tokio::test]
    async fn record_wallet_should_search_by_tags() {
        let wallet = InMemoryWallet::new("test");
        wallet
            .add_record(record("a", "1", RecordTags::default().with("state", "issued")))
            .await
            .unwrap();
        wallet
            .add_record(record("b", "2", RecordTags::default().with("state", "offered")))
            .await
            .unwrap();
        wallet
            .add_record(
                Record::builder()
                    .category(RecordCategory::Schema)
                    .name("c")
                    .value("3")
                    .tags(RecordTags::default().with("state", "issued"))
                    .build(),
            )
            .await
            .unwrap();

        let all = wallet
            .search_record(RecordCategory::Credential, None)
            .await
            .unwrap();
        assert_eq!(2, all.len());

        let issued = wallet
            .search_record(
                RecordCategory::Credential,
                Some(RecordTags::default().with("state", "issued").into()),
            )
            .await
            .unwrap();
        assert_eq!(1, issued.len());
        assert_eq!("a", issued[0].name());
    }

    #[tokio::test]
    async fn did_wallet_should_create_did() {
        let wallet = InMemoryWallet::new("test");
        let did_data = wallet
            .create_and_store_my_did(Some("000000000000000000000000Trustee1"), None)
            .await
            .unwrap();

        assert_eq!(
            wallet.key_for_did(did_data.did()).await.unwrap(),
            did_data.verkey()
        );
        assert_eq!(wallet.key_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn closed_wallet_should_reject_operations() {
        let wallet = InMemoryWallet::new("test");
        wallet.close_wallet().await.unwrap();

        let err = wallet
            .get_record(RecordCategory::Credential, "foo")
            .await
            .unwrap_err();
        assert!(matches!(err, VcxWalletError::WalletClosed));
    }
}
