pub mod agent_storage_wallet;
pub mod keyed_locks;

use aries_vcx_issuance::aries_vcx_wallet::wallet::{
    base_wallet::record_category::RecordCategory, record_tags::RecordTags,
};
use serde::{de::DeserializeOwned, Serialize};

/// A record the agent persists as a JSON wallet record.
pub trait StorageRecord: Serialize + DeserializeOwned + Send + Sync {
    const CATEGORY: RecordCategory;

    fn record_id(&self) -> String;

    /// Searchable tags; rewritten on every update.
    fn tags(&self) -> RecordTags;
}
