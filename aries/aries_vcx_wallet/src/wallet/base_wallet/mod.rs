use async_trait::async_trait;

use self::{did_wallet::DidWallet, record_wallet::RecordWallet};
use crate::errors::error::VcxWalletResult;

pub mod did_data;
pub mod did_wallet;
pub mod record;
pub mod record_category;
pub mod record_wallet;
pub mod search_filter;

#[async_trait]
pub trait BaseWallet: RecordWallet + DidWallet + Send + Sync + std::fmt::Debug {
    /// Releases the storage handle. Every later operation fails with
    /// [`crate::errors::error::VcxWalletError::WalletClosed`].
    async fn close_wallet(&self) -> VcxWalletResult<()>;
}
