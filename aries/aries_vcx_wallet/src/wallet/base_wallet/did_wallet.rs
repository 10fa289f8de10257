use async_trait::async_trait;

use super::did_data::DidData;
use crate::errors::error::VcxWalletResult;

#[async_trait]
pub trait DidWallet {
    async fn create_and_store_my_did(
        &self,
        seed: Option<&str>,
        did_method_name: Option<&str>,
    ) -> VcxWalletResult<DidData>;

    async fn key_count(&self) -> VcxWalletResult<usize>;

    async fn key_for_did(&self, did: &str) -> VcxWalletResult<String>;
}
