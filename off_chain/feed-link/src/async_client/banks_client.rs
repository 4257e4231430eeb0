use async_trait::async_trait;
use solana_banks_client::BanksClient;
use tokio::sync::Mutex;

use super::*;
use crate::Result;

#[async_trait]
impl AsyncClient for Mutex<BanksClient> {
    async fn get_account_data(
        &self,
        pubkey: &Pubkey,
        data_slice: Option<DataSlice>,
    ) -> Result<Option<Vec<u8>>> {
        let account = self.lock().await.get_account(*pubkey).await?;
        Ok(account.map(|account| match data_slice {
            Some(slice) => slice.apply(account.data),
            None => account.data,
        }))
    }
}
