#[cfg(feature = "banks-client")]
pub mod banks_client;
#[cfg(feature = "rpc-client")]
pub mod rpc_client;

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use crate::Result;

/// Byte range of an account to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSlice {
    pub offset: usize,
    pub length: usize,
}

impl DataSlice {
    /// Cut `data` to the slice, the way the RPC node does it.
    pub fn apply(&self, mut data: Vec<u8>) -> Vec<u8> {
        let start = self.offset.min(data.len());
        let end = self.offset.saturating_add(self.length).min(data.len());
        data.truncate(end);
        data.drain(..start);
        data
    }
}

#[async_trait]
pub trait AsyncClient: Sync {
    /// Data of an account, `None` if the account does not exist.
    async fn get_account_data(
        &self,
        pubkey: &Pubkey,
        data_slice: Option<DataSlice>,
    ) -> Result<Option<Vec<u8>>>;
}
