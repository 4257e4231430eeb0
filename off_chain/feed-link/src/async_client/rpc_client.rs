use async_trait::async_trait;
use solana_account_decoder::{UiAccountEncoding, UiDataSliceConfig};
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcAccountInfoConfig};

use super::*;
use crate::Result;

#[async_trait]
impl AsyncClient for RpcClient {
    async fn get_account_data(
        &self,
        pubkey: &Pubkey,
        data_slice: Option<DataSlice>,
    ) -> Result<Option<Vec<u8>>> {
        let config = RpcAccountInfoConfig {
            // Full accounts are large, let the node compress them
            encoding: Some(if data_slice.is_some() {
                UiAccountEncoding::Base64
            } else {
                UiAccountEncoding::Base64Zstd
            }),
            data_slice: data_slice.map(|slice| UiDataSliceConfig {
                offset: slice.offset,
                length: slice.length,
            }),
            commitment: Some(self.commitment()),
            min_context_slot: None,
        };
        <RpcClient>::get_account_with_config(self, pubkey, config)
            .await
            .map(|response| response.value.map(|account| account.data))
            .map_err(Into::into)
    }
}
