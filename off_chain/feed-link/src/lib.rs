#![doc = include_str!("../Readme.md")]

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chainlink_oracle::{AccountSource, FeedError, FeedResult};
use solana_sdk::pubkey::Pubkey;
use tokio::sync::RwLock;
use tracing::{debug, trace, warn};

pub mod async_client;
pub mod consts;
pub mod errors;

pub use async_client::{AsyncClient, DataSlice};
pub use consts::*;
use errors::ErrorKind;

type Result<T> = std::result::Result<T, errors::ErrorKind>;

/// [`AccountSource`] backed by a Solana async client, every request bounded by
/// a timeout.
///
/// Feed accounts never change size, their length is fetched once per address.
pub struct FeedLink<T>
where
    T: async_client::AsyncClient,
{
    pub client: T,
    timeout: Duration,
    data_lens: RwLock<HashMap<Pubkey, usize>>,
}

impl<T> FeedLink<T>
where
    T: async_client::AsyncClient,
{
    pub fn new(client: T, timeout: impl Into<Option<Duration>>) -> Self {
        let timeout: Option<Duration> = timeout.into();
        FeedLink {
            client,
            timeout: timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            data_lens: RwLock::new(HashMap::new()),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn fetch(&self, address: &Pubkey, data_slice: Option<DataSlice>) -> FeedResult<Vec<u8>> {
        trace!(%address, ?data_slice, "fetching account data");
        let res = tokio::time::timeout(
            self.timeout,
            self.client.get_account_data(address, data_slice),
        )
        .await
        .unwrap_or(Err(ErrorKind::Timeout(self.timeout)));

        match res {
            Ok(Some(data)) => Ok(data),
            Ok(None) => Err(FeedError::AccountNotFound(*address)),
            Err(e) => {
                warn!(%address, "Error while fetching feed account {:?}", e);
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl<T> AccountSource for FeedLink<T>
where
    T: async_client::AsyncClient,
{
    async fn data_len(&self, address: &Pubkey) -> FeedResult<usize> {
        if let Some(len) = self.data_lens.read().await.get(address) {
            return Ok(*len);
        }
        let len = self.fetch(address, None).await?.len();
        debug!(%address, len, "feed account length cached");
        self.data_lens.write().await.insert(*address, len);
        Ok(len)
    }

    async fn read(&self, address: &Pubkey, offset: usize, len: usize) -> FeedResult<Vec<u8>> {
        self.fetch(
            address,
            Some(DataSlice {
                offset,
                length: len,
            }),
        )
        .await
    }
}
