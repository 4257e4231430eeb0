#![allow(dead_code)]

pub mod fixtures;

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chainlink_oracle::{
    state::layout::TRANSMISSIONS_OFFSET,
    AccountSource, ChainlinkOracle, FeedConfig, FeedError, FeedResult, MemoryAccountSource, Pubkey,
};

pub const FEED_HEX_ADDRESS: &str =
    "0xb22f4bfe7b663a29da31c40b32ab0b6f96c8ab1946c517b2c056710a352719ad";

pub fn feed_address() -> Pubkey {
    chainlink_oracle::config::parse_feed_address(FEED_HEX_ADDRESS).unwrap()
}

pub fn oracle_over(data: Vec<u8>) -> ChainlinkOracle<MemoryAccountSource> {
    let source = MemoryAccountSource::new().with_account(feed_address(), data);
    ChainlinkOracle::new(&FeedConfig::new(FEED_HEX_ADDRESS), source).unwrap()
}

/// Source whose upstream is down.
pub struct UnavailableSource;

#[async_trait]
impl AccountSource for UnavailableSource {
    async fn data_len(&self, _address: &Pubkey) -> FeedResult<usize> {
        Err(FeedError::UpstreamUnavailable("connection refused".to_string()))
    }

    async fn read(&self, _address: &Pubkey, _offset: usize, _len: usize) -> FeedResult<Vec<u8>> {
        Err(FeedError::UpstreamUnavailable("connection refused".to_string()))
    }
}

/// Feed written by the store right before the first transmission is read.
///
/// Serves `before` until a read reaches the transmission slots, then `after`
/// for every read, header included.
pub struct AdvancingSource {
    before: Vec<u8>,
    after: Vec<u8>,
    advanced: AtomicBool,
}

impl AdvancingSource {
    pub fn new(before: Vec<u8>, after: Vec<u8>) -> Self {
        assert_eq!(before.len(), after.len());
        Self {
            before,
            after,
            advanced: AtomicBool::new(false),
        }
    }

    pub fn advanced(&self) -> bool {
        self.advanced.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountSource for AdvancingSource {
    async fn data_len(&self, _address: &Pubkey) -> FeedResult<usize> {
        Ok(self.before.len())
    }

    async fn read(&self, _address: &Pubkey, offset: usize, len: usize) -> FeedResult<Vec<u8>> {
        if offset >= TRANSMISSIONS_OFFSET {
            self.advanced.store(true, Ordering::SeqCst);
        }
        let data = if self.advanced() {
            &self.after
        } else {
            &self.before
        };
        let start = offset.min(data.len());
        let end = offset.saturating_add(len).min(data.len());
        Ok(data[start..end].to_vec())
    }
}

pub fn oracle_with<S: AccountSource>(source: S) -> ChainlinkOracle<S> {
    ChainlinkOracle::new(&FeedConfig::new(FEED_HEX_ADDRESS), source).unwrap()
}
