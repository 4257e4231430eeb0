use std::collections::HashMap;

use async_trait::async_trait;
use solana_program::pubkey::Pubkey;

use crate::errors::{FeedError, FeedResult};

/// Provider of raw account bytes.
///
/// Implementations fail with [`FeedError::AccountNotFound`] when the account does
/// not exist and with [`FeedError::UpstreamUnavailable`] on transport failures or
/// timeouts.
#[async_trait]
pub trait AccountSource: Sync {
    /// Length of the account data.
    async fn data_len(&self, address: &Pubkey) -> FeedResult<usize>;

    /// Read `len` bytes of the account data starting at `offset`.
    ///
    /// The returned buffer is shorter than `len` when the account ends first.
    async fn read(&self, address: &Pubkey, offset: usize, len: usize) -> FeedResult<Vec<u8>>;
}

/// Accounts held in memory, for tests and replay of snapshots.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountSource {
    accounts: HashMap<Pubkey, Vec<u8>>,
}

impl MemoryAccountSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, address: Pubkey, data: Vec<u8>) -> Self {
        self.insert(address, data);
        self
    }

    pub fn insert(&mut self, address: Pubkey, data: Vec<u8>) -> Option<Vec<u8>> {
        self.accounts.insert(address, data)
    }

    fn account(&self, address: &Pubkey) -> FeedResult<&[u8]> {
        self.accounts
            .get(address)
            .map(Vec::as_slice)
            .ok_or(FeedError::AccountNotFound(*address))
    }
}

#[async_trait]
impl AccountSource for MemoryAccountSource {
    async fn data_len(&self, address: &Pubkey) -> FeedResult<usize> {
        Ok(self.account(address)?.len())
    }

    async fn read(&self, address: &Pubkey, offset: usize, len: usize) -> FeedResult<Vec<u8>> {
        let data = self.account(address)?;
        let start = offset.min(data.len());
        let end = offset.saturating_add(len).min(data.len());
        Ok(data[start..end].to_vec())
    }
}
