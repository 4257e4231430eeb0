use std::{fs::File, io::BufReader, num::NonZeroU64, path::Path, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use solana_program::pubkey::{Pubkey, PUBKEY_BYTES};

use crate::errors::{FeedError, FeedResult};

/// Default upper bound of a single upstream request.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Construction time configuration of a [`crate::ChainlinkOracle`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedConfig {
    /// Feed account to read, base58 or `0x` prefixed hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional upper bound of one upstream request in milliseconds.
    pub timeout_ms: Option<NonZeroU64>,
}

impl FeedConfig {
    pub fn new(feed_address: impl Into<String>) -> Self {
        Self {
            feed_address: Some(feed_address.into()),
            timeout_ms: None,
        }
    }

    pub fn save_to_file(&self, file_path: impl AsRef<Path>) -> FeedResult<()> {
        let file = File::create(file_path).map_err(config_error)?;
        serde_json::to_writer_pretty(file, &self).map_err(config_error)?;
        Ok(())
    }

    pub fn read_from_file(file_path: &impl AsRef<Path>) -> FeedResult<Self> {
        let file = File::open(file_path).map_err(config_error)?;
        let buf_reader = BufReader::new(file);
        serde_json::from_reader(buf_reader).map_err(config_error)
    }

    /// Parsed feed address, fails if it is missing or malformed.
    pub fn feed_pubkey(&self) -> FeedResult<Pubkey> {
        let address = self
            .feed_address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| FeedError::ConfigurationError("feed address is missing".to_string()))?;
        parse_feed_address(address)
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.map_or(DEFAULT_TIMEOUT_MS, NonZeroU64::get)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms())
    }
}

/// Parse a feed address given either in base58 or as `0x` prefixed hex.
pub fn parse_feed_address(address: &str) -> FeedResult<Pubkey> {
    match address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) {
        Some(hex) => parse_hex_pubkey(hex),
        None => Pubkey::from_str(address).map_err(|e| {
            FeedError::ConfigurationError(format!("invalid feed address {address}: {e}"))
        }),
    }
}

fn parse_hex_pubkey(hex_str: &str) -> FeedResult<Pubkey> {
    let bytes = hex::decode(hex_str)
        .map_err(|e| FeedError::ConfigurationError(format!("invalid hex feed address: {e}")))?;
    let bytes = <[u8; PUBKEY_BYTES]>::try_from(bytes).map_err(|_| {
        FeedError::ConfigurationError(format!(
            "hex feed address must have {} digits, got {}",
            2 * PUBKEY_BYTES,
            hex_str.len()
        ))
    })?;
    Ok(Pubkey::new_from_array(bytes))
}

fn config_error(e: impl std::fmt::Display) -> FeedError {
    FeedError::ConfigurationError(e.to_string())
}
