use std::{num::NonZeroU64, path::Path};

use anyhow::{Context, Result};
use chainlink_oracle::FeedConfig;

/// Merge the optional configuration file with command line overrides.
///
/// Command line values win. The feed address is validated here so a bad setup
/// fails before any request reaches the cluster.
pub fn resolve(
    config_file: Option<&Path>,
    feed_address: Option<String>,
    timeout_ms: Option<NonZeroU64>,
) -> Result<FeedConfig> {
    let mut config = match config_file {
        Some(path) => FeedConfig::read_from_file(&path)
            .with_context(|| format!("Cannot load feed configuration {}", path.display()))?,
        None => FeedConfig::default(),
    };
    if feed_address.is_some() {
        config.feed_address = feed_address;
    }
    if timeout_ms.is_some() {
        config.timeout_ms = timeout_ms;
    }
    config
        .feed_pubkey()
        .context("No usable feed address, use --feed-address or --config")?;
    Ok(config)
}
