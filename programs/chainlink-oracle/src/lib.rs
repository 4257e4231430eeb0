//! Read-only view over a Chainlink Solana feed account.
//!
//! A feed account stores a header followed by two ring buffers of transmissions:
//! a "live" window holding every recent round and a "historical" window holding
//! one round out of `granularity` for older history.
//!
//! [`ChainlinkOracle`] answers `AggregatorV3Interface`-style queries over such an
//! account, fetching the bytes it needs through an [`AccountSource`].

pub mod config;
pub mod errors;
pub mod oracle;
pub mod source;
pub mod state;
pub mod utils;

pub use config::FeedConfig;
pub use errors::{FeedError, FeedResult};
pub use oracle::{ChainlinkOracle, RoundData};
pub use solana_program::pubkey::Pubkey;
pub use source::{AccountSource, MemoryAccountSource};
pub use state::{FeedHeader, Transmission};
pub use utils::locator::{locate, RingBuffers, RoundLocation};
