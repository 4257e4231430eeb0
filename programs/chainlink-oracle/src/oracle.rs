use futures::try_join;
use serde::Serialize;
use solana_program::pubkey::Pubkey;
use tracing::{debug, trace, warn};

use crate::config::FeedConfig;
use crate::errors::{FeedError, FeedResult};
use crate::source::AccountSource;
use crate::state::{
    layout::{self, HEADER_OFFSET},
    FeedHeader, Transmission, HEADER_LEN, TRANSMISSION_LEN,
};
use crate::utils::locator::{RingBuffers, RoundLocation};

/// Reads of a round before giving up on a feed written faster than it is read.
const MAX_READ_ATTEMPTS: usize = 3;

/// Answer of a round, as returned by `AggregatorV3Interface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundData {
    pub round_id: u32,
    pub answer: i128,
    pub started_at: u32,
    pub updated_at: u32,
    pub answered_in_round: u32,
}

impl From<Transmission> for RoundData {
    /// A stored round is both started and answered by its single transmission.
    fn from(transmission: Transmission) -> Self {
        Self {
            round_id: transmission.round_id,
            answer: transmission.answer,
            started_at: transmission.timestamp,
            updated_at: transmission.timestamp,
            answered_in_round: transmission.round_id,
        }
    }
}

/// Read-only `AggregatorV3Interface` over one feed account.
///
/// Each query reads a fresh header, nothing is cached between calls. Round
/// reads are checked against a second header read, see `read_round`.
#[derive(Debug)]
pub struct ChainlinkOracle<S> {
    feed_address: Pubkey,
    source: S,
}

impl<S: AccountSource> ChainlinkOracle<S> {
    /// Fails with [`crate::FeedError::ConfigurationError`] if the feed address is
    /// missing or malformed.
    #[tracing::instrument(skip(source))]
    pub fn new(config: &FeedConfig, source: S) -> FeedResult<Self> {
        let feed_address = config.feed_pubkey()?;
        debug!(%feed_address, "chainlink oracle configured");
        Ok(Self {
            feed_address,
            source,
        })
    }

    pub fn feed_address(&self) -> Pubkey {
        self.feed_address
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn header(&self) -> FeedResult<FeedHeader> {
        let raw = self
            .source
            .read(&self.feed_address, HEADER_OFFSET, HEADER_LEN)
            .await?;
        FeedHeader::decode(&raw)
    }

    pub async fn decimals(&self) -> FeedResult<u8> {
        Ok(self.header().await?.decimals)
    }

    pub async fn description(&self) -> FeedResult<String> {
        Ok(self.header().await?.description)
    }

    /// Layout version of the feed account.
    pub async fn version(&self) -> FeedResult<u8> {
        Ok(self.header().await?.version)
    }

    pub async fn latest_round_data(&self) -> FeedResult<RoundData> {
        let (header, rings) = self.snapshot().await?;
        self.read_round(rings, header.latest_round_id).await
    }

    /// Fails with [`crate::FeedError::NoDataPresent`] if the round is not stored
    /// anymore or not yet.
    ///
    /// Rounds only kept in the historical ring are rounded down to the closest
    /// stored round, the returned `round_id` is the one actually read.
    pub async fn get_round_data(&self, round_id: u32) -> FeedResult<RoundData> {
        let (_, rings) = self.snapshot().await?;
        self.read_round(rings, round_id).await
    }

    /// Locate a round without reading its transmission.
    pub async fn locate_round(&self, round_id: u32) -> FeedResult<RoundLocation> {
        let (_, rings) = self.snapshot().await?;
        rings.locate(round_id)
    }

    /// Current geometry of both rings.
    pub async fn ring_buffers(&self) -> FeedResult<RingBuffers> {
        Ok(self.snapshot().await?.1)
    }

    /// Header and ring geometry, read concurrently.
    async fn snapshot(&self) -> FeedResult<(FeedHeader, RingBuffers)> {
        let (data_len, header) = try_join!(self.source.data_len(&self.feed_address), self.header())?;
        let historical_length = layout::historical_length(data_len, header.live_length)?;
        let rings = RingBuffers::new(&header, historical_length);
        trace!(?rings, data_len);
        Ok((header, rings))
    }

    /// Read the transmission of `round_id`, then check against a fresh header
    /// that the slot was not overwritten meanwhile.
    ///
    /// A slot is only overwritten once its round has left the ring, so a round
    /// still found at the same location after the read was the one read.
    async fn read_round(&self, mut rings: RingBuffers, round_id: u32) -> FeedResult<RoundData> {
        for _ in 0..MAX_READ_ATTEMPTS {
            let location = rings.locate(round_id)?;
            debug!(
                round_id,
                corrected_round_id = location.corrected_round_id,
                position = location.position,
                "round located"
            );
            let offset = layout::transmission_offset(location.position)?;
            let raw = self
                .source
                .read(&self.feed_address, offset, TRANSMISSION_LEN)
                .await?;
            let transmission = Transmission::decode(location.corrected_round_id, &raw)?;

            let current = RingBuffers::new(&self.header().await?, rings.historical_length);
            if current.locate(round_id).ok() == Some(location) {
                return Ok(transmission.into());
            }
            warn!(
                round_id,
                latest_round_id = current.latest_round_id,
                "feed written while reading round"
            );
            rings = current;
        }
        Err(FeedError::NoDataPresent)
    }
}
