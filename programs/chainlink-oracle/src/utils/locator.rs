//! Locate a round in the live and historical ring buffers of a feed
//!
//! Transmissions are stored in two rings laid out back to back:
//!
//! ```text
//! 0   1   2   3   4   5   6   7   8   9   10  11  12  13  14
//! | Live            | Historical
//! 0   1   2   3   4 | 0   1   2   3   4   5   6   7   8   9
//! 36  37  38  34  35| 33  36  9   12  15  18  21  24  27  30
//!             ^               ^
//!             live_cursor     historical_cursor
//! ```
//!
//! Every round is written to the live ring. Rounds divisible by `granularity` are
//! also appended to the historical ring. Both cursors point at the next slot to be
//! overwritten.
//!
//! Rounds still in the live ring are served from it. Older rounds are served from
//! the historical ring, rounded down to the closest sampled round.

use super::ring_buffer::left_shift;
use crate::errors::{FeedError, FeedResult};
use crate::state::FeedHeader;

/// Geometry and cursors of the two rings of a feed account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingBuffers {
    pub live_cursor: u32,
    pub live_length: u32,
    pub latest_round_id: u32,
    pub historical_cursor: u32,
    pub historical_length: u32,
    pub granularity: u8,
}

/// Where a round is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundLocation {
    /// Slot index across both rings, historical slots come after the live ones.
    pub position: u32,
    /// Round actually stored at `position`. Differs from the requested round
    /// when the request was rounded down to a historical sample.
    pub corrected_round_id: u32,
}

impl RingBuffers {
    /// Build the ring geometry from a decoded header.
    ///
    /// The historical length is not part of the header, it derives from the
    /// account size (see [`crate::state::layout::historical_length`]).
    pub fn new(header: &FeedHeader, historical_length: u32) -> Self {
        Self {
            live_cursor: header.live_cursor,
            live_length: header.live_length,
            latest_round_id: header.latest_round_id,
            historical_cursor: header.historical_cursor,
            historical_length,
            granularity: header.granularity,
        }
    }

    pub fn validate(&self) -> FeedResult<()> {
        if self.granularity == 0 {
            return Err(FeedError::InvalidArgument("granularity is zero"));
        }
        if self.live_length == 0 {
            return Err(FeedError::InvalidArgument("live ring is empty"));
        }
        if self.live_cursor >= self.live_length {
            return Err(FeedError::InvalidArgument("live cursor out of live ring"));
        }
        if self.historical_length > 0 && self.historical_cursor >= self.historical_length {
            return Err(FeedError::InvalidArgument(
                "historical cursor out of historical ring",
            ));
        }
        Ok(())
    }

    /// Oldest round still present in the live ring.
    pub fn live_oldest_round(&self) -> u32 {
        self.latest_round_id
            .saturating_sub(self.live_length.saturating_sub(1))
    }

    /// Newest sampled round older than the live window, `None` if there is none.
    pub fn latest_historical_round(&self) -> Option<u32> {
        let below_live = self.live_oldest_round().checked_sub(1)?;
        let round = floor_to_multiple(below_live, self.granularity.into());
        (round > 0).then_some(round)
    }

    pub fn locate(&self, round_id: u32) -> FeedResult<RoundLocation> {
        self.validate()?;

        if round_id == 0 || round_id > self.latest_round_id {
            return Err(FeedError::NoDataPresent);
        }

        if round_id >= self.live_oldest_round() {
            self.locate_live(round_id)
        } else {
            self.locate_historical(round_id)
        }
    }

    fn locate_live(&self, round_id: u32) -> FeedResult<RoundLocation> {
        let steps = self.latest_round_id - round_id;
        // The cursor is one slot ahead of the latest round.
        let position = left_shift(self.live_cursor, steps + 1, self.live_length)?;
        Ok(RoundLocation {
            position,
            corrected_round_id: round_id,
        })
    }

    fn locate_historical(&self, round_id: u32) -> FeedResult<RoundLocation> {
        let granularity = u32::from(self.granularity);
        let latest_historical_round = self
            .latest_historical_round()
            .ok_or(FeedError::NoDataPresent)?;

        let corrected_round_id =
            floor_to_multiple(round_id, granularity).min(latest_historical_round);
        if corrected_round_id == 0 || self.historical_length == 0 {
            return Err(FeedError::NoDataPresent);
        }

        // The historical cursor is one slot ahead of the newest sample, which
        // may still be inside the live window.
        let newest_sampled_round = floor_to_multiple(self.latest_round_id, granularity);
        let steps = (newest_sampled_round - corrected_round_id) / granularity;
        if steps >= self.historical_length {
            return Err(FeedError::NoDataPresent);
        }

        let local = left_shift(self.historical_cursor, steps + 1, self.historical_length)?;
        let position = self
            .live_length
            .checked_add(local)
            .ok_or(FeedError::InvalidArgument("ring buffers exceed u32 positions"))?;

        Ok(RoundLocation {
            position,
            corrected_round_id,
        })
    }
}

/// Locate `round_id` in the rings of a feed.
///
/// Fails with [`FeedError::NoDataPresent`] when the round is newer than the latest
/// round or older than the retained history.
pub fn locate(round_id: u32, rings: &RingBuffers) -> FeedResult<RoundLocation> {
    rings.locate(round_id)
}

fn floor_to_multiple(value: u32, granularity: u32) -> u32 {
    value - value % granularity
}
