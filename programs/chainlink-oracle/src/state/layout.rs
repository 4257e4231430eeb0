//! Byte layout of a feed account
//!
//! ```text
//! | discriminator (8) | header (192) | live ring | historical ring |
//! ```
//!
//! Both rings are arrays of [`TRANSMISSION_LEN`] byte slots. The live ring holds
//! `live_length` slots, the historical ring takes the rest of the account.

use super::{header::HEADER_LEN, transmission::TRANSMISSION_LEN};
use crate::errors::{FeedError, FeedResult};

pub const DISCRIMINATOR_LEN: usize = 8;

/// Space reserved for the header, the decoded fields plus reserved padding.
pub const HEADER_RESERVED_LEN: usize = 192;

pub const HEADER_OFFSET: usize = DISCRIMINATOR_LEN;

/// Offset of the first transmission slot.
pub const TRANSMISSIONS_OFFSET: usize = HEADER_OFFSET + HEADER_RESERVED_LEN;

const _: () = assert!(HEADER_LEN <= HEADER_RESERVED_LEN);

/// Account offset of the transmission stored at absolute `position`.
pub fn transmission_offset(position: u32) -> FeedResult<usize> {
    usize::try_from(position)
        .ok()
        .and_then(|p| p.checked_mul(TRANSMISSION_LEN))
        .and_then(|o| o.checked_add(TRANSMISSIONS_OFFSET))
        .ok_or(FeedError::InvalidArgument("transmission position overflow"))
}

/// Number of historical slots in an account of `data_len` bytes.
pub fn historical_length(data_len: usize, live_length: u32) -> FeedResult<u32> {
    let live_length = usize::try_from(live_length)
        .map_err(|_| FeedError::InvalidArgument("live length does not fit usize"))?;
    let slots = data_len.saturating_sub(TRANSMISSIONS_OFFSET) / TRANSMISSION_LEN;
    let historical = slots.checked_sub(live_length).ok_or_else(|| FeedError::Truncated {
        expected: TRANSMISSIONS_OFFSET + live_length * TRANSMISSION_LEN,
        actual: data_len,
    })?;
    u32::try_from(historical).map_err(|_| FeedError::InvalidArgument("historical length overflow"))
}
