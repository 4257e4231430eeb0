use arrayref::{array_ref, array_refs};

use crate::errors::{ensure_len, FeedResult};

/// Size of one stored transmission.
pub const TRANSMISSION_LEN: usize = 48;

/// One answer stored in a ring buffer slot.
///
/// Slots do not record their round id, it is implied by their position and is
/// supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transmission {
    pub round_id: u32,
    /// Solana slot of the write, kept for diagnostics.
    pub slot: u64,
    /// Unix timestamp in seconds.
    pub timestamp: u32,
    pub answer: i128,
}

impl Transmission {
    pub fn decode(round_id: u32, input: &[u8]) -> FeedResult<Self> {
        ensure_len(input, TRANSMISSION_LEN)?;
        let input = array_ref![input, 0, TRANSMISSION_LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (slot, timestamp, _padding0, answer, _padding1) = array_refs![input, 8, 4, 4, 16, 16];

        Ok(Self {
            round_id,
            slot: u64::from_le_bytes(*slot),
            timestamp: u32::from_le_bytes(*timestamp),
            answer: i128::from_le_bytes(*answer),
        })
    }
}
