use arrayref::{array_ref, array_refs};
use solana_program::pubkey::{Pubkey, PUBKEY_BYTES};

use crate::errors::{ensure_len, FeedResult};

/// Width of the `description` field.
pub const DESCRIPTION_LEN: usize = 32;

/// Number of bytes actually decoded from the header region.
pub const HEADER_LEN: usize = 1 // version
    + 1 // state
    + 3 * PUBKEY_BYTES // owner, proposed_owner, writer
    + DESCRIPTION_LEN
    + 1 // decimals
    + 4 // flagging_threshold
    + 4 // latest_round_id
    + 1 // granularity
    + 4 // live_length
    + 4 // live_cursor
    + 4; // historical_cursor

/// Decoded header of a feed account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedHeader {
    pub version: u8,
    pub state: u8,
    pub owner: Pubkey,
    pub proposed_owner: Pubkey,
    pub writer: Pubkey,
    /// Feed pair name, eg. "ETH / USD"
    pub description: String,
    pub decimals: u8,
    pub flagging_threshold: u32,
    pub latest_round_id: u32,
    /// One round out of `granularity` is kept in the historical ring.
    pub granularity: u8,
    pub live_length: u32,
    /// Next live slot to be overwritten.
    pub live_cursor: u32,
    /// Next historical slot to be overwritten, relative to the historical ring.
    pub historical_cursor: u32,
}

impl FeedHeader {
    /// Decode a header from the start of `input`.
    ///
    /// Bytes past [`HEADER_LEN`] are ignored. Field ranges are not validated here,
    /// see [`crate::utils::locator::RingBuffers`].
    pub fn decode(input: &[u8]) -> FeedResult<Self> {
        ensure_len(input, HEADER_LEN)?;
        let input = array_ref![input, 0, HEADER_LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            version,
            state,
            owner,
            proposed_owner,
            writer,
            description,
            decimals,
            flagging_threshold,
            latest_round_id,
            granularity,
            live_length,
            live_cursor,
            historical_cursor,
        ) = array_refs![
            input,
            1,
            1,
            PUBKEY_BYTES,
            PUBKEY_BYTES,
            PUBKEY_BYTES,
            DESCRIPTION_LEN,
            1,
            4,
            4,
            1,
            4,
            4,
            4
        ];

        Ok(Self {
            version: u8::from_le_bytes(*version),
            state: u8::from_le_bytes(*state),
            owner: Pubkey::new_from_array(*owner),
            proposed_owner: Pubkey::new_from_array(*proposed_owner),
            writer: Pubkey::new_from_array(*writer),
            description: unpack_description(description),
            decimals: u8::from_le_bytes(*decimals),
            flagging_threshold: u32::from_le_bytes(*flagging_threshold),
            latest_round_id: u32::from_le_bytes(*latest_round_id),
            granularity: u8::from_le_bytes(*granularity),
            live_length: u32::from_le_bytes(*live_length),
            live_cursor: u32::from_le_bytes(*live_cursor),
            historical_cursor: u32::from_le_bytes(*historical_cursor),
        })
    }
}

fn unpack_description(raw: &[u8; DESCRIPTION_LEN]) -> String {
    let end = raw.iter().rposition(|b| *b != 0).map_or(0, |last| last + 1);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}
