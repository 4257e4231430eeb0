use crate::errors::{FeedError, FeedResult};

/// Move `cursor` `steps` slots back (towards older entries) on a ring of `length` slots.
///
/// The result is always in `[0, length)` whatever the value of `steps`.
pub fn left_shift(cursor: u32, steps: u32, length: u32) -> FeedResult<u32> {
    if length == 0 {
        return Err(FeedError::InvalidArgument("ring buffer length is zero"));
    }
    if cursor >= length {
        return Err(FeedError::InvalidArgument("cursor out of ring buffer"));
    }
    let (cursor, steps, length) = (u64::from(cursor), u64::from(steps), u64::from(length));
    let shifted = (cursor + length - steps % length) % length;
    // shifted < length <= u32::MAX
    Ok(shifted as u32)
}
