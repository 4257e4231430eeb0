pub mod locator;
pub mod ring_buffer;


pub use locator::{locate, RingBuffers, RoundLocation};
pub use ring_buffer::left_shift;
