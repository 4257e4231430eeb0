pub mod header;
pub mod layout;
pub mod transmission;

pub use header::{FeedHeader, HEADER_LEN};
pub use transmission::{Transmission, TRANSMISSION_LEN};
