use std::time::Duration;

use chainlink_oracle::config::DEFAULT_TIMEOUT_MS;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);
