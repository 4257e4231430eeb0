use solana_program::pubkey::Pubkey;
use thiserror::Error;

pub type FeedResult<T> = std::result::Result<T, FeedError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("No data present")]
    NoDataPresent,

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Feed account {0} not found")]
    AccountNotFound(Pubkey),
}

impl FeedError {
    /// Errors worth retrying after a backoff.
    pub fn is_transient(&self) -> bool {
        matches!(self, FeedError::UpstreamUnavailable(_))
    }
}

/// Check that `bytes` holds at least `expected` bytes.
pub(crate) fn ensure_len(bytes: &[u8], expected: usize) -> FeedResult<()> {
    if bytes.len() < expected {
        return Err(FeedError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
