use std::time::Duration;

use chainlink_oracle::FeedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[cfg(feature = "rpc-client")]
    #[error("Solana rpc client error: {0:#?}")]
    SolanaRpcError(#[from] solana_client::client_error::ClientError),

    #[cfg(feature = "banks-client")]
    #[error("Solana banks client error: {0:#?}")]
    SolanaBanksError(Box<solana_banks_client::BanksClientError>),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

#[cfg(feature = "banks-client")]
impl From<solana_banks_client::BanksClientError> for ErrorKind {
    fn from(err: solana_banks_client::BanksClientError) -> Self {
        ErrorKind::SolanaBanksError(Box::new(err))
    }
}

/// Every client failure is transient from the oracle point of view.
impl From<ErrorKind> for FeedError {
    fn from(err: ErrorKind) -> Self {
        FeedError::UpstreamUnavailable(err.to_string())
    }
}
