use crate::api::error::ApiError;
use crate::environment::Environment;
use serde_json::Value;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Seam over the remote minting API. Implementations return the raw JSON
/// body so that field extraction stays declarative and testable.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait NftApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Mint a token to the given receiver address with the given metadata URI.
    async fn mint(&self, to_address: &str, ipfs_uri: &str) -> Result<Value, ApiError>;

    /// Look up the current owner of a token.
    async fn owner_of(&self, token_id: &str) -> Result<Value, ApiError>;

    /// Look up the metadata URI of a token.
    async fn token_uri(&self, token_id: &str) -> Result<Value, ApiError>;
}
