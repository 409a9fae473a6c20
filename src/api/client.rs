//! NFT Minting API client
//!
//! A thin reqwest client for the remote minting service, exposing the three
//! dashboard operations over JSON.

use crate::api::NftApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde_json::{Value, json};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("nft-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
    base_url: String,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        let base_url = environment.api_url();
        Self::with_base_url(environment, base_url)
    }

    /// Create a client pointed at an explicit base URL (config override).
    pub fn with_base_url(environment: Environment, base_url: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(cli_consts::connect_timeout())
                .timeout(cli_consts::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl NftApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Mint a token via POST /mint.
    async fn mint(&self, to_address: &str, ipfs_uri: &str) -> Result<Value, ApiError> {
        let body = json!({
            "to_address": to_address,
            "ipfs_uri": ipfs_uri,
        });
        self.post_json("mint", &body).await
    }

    /// Look up the owner of a token via GET /owner/{token_id}.
    async fn owner_of(&self, token_id: &str) -> Result<Value, ApiError> {
        let token_path = urlencoding::encode(token_id).into_owned();
        let endpoint = format!("owner/{}", token_path);
        self.get_json(&endpoint).await
    }

    /// Look up the metadata URI of a token via GET /token-uri/{token_id}.
    async fn token_uri(&self, token_id: &str) -> Result<Value, ApiError> {
        let token_path = urlencoding::encode(token_id).into_owned();
        let endpoint = format!("token-uri/{}", token_path);
        self.get_json(&endpoint).await
    }
}


#[cfg(test)]
/// These are ignored by default since they require a live backend to run.
mod live_api_tests {
    use super::*;
    use crate::extract;

    #[tokio::test]
    #[ignore] // This test requires a live minting API instance.
    /// Should return the owner of an existing token.
    async fn test_owner_of() {
        let client = ApiClient::new(Environment::Local);
        match client.owner_of("1").await {
            Ok(body) => println!("Owner: {}", extract::OWNER.extract(&body)),
            Err(e) => panic!("Failed to look up owner: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live minting API instance.
    /// Should return the metadata URI of an existing token.
    async fn test_token_uri() {
        let client = ApiClient::new(Environment::Local);
        match client.token_uri("1").await {
            Ok(body) => println!("URI: {}", extract::TOKEN_URI.extract(&body)),
            Err(e) => panic!("Failed to look up token URI: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live minting API instance with funds.
    /// Should mint a token and return a transaction hash.
    async fn test_mint() {
        let client = ApiClient::new(Environment::Local);
        let result = client
            .mint(
                "0x52908400098527886E0F7030069857D2E4169EE7",
                "ipfs://QmExampleMetadata",
            )
            .await;
        match result {
            Ok(body) => println!("TxHash: {}", extract::TX_HASH.extract(&body)),
            Err(e) => panic!("Failed to mint: {}", e),
        }
    }
}
