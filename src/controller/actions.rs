//! The three dashboard actions.
//!
//! Each action follows the same contract: dispatch `Started` (loading flag
//! on, prior result cleared), validate locally, call the remote API at most
//! once, normalize the outcome, and dispatch exactly one `Finished`. There
//! are no retries and no cancellation; a dispatched request settles on its
//! own.

use crate::api::NftApi;
use crate::controller::{Action, Operation, OperationResult};
use crate::extract;
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Mint a token to `receiver_address` with metadata at `metadata_uri`.
///
/// Both fields are required; empty input short-circuits without a network
/// call.
pub async fn submit_mint(
    api: &dyn NftApi,
    receiver_address: &str,
    metadata_uri: &str,
    dispatch: &mpsc::Sender<Action>,
) {
    let _ = dispatch.send(Action::Started(Operation::Mint)).await;

    let (result, log_level) = if receiver_address.is_empty() || metadata_uri.is_empty() {
        (
            OperationResult::Failure("Please fill in all fields".to_string()),
            LogLevel::Error,
        )
    } else {
        match api.mint(receiver_address, metadata_uri).await {
            Ok(body) => {
                let tx_hash = extract::TX_HASH.extract(&body);
                (
                    OperationResult::Success(format!("Minted! TxHash: {}", tx_hash)),
                    LogLevel::Info,
                )
            }
            Err(e) => {
                log::warn!("mint request failed: {}", e);
                (
                    OperationResult::Failure(format!("Error: {}", e.user_message())),
                    e.log_level(),
                )
            }
        }
    };

    let _ = dispatch
        .send(Action::Finished(Operation::Mint, result, log_level))
        .await;
}

/// Look up the current owner of `token_id`. The stored success text is the
/// full owner address; truncation happens at render time only.
pub async fn query_owner(api: &dyn NftApi, token_id: &str, dispatch: &mpsc::Sender<Action>) {
    let _ = dispatch.send(Action::Started(Operation::Owner)).await;

    let (result, log_level) = if token_id.is_empty() {
        (
            OperationResult::Failure("Please enter a token ID".to_string()),
            LogLevel::Error,
        )
    } else {
        match api.owner_of(token_id).await {
            Ok(body) => (
                OperationResult::Success(extract::OWNER.extract(&body)),
                LogLevel::Info,
            ),
            Err(e) => {
                log::warn!("owner lookup failed: {}", e);
                (
                    OperationResult::Failure(format!("Error: {}", e.user_message())),
                    e.log_level(),
                )
            }
        }
    };

    let _ = dispatch
        .send(Action::Finished(Operation::Owner, result, log_level))
        .await;
}

/// Look up the metadata URI of `token_id`.
pub async fn query_token_uri(api: &dyn NftApi, token_id: &str, dispatch: &mpsc::Sender<Action>) {
    let _ = dispatch.send(Action::Started(Operation::TokenUri)).await;

    let (result, log_level) = if token_id.is_empty() {
        (
            OperationResult::Failure("Please enter a token ID".to_string()),
            LogLevel::Error,
        )
    } else {
        match api.token_uri(token_id).await {
            Ok(body) => (
                OperationResult::Success(extract::TOKEN_URI.extract(&body)),
                LogLevel::Info,
            ),
            Err(e) => {
                log::warn!("token URI lookup failed: {}", e);
                (
                    OperationResult::Failure(format!("Error: {}", e.user_message())),
                    e.log_level(),
                )
            }
        }
    };

    let _ = dispatch
        .send(Action::Finished(Operation::TokenUri, result, log_level))
        .await;
}
