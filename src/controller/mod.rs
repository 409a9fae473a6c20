//! Dashboard controller: operation state and the async actions that drive it.
//!
//! The controller is an explicit state container: [`DashboardState`] is owned
//! by whoever runs the UI loop, the three operations are pure async functions
//! that dispatch [`Action`]s over a channel, and the reducer in
//! [`DashboardState::apply`] is the only place state transitions happen.

mod actions;
mod state;

pub use actions::{query_owner, query_token_uri, submit_mint};
pub use state::{Action, DashboardState, LoadingFlags, Operation, OperationResult};
