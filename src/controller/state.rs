//! Controller state: operations, results, loading flags and the reducer.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::logging::LogLevel;
use std::collections::VecDeque;
use std::fmt::Display;

/// The three remote operations the dashboard exposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    Mint,
    Owner,
    TokenUri,
}

/// The settled outcome of an operation, tagged explicitly.
///
/// The tag travels with the result so that presentation code never has to
/// infer success or failure from the text content.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OperationResult {
    Success(String),
    Failure(String),
}

impl OperationResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, OperationResult::Failure(_))
    }

    /// The raw stored text, without the marker prefix.
    pub fn text(&self) -> &str {
        match self {
            OperationResult::Success(text) | OperationResult::Failure(text) => text,
        }
    }
}

impl Display for OperationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationResult::Success(text) => write!(f, "✅ {}", text),
            OperationResult::Failure(text) => write!(f, "❌ {}", text),
        }
    }
}

/// Independent per-operation loading flags.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct LoadingFlags {
    pub mint: bool,
    pub owner: bool,
    pub uri: bool,
}

impl LoadingFlags {
    pub fn get(&self, operation: Operation) -> bool {
        match operation {
            Operation::Mint => self.mint,
            Operation::Owner => self.owner,
            Operation::TokenUri => self.uri,
        }
    }

    fn set(&mut self, operation: Operation, value: bool) {
        match operation {
            Operation::Mint => self.mint = value,
            Operation::Owner => self.owner = value,
            Operation::TokenUri => self.uri = value,
        }
    }

    pub fn any(&self) -> bool {
        self.mint || self.owner || self.uri
    }
}

/// State transitions dispatched by the async actions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    /// The operation was dispatched: loading flag on, prior result cleared.
    Started(Operation),
    /// The operation settled: loading flag off, result stored. The log level
    /// carries the failure classification (429/5xx and network failures are
    /// warnings, client mistakes are errors) into the activity log.
    Finished(Operation, OperationResult, LogLevel),
}

/// State for the dashboard screen: form fields, results, loading flags and
/// the activity log. All mutation goes through [`DashboardState::apply`] or
/// the form-field editing helpers.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Mint form: receiver address field.
    pub receiver_address: String,
    /// Mint form: metadata URI field.
    pub metadata_uri: String,
    /// Query forms: token id field, shared by owner and URI lookups.
    pub token_id: String,

    /// Per-operation loading flags.
    pub loading: LoadingFlags,
    /// Latest settled mint result, if any.
    pub mint_result: Option<OperationResult>,
    /// Latest settled owner-lookup result, if any.
    pub owner_result: Option<OperationResult>,
    /// Latest settled URI-lookup result, if any.
    pub uri_result: Option<OperationResult>,

    /// Activity log for display, newest at the back.
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter for loading indicators.
    pub tick: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a state transition dispatched by an action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Started(operation) => {
                self.loading.set(operation, true);
                *self.result_slot(operation) = None;
                self.add_to_activity_log(Event::started(operation));
            }
            Action::Finished(operation, result, log_level) => {
                self.loading.set(operation, false);
                self.add_to_activity_log(Event::finished(
                    operation,
                    result.text().to_string(),
                    !result.is_failure(),
                    log_level,
                ));
                *self.result_slot(operation) = Some(result);
            }
        }
    }

    pub fn result(&self, operation: Operation) -> Option<&OperationResult> {
        match operation {
            Operation::Mint => self.mint_result.as_ref(),
            Operation::Owner => self.owner_result.as_ref(),
            Operation::TokenUri => self.uri_result.as_ref(),
        }
    }

    fn result_slot(&mut self, operation: Operation) -> &mut Option<OperationResult> {
        match operation {
            Operation::Mint => &mut self.mint_result,
            Operation::Owner => &mut self.owner_result,
            Operation::TokenUri => &mut self.uri_result,
        }
    }

    /// Add an event to the activity log, evicting the oldest past the cap.
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Started sets the flag and clears the prior result; Finished resets the
    /// flag and stores the new result. Exactly one true→false per invocation.
    fn loading_flag_round_trip() {
        let mut state = DashboardState::new();
        state.mint_result = Some(OperationResult::Failure("Error: old".to_string()));

        state.apply(Action::Started(Operation::Mint));
        assert!(state.loading.mint);
        assert!(state.mint_result.is_none());

        state.apply(Action::Finished(
            Operation::Mint,
            OperationResult::Success("Minted! TxHash: 0xabc".to_string()),
            LogLevel::Info,
        ));
        assert!(!state.loading.mint);
        assert_eq!(
            state.mint_result,
            Some(OperationResult::Success("Minted! TxHash: 0xabc".to_string()))
        );
    }

    #[test]
    /// The three flags are independent of each other.
    fn flags_are_independent() {
        let mut state = DashboardState::new();
        state.apply(Action::Started(Operation::Owner));
        assert!(!state.loading.mint);
        assert!(state.loading.owner);
        assert!(!state.loading.uri);
        assert!(state.loading.any());

        state.apply(Action::Finished(
            Operation::Owner,
            OperationResult::Success("0xaaaa".to_string()),
            LogLevel::Info,
        ));
        assert!(!state.loading.any());
    }

    #[test]
    /// The reducer records failures at the level the action classified them
    /// with, so a server outage shows up in the log as a warning.
    fn failure_keeps_classified_log_level() {
        let mut state = DashboardState::new();
        state.apply(Action::Finished(
            Operation::Owner,
            OperationResult::Failure("Error: HTTP 503".to_string()),
            LogLevel::Warn,
        ));

        let event = state.activity_logs.back().unwrap();
        assert_eq!(event.log_level, LogLevel::Warn);
        assert_eq!(event.event_type, crate::events::EventType::Error);
    }

    #[test]
    /// Owner and URI lookups keep separate result slots even though they
    /// share the token-id input field.
    fn query_results_do_not_collide() {
        let mut state = DashboardState::new();
        state.apply(Action::Finished(
            Operation::Owner,
            OperationResult::Success("0xaaaa".to_string()),
            LogLevel::Info,
        ));
        state.apply(Action::Finished(
            Operation::TokenUri,
            OperationResult::Success("ipfs://Qm".to_string()),
            LogLevel::Info,
        ));
        assert_eq!(state.owner_result.as_ref().unwrap().text(), "0xaaaa");
        assert_eq!(state.uri_result.as_ref().unwrap().text(), "ipfs://Qm");
    }

    #[test]
    fn result_markers() {
        let ok = OperationResult::Success("Minted! TxHash: 0xabc".to_string());
        assert_eq!(ok.to_string(), "✅ Minted! TxHash: 0xabc");

        let failed = OperationResult::Failure("Error: insufficient funds".to_string());
        assert_eq!(failed.to_string(), "❌ Error: insufficient funds");
        assert!(failed.is_failure());
    }

    #[test]
    /// The activity log is bounded.
    fn activity_log_caps_out() {
        let mut state = DashboardState::new();
        for _ in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::started(Operation::Mint));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
    }
}
