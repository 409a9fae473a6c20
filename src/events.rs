//! Activity log events.
//!
//! Each dashboard operation reports its lifecycle as events that feed the
//! activity-log panel and the headless console output.

use crate::controller::Operation;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub operation: Operation,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(operation: Operation, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            operation,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    /// An operation was dispatched.
    pub fn started(operation: Operation) -> Self {
        Self::new(
            operation,
            format!("{} request started", operation),
            EventType::Refresh,
            LogLevel::Debug,
        )
    }

    /// An operation settled with the given outcome text.
    pub fn finished(operation: Operation, msg: String, success: bool, log_level: LogLevel) -> Self {
        let event_type = if success {
            EventType::Success
        } else {
            EventType::Error
        };
        Self::new(operation, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show successes regardless of the RUST_LOG threshold
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] [{}] {}",
            self.event_type, self.timestamp, self.operation, self.msg
        )
    }
}
