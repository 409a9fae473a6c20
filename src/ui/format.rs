//! Presentation-only formatting for dashboard results.
//!
//! Truncation is applied at render time; the stored results always carry the
//! full values. Failures are shown verbatim, driven by the result tag.

use crate::controller::{Operation, OperationResult};

/// Shorten an owner address for panel display: first 10 chars, ellipsis,
/// last 8 chars. Values short enough to show whole are left untouched.
pub fn truncate_owner(owner: &str) -> String {
    truncate_middle(owner, 10, 8)
}

/// Shorten a metadata URI for panel display: first 20 chars, ellipsis,
/// last 10 chars.
pub fn truncate_uri(uri: &str) -> String {
    truncate_middle(uri, 20, 10)
}

fn truncate_middle(value: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= head + tail {
        return value.to_string();
    }
    let head_part: String = chars[..head].iter().collect();
    let tail_part: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", head_part, tail_part)
}

/// The marker-prefixed display string for a settled result.
pub fn display_result(operation: Operation, result: &OperationResult) -> String {
    match result {
        OperationResult::Failure(text) => format!("❌ {}", text),
        OperationResult::Success(text) => match operation {
            Operation::Mint => format!("✅ {}", text),
            Operation::Owner => format!("✅ Owner: {}", truncate_owner(text)),
            Operation::TokenUri => format!("✅ URI: {}", truncate_uri(text)),
        },
    }
}

/// Format timestamp to include date but no year (MM-DD HH:MM:SS).
pub fn format_compact_timestamp(timestamp: &str) -> String {
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let Some(month_day) = date_part.get(5..) {
            // Skip "YYYY-"
            return format!("{} {}", month_day, time_part);
        }
    }
    timestamp.to_string()
}
