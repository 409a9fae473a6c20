//! Dashboard screen rendering.

use crate::controller::{DashboardState, Operation};
use crate::environment::Environment;
use crate::events::EventType;
use crate::ui::format::{display_result, format_compact_timestamp};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Which form field currently receives keyboard input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputField {
    ReceiverAddress,
    MetadataUri,
    TokenId,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            InputField::ReceiverAddress => InputField::MetadataUri,
            InputField::MetadataUri => InputField::TokenId,
            InputField::TokenId => InputField::ReceiverAddress,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            InputField::ReceiverAddress => InputField::TokenId,
            InputField::MetadataUri => InputField::ReceiverAddress,
            InputField::TokenId => InputField::MetadataUri,
        }
    }

    /// The operation Enter triggers while this field is focused. The token-id
    /// field defaults to the owner lookup, matching the original form layout.
    pub fn default_operation(self) -> Operation {
        match self {
            InputField::ReceiverAddress | InputField::MetadataUri => Operation::Mint,
            InputField::TokenId => Operation::Owner,
        }
    }
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn spinner(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Get a ratatui color for an operation.
fn operation_color(operation: Operation) -> Color {
    match operation {
        Operation::Mint => Color::Cyan,
        Operation::Owner => Color::Green,
        Operation::TokenUri => Color::Magenta,
    }
}

/// Render the dashboard screen.
pub fn render_dashboard(
    f: &mut Frame,
    state: &DashboardState,
    focus: InputField,
    environment: &Environment,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Title block
                Constraint::Min(0),    // Body area
                Constraint::Length(2), // Footer block
            ]
            .as_ref(),
        )
        .split(f.area());

    // Title section
    let title = Paragraph::new(title_text(state, environment))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    // Body layout: forms on the left, activity log on the right
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)].as_ref())
        .split(chunks[1]);

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(7), // Mint panel
                Constraint::Length(8), // Query panel
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(body_chunks[0]);

    render_mint_panel(f, state, focus, form_chunks[0]);
    render_query_panel(f, state, focus, form_chunks[1]);
    render_activity_log(f, state, body_chunks[1]);

    // Footer with key hints
    let footer = Paragraph::new(
        "[Tab] Next field | [Enter] Submit | [Ctrl+O] Owner | [Ctrl+T] Token URI | [Esc] Quit",
    )
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, chunks[2]);
}

/// The title line, with a spinner appended while any request is in flight.
fn title_text(state: &DashboardState, environment: &Environment) -> String {
    let base = format!(
        "=== NFT DASHBOARD v{} — {} ===",
        env!("CARGO_PKG_VERSION"),
        environment
    );
    if state.loading.any() {
        format!("{} {}", base, spinner(state.tick))
    } else {
        base
    }
}

/// An input line, highlighted with a cursor block when focused.
fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_span = Span::styled(
        format!("{:<10}", label),
        Style::default().fg(Color::DarkGray),
    );
    if focused {
        Line::from(vec![
            label_span,
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![label_span, Span::raw(value.to_string())])
    }
}

/// The result line for an operation: spinner while loading, marker-prefixed
/// text once settled, blank before the first submission.
fn result_line(state: &DashboardState, operation: Operation) -> Line<'_> {
    if state.loading.get(operation) {
        return Line::from(Span::styled(
            format!("{} Waiting for response...", spinner(state.tick)),
            Style::default().fg(Color::Yellow),
        ));
    }
    match state.result(operation) {
        Some(result) => {
            let color = if result.is_failure() {
                Color::Red
            } else {
                operation_color(operation)
            };
            Line::from(Span::styled(
                display_result(operation, result),
                Style::default().fg(color),
            ))
        }
        None => Line::from(""),
    }
}

fn render_mint_panel(
    f: &mut Frame,
    state: &DashboardState,
    focus: InputField,
    area: ratatui::layout::Rect,
) {
    let lines = vec![
        input_line(
            "Receiver:",
            &state.receiver_address,
            focus == InputField::ReceiverAddress,
        ),
        input_line(
            "IPFS URI:",
            &state.metadata_uri,
            focus == InputField::MetadataUri,
        ),
        Line::from(""),
        result_line(state, Operation::Mint),
    ];

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("MINT NFT")
                .style(
                    Style::default()
                        .fg(operation_color(Operation::Mint))
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn render_query_panel(
    f: &mut Frame,
    state: &DashboardState,
    focus: InputField,
    area: ratatui::layout::Rect,
) {
    let lines = vec![
        input_line("Token ID:", &state.token_id, focus == InputField::TokenId),
        Line::from(""),
        result_line(state, Operation::Owner),
        result_line(state, Operation::TokenUri),
    ];

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("TOKEN LOOKUP")
                .style(
                    Style::default()
                        .fg(operation_color(Operation::Owner))
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

fn render_activity_log(f: &mut Frame, state: &DashboardState, area: ratatui::layout::Rect) {
    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev() // newest first
        .map(|event| {
            let main_icon = match event.event_type {
                EventType::Success => "✅",
                EventType::Error => "❌",
                EventType::Refresh => "🔄",
            };

            let op_color = operation_color(event.operation);
            let compact_time = format_compact_timestamp(&event.timestamp);

            Line::from(vec![
                Span::raw(format!("{} ", main_icon)),
                Span::styled(
                    format!("{} ", compact_time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("[{}] ", event.operation),
                    Style::default().fg(op_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(event.msg.clone(), Style::default().fg(op_color)),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Waiting for your first request...")])
    } else {
        Paragraph::new(log_lines)
    };

    let log_widget = log_paragraph
        .block(
            Block::default()
                .title("ACTIVITY")
                .borders(Borders::LEFT)
                .style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Tab order cycles through all three fields and wraps.
    fn focus_cycle_wraps() {
        let mut field = InputField::ReceiverAddress;
        field = field.next();
        assert_eq!(field, InputField::MetadataUri);
        field = field.next();
        assert_eq!(field, InputField::TokenId);
        field = field.next();
        assert_eq!(field, InputField::ReceiverAddress);
        assert_eq!(field.previous(), InputField::TokenId);
    }

    #[test]
    /// Enter on either mint field submits a mint; on the token-id field it
    /// runs the owner lookup.
    fn default_operations() {
        assert_eq!(
            InputField::ReceiverAddress.default_operation(),
            Operation::Mint
        );
        assert_eq!(InputField::MetadataUri.default_operation(), Operation::Mint);
        assert_eq!(InputField::TokenId.default_operation(), Operation::Owner);
    }

    #[test]
    /// The title picks up a spinner while any operation is in flight and
    /// drops it once the flags are clear.
    fn title_shows_spinner_while_loading() {
        let mut state = DashboardState::new();
        let environment = Environment::Local;

        let idle = title_text(&state, &environment);
        assert!(idle.ends_with("==="));

        state.loading.mint = true;
        let busy = title_text(&state, &environment);
        assert!(busy.ends_with(spinner(state.tick)));
    }
}
