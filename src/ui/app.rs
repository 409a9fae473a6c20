//! Main application state and UI loop.

use crate::api::NftApi;
use crate::consts::cli_consts::ACTION_QUEUE_SIZE;
use crate::controller::{self, Action, DashboardState, Operation};
use crate::environment::Environment;
use crate::ui::dashboard::{InputField, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the mint and lookup forms.
    Dashboard,
}

/// Application state.
pub struct App {
    /// Client for the remote minting API, shared with spawned actions.
    api: Arc<dyn NftApi>,

    /// The environment in which the application is running.
    environment: Environment,

    /// Controller state: form fields, results, loading flags, activity log.
    state: DashboardState,

    /// The form field currently receiving keyboard input.
    focus: InputField,

    /// The current screen being displayed.
    screen: Screen,

    /// Dispatches state transitions from spawned actions.
    action_sender: mpsc::Sender<Action>,

    /// Receives state transitions to apply to the reducer.
    action_receiver: mpsc::Receiver<Action>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(api: Arc<dyn NftApi>) -> Self {
        let environment = *api.environment();
        let (action_sender, action_receiver) = mpsc::channel(ACTION_QUEUE_SIZE);
        Self {
            api,
            environment,
            state: DashboardState::new(),
            focus: InputField::ReceiverAddress,
            screen: Screen::Splash,
            action_sender,
            action_receiver,
        }
    }

    /// Spawn the action for an operation, unless one is already in flight.
    ///
    /// Re-entry while the loading flag is set is ignored; the pressed key is
    /// simply dropped rather than queueing a second request.
    fn submit(&mut self, operation: Operation) {
        if self.state.loading.get(operation) {
            return;
        }

        let api = Arc::clone(&self.api);
        let dispatch = self.action_sender.clone();
        match operation {
            Operation::Mint => {
                let receiver = self.state.receiver_address.clone();
                let uri = self.state.metadata_uri.clone();
                tokio::spawn(async move {
                    controller::submit_mint(api.as_ref(), &receiver, &uri, &dispatch).await;
                });
            }
            Operation::Owner => {
                let token_id = self.state.token_id.clone();
                tokio::spawn(async move {
                    controller::query_owner(api.as_ref(), &token_id, &dispatch).await;
                });
            }
            Operation::TokenUri => {
                let token_id = self.state.token_id.clone();
                tokio::spawn(async move {
                    controller::query_token_uri(api.as_ref(), &token_id, &dispatch).await;
                });
            }
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::ReceiverAddress => &mut self.state.receiver_address,
            InputField::MetadataUri => &mut self.state.metadata_uri,
            InputField::TokenId => &mut self.state.token_id,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    loop {
        // Apply all pending state transitions from settled actions
        while let Ok(action) = app.action_receiver.try_recv() {
            app.state.apply(action);
        }
        app.state.update();

        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if app.screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

                // Handle exit events
                if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
                    return Ok(());
                }

                match app.screen {
                    Screen::Splash => {
                        // Any other key press skips the splash screen
                        app.screen = Screen::Dashboard;
                    }
                    Screen::Dashboard => match key.code {
                        KeyCode::Tab => app.focus = app.focus.next(),
                        KeyCode::BackTab => app.focus = app.focus.previous(),
                        KeyCode::Enter => {
                            let operation = app.focus.default_operation();
                            app.submit(operation);
                        }
                        KeyCode::Char('o') if ctrl => app.submit(Operation::Owner),
                        KeyCode::Char('t') if ctrl => app.submit(Operation::TokenUri),
                        KeyCode::Backspace => {
                            app.focused_field_mut().pop();
                        }
                        KeyCode::Char(c) if !ctrl => {
                            app.focused_field_mut().push(c);
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.state, app.focus, &app.environment),
    }
}
