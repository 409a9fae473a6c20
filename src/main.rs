mod api;
mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod events;
mod extract;
mod keys;
mod logging;
mod ui;

use crate::api::ApiClient;
use crate::cli_messages::{print_error, print_info, print_success};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::ACTION_QUEUE_SIZE;
use crate::controller::{Action, Operation, OperationResult};
use crate::environment::Environment;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{error::Error, io};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive dashboard
    Start,
    /// Mint a token to a receiver address
    Mint {
        /// Receiver's public Ethereum wallet address. 42-character hex string starting with '0x'
        #[arg(long, value_name = "WALLET_ADDRESS")]
        to_address: String,

        /// Metadata URI for the token, typically an ipfs:// pointer
        #[arg(long, value_name = "IPFS_URI")]
        ipfs_uri: String,
    },
    /// Look up the current owner of a token
    Owner {
        /// ID of the token to look up
        #[arg(long, value_name = "TOKEN_ID")]
        token_id: String,
    },
    /// Look up the metadata URI of a token
    TokenUri {
        /// ID of the token to look up
        #[arg(long, value_name = "TOKEN_ID")]
        token_id: String,
    },
    /// Save an API base URL override to the configuration file
    SetApiUrl {
        /// Base URL of the minting API, e.g. http://127.0.0.1:8000
        #[arg(long, value_name = "URL")]
        url: String,
    },
    /// Delete the configuration file, reverting to environment defaults
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(logging::get_rust_log_level().into());

    let environment_str = std::env::var("NFT_DASHBOARD_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;

    // A saved base URL overrides the environment's default.
    let build_client = || {
        if config_path.exists() {
            if let Ok(config) = Config::load_from_file(&config_path) {
                return ApiClient::with_base_url(environment, config.api_base_url);
            }
        }
        ApiClient::new(environment)
    };

    let args = Args::parse();
    match args.command {
        Command::Start => start(build_client()).await,
        Command::Mint {
            to_address,
            ipfs_uri,
        } => {
            // Check the wallet address before going anywhere near the network
            if !keys::is_valid_eth_address(&to_address) {
                let err_msg = format!(
                    "Invalid Ethereum wallet address: {}. It should be a 42-character hex string starting with '0x'.",
                    to_address
                );
                print_error("Mint rejected", Some(&err_msg));
                return Err(Box::from(err_msg));
            }
            let api = build_client();
            run_action(|dispatch| async move {
                controller::submit_mint(&api, &to_address, &ipfs_uri, &dispatch).await;
            })
            .await
        }
        Command::Owner { token_id } => {
            let api = build_client();
            run_action(|dispatch| async move {
                controller::query_owner(&api, &token_id, &dispatch).await;
            })
            .await
        }
        Command::TokenUri { token_id } => {
            let api = build_client();
            run_action(|dispatch| async move {
                controller::query_token_uri(&api, &token_id, &dispatch).await;
            })
            .await
        }
        Command::SetApiUrl { url } => {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                let err_msg = format!("Invalid API base URL: {}. It should start with http(s).", url);
                print_error("Configuration rejected", Some(&err_msg));
                return Err(Box::from(err_msg));
            }
            let config = Config::new(url);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_success("API base URL saved", &config.api_base_url);
            Ok(())
        }
        Command::Reset => {
            print_info("Resetting configuration", "");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Drive a single controller action to completion and print its outcome.
///
/// The same action functions power the dashboard; here the dispatched
/// transitions are drained from the channel and rendered to the console.
async fn run_action<F, Fut>(action: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(mpsc::Sender<Action>) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let (sender, mut receiver) = mpsc::channel(ACTION_QUEUE_SIZE);
    action(sender).await;

    while let Some(dispatched) = receiver.recv().await {
        if let Action::Finished(operation, result, _) = dispatched {
            return match result {
                OperationResult::Success(text) => {
                    match operation {
                        Operation::Mint => print_success(&text, ""),
                        Operation::Owner => print_success("Owner", &text),
                        Operation::TokenUri => print_success("Token URI", &text),
                    }
                    Ok(())
                }
                OperationResult::Failure(text) => {
                    print_error(&text, None);
                    Err(Box::from(text))
                }
            };
        }
    }
    Err(Box::from("The operation never settled"))
}

/// Starts the interactive dashboard.
async fn start(api: ApiClient) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(Arc::new(api));
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
