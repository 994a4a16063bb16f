//! Bendify Web Backend Library
//!
//! This library implements a small web backend that authenticates a user
//! against the Spotify Web API via the OAuth2 authorization-code flow,
//! fetches the user's short-term listening statistics, aggregates four
//! audio-feature dimensions over their top tracks, and classifies the
//! result into one of four bending elements.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints served by the backend
//! - `classify` - Audio-feature aggregation and element classification
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared across the application
//! - `server` - HTTP server setup and routing
//! - `session` - Per-session token storage behind a signed cookie
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `view` - HTML view models and rendering
//!
//! # Example
//!
//! ```
//! use bendify::{config, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env();
//!     let config = config::Config::from_env().unwrap();
//!     server::start_server(config, "127.0.0.1:5000").await;
//! }
//! ```

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod view;

/// A convenient Result type alias for operations that may fail.
///
/// All fallible operations in the application return this alias, carrying
/// the application-wide [`error::Error`] taxonomy.
pub type Res<T> = std::result::Result<T, error::Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Token exchange completed for session {}", id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// during startup, never inside request handlers.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Provider omitted a refresh token, keeping the previous one");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
