//! Structured error types for notify-cli
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations. The Display text of an error is exactly
//! what the top level writes to stderr before exiting non-zero.

use thiserror::Error;

/// All possible errors while resolving input and dispatching a notification
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The platform notifier reported a delivery failure
    #[error(transparent)]
    Notifier(#[from] notify_rust::error::Error),

    /// Reading piped standard input failed
    #[error("stdin: {0}")]
    Stdin(#[from] std::io::Error),

    /// The delivery task was cancelled or panicked
    #[error("notification task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Convenience Result type using NotifyError
pub type Result<T> = std::result::Result<T, NotifyError>;
