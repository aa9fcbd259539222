//! sqs-server
//!
//! HTTP gateway in front of the sqs-core queue.
//!
//! - **config**: command-line flags
//! - **logging**: tracing subscriber writing to the log file
//! - **gateway**: axum router mapping verbs to queue operations
//! - **server**: listener + graceful shutdown

pub mod config;
pub mod gateway;
pub mod logging;
pub mod server;

pub use config::Cli;
pub use gateway::{AppState, router};
