//! # Snippet Exec
//!
//! Client-side plumbing for running code snippets on a remote execution
//! service (Judge0, as exposed through RapidAPI).
//!
//! - [`Judge0Client`] talks HTTP to the service.
//! - [`SnippetSession`] owns an editable snippet, runs it through any
//!   [`ExecutionService`] and publishes the latest result to observers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use snippet_exec::{ExecutionConfig, Judge0Client, RunOutcome, SnippetSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExecutionConfig::new(
//!         "your-api-key".to_string(),
//!         "https://judge0-ce.p.rapidapi.com".to_string(),
//!         "judge0-ce.p.rapidapi.com".to_string(),
//!     );
//!     let language_id = config.default_language_id;
//!     let client = Arc::new(Judge0Client::new(config)?);
//!
//!     let session = SnippetSession::new(client, "console.log(6 * 7)", language_id);
//!     if let RunOutcome::Completed(result) = session.run().await {
//!         println!("{}: {:?}", result.status, result.stdout);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`Judge0Client`] returns [`Error`] for transport failures and non-2xx
//! responses. Compile errors, wrong answers, timeouts and runtime errors on
//! the remote side are ordinary [`ExecutionResult`]s. [`SnippetSession::run`]
//! never fails; a transport failure leaves the session without a result.

mod client;
mod config;
mod error;
mod service;
mod session;
mod types;

pub use client::Judge0Client;
pub use config::{ExecutionConfig, DEFAULT_LANGUAGE_ID};
pub use error::Error;
pub use service::ExecutionService;
pub use session::{RunOutcome, SessionEvent, SessionSnapshot, SnippetSession};
pub use types::{ExecutionRequest, ExecutionResult, ExecutionStatus, LanguageInfo};

/// Result type for snippet execution operations
pub type Result<T> = std::result::Result<T, Error>;
