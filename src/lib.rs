//! Command-line front end for running snippets on a Judge0 execution service.

mod render;

pub use render::{render_languages, render_result, render_snapshot, NO_RESULT, RUNNING};

use snippet_exec::{ExecutionService, RunOutcome, SnippetSession};
use std::sync::Arc;
use tracing::info;

/// Run `source` once in a fresh session and render what the session ends up
/// showing.
pub async fn run_snippet(
    service: Arc<dyn ExecutionService>,
    source: String,
    language_id: u32,
) -> (RunOutcome, String) {
    let session = SnippetSession::new(service, source, language_id);
    let outcome = session.run().await;
    let rendered = render_snapshot(&session.snapshot());

    if let RunOutcome::Completed(result) = &outcome {
        info!(status = %result.status, "Snippet finished");
    }

    (outcome, rendered)
}
