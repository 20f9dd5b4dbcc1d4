use snippet_exec::{ExecutionResult, ExecutionStatus, LanguageInfo, SessionSnapshot};

pub const NO_RESULT: &str = "No result available.";
pub const RUNNING: &str = "Running...";

/// Render a result the way the status calls for
pub fn render_result(result: &ExecutionResult) -> String {
    let stdout = result.stdout.as_deref().unwrap_or_default();
    let stderr = result.stderr.as_deref().unwrap_or_default();

    match result.status {
        status if !status.is_terminal() => format!("Submission is still {}.", status),
        ExecutionStatus::Accepted => stdout.to_string(),
        ExecutionStatus::CompilationError => {
            let output = result.compile_output.as_deref().unwrap_or(stderr);
            section("Compilation error", output)
        }
        ExecutionStatus::TimeLimitExceeded => {
            let mut out = String::from("Time limit exceeded.\n");
            if !stdout.is_empty() {
                out.push_str(&section("Output before the limit", stdout));
            }
            out
        }
        ExecutionStatus::WrongAnswer => {
            let mut out = section("Wrong answer", stdout);
            if !stderr.is_empty() {
                out.push_str(&section("Errors", stderr));
            }
            out
        }
        status => {
            let mut out = section(&format!("Runtime error (status {})", status.id()), stderr);
            if !stdout.is_empty() {
                out.push_str(&section("Output", stdout));
            }
            out
        }
    }
}

/// Render what an observer of the session should currently display
pub fn render_snapshot(snapshot: &SessionSnapshot) -> String {
    if snapshot.is_executing {
        return RUNNING.to_string();
    }
    match &snapshot.last_result {
        Some(result) => render_result(result),
        None => NO_RESULT.to_string(),
    }
}

pub fn render_languages(languages: &[LanguageInfo]) -> String {
    languages
        .iter()
        .map(|l| format!("{:>4}  {}\n", l.id, l.name))
        .collect()
}

fn section(title: &str, body: &str) -> String {
    let mut out = format!("{}:\n{}", title, body);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
