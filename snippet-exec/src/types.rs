use serde::{Deserialize, Serialize};
use std::fmt;

/// Snippet submission, serialized as the execution API's request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Target interpreter on the remote service
    pub language_id: u32,
    /// Source code, forwarded verbatim
    pub source_code: String,
}

/// Outcome reported by the execution service.
///
/// Judge0 reports more ids than are named here (runtime errors, internal
/// errors, exec format errors, ...). They all land in `Other` and are shown
/// as runtime errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ExecutionStatus {
    InQueue,
    Processing,
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompilationError,
    Other(u32),
}

impl ExecutionStatus {
    pub fn id(&self) -> u32 {
        match self {
            ExecutionStatus::InQueue => 1,
            ExecutionStatus::Processing => 2,
            ExecutionStatus::Accepted => 3,
            ExecutionStatus::WrongAnswer => 4,
            ExecutionStatus::TimeLimitExceeded => 5,
            ExecutionStatus::CompilationError => 6,
            ExecutionStatus::Other(id) => *id,
        }
    }

    /// Whether the submission has finished on the remote side
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ExecutionStatus::InQueue | ExecutionStatus::Processing)
    }
}

impl From<u32> for ExecutionStatus {
    fn from(id: u32) -> Self {
        match id {
            1 => ExecutionStatus::InQueue,
            2 => ExecutionStatus::Processing,
            3 => ExecutionStatus::Accepted,
            4 => ExecutionStatus::WrongAnswer,
            5 => ExecutionStatus::TimeLimitExceeded,
            6 => ExecutionStatus::CompilationError,
            other => ExecutionStatus::Other(other),
        }
    }
}

impl From<ExecutionStatus> for u32 {
    fn from(status: ExecutionStatus) -> Self {
        status.id()
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStatus::InQueue => write!(f, "in queue"),
            ExecutionStatus::Processing => write!(f, "processing"),
            ExecutionStatus::Accepted => write!(f, "accepted"),
            ExecutionStatus::WrongAnswer => write!(f, "wrong answer"),
            ExecutionStatus::TimeLimitExceeded => write!(f, "time limit exceeded"),
            ExecutionStatus::CompilationError => write!(f, "compilation error"),
            ExecutionStatus::Other(id) => write!(f, "runtime error ({})", id),
        }
    }
}

/// Terminal outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
}

/// Language offered by the execution service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    pub id: u32,
}

/// Status object as returned inside a submission response
#[derive(Debug, Deserialize)]
pub(crate) struct StatusPayload {
    pub id: u32,
}

/// Submission response body. Fields not listed here are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SubmissionResponse {
    pub status: StatusPayload,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
}

impl From<SubmissionResponse> for ExecutionResult {
    fn from(response: SubmissionResponse) -> Self {
        Self {
            status: ExecutionStatus::from(response.status.id),
            stdout: response.stdout,
            stderr: response.stderr,
            compile_output: response.compile_output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unlisted_status_is_other() {
        assert_eq!(ExecutionStatus::from(11), ExecutionStatus::Other(11));
        assert_eq!(ExecutionStatus::Other(11).id(), 11);
        assert_eq!(ExecutionStatus::from(6), ExecutionStatus::CompilationError);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!ExecutionStatus::InQueue.is_terminal());
        assert!(!ExecutionStatus::Processing.is_terminal());
        assert!(ExecutionStatus::Accepted.is_terminal());
        assert!(ExecutionStatus::Other(13).is_terminal());
    }

    #[test]
    fn test_submission_response_ignores_extra_fields() {
        let response: SubmissionResponse = serde_json::from_value(json!({
            "status": { "id": 6, "description": "Compilation Error" },
            "stdout": null,
            "stderr": null,
            "compile_output": "SyntaxError: Unexpected token",
            "message": "Exited with error status 1",
        }))
        .unwrap();

        let result = ExecutionResult::from(response);
        assert_eq!(result.status, ExecutionStatus::CompilationError);
        assert_eq!(
            result.compile_output.as_deref(),
            Some("SyntaxError: Unexpected token")
        );
        assert!(result.stdout.is_none());
    }

    #[test]
    fn test_request_wire_shape() {
        let request = ExecutionRequest {
            language_id: 63,
            source_code: "console.log(1)".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "language_id": 63, "source_code": "console.log(1)" })
        );
    }

    #[test]
    fn test_status_serializes_as_id() {
        assert_eq!(
            serde_json::to_value(ExecutionStatus::Accepted).unwrap(),
            json!(3)
        );
    }
}
