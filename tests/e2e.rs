use serde_json::json;
use snippet_exec::{
    ExecutionConfig, ExecutionStatus, Judge0Client, RunOutcome, SessionEvent, SnippetSession,
};
use snippet_runner::{run_snippet, NO_RESULT};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SPREAD_EXAMPLE: &str = r#"
const originalArray = [1, 2, 3, 4]
const copiedArray = [...originalArray]
console.log(copiedArray)
"#;

fn client_for(server: &MockServer) -> Arc<Judge0Client> {
    let config = ExecutionConfig::new(
        "test_api_key".to_string(),
        server.uri(),
        "judge0-ce.p.rapidapi.com".to_string(),
    );
    Arc::new(Judge0Client::new(config).unwrap())
}

#[tokio::test]
async fn test_session_against_service() -> color_eyre::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submissions"))
        .and(header("X-RapidAPI-Key", "test_api_key"))
        .and(body_json(json!({
            "language_id": 63,
            "source_code": SPREAD_EXAMPLE,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": { "id": 3, "description": "Accepted" },
            "stdout": "[ 1, 2, 3, 4 ]\n",
            "stderr": null,
            "compile_output": null,
            "message": null,
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = SnippetSession::new(client_for(&mock_server), SPREAD_EXAMPLE, 63);
    let mut events = session.subscribe();

    let result = match session.run().await {
        RunOutcome::Completed(result) => result,
        other => panic!("expected a completed run, got {:?}", other),
    };
    assert_eq!(result.status, ExecutionStatus::Accepted);
    assert_eq!(result.stdout.as_deref(), Some("[ 1, 2, 3, 4 ]\n"));

    assert_eq!(events.recv().await?, SessionEvent::Executing);
    assert_eq!(events.recv().await?, SessionEvent::Settled(Some(result)));
    assert!(!session.is_executing());

    session.set_source_code("console.log('edited')");
    session.reset();
    assert_eq!(events.recv().await?, SessionEvent::Reset);
    assert_eq!(session.source_code(), SPREAD_EXAMPLE);
    assert!(session.last_result().is_none());

    Ok(())
}

#[tokio::test]
async fn test_service_error_renders_no_result() -> color_eyre::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (outcome, rendered) =
        run_snippet(client_for(&mock_server), SPREAD_EXAMPLE.to_string(), 63).await;

    assert_eq!(outcome, RunOutcome::Failed);
    assert_eq!(rendered, NO_RESULT);
    Ok(())
}

#[tokio::test]
async fn test_compilation_error_is_rendered() -> color_eyre::Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submissions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": { "id": 6, "description": "Compilation Error" },
            "stdout": null,
            "stderr": null,
            "compile_output": "main.ts(1,7): error TS1005: ';' expected.",
        })))
        .mount(&mock_server)
        .await;

    let (outcome, rendered) =
        run_snippet(client_for(&mock_server), "let x y".to_string(), 74).await;

    assert!(matches!(outcome, RunOutcome::Completed(_)));
    assert_eq!(
        rendered,
        "Compilation error:\nmain.ts(1,7): error TS1005: ';' expected.\n"
    );
    Ok(())
}
