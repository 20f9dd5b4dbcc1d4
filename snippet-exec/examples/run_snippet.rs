use snippet_exec::{ExecutionConfig, ExecutionService, Judge0Client, RunOutcome, SnippetSession};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load EXECUTION_* variables
    dotenv::dotenv().ok();

    let source = r#"
const originalArray = [1, 2, 3, 4]
const copiedArray = [...originalArray]

console.log(originalArray)
console.log(copiedArray)
"#;

    let config = ExecutionConfig::from_env()?;
    let language_id = config.default_language_id;
    let client = Arc::new(Judge0Client::new(config)?);

    let languages = client.list_languages().await?;
    if let Some(language) = languages.iter().find(|l| l.id == language_id) {
        println!("Language: {}", language.name);
    }

    let session = SnippetSession::new(client, source, language_id);
    match session.run().await {
        RunOutcome::Completed(result) => {
            println!("Status: {}", result.status);
            if let Some(stdout) = result.stdout {
                print!("{}", stdout);
            }
        }
        _ => println!("No result available"),
    }

    Ok(())
}
