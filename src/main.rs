use anyhow::Context;
use clap::{Parser, Subcommand};
use snippet_exec::{ExecutionConfig, ExecutionService, Judge0Client, RunOutcome};
use snippet_runner::{render_languages, run_snippet};
use std::{io::Read, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a snippet and print its result
    Run {
        /// Source file; stdin when omitted
        file: Option<PathBuf>,

        /// Language id on the execution service (defaults to EXECUTION_LANGUAGE_ID or 63)
        #[arg(short, long)]
        language_id: Option<u32>,

        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the languages the execution service accepts
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = ExecutionConfig::from_env().context("loading execution service configuration")?;
    let default_language_id = config.default_language_id;
    let client = Arc::new(Judge0Client::new(config)?);

    match args.command {
        Command::Run {
            file,
            language_id,
            json,
        } => {
            let source = read_source(file.as_ref())?;
            let language_id = language_id.unwrap_or(default_language_id);

            let (outcome, rendered) = run_snippet(client, source, language_id).await;
            let result = match outcome {
                RunOutcome::Completed(result) => Some(result),
                _ => None,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", rendered);
            }

            if result.is_none() {
                anyhow::bail!("the execution service returned no result");
            }
        }
        Command::Languages => {
            let languages = client.list_languages().await?;
            print!("{}", render_languages(&languages));
        }
    }

    Ok(())
}

fn read_source(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("reading snippet from stdin")?;
            Ok(source)
        }
    }
}
