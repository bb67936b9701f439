//! gitscribe - CLI entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitscribe::commit::{CommitOutcome, run_commit};
use gitscribe::config::{
    DEFAULT_END_MARKER, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_START_MARKER, InferenceConfig,
    TreeConfig,
};
use gitscribe::confirm::TerminalConfirmation;
use gitscribe::git::open_repository;
use gitscribe::ollama::OllamaClient;
use gitscribe::readme::update_readme;

/// Commit messages from your diff via a local Ollama model, plus README
/// tree upkeep.
#[derive(Parser, Debug)]
#[command(name = "gitscribe")]
#[command(about = "Generate commit messages with a local Ollama model and keep the README tree current")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a commit message from pending changes and commit on approval
    Commit {
        /// Model name passed to the Ollama server
        #[arg(long, env = "GITSCRIBE_MODEL", default_value = DEFAULT_MODEL)]
        model: String,

        /// Ollama generate endpoint
        #[arg(long, env = "GITSCRIBE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },
    /// Regenerate the project tree between the README marker lines
    Tree {
        /// Document to update
        #[arg(short = 'o', long, default_value = "README.md")]
        readme: PathBuf,

        /// Directory to list
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Line that opens the replaceable region
        #[arg(long, default_value = DEFAULT_START_MARKER)]
        start_marker: String,

        /// Line that closes the replaceable region
        #[arg(long, default_value = DEFAULT_END_MARKER)]
        end_marker: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so generated content stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Commit { model, endpoint } => run_commit_command(model, endpoint).await,
        Command::Tree {
            readme,
            root,
            start_marker,
            end_marker,
        } => run_tree_command(readme, root, start_marker, end_marker),
    }
}

async fn run_commit_command(model: String, endpoint: String) -> Result<()> {
    let repo = open_repository(Path::new("."))
        .context("Run gitscribe from within a git repository")?;

    let config = InferenceConfig {
        model,
        endpoint,
        ..InferenceConfig::default()
    };
    let client = OllamaClient::new(config).context("Failed to build HTTP client")?;
    let mut confirm = TerminalConfirmation;

    match run_commit(&repo, &client, &mut confirm).await? {
        CommitOutcome::Committed { oid, message } => {
            let subject = message.lines().next().unwrap_or(&message);
            println!("✓ Created commit {:.7}: {}", oid.to_string(), subject);
        }
        CommitOutcome::Aborted => {
            eprintln!("Aborted. Nothing was staged or committed.");
        }
        CommitOutcome::NoChanges => {
            println!("Working tree clean. Nothing to commit.");
        }
    }

    Ok(())
}

fn run_tree_command(
    readme: PathBuf,
    root: PathBuf,
    start_marker: String,
    end_marker: String,
) -> Result<()> {
    let config = TreeConfig {
        readme_path: readme,
        root,
        start_marker,
        end_marker,
        ..TreeConfig::default()
    };

    update_readme(&config).context("Failed to update the README tree")?;
    println!("✓ Updated {}", config.readme_path.display());

    Ok(())
}
