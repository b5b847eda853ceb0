use clap::Parser;
use git_cm::config::CommitConfig;
use git_cm::services::{AiService, GitService, SystemEditor};
use git_cm::ui::{self, TerminalPrompter};
use git_cm::{Outcome, Result, Workflow};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-cm")]
#[command(about = "Generate conventional commit messages from staged changes", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Path to the git repository (defaults to the current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Show version information
    #[arg(short = 'v', long = "version")]
    version: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("Git Commit Message Generator v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    if let Err(e) = runtime.block_on(run(cli)) {
        ui::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    ui::header("📝 Git Commit Message Generator");

    let repo_path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let config = CommitConfig::load(&repo_path)?;
    let drafter = AiService::new(config.ai)?;

    let workflow = Workflow::new(
        GitService::new(repo_path),
        drafter,
        SystemEditor,
        TerminalPrompter,
    );
    workflow.run().await
}
