use thiserror::Error;

/// Errors that terminate the current run.
///
/// None of these are retried: every variant is reported once with its
/// underlying detail and the process exits with status 1. User cancellation
/// is deliberately not represented here — it is a successful outcome.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a git repository")]
    NotARepository,

    #[error("no staged changes found; use 'git add' to stage your changes first")]
    NothingStaged,

    /// A git invocation exited non-zero. Carries the captured stderr.
    #[error("git command failed: {0}")]
    GitCommandFailed(String),

    #[error("failed to generate commit message: {0}")]
    DraftGenerationFailed(String),

    #[error("failed to create commit: {0}")]
    CommitFailed(String),

    #[error("DEEPSEEK_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("no suitable text editor found; set the EDITOR environment variable")]
    NoEditorAvailable,

    #[error("editor exited with code {0}")]
    EditorFailed(i32),

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
