// git-cm - Interactive commit message generator
// Drafts conventional commit messages from staged changes via a chat-completion API

pub mod config;
pub mod error;
pub mod models;
pub mod prompts;
pub mod services;
pub mod ui;
pub mod workflow;

pub use error::{Error, Result};

// Re-export commonly used types
pub use models::{Decision, DiffStats, GeneratedCommit, Language, Outcome};
pub use workflow::Workflow;
