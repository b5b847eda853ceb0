//! Configuration: the fixed selection tables and the tunable AI settings.
//!
//! Settings load from `<repo>/.gitcm.toml`, then the user config directory,
//! then built-in defaults. The API credential is only ever read from the
//! environment, never from a file.

use crate::error::{Error, Result};
use crate::models::CommitType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the drafting API credential.
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

/// Commit types based on the conventional commits specification
pub static COMMIT_TYPES: [CommitType; 11] = [
    CommitType { value: "feat", description: "A new feature", emoji: "✨" },
    CommitType { value: "fix", description: "A bug fix", emoji: "🐛" },
    CommitType { value: "docs", description: "Documentation only changes", emoji: "📚" },
    CommitType {
        value: "style",
        description: "Changes that do not affect the meaning of the code",
        emoji: "💎",
    },
    CommitType {
        value: "refactor",
        description: "A code change that neither fixes a bug nor adds a feature",
        emoji: "📦",
    },
    CommitType {
        value: "perf",
        description: "A code change that improves performance",
        emoji: "🚀",
    },
    CommitType {
        value: "test",
        description: "Adding missing tests or correcting existing tests",
        emoji: "🧪",
    },
    CommitType {
        value: "build",
        description: "Changes that affect the build system or external dependencies",
        emoji: "🔧",
    },
    CommitType {
        value: "ci",
        description: "Changes to our CI configuration files and scripts",
        emoji: "🔄",
    },
    CommitType {
        value: "chore",
        description: "Other changes that don't modify src or test files",
        emoji: "🧹",
    },
    CommitType { value: "revert", description: "Reverts a previous commit", emoji: "⏪" },
];

/// Tunables for the drafting service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Token limit for the generated reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Diffs longer than this are truncated before being sent to the API.
    /// Statistics and the commit itself always use the full diff.
    #[serde(default = "default_max_diff_length")]
    pub max_diff_length: usize,
}

fn default_model() -> String {
    "deepseek-coder".to_string()
}

fn default_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.5
}

fn default_max_diff_length() -> usize {
    10_000
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            max_diff_length: default_max_diff_length(),
        }
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitConfig {
    #[serde(default)]
    pub ai: AiSettings,
}

impl CommitConfig {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load(repo_path: &Path) -> Result<Self> {
        match Self::find(repo_path) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a specific configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    fn find(repo_path: &Path) -> Option<PathBuf> {
        let local = repo_path.join(".gitcm.toml");
        if local.exists() {
            return Some(local);
        }

        let global = dirs::config_dir()?.join("git-cm/config.toml");
        global.exists().then_some(global)
    }
}
