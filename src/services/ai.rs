//! Commit drafting service backed by an OpenAI-compatible chat endpoint.

use crate::config::{AiSettings, API_KEY_ENV};
use crate::error::{Error, Result};
use crate::models::{GeneratedCommit, Language};
use crate::prompts;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

/// Drafts a commit message from a staged diff.
#[async_trait]
pub trait Drafter: Send + Sync {
    async fn generate(
        &self,
        diff: &str,
        commit_type: &str,
        language: Language,
    ) -> Result<GeneratedCommit>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Drafter talking to the hosted chat-completion API.
///
/// The credential is read from the environment at construction; a missing
/// key is a typed configuration error, not a generation failure.
pub struct AiService {
    client: reqwest::Client,
    api_key: String,
    settings: AiSettings,
}

impl AiService {
    pub fn new(settings: AiSettings) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| Error::MissingApiKey)?;
        Ok(Self::with_api_key(settings, api_key))
    }

    pub fn with_api_key(settings: AiSettings, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            settings,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Drafter for AiService {
    async fn generate(
        &self,
        diff: &str,
        commit_type: &str,
        language: Language,
    ) -> Result<GeneratedCommit> {
        let truncated = truncate_diff(diff, self.settings.max_diff_length);

        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompts::system_prompt(commit_type, language),
                },
                ChatMessage {
                    role: "user",
                    content: prompts::user_prompt(&truncated, commit_type, language),
                },
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message("Generating commit message...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        let sent = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await;

        pb.finish_and_clear();

        let response = sent.map_err(|e| Error::DraftGenerationFailed(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::DraftGenerationFailed(format!(
                "API returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::DraftGenerationFailed(e.to_string()))?;

        let content = reply
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("")
            .trim()
            .to_string();

        if content.is_empty() {
            return Err(Error::DraftGenerationFailed(
                "empty reply from model".to_string(),
            ));
        }

        Ok(parse_reply(&content))
    }
}

/// Cap the diff at `max_len` bytes (on a char boundary) and mark the cut.
pub fn truncate_diff(diff: &str, max_len: usize) -> String {
    if diff.len() <= max_len {
        return diff.to_string();
    }

    let mut end = max_len;
    while !diff.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated]", &diff[..end])
}

/// Split the model reply into title and body: the first line is the title,
/// everything after it (trimmed, so blank separators collapse) is the body.
pub fn parse_reply(content: &str) -> GeneratedCommit {
    let content = content.trim();
    match content.find('\n') {
        Some(idx) => GeneratedCommit {
            title: content[..idx].trim().to_string(),
            body: content[idx..].trim().to_string(),
        },
        None => GeneratedCommit {
            title: content.to_string(),
            body: String::new(),
        },
    }
}
