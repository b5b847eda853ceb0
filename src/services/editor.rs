//! Editor bridge: resolve which editor to launch and run it to completion.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Launches an interactive editor against a file and waits for it to close.
#[async_trait]
pub trait EditorLauncher: Send + Sync {
    /// Pick an editor: `EDITOR`, then `VISUAL`, then the first common
    /// editor found on PATH.
    fn resolve(&self) -> Result<String>;

    /// Open `path` in `editor` with inherited stdio, blocking until exit.
    async fn open(&self, path: &Path, editor: &str) -> Result<()>;
}

/// Editors probed on PATH when no environment override is set.
const EDITOR_CANDIDATES: [&str; 2] = ["vim", "nano"];

pub struct SystemEditor;

#[async_trait]
impl EditorLauncher for SystemEditor {
    fn resolve(&self) -> Result<String> {
        resolve_from(std::env::var("EDITOR").ok(), std::env::var("VISUAL").ok())
    }

    async fn open(&self, path: &Path, editor: &str) -> Result<()> {
        let status = Command::new(editor)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        if !status.success() {
            return Err(Error::EditorFailed(status.code().unwrap_or(-1)));
        }

        Ok(())
    }
}

fn resolve_from(editor: Option<String>, visual: Option<String>) -> Result<String> {
    if let Some(editor) = editor.filter(|e| !e.is_empty()) {
        return Ok(editor);
    }
    if let Some(visual) = visual.filter(|v| !v.is_empty()) {
        return Ok(visual);
    }

    for candidate in EDITOR_CANDIDATES {
        if which::which(candidate).is_ok() {
            return Ok(candidate.to_string());
        }
    }

    Err(Error::NoEditorAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_editor_var() {
        let editor = resolve_from(Some("code --wait".into()), Some("vi".into())).unwrap();
        assert_eq!(editor, "code --wait");
    }

    #[test]
    fn test_resolve_falls_back_to_visual() {
        let editor = resolve_from(None, Some("vi".into())).unwrap();
        assert_eq!(editor, "vi");
    }

    #[test]
    fn test_resolve_ignores_empty_values() {
        let editor = resolve_from(Some(String::new()), Some("vi".into())).unwrap();
        assert_eq!(editor, "vi");
    }

    #[tokio::test]
    async fn test_open_reports_nonzero_exit() {
        let result = SystemEditor.open(Path::new("/nonexistent"), "false").await;
        assert!(matches!(result, Err(Error::EditorFailed(1))));
    }
}
