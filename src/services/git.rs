//! Git gateway: every repository query and mutation, executed by shelling
//! out to the `git` binary. A non-zero exit surfaces the captured stderr.

use crate::error::{Error, Result};
use crate::models::DiffStats;
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tokio::process::Command;

/// Repository operations the workflow depends on.
#[async_trait]
pub trait GitGateway: Send + Sync {
    /// Whether the configured path is inside a git working tree.
    async fn is_repository(&self) -> bool;

    /// Staged file paths in the order git reports them.
    async fn staged_files(&self) -> Result<Vec<String>>;

    /// Unified diff of the staged changes.
    async fn staged_diff(&self) -> Result<String>;

    /// Per-file numstat summed over the staged changes.
    async fn diff_stats(&self) -> Result<DiffStats>;

    /// `git commit -m title [-m body]`
    async fn create_commit(&self, title: &str, body: Option<&str>) -> Result<()>;

    /// `git commit -F <file>` — commits exactly what the file contains.
    async fn commit_from_file(&self, path: &Path) -> Result<()>;
}

/// Gateway implementation running `git` in a fixed repository path.
pub struct GitService {
    repo_path: PathBuf,
}

impl GitService {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    async fn run_git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::GitCommandFailed(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl GitGateway for GitService {
    async fn is_repository(&self) -> bool {
        self.run_git(&["rev-parse", "--is-inside-work-tree"])
            .await
            .map(|out| out.trim() == "true")
            .unwrap_or(false)
    }

    async fn staged_files(&self) -> Result<Vec<String>> {
        let output = self.run_git(&["diff", "--staged", "--name-only"]).await?;
        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn staged_diff(&self) -> Result<String> {
        self.run_git(&["diff", "--staged"]).await
    }

    async fn diff_stats(&self) -> Result<DiffStats> {
        let output = self.run_git(&["diff", "--staged", "--numstat"]).await?;
        Ok(parse_numstat(&output))
    }

    async fn create_commit(&self, title: &str, body: Option<&str>) -> Result<()> {
        let mut args = vec!["commit", "-m", title];
        if let Some(body) = body {
            args.push("-m");
            args.push(body);
        }
        self.run_git(&args).await?;
        Ok(())
    }

    async fn commit_from_file(&self, path: &Path) -> Result<()> {
        let file = path.to_string_lossy();
        self.run_git(&["commit", "-F", file.as_ref()]).await?;
        Ok(())
    }
}

/// Parse `git diff --numstat` output. Each non-empty line counts as one
/// changed file; non-numeric added/removed fields (binary files show "-")
/// contribute 0.
pub fn parse_numstat(output: &str) -> DiffStats {
    let mut stats = DiffStats::default();

    for line in output.lines().filter(|line| !line.trim().is_empty()) {
        let mut fields = line.split('\t');
        let insertions = fields
            .next()
            .and_then(|f| f.trim().parse::<u64>().ok())
            .unwrap_or(0);
        let deletions = fields
            .next()
            .and_then(|f| f.trim().parse::<u64>().ok())
            .unwrap_or(0);

        stats.files_changed += 1;
        stats.insertions += insertions;
        stats.deletions += deletions;
    }

    stats
}

/// Write `title`, a blank line, and `body` to a temp file for editing.
///
/// The returned `TempPath` deletes the file when dropped, so the edit branch
/// cleans up on every exit path; deletion failures are swallowed by drop.
pub fn write_commit_message_file(title: &str, body: &str) -> Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("commit-msg-")
        .suffix(".txt")
        .tempfile()?;

    if body.is_empty() {
        file.write_all(title.as_bytes())?;
    } else {
        file.write_all(format!("{title}\n\n{body}").as_bytes())?;
    }
    file.flush()?;

    Ok(file.into_temp_path())
}

/// Read an edited commit message file back into (title, body).
///
/// The first line is the title; everything from the third line on is the
/// body, so the blank separator line is not part of either.
pub fn read_commit_message_file(path: &Path) -> Result<(String, String)> {
    let content = std::fs::read_to_string(path)?;

    let title = content.lines().next().unwrap_or("").trim().to_string();
    let body = content
        .lines()
        .skip(2)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    Ok((title, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numstat_sums_fields() {
        let stats = parse_numstat("10\t5\tfile1\n3\tabc\tfile2\n");
        assert_eq!(stats.files_changed, 2);
        assert_eq!(stats.insertions, 13);
        assert_eq!(stats.deletions, 5);
    }

    #[test]
    fn test_parse_numstat_binary_files() {
        let stats = parse_numstat("-\t-\tlogo.png\n2\t0\tREADME.md\n");
        assert_eq!(stats.files_changed, 2);
        assert_eq!(stats.insertions, 2);
        assert_eq!(stats.deletions, 0);
    }

    #[test]
    fn test_parse_numstat_empty_output() {
        assert_eq!(parse_numstat(""), DiffStats::default());
        assert_eq!(parse_numstat("\n\n"), DiffStats::default());
    }

    #[test]
    fn test_commit_message_file_round_trip() {
        let path = write_commit_message_file("feat: x", "What:\n- added\nWhy:\n- needed").unwrap();
        let (title, body) = read_commit_message_file(&path).unwrap();
        assert_eq!(title, "feat: x");
        assert_eq!(body, "What:\n- added\nWhy:\n- needed");
    }

    #[test]
    fn test_commit_message_file_title_only() {
        let path = write_commit_message_file("fix: y", "").unwrap();
        let (title, body) = read_commit_message_file(&path).unwrap();
        assert_eq!(title, "fix: y");
        assert_eq!(body, "");
    }

    #[test]
    fn test_temp_file_removed_on_drop() {
        let path = write_commit_message_file("chore: z", "").unwrap();
        let on_disk = path.to_path_buf();
        assert!(on_disk.exists());
        drop(path);
        assert!(!on_disk.exists());
    }
}
