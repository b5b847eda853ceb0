//! The end-to-end commit workflow.
//!
//! One strictly sequential pass: validate the repository, collect the staged
//! changes, ask the user for a commit type and language, draft a message,
//! present it, and act on the user's decision. Collaborators are injected at
//! construction; the workflow holds no other state.

use crate::config::COMMIT_TYPES;
use crate::error::{Error, Result};
use crate::models::{Decision, GeneratedCommit, Language, Outcome};
use crate::services::git;
use crate::services::{Drafter, EditorLauncher, GitGateway};
use crate::ui::{self, Prompter};
use colored::Color;

pub struct Workflow<G, D, E, P> {
    git: G,
    drafter: D,
    editor: E,
    prompter: P,
}

impl<G, D, E, P> Workflow<G, D, E, P>
where
    G: GitGateway,
    D: Drafter,
    E: EditorLauncher,
    P: Prompter,
{
    pub fn new(git: G, drafter: D, editor: E, prompter: P) -> Self {
        Self {
            git,
            drafter,
            editor,
            prompter,
        }
    }

    /// Run the workflow to one of its terminal states.
    ///
    /// Every error is terminal for the run; cancellation is a successful
    /// outcome, not an error.
    pub async fn run(&self) -> Result<Outcome> {
        if !self.git.is_repository().await {
            return Err(Error::NotARepository);
        }

        let staged = self.git.staged_files().await?;
        if staged.is_empty() {
            return Err(Error::NothingStaged);
        }
        ui::success(&format!("Found {} staged file(s)", staged.len()));

        let commit_type = self.prompter.select_commit_type(&COMMIT_TYPES)?;
        let language = self.prompter.select_language(&Language::ALL)?;

        ui::info("Analyzing changes...");
        let diff = self.git.staged_diff().await?;

        ui::info(&format!(
            "Generating commit message in {}...",
            language.display_name()
        ));
        let draft = self
            .drafter
            .generate(&diff, commit_type.value, language)
            .await?;

        ui::success("Generated commit:");
        ui::delimiter();

        let message = if draft.body.is_empty() {
            draft.title.clone()
        } else {
            format!("{}\n\n{}", draft.title, draft.body)
        };
        ui::boxed("Generated Commit Message ✨", &message, Color::Green);

        let stats = self.git.diff_stats().await?;
        let stats_lines = format!(
            "Files changed: {}\nInsertions: {}\nDeletions: {}",
            stats.files_changed, stats.insertions, stats.deletions
        );
        ui::boxed("Commit Statistic 📊", &stats_lines, Color::Blue);
        ui::delimiter();

        match self.prompter.select_decision()? {
            Decision::Use => self.commit_draft(&draft).await,
            Decision::Edit => self.commit_with_editor(&draft).await,
            Decision::Cancel => {
                ui::warning(
                    "Commit cancelled. You can create your own commit message with 'git commit'.",
                );
                Ok(Outcome::Cancelled)
            }
        }
    }

    async fn commit_draft(&self, draft: &GeneratedCommit) -> Result<Outcome> {
        let body = (!draft.body.is_empty()).then_some(draft.body.as_str());
        self.git
            .create_commit(&draft.title, body)
            .await
            .map_err(as_commit_failure)?;

        ui::success("Commit created successfully!");
        Ok(Outcome::Committed)
    }

    /// Let the user edit the draft in a temp file, then commit from that
    /// file so the commit reflects exactly what they saved. The temp file
    /// is removed when `temp` drops, on every exit path of this function.
    async fn commit_with_editor(&self, draft: &GeneratedCommit) -> Result<Outcome> {
        let temp = git::write_commit_message_file(&draft.title, &draft.body)?;

        ui::info("Opening editor to modify commit message...");
        ui::info("- First line: Commit message (title)");
        ui::info("- Leave one blank line");
        ui::info("- Rest: Commit description (markdown format)");

        let editor = self.editor.resolve()?;
        self.editor.open(&temp, &editor).await?;

        ui::info("Editor closed. Proceeding with edited commit message...");
        let (title, _) = git::read_commit_message_file(&temp)?;
        self.git
            .commit_from_file(&temp)
            .await
            .map_err(as_commit_failure)?;

        ui::success(&format!("Commit created successfully with edited message: {title}"));
        Ok(Outcome::Committed)
    }
}

fn as_commit_failure(err: Error) -> Error {
    match err {
        Error::GitCommandFailed(stderr) => Error::CommitFailed(stderr),
        other => other,
    }
}
