//! Interactive selection menus.
//!
//! All three menus are blocking single-choice selections defaulting to the
//! first entry. The use/edit/cancel menu is the only deliberate cancellation
//! point in the flow; an unavailable terminal surfaces as a prompt error.

use crate::error::{Error, Result};
use crate::models::{CommitType, Decision, Language};
use colored::Colorize;
use dialoguer::Select;

/// User-facing selection menus, scriptable in tests.
pub trait Prompter {
    fn select_commit_type<'a>(&self, types: &'a [CommitType]) -> Result<&'a CommitType>;
    fn select_language(&self, languages: &[Language]) -> Result<Language>;
    fn select_decision(&self) -> Result<Decision>;
}

pub struct TerminalPrompter;

impl TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        println!("{}", prompt.cyan());
        Select::new()
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}

impl Prompter for TerminalPrompter {
    fn select_commit_type<'a>(&self, types: &'a [CommitType]) -> Result<&'a CommitType> {
        let items: Vec<String> = types
            .iter()
            .map(|t| format!("{} {:<8} - {}", t.emoji, t.value, t.description))
            .collect();

        let index = self.select("Select commit type:", &items)?;
        Ok(&types[index])
    }

    fn select_language(&self, languages: &[Language]) -> Result<Language> {
        let items: Vec<String> = languages
            .iter()
            .map(|l| format!("{} {}", l.flag(), l.display_name()))
            .collect();

        let index = self.select("Select language for commit message:", &items)?;
        Ok(languages[index])
    }

    fn select_decision(&self) -> Result<Decision> {
        let items: Vec<String> = [
            "Use as is - commit with this message and description",
            "Edit - open in editor to modify before committing",
            "Cancel - I'll craft my own message manually",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let index = self.select("What would you like to do with this commit message?", &items)?;
        Ok(match index {
            0 => Decision::Use,
            1 => Decision::Edit,
            _ => Decision::Cancel,
        })
    }
}
