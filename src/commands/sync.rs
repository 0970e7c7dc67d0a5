use crate::areas::inspector::branch_label;
use crate::areas::session::Session;
use crate::artifacts::command::git_command::GitCommand;
use crate::artifacts::menu::{RESET_ENTRIES, ResetChoice};
use colored::Colorize;

impl Session {
    pub fn full_sync(&mut self) -> anyhow::Result<()> {
        self.header("FULL SYNCHRONIZATION")?;

        let Some(message) = self.prepare_commit()? else {
            return Ok(());
        };

        self.blank()?;
        if !self.stage_and_commit(&message)? {
            return Ok(());
        }

        self.info("Pushing to remote...")?;
        if self.run(&GitCommand::Push) {
            self.success("Full synchronization completed!")?;
        } else {
            self.warning("Push failed. You might need to pull first?")?;
        }

        Ok(())
    }

    pub fn just_commit(&mut self) -> anyhow::Result<()> {
        self.header("CREATE COMMIT")?;

        let Some(message) = self.prepare_commit()? else {
            return Ok(());
        };

        self.blank()?;
        if self.stage_and_commit(&message)? {
            self.success("Commit created!")?;
        }

        Ok(())
    }

    pub fn pull_changes(&mut self) -> anyhow::Result<()> {
        self.header("PULL CHANGES")?;

        if !self.require_repository()? {
            return Ok(());
        }

        let branch = self.inspector().current_branch();
        self.info(&format!(
            "Pulling changes for branch {}...",
            branch_label(&branch)
        ))?;

        if self.run(&GitCommand::Pull) {
            self.success("Changes pulled successfully!")?;
        }

        Ok(())
    }

    pub fn reset_changes(&mut self) -> anyhow::Result<()> {
        self.header("RESET CHANGES")?;

        if !self.require_repository()? {
            return Ok(());
        }

        self.print_status_report()?;

        self.blank()?;
        self.line("WARNING! This will discard all uncommitted changes!".yellow())?;
        self.line("Choose action:".bold())?;
        for (key, label) in RESET_ENTRIES {
            self.line(format!("  {}. {}", key, label))?;
        }

        self.blank()?;
        let choice = self.prompt("Your choice: ")?;

        match ResetChoice::parse(&choice) {
            Some(ResetChoice::HardReset) => {
                if self.run(&GitCommand::ResetHard) {
                    self.success("Changes reset!")?;
                }
            }
            Some(ResetChoice::CleanUntracked) => {
                if self.run(&GitCommand::CleanUntracked) {
                    self.success("Untracked files removed!")?;
                }
            }
            Some(ResetChoice::Both) => {
                if self.run(&GitCommand::ResetHard) && self.run(&GitCommand::CleanUntracked) {
                    self.success("All changes reset and untracked files removed!")?;
                }
            }
            Some(ResetChoice::Cancel) => self.info("Cancelled")?,
            None => self.error("Invalid choice!")?,
        }

        Ok(())
    }

    /// Shared front half of the commit actions. `None` means the action is over.
    fn prepare_commit(&self) -> anyhow::Result<Option<String>> {
        if !self.require_repository()? {
            return Ok(None);
        }

        self.print_status_report()?;

        if self.inspector().status_summary().is_empty() {
            self.warning("No changes to commit")?;
            return Ok(None);
        }

        self.blank()?;
        let message = self.ask("Enter commit message:")?;
        if message.is_empty() {
            self.error("Commit message cannot be empty!")?;
            return Ok(None);
        }

        Ok(Some(message))
    }

    fn stage_and_commit(&self, message: &str) -> anyhow::Result<bool> {
        self.info("Adding files...")?;
        if !self.run(&GitCommand::AddAll) {
            return Ok(false);
        }

        self.info("Creating commit...")?;
        Ok(self.run(&GitCommand::commit(message)))
    }
}
