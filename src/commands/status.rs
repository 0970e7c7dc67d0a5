use crate::areas::inspector::branch_label;
use crate::areas::session::Session;
use colored::Colorize;

impl Session {
    pub fn show_status(&mut self) -> anyhow::Result<()> {
        if !self.require_repository()? {
            return Ok(());
        }

        self.print_status_report()
    }

    /// Branch and pending changes, for callers that already checked the repository.
    pub(crate) fn print_status_report(&self) -> anyhow::Result<()> {
        let inspector = self.inspector();
        let branch = inspector.current_branch();
        let status = inspector.status_summary();

        self.info(&format!("Current branch: {}", branch_label(&branch).bold()))?;

        if status.is_empty() {
            self.success("No changes (working tree clean)")?;
        } else {
            self.blank()?;
            self.line("Changes:".yellow())?;
            self.line(&status)?;
        }

        Ok(())
    }
}
