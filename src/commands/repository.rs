use crate::areas::session::Session;
use crate::artifacts::command::git_command::GitCommand;

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

impl Session {
    pub fn start_new_project(&mut self) -> anyhow::Result<()> {
        self.header("NEW PROJECT")?;

        if self.inspector().is_repository() {
            self.error("This is already a Git repository!")?;
            return Ok(());
        }

        self.info("Initializing Git repository...")?;
        if !self.run(&GitCommand::Init) {
            return Ok(());
        }

        if !self.cwd().join(".gitignore").exists() {
            self.info("Creating basic .gitignore...")?;
            if let Err(e) = self.workspace().write_default_gitignore() {
                self.error(&format!("{:#}", e))?;
                return Ok(());
            }
        }

        self.info("Adding files...")?;
        if !self.run(&GitCommand::AddAll) {
            return Ok(());
        }

        self.info("Creating initial commit...")?;
        if self.run(&GitCommand::commit(INITIAL_COMMIT_MESSAGE)) {
            self.success("Project initialized!")?;
            self.info("Don't forget to add remote: git remote add origin <URL>")?;
        }

        Ok(())
    }

    pub fn clone_repository(&mut self) -> anyhow::Result<()> {
        self.header("CLONE REPOSITORY")?;

        let url = self.ask("Enter repository URL:")?;
        if url.is_empty() {
            self.error("URL cannot be empty!")?;
            return Ok(());
        }

        self.blank()?;
        self.info(&format!("Cloning {}...", url))?;
        if self.run(&GitCommand::clone_repository(url)) {
            self.success("Repository cloned successfully!")?;
        }

        Ok(())
    }
}
