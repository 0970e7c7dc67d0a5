use crate::areas::session::Session;
use crate::areas::workspace::Subdirectory;
use crate::artifacts::console::{labeled, mark};
use crate::artifacts::navigation::{
    MAX_SUBDIRECTORIES, NavigationChoice, SUBDIRECTORY_OFFSET, expand_home, quick_links,
};
use colored::Colorize;
use std::path::PathBuf;

impl Session {
    pub fn navigate(&mut self) -> anyhow::Result<()> {
        self.header("NAVIGATE TO DIRECTORY")?;

        self.line(labeled("Current directory", self.cwd().display()))?;
        self.blank()?;

        let links = self.home().map(quick_links).unwrap_or_default();
        self.line("Quick links:".bold())?;
        for link in &links {
            self.line(format!(
                "  {} {} {}",
                format!("{}.", link.key).cyan(),
                link.label,
                mark(link.path.is_dir())
            ))?;
        }

        self.blank()?;
        self.line("Subdirectories in current directory:".bold())?;
        let subdirectories = self.print_subdirectories()?;

        self.blank()?;
        self.line("Options:".bold())?;
        self.line(format!("  {} Enter custom path", "c.".cyan()))?;
        self.line(format!("  {} Go to parent directory", "..".cyan()))?;
        self.line(format!("  {} Cancel", "0.".cyan()))?;

        self.blank()?;
        let choice = self.prompt("Your choice: ")?;

        let target = match NavigationChoice::parse(&choice) {
            NavigationChoice::Cancel => {
                self.info("Cancelled")?;
                return Ok(());
            }
            NavigationChoice::Parent => Some(
                self.cwd()
                    .parent()
                    .unwrap_or_else(|| self.cwd())
                    .to_path_buf(),
            ),
            NavigationChoice::Custom => {
                self.blank()?;
                let custom = self.ask("Enter directory path (can use ~ for home):")?;
                (!custom.is_empty()).then(|| self.cwd().join(expand_home(&custom, self.home())))
            }
            NavigationChoice::QuickLink(index) => links.get(index).map(|link| link.path.clone()),
            NavigationChoice::Subdirectory(index) => subdirectories
                .get(index)
                .map(|subdirectory| subdirectory.path.clone()),
            NavigationChoice::Invalid => None,
        };

        match target {
            Some(target) => self.change_directory(target),
            None => self.error("Invalid choice!"),
        }
    }

    /// Lists up to [`MAX_SUBDIRECTORIES`] entries and returns exactly what was shown.
    fn print_subdirectories(&self) -> anyhow::Result<Vec<Subdirectory>> {
        let mut subdirectories = match self.workspace().list_subdirectories() {
            Ok(subdirectories) => subdirectories,
            Err(e) => {
                self.error(&format!("{:#}", e))?;
                return Ok(Vec::new());
            }
        };
        subdirectories.truncate(MAX_SUBDIRECTORIES);

        if subdirectories.is_empty() {
            self.line(format!("  {}", "No subdirectories".yellow()))?;
        }

        for (offset, subdirectory) in subdirectories.iter().enumerate() {
            let git_mark = if subdirectory.is_repository {
                format!(" {}", "[git]".green())
            } else {
                String::new()
            };
            self.line(format!(
                "  {} {}/{}",
                format!("{}.", offset + SUBDIRECTORY_OFFSET).cyan(),
                subdirectory.name,
                git_mark
            ))?;
        }

        Ok(subdirectories)
    }

    fn change_directory(&mut self, target: PathBuf) -> anyhow::Result<()> {
        if !target.is_dir() {
            self.error(&format!("Directory does not exist: {}", target.display()))?;
            return Ok(());
        }

        // the session must be able to enter the directory, not just see it
        let entered = target
            .canonicalize()
            .and_then(|resolved| std::fs::read_dir(&resolved).map(|_| resolved));

        match entered {
            Ok(resolved) => {
                self.set_cwd(resolved);
                self.success(&format!("Changed to: {}", self.cwd().display()))?;
            }
            Err(e) => self.error(&format!("Failed to change directory: {}", e))?,
        }

        Ok(())
    }
}
