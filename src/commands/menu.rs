use crate::areas::inspector::branch_label;
use crate::areas::session::Session;
use crate::artifacts::console::{labeled, mark};
use crate::artifacts::menu::{MENU_ENTRIES, MenuAction};
use colored::Colorize;
use log::debug;
use std::io::Write;

const TITLE: &str = "MyGit - Git Wrapper";

impl Session {
    /// The interactive loop. Ends on `0` or at end of input.
    pub fn run_menu(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_menu()?;

            self.blank()?;
            let Some(choice) = self.read_input("Your choice: ")? else {
                debug!("end of input, leaving the menu");
                self.success("Goodbye!")?;
                break;
            };

            match MenuAction::parse(&choice) {
                Some(MenuAction::Exit) => {
                    self.success("Goodbye!")?;
                    break;
                }
                Some(action) => {
                    self.blank()?;
                    self.dispatch(action)?;
                    self.pause()?;
                }
                None => {
                    self.error("Invalid choice! Try again.")?;
                    self.pause()?;
                }
            }
        }

        self.writer().flush()?;
        Ok(())
    }

    pub fn dispatch(&mut self, action: MenuAction) -> anyhow::Result<()> {
        debug!("dispatching {:?}", action);

        match action {
            MenuAction::FullSync => self.full_sync(),
            MenuAction::JustCommit => self.just_commit(),
            MenuAction::StartNewProject => self.start_new_project(),
            MenuAction::CloneRepository => self.clone_repository(),
            MenuAction::PullChanges => self.pull_changes(),
            MenuAction::ResetChanges => self.reset_changes(),
            MenuAction::ShowStatus => self.show_status(),
            MenuAction::Navigate => self.navigate(),
            MenuAction::Exit => Ok(()),
        }
    }

    fn show_menu(&self) -> anyhow::Result<()> {
        self.header(TITLE)?;

        self.line(labeled("Current directory", self.cwd().display()))?;

        let inspector = self.inspector();
        if inspector.is_repository() {
            let branch = inspector.current_branch();
            self.line(labeled(
                "Git repository",
                format!("{} (branch: {})", mark(true), branch_label(&branch)),
            ))?;
        } else {
            self.line(labeled("Git repository", mark(false)))?;
        }

        self.blank()?;
        self.line("Choose action:".bold())?;
        for (key, label) in MENU_ENTRIES {
            self.line(format!("  {} {}", format!("{}.", key).cyan(), label))?;
        }

        Ok(())
    }
}
