use crate::areas::executor::Executor;
use crate::areas::inspector::Inspector;
use crate::areas::workspace::Workspace;
use crate::artifacts::command::git_command::GitCommand;
use crate::artifacts::command::outcome::Outcome;
use crate::artifacts::console::{Header, Message, MessageKind};
use anyhow::Context;
use colored::Colorize;
use log::debug;
use std::cell::{RefCell, RefMut};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Everything one interactive run works against.
///
/// The working directory lives here rather than in the process: every git
/// child is started in `cwd`, and navigation only ever changes this field.
pub struct Session {
    cwd: PathBuf,
    home: Option<PathBuf>,
    executor: Executor,
    writer: RefCell<Box<dyn Write>>,
    reader: RefCell<Box<dyn BufRead>>,
}

impl Session {
    pub fn new(
        cwd: &Path,
        executor: Executor,
        writer: Box<dyn Write>,
        reader: Box<dyn BufRead>,
    ) -> anyhow::Result<Self> {
        let cwd = cwd
            .canonicalize()
            .with_context(|| format!("Failed to open working directory {}", cwd.display()))?;

        Ok(Session {
            cwd,
            home: dirs::home_dir(),
            executor,
            writer: RefCell::new(writer),
            reader: RefCell::new(reader),
        })
    }

    #[must_use]
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn set_cwd(&mut self, cwd: PathBuf) {
        debug!("working directory is now {}", cwd.display());
        self.cwd = cwd;
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(self.cwd.clone().into_boxed_path())
    }

    pub fn inspector(&'_ self) -> Inspector<'_> {
        Inspector::new(self)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Runs `command` in the session's working directory.
    ///
    /// Pending console output is flushed first so it lands before anything
    /// the child prints on the shared terminal.
    pub fn execute(
        &self,
        command: &GitCommand,
        capture_output: bool,
        fail_on_error: bool,
    ) -> Option<Outcome> {
        let mut writer = self.writer();
        if let Err(e) = writer.flush() {
            debug!("failed to flush console before `{}`: {}", command, e);
        }

        self.executor
            .execute(&self.cwd, command, capture_output, fail_on_error, &mut **writer)
    }

    /// Runs a step of an action: streams inherited, failures reported.
    pub fn run(&self, command: &GitCommand) -> bool {
        self.execute(command, false, true)
            .is_some_and(|outcome| outcome.succeeded())
    }

    /// Asks git a question: output captured, failures tolerated.
    pub fn query(&self, command: &GitCommand) -> String {
        self.execute(command, true, false)
            .map(Outcome::into_text)
            .unwrap_or_default()
    }

    pub fn line(&self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", text)?;
        Ok(())
    }

    pub fn blank(&self) -> anyhow::Result<()> {
        writeln!(self.writer())?;
        Ok(())
    }

    pub fn header(&self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}\n", Header::new(title))?;
        Ok(())
    }

    fn message(&self, kind: MessageKind, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", Message::new(kind, text))?;
        Ok(())
    }

    pub fn success(&self, text: &str) -> anyhow::Result<()> {
        self.message(MessageKind::Success, text)
    }

    pub fn error(&self, text: &str) -> anyhow::Result<()> {
        self.message(MessageKind::Error, text)
    }

    pub fn info(&self, text: &str) -> anyhow::Result<()> {
        self.message(MessageKind::Info, text)
    }

    pub fn warning(&self, text: &str) -> anyhow::Result<()> {
        self.message(MessageKind::Warning, text)
    }

    /// Prints `prompt` and reads one trimmed line. `None` at end of input.
    pub fn read_input(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        {
            let mut writer = self.writer();
            write!(writer, "{}", prompt.cyan())?;
            writer.flush().context("Failed to flush console")?;
        }

        let mut line = String::new();
        let read = self
            .reader
            .borrow_mut()
            .read_line(&mut line)
            .context("Failed to read from console")?;

        if read == 0 {
            // keep the next output off the prompt line
            self.blank()?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Session::read_input`], but end of input reads as an empty line.
    pub fn prompt(&self, prompt: &str) -> anyhow::Result<String> {
        Ok(self.read_input(prompt)?.unwrap_or_default())
    }

    /// A bold question on its own line followed by a `> ` prompt.
    pub fn ask(&self, question: &str) -> anyhow::Result<String> {
        self.line(question.bold())?;
        self.prompt("> ")
    }

    pub fn pause(&self) -> anyhow::Result<()> {
        self.blank()?;
        {
            let mut writer = self.writer();
            write!(writer, "{}", "Press Enter to continue...".bold())?;
            writer.flush().context("Failed to flush console")?;
        }

        let mut line = String::new();
        self.reader
            .borrow_mut()
            .read_line(&mut line)
            .context("Failed to read from console")?;

        Ok(())
    }

    /// Prints the standard refusal and returns false outside a work tree.
    pub fn require_repository(&self) -> anyhow::Result<bool> {
        if self.inspector().is_repository() {
            Ok(true)
        } else {
            self.error("This is not a Git repository!")?;
            Ok(false)
        }
    }
}
