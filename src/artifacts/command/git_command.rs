use std::ffi::{OsStr, OsString};
use std::fmt;

/// Every git invocation the menu can issue.
///
/// Each variant renders to a discrete argument list, so user-supplied text
/// (commit messages, clone URLs) always reaches git as a single argument and
/// is never interpreted by a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    Version,
    IsInsideWorkTree,
    ShowCurrentBranch,
    StatusShort,
    AddAll,
    Commit { message: String },
    Push,
    Pull,
    ResetHard,
    CleanUntracked,
    Init,
    Clone { url: String },
}

impl GitCommand {
    pub fn commit(message: impl Into<String>) -> Self {
        GitCommand::Commit {
            message: message.into(),
        }
    }

    pub fn clone_repository(url: impl Into<String>) -> Self {
        GitCommand::Clone { url: url.into() }
    }

    pub fn args(&self) -> Vec<OsString> {
        let args: Vec<&str> = match self {
            GitCommand::Version => vec!["--version"],
            GitCommand::IsInsideWorkTree => vec!["rev-parse", "--is-inside-work-tree"],
            GitCommand::ShowCurrentBranch => vec!["branch", "--show-current"],
            GitCommand::StatusShort => vec!["status", "--short"],
            GitCommand::AddAll => vec!["add", "."],
            GitCommand::Commit { message } => vec!["commit", "-m", message.as_str()],
            GitCommand::Push => vec!["push"],
            GitCommand::Pull => vec!["pull"],
            GitCommand::ResetHard => vec!["reset", "--hard"],
            GitCommand::CleanUntracked => vec!["clean", "-fd"],
            GitCommand::Init => vec!["init"],
            // `--` keeps a URL starting with a dash from being read as an option
            GitCommand::Clone { url } => vec!["clone", "--", url.as_str()],
        };

        args.into_iter().map(OsString::from).collect()
    }

    /// Renders the invocation as typed in a terminal, quoting arguments that
    /// contain whitespace.
    pub fn command_line(&self, program: &OsStr) -> String {
        let mut words = vec![program.to_string_lossy().into_owned()];
        words.extend(self.args().iter().map(|arg| {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                format!("{:?}", arg)
            } else {
                arg.into_owned()
            }
        }));

        words.join(" ")
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line(OsStr::new("git")))
    }
}
