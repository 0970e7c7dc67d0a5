use crate::areas::session::Session;
use crate::artifacts::command::git_command::GitCommand;
use derive_new::new;

/// Read-only questions about the session's working directory.
///
/// Every query tolerates git failures, so the answers degrade to `false` or
/// the empty string instead of aborting.
#[derive(new)]
pub struct Inspector<'s> {
    session: &'s Session,
}

impl Inspector<'_> {
    /// Whether git can be started at all.
    pub fn is_tool_available(&self) -> bool {
        self.session
            .execute(&GitCommand::Version, true, false)
            .is_some()
    }

    pub fn is_repository(&self) -> bool {
        self.session.query(&GitCommand::IsInsideWorkTree) == "true"
    }

    /// Empty on a detached HEAD.
    pub fn current_branch(&self) -> String {
        self.session.query(&GitCommand::ShowCurrentBranch)
    }

    /// Short-form status; empty means the working tree is clean.
    pub fn status_summary(&self) -> String {
        self.session.query(&GitCommand::StatusShort)
    }
}

/// Display form of a branch name that may be missing.
pub fn branch_label(branch: &str) -> &str {
    if branch.is_empty() {
        "(detached HEAD)"
    } else {
        branch
    }
}
