/// What a finished git invocation reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Streams were inherited; only the exit status is known.
    Exited(bool),
    /// Standard output was captured and trimmed.
    Captured(String),
}

impl Outcome {
    pub fn succeeded(&self) -> bool {
        match self {
            Outcome::Exited(success) => *success,
            Outcome::Captured(_) => true,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Outcome::Exited(_) => String::new(),
            Outcome::Captured(text) => text,
        }
    }
}

/// Raw result of a child process, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    /// `None` when the child was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RawOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}
