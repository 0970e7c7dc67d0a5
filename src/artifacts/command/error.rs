use std::io;
use thiserror::Error;

/// Reasons an invocation did not produce a usable result.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` returned non-zero exit status {code}")]
    NonZeroExit { command: String, code: i32 },
    #[error("`{command}` was terminated by a signal")]
    Terminated { command: String },
}
