//! Test doubles for driving a session without spawning git.

use crate::areas::executor::{Executor, ProcessRunner};
use crate::areas::session::Session;
use crate::artifacts::command::outcome::RawOutput;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Default)]
struct Script {
    responses: HashMap<String, RawOutput>,
    calls: Vec<(String, PathBuf)>,
    spawn_fails: bool,
}

/// Answers git invocations from a table keyed by the joined argument list.
///
/// Lookup tries the full argument list first, then just the subcommand.
/// Unknown invocations succeed with no output.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    script: Rc<RefCell<Script>>,
}

impl ScriptedRunner {
    pub fn respond(&self, key: &str, code: i32, stdout: &str) {
        self.script.borrow_mut().responses.insert(
            key.to_string(),
            RawOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
    }

    pub fn in_repository(&self) -> &Self {
        self.respond("rev-parse --is-inside-work-tree", 0, "true\n");
        self.respond("branch --show-current", 0, "main\n");
        self
    }

    pub fn fail_to_spawn(&self) {
        self.script.borrow_mut().spawn_fails = true;
    }

    pub fn calls(&self) -> Vec<String> {
        self.script
            .borrow()
            .calls
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn cwds(&self) -> Vec<PathBuf> {
        self.script
            .borrow()
            .calls
            .iter()
            .map(|(_, cwd)| cwd.clone())
            .collect()
    }

    pub fn was_called(&self, subcommand: &str) -> bool {
        self.calls()
            .iter()
            .any(|key| key.split(' ').next() == Some(subcommand))
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(
        &self,
        _program: &OsStr,
        args: &[OsString],
        cwd: &Path,
        _capture_output: bool,
    ) -> io::Result<RawOutput> {
        let mut script = self.script.borrow_mut();
        if script.spawn_fails {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"));
        }

        let key = args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ");
        script.calls.push((key.clone(), cwd.to_path_buf()));

        let subcommand = key.split(' ').next().unwrap_or_default();
        let response = script
            .responses
            .get(&key)
            .or_else(|| script.responses.get(subcommand))
            .cloned()
            .unwrap_or(RawOutput {
                code: Some(0),
                ..RawOutput::default()
            });

        Ok(response)
    }
}

/// In-memory console that stays readable after being boxed into a session.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A session over `cwd` whose git calls go to `runner` and whose stdin is `input`.
pub fn scripted_session(
    runner: &ScriptedRunner,
    cwd: &Path,
    input: &str,
) -> (Session, SharedBuffer) {
    colored::control::set_override(false);

    let console = SharedBuffer::default();
    let session = Session::new(
        cwd,
        Executor::new("git", Box::new(runner.clone())),
        Box::new(console.clone()),
        Box::new(Cursor::new(input.as_bytes().to_vec())),
    )
    .expect("test working directory exists")
    .with_home(None);

    (session, console)
}
