//! Git subprocess execution
//!
//! [`Caller`] runs a [`GitCommand`] against a repository path and returns its
//! captured output. Non-zero exits become [`Error::CommandFailed`].

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, instrument, trace};
use wait_timeout::ChildExt;

use super::binary::GitBinary;
use super::command::GitCommand;
use crate::config::Config;
use crate::error::{Error, Result};

/// Applied to every invocation so paths come back as raw UTF-8 rather than
/// octal-escaped bytes
const GLOBAL_CONFIG: [&str; 2] = ["-c", "core.quotePath=false"];

/// Captured output of a finished git invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Every stdout line, trailing newline removed
    pub fn lines(&self) -> Vec<String> {
        self.stdout.lines().map(str::to_string).collect()
    }

    /// Stdout lines with blank lines dropped and trailing whitespace trimmed
    pub fn non_empty_lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn output_lines(&self, strip_empty: bool) -> Vec<String> {
        if strip_empty {
            self.non_empty_lines()
        } else {
            self.lines()
        }
    }
}

/// Runs git invocations with a fixed binary, timeout, and environment
#[derive(Debug, Clone)]
pub struct Caller {
    binary: GitBinary,
    timeout: Option<Duration>,
    env: BTreeMap<String, String>,
}

impl Caller {
    pub fn new(binary: GitBinary) -> Self {
        Self {
            binary,
            timeout: None,
            env: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let binary = GitBinary::resolve(config.git_binary.as_deref())?;
        Ok(Self {
            binary,
            timeout: config.timeout(),
            env: config.env.clone(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn binary(&self) -> &GitBinary {
        &self.binary
    }

    /// Run `command` in `repo_path`, failing on a non-zero exit
    #[instrument(skip_all, fields(command = %command, cwd = %repo_path.display()))]
    pub fn execute(&self, command: &GitCommand, repo_path: &Path) -> Result<CommandOutput> {
        let (status, output) = self.run(command, repo_path)?;
        if !status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                code: status.code(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output)
    }

    /// Run `command` and report only whether it exited 0.
    ///
    /// Spawn failures and timeouts count as failure.
    pub fn succeeds(&self, command: &GitCommand, repo_path: &Path) -> bool {
        self.run(command, repo_path)
            .map(|(status, _)| status.success())
            .unwrap_or(false)
    }

    /// Run `command` and return the exit status alongside the output,
    /// whatever the exit code
    pub fn run(&self, command: &GitCommand, repo_path: &Path) -> Result<(ExitStatus, CommandOutput)> {
        debug!(cwd = %repo_path.display(), "running {command}");

        let mut child = self.spawn(command, repo_path)?;

        // Drain both pipes while waiting; git blocks once a pipe buffer fills.
        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let status = match self.timeout {
            Some(timeout) => match child.wait_timeout(timeout)? {
                Some(status) => status,
                None => {
                    kill_child_process(&mut child);
                    return Err(Error::Timeout {
                        command: command.to_string(),
                        timeout,
                    });
                }
            },
            None => child.wait()?,
        };

        let output = CommandOutput {
            stdout: join_reader(stdout),
            stderr: join_reader(stderr),
        };
        trace!(
            status = ?status.code(),
            stdout_lines = output.stdout.lines().count(),
            "finished {command}"
        );
        Ok((status, output))
    }

    fn spawn(&self, command: &GitCommand, repo_path: &Path) -> Result<Child> {
        let mut cmd = Command::new(self.binary.path());
        cmd.args(GLOBAL_CONFIG)
            .args(command.args())
            .current_dir(repo_path)
            .env("LC_ALL", "C")
            .env("GIT_TERMINAL_PROMPT", "0")
            .envs(&self.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        Ok(cmd.spawn()?)
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut stream: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stream.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

fn kill_child_process(child: &mut Child) {
    // The process may already have exited
    let _ = child.kill();
    let _ = child.wait();
}
