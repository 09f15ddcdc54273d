//! Starting the presentation tool and observing its exit.
//!
//! The child inherits stdin, stdout and stderr. A background task waits for
//! it and reports the exit status once over a oneshot channel, so callers
//! never block on the process handle directly.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::sync::oneshot;

use crate::config::AppConfig;
use crate::error::LaunchError;

/// Fully assembled tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<OsString>,
    /// Working directory; relative slide paths are resolved from here.
    pub cwd: PathBuf,
}

impl ToolCommand {
    /// Configured command with `slide` appended as its last argument.
    pub fn for_slide(config: &AppConfig, slide: &Path, cwd: &Path) -> Result<Self, LaunchError> {
        let (program, rest) = config
            .command
            .split_first()
            .ok_or(LaunchError::EmptyCommand)?;

        let mut args: Vec<OsString> = rest.iter().map(OsString::from).collect();
        args.push(slide.as_os_str().to_owned());

        Ok(Self::platform_wrap(program.clone(), args, cwd.to_path_buf()))
    }

    // `pnpm` and friends are `.cmd` shims on Windows and need the shell.
    #[cfg(windows)]
    fn platform_wrap(program: String, args: Vec<OsString>, cwd: PathBuf) -> Self {
        let mut wrapped = vec![OsString::from("/C"), OsString::from(program)];
        wrapped.extend(args);
        Self {
            program: "cmd".into(),
            args: wrapped,
            cwd,
        }
    }

    #[cfg(not(windows))]
    fn platform_wrap(program: String, args: Vec<OsString>, cwd: PathBuf) -> Self {
        Self { program, args, cwd }
    }
}

/// Single-shot notification of the child's exit status.
///
/// Resolves to `None` when the child was killed by a signal or its status
/// could not be collected.
#[derive(Debug)]
pub struct ExitWatch {
    rx: oneshot::Receiver<Option<i32>>,
}

impl ExitWatch {
    pub fn new(rx: oneshot::Receiver<Option<i32>>) -> Self {
        Self { rx }
    }

    /// Wait for the exit status. Safe to call again if a previous call was
    /// cancelled before it completed.
    pub async fn wait(&mut self) -> Option<i32> {
        (&mut self.rx).await.unwrap_or(None)
    }
}

/// Something that can start the presentation tool.
pub trait ToolRunner {
    fn spawn(&self, command: &ToolCommand) -> Result<ExitWatch, LaunchError>;
}

/// Runs the tool as a real child process on the tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn spawn(&self, command: &ToolCommand) -> Result<ExitWatch, LaunchError> {
        let mut child = tokio::process::Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        tracing::debug!(pid = ?child.id(), program = %command.program, "tool started");

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let code = match child.wait().await {
                Ok(status) => status.code(),
                Err(err) => {
                    tracing::warn!("failed to collect tool exit status: {err}");
                    None
                }
            };
            let _ = tx.send(code); // nobody waiting
        });

        Ok(ExitWatch::new(rx))
    }
}
