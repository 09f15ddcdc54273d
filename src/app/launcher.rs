//! The launcher flow: resolve a presentation name, start the tool, report
//! how it exited.
//!
//! Two early exits (no name, no slide file) print an error plus the list of
//! presentations. Otherwise the tool owns the terminal until it exits.

use std::fmt;
use std::io::Write;

use crate::app::child::{ExitWatch, ToolCommand, ToolRunner};
use crate::app::context::LaunchContext;
use crate::core::presentations;
use crate::error::LaunchError;

/// How a launcher run ended.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// The tool ran and exited; `None` when killed by a signal.
    Exited(Option<i32>),
    /// Nothing was started, or the tool could not be started.
    Failed(LaunchError),
}

impl LaunchOutcome {
    /// Process exit code for this outcome. The tool's own code is only
    /// adopted when `forward` is set.
    pub fn exit_code(&self, forward: bool) -> u8 {
        match self {
            LaunchOutcome::Failed(_) => 1,
            LaunchOutcome::Exited(_) if !forward => 0,
            LaunchOutcome::Exited(Some(code)) => u8::try_from(*code).unwrap_or(1),
            LaunchOutcome::Exited(None) => 1,
        }
    }
}

/// Resolve the presentation in `ctx`, run the tool on it and wait for it to
/// exit. Status lines go to `out`, errors to `err`.
pub async fn resolve_and_run<R, O, E>(
    ctx: &LaunchContext,
    runner: &R,
    out: &mut O,
    err: &mut E,
) -> LaunchOutcome
where
    R: ToolRunner,
    O: Write,
    E: Write,
{
    let mut watch = match start(ctx, runner, out) {
        Ok(watch) => watch,
        Err(e) => {
            report_failure(ctx, &e, out, err);
            return LaunchOutcome::Failed(e);
        }
    };

    let code = wait_for_exit(&mut watch).await;
    tracing::info!(code = ?code, "presentation tool exited");

    let label = ctx.config.tool_label();
    match code {
        Some(code) => say(out, format_args!("{label} process exited with code {code}")),
        None => say(out, format_args!("{label} process terminated by signal")),
    }
    LaunchOutcome::Exited(code)
}

/// Everything up to and including the spawn.
fn start<R: ToolRunner, O: Write>(
    ctx: &LaunchContext,
    runner: &R,
    out: &mut O,
) -> Result<ExitWatch, LaunchError> {
    let name = ctx.presentation_name().ok_or(LaunchError::MissingArgument)?;
    let slide = presentations::resolve(&ctx.root, &ctx.config, name)?;
    let command = ToolCommand::for_slide(&ctx.config, &slide, &ctx.root)?;

    say(
        out,
        format_args!("Starting {} for: {}", ctx.config.tool_label(), slide.display()),
    );
    // The child writes to the same terminal from here on.
    if let Err(e) = out.flush() {
        tracing::debug!("could not flush launcher output: {e}");
    }

    tracing::debug!(?command, "spawning presentation tool");
    runner.spawn(&command)
}

fn report_failure<O: Write, E: Write>(ctx: &LaunchContext, e: &LaunchError, out: &mut O, err: &mut E) {
    tracing::debug!("launch failed: {e:?}");
    say(err, format_args!("Error: {e}"));
    if matches!(e, LaunchError::MissingArgument) {
        say(out, format_args!("Usage: {} <presentation-name>", env!("CARGO_PKG_NAME")));
    }
    if e.wants_listing() {
        presentations::list_available(out, &ctx.root, &ctx.config);
    }
}

/// Print one line. A closed or broken stream only gets a debug event.
fn say<W: Write>(w: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(w, "{line}") {
        tracing::debug!("could not write launcher output: {e}");
    }
}

/// Wait for the tool. Ctrl-C reaches the tool through the terminal's
/// process group; here it only must not end the wait early.
async fn wait_for_exit(watch: &mut ExitWatch) -> Option<i32> {
    loop {
        let signal = tokio::select! {
            code = watch.wait() => return code,
            signal = tokio::signal::ctrl_c() => signal,
        };
        if signal.is_err() {
            return watch.wait().await;
        }
        tracing::debug!("interrupt received, waiting for the tool to exit");
    }
}
