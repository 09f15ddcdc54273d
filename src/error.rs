//! Errors the launcher can report to the user.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// No presentation name on the command line.
    #[error("Please provide the name of the presentation.")]
    MissingArgument,

    /// The name did not lead to an existing slide file.
    #[error("Could not find slides at \"{}\"", .path.display())]
    UnresolvedSlideFile { path: PathBuf },

    /// The configured tool command has no program in it.
    #[error("the presentation tool command is empty")]
    EmptyCommand,

    /// The tool could not be started at all.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Whether the user should also see the list of valid names.
    pub fn wants_listing(&self) -> bool {
        matches!(
            self,
            LaunchError::MissingArgument | LaunchError::UnresolvedSlideFile { .. }
        )
    }
}
