//! Everything the launcher reads from its environment, gathered in one value.

use std::path::PathBuf;

use anyhow::Context;

use crate::config::AppConfig;
use crate::core::root;

/// Inputs for one launcher run.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// Presentation name from the command line.
    pub name: Option<String>,
    /// Directory the slide paths are relative to.
    pub root: PathBuf,
    pub config: AppConfig,
}

impl LaunchContext {
    pub fn new(name: Option<String>, root: PathBuf, config: AppConfig) -> Self {
        Self { name, root, config }
    }

    /// Build the context from the process environment. Only the root lookup
    /// touches ambient state here; the name and config come from the caller.
    pub fn from_env(
        name: Option<String>,
        root_override: Option<PathBuf>,
        config: AppConfig,
    ) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("cannot read the working directory")?;
        let exe = std::env::current_exe().ok();
        let root = root::discover(root_override, exe.as_deref(), &cwd, &config.presentations_dir);
        tracing::debug!(root = %root.display(), "resolved root directory");
        Ok(Self::new(name, root, config))
    }

    /// The name, treating an empty argument as no argument.
    pub fn presentation_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_counts_as_missing() {
        let ctx = LaunchContext::new(Some(String::new()), PathBuf::from("."), AppConfig::default());
        assert_eq!(ctx.presentation_name(), None);

        let ctx = LaunchContext::new(Some("demo".into()), PathBuf::from("."), AppConfig::default());
        assert_eq!(ctx.presentation_name(), Some("demo"));
    }

    #[test]
    fn explicit_root_is_kept() {
        let ctx = LaunchContext::from_env(None, Some(PathBuf::from("/decks")), AppConfig::default())
            .unwrap();
        assert_eq!(ctx.root, PathBuf::from("/decks"));
        assert!(ctx.name.is_none());
    }
}
