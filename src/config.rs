//! User configuration: tool command, layout names and persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/slides-dev/config.toml` (default `~/.config/slides-dev/config.toml`).

use std::path::{Path, PathBuf};

const DEFAULT_COMMAND: &[&str] = &["pnpm", "slidev"];
const DEFAULT_PRESENTATIONS_DIR: &str = "presentations";
const DEFAULT_SLIDE_FILE: &str = "slides.md";

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Program and leading arguments; the slide path is appended last.
    pub command: Vec<String>,
    /// Directory under the root holding one subdirectory per presentation.
    pub presentations_dir: String,
    /// File each presentation must contain.
    pub slide_file: String,
    /// Exit with the tool's status instead of 0.
    pub forward_exit_code: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect(),
            presentations_dir: DEFAULT_PRESENTATIONS_DIR.into(),
            slide_file: DEFAULT_SLIDE_FILE.into(),
            forward_exit_code: false,
        }
    }
}

impl AppConfig {
    /// Short label for the tool, used in status lines.
    pub fn tool_label(&self) -> &str {
        match self.command.as_slice() {
            [program, sub, ..] if program == "pnpm" || program == "npx" => sub_label(sub),
            [program, ..] => sub_label(program),
            [] => "tool",
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => return Self::parse_config(&contents),
                Err(err) => {
                    tracing::warn!("ignoring unreadable config {}: {err}", path.display());
                }
            }
        }
        Self::default()
    }

    /// Write the default config to `path` unless a file is already there.
    /// Returns `true` when a file was written.
    pub fn init_at(path: &Path) -> anyhow::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::default().serialise())?;
        Ok(true)
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "command" => {
                    let parts: Vec<String> =
                        value.split_whitespace().map(str::to_string).collect();
                    if !parts.is_empty() {
                        config.command = parts;
                    }
                }
                "presentations_dir" if !value.is_empty() => {
                    config.presentations_dir = value.to_string();
                }
                "slide_file" if !value.is_empty() => {
                    config.slide_file = value.to_string();
                }
                "forward_exit_code" => config.forward_exit_code = value == "true",
                _ => {}
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let lines = [
            "# slides-dev configuration".to_string(),
            String::new(),
            "# Presentation tool; the slide path is appended as the last argument.".to_string(),
            format!("command = {}", self.command.join(" ")),
            String::new(),
            "# Layout under the root directory".to_string(),
            format!("presentations_dir = {}", self.presentations_dir),
            format!("slide_file = {}", self.slide_file),
            String::new(),
            "# Exit with the tool's own status code".to_string(),
            format!("forward_exit_code = {}", self.forward_exit_code),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// `slidev` → `Slidev`, for the "Starting ..." line.
fn sub_label(name: &str) -> &str {
    match name {
        "slidev" => "Slidev",
        other => other,
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/slides-dev/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}
