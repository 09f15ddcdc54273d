//! Presentation lookup: build the slide path for a name and list the
//! presentation directories that exist.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::config::AppConfig;
use crate::error::LaunchError;

/// Relative slide path for `name`, e.g. `presentations/demo/slides.md`.
///
/// `name` is normalised and always stays below the presentations directory:
/// root and prefix components are dropped, `.` is skipped and `..` only
/// removes segments that came from `name` itself.
pub fn slide_path(config: &AppConfig, name: &str) -> PathBuf {
    let mut segments: Vec<&OsStr> = Vec::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => segments.push(part),
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    let mut path = PathBuf::from(&config.presentations_dir);
    path.extend(segments);
    path.push(&config.slide_file);
    path
}

/// Resolve `name` to its relative slide path, checking that the file exists
/// under `root`.
pub fn resolve(root: &Path, config: &AppConfig, name: &str) -> Result<PathBuf, LaunchError> {
    let candidate = slide_path(config, name);
    if root.join(&candidate).exists() {
        Ok(candidate)
    } else {
        Err(LaunchError::UnresolvedSlideFile { path: candidate })
    }
}

/// Names of the immediate subdirectories of the presentations directory, in
/// the order the filesystem returns them.
///
/// Best effort: any enumeration error yields an empty list. Subdirectories
/// are not checked for a slide file.
pub fn available(root: &Path, config: &AppConfig) -> Vec<String> {
    let dir = root.join(&config.presentations_dir);
    let walker = WalkDir::new(&dir).min_depth(1).max_depth(1);

    let mut names = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!("presentation listing unavailable for {}: {err}", dir.display());
                return Vec::new();
            }
        }
    }
    names
}

/// Print the "Available presentations" block. Prints nothing for an empty
/// list.
pub fn write_listing<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
    if names.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Available presentations:")?;
    for name in names {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}

/// [`available`] followed by [`write_listing`]. Write failures are dropped
/// along with enumeration failures.
pub fn list_available<W: Write>(out: &mut W, root: &Path, config: &AppConfig) {
    let names = available(root, config);
    if let Err(err) = write_listing(out, &names) {
        tracing::debug!("could not print presentation listing: {err}");
    }
}
