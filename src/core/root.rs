//! Root directory discovery.
//!
//! Slide paths are resolved against the project root, not the caller's
//! working directory. The root is taken from an explicit override, else
//! found by walking up from the executable, else the working directory.

use std::path::{Path, PathBuf};

/// Pick the root directory.
///
/// `explicit` wins when given. Otherwise the nearest ancestor of `exe`'s
/// directory that contains `presentations_dir` is used, so a binary built
/// under `target/` inside the project finds the project. `cwd` is the last
/// resort.
pub fn discover(
    explicit: Option<PathBuf>,
    exe: Option<&Path>,
    cwd: &Path,
    presentations_dir: &str,
) -> PathBuf {
    if let Some(root) = explicit {
        return root;
    }
    if let Some(found) = exe
        .and_then(Path::parent)
        .and_then(|dir| find_ancestor_with(dir, presentations_dir))
    {
        return found;
    }
    cwd.to_path_buf()
}

fn find_ancestor_with(start: &Path, child: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(child).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let tmp = TempDir::new().unwrap();
        let root = discover(
            Some(PathBuf::from("/somewhere")),
            Some(&tmp.path().join("bin/app")),
            tmp.path(),
            "presentations",
        );
        assert_eq!(root, PathBuf::from("/somewhere"));
    }

    #[test]
    fn walks_up_from_the_executable() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        fs::create_dir_all(project.join("presentations")).unwrap();
        fs::create_dir_all(project.join("target/debug")).unwrap();

        let exe = project.join("target/debug/slides-dev");
        let root = discover(None, Some(&exe), Path::new("/elsewhere"), "presentations");
        assert_eq!(root, project);
    }

    #[test]
    fn falls_back_to_cwd() {
        let tmp = TempDir::new().unwrap();
        let exe = tmp.path().join("bin/slides-dev");
        let root = discover(None, Some(&exe), Path::new("/work"), "presentations-that-do-not-exist");
        assert_eq!(root, PathBuf::from("/work"));

        let root = discover(None, None, Path::new("/work"), "presentations");
        assert_eq!(root, PathBuf::from("/work"));
    }
}
