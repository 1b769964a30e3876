use anyhow::{Context, Result};
use serde::Deserialize;

use std::{
    io::Read,
    path::{Path, PathBuf},
};

////////////////////////////////////////////////////////////////////////////////

pub const TASKS_DIR_NAME: &str = "task";

pub fn canonicalize(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    std::fs::canonicalize(path).with_context(|| format!("failed to canonicalize path {path:?}"))
}

pub fn get_cwd_repo_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to get cwd")?;
    let repo = gix::discover(cwd).context("failed to discover git repository")?;
    repo.work_dir()
        .map(|p| p.to_path_buf())
        .context("looks like we are in a bare git repo")
}

/// Lists task directories under `<repo>/task` that carry `marker_file_name`,
/// sorted by name.
pub fn find_task_paths(repo_path: &Path, marker_file_name: &str) -> Result<Vec<PathBuf>> {
    let tasks_dir = repo_path.join(TASKS_DIR_NAME);
    let entries =
        std::fs::read_dir(&tasks_dir).with_context(|| format!("failed to read {tasks_dir:?}"))?;

    let mut paths = vec![];
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read entry of {tasks_dir:?}"))?
            .path();
        if path.join(marker_file_name).is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

pub fn read_config<T>(path: impl AsRef<Path>) -> Result<T>
where
    for<'a> T: Deserialize<'a>,
{
    let path = path.as_ref();
    let mut file = std::fs::File::open(path).with_context(|| format!("failed to open {path:?}"))?;

    let mut buffer = String::new();
    file.read_to_string(&mut buffer)
        .with_context(|| format!("failed to read {path:?}"))?;

    toml::from_str(&buffer).with_context(|| format!("failed to parse config {path:?}"))
}

////////////////////////////////////////////////////////////////////////////////
