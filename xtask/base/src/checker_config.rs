use xtask_util::read_config;

use anyhow::Result;
use serde::Deserialize;

use std::path::{Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////

pub const CHECKER_CONFIG_FILE_NAME: &str = ".check.toml";

#[derive(Deserialize, Debug)]
pub struct CheckerConfig {
    pub lint: LintConfig,
    pub test: TestConfig,
    pub sources: SourcesConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub bench: BenchConfig,
}

#[derive(Deserialize, Debug)]
pub struct LintConfig {
    #[serde(default)]
    pub fmt: bool,

    #[serde(default)]
    pub clippy: bool,

    #[serde(default)]
    pub allow_unsafe: bool,

    #[serde(default)]
    pub allow_exit: bool,
}

#[derive(Deserialize, Default, Debug)]
pub struct BuildConfig {
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub release: bool,
}

#[derive(Deserialize, Debug)]
pub struct TestConfig {
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub release: bool,
}

/// Benches are only compiled, never run, by the checker.
#[derive(Deserialize, Default, Debug)]
pub struct BenchConfig {
    #[serde(default)]
    pub compile: bool,
}

#[derive(Deserialize, Debug)]
pub struct SourcesConfig {
    /// Files scanned for forbidden identifiers, relative to the task.
    pub files: Vec<PathBuf>,
}

pub fn read_checker_config(task_path: impl AsRef<Path>) -> Result<CheckerConfig> {
    let config_path = task_path.as_ref().join(CHECKER_CONFIG_FILE_NAME);
    read_config(config_path)
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn reads_full_config() {
        let task = tempfile::tempdir().unwrap();
        fs::write(
            task.path().join(CHECKER_CONFIG_FILE_NAME),
            r#"
                [lint]
                fmt = true
                clippy = true

                [build]
                release = true

                [test]
                debug = true

                [bench]
                compile = true

                [sources]
                files = ["src/lib.rs", "src/node.rs"]
            "#,
        )
        .unwrap();

        let config = read_checker_config(task.path()).unwrap();

        assert!(config.lint.fmt && config.lint.clippy);
        assert!(!config.lint.allow_unsafe && !config.lint.allow_exit);
        assert!(!config.build.debug && config.build.release);
        assert!(config.test.debug && !config.test.release);
        assert!(config.bench.compile);
        assert_eq!(
            config.sources.files,
            vec![PathBuf::from("src/lib.rs"), PathBuf::from("src/node.rs")]
        );
    }

    #[test]
    fn optional_sections_default_to_off() {
        let task = tempfile::tempdir().unwrap();
        fs::write(
            task.path().join(CHECKER_CONFIG_FILE_NAME),
            "[lint]\n[test]\n[sources]\nfiles = []\n",
        )
        .unwrap();

        let config = read_checker_config(task.path()).unwrap();

        assert!(!config.build.debug && !config.build.release);
        assert!(!config.bench.compile);
        assert!(config.sources.files.is_empty());
    }

    #[test]
    fn missing_sources_is_rejected() {
        let task = tempfile::tempdir().unwrap();
        fs::write(task.path().join(CHECKER_CONFIG_FILE_NAME), "[lint]\n[test]\n").unwrap();

        assert!(read_checker_config(task.path()).is_err());
    }
}
