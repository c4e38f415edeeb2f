//! Isolated on-disk environment for container builds.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary project with a `translations/` directory.
pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("failed to create temp project");
        fs::create_dir_all(project_root.path().join("translations"))
            .expect("failed to create translations dir");
        Self { project_root }
    }

    /// Create a project with the given translation files, all with the same content.
    pub fn with_translations(files: &[&str]) -> Self {
        let env = Self::new();
        for file in files {
            env.write_translation(file, "hello: Hello\n");
        }
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn translations_dir(&self) -> PathBuf {
        self.project_path("translations")
    }

    /// Write a file relative to the translations directory, creating parents.
    pub fn write_translation(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.translations_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write translation");
        path
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.project_path("wireup.toml");
        fs::write(&path, content).expect("failed to write config");
        path
    }

    /// Canonical form of a translation path, as discovery reports it.
    pub fn canonical(&self, relative: &str) -> String {
        let root = self
            .translations_dir()
            .canonicalize()
            .expect("translations dir should exist");
        path_string(&root.join(relative))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
