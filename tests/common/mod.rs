#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the project-index binary.
#[macro_export]
macro_rules! project_index {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("project-index"))
    };
}

/// Minimal TypeScript project used by most scenarios.
pub const TS_PROJECT: &[(&str, &str)] = &[
    ("src/index.ts", "export {};\n"),
    ("node_modules/left-pad/index.js", "module.exports = 1;\n"),
    (".git/HEAD", "ref: refs/heads/main\n"),
    ("README.md", "# demo\n"),
    ("package.json", "{}\n"),
];

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture populated with `files`.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fixture = Self::new();
        for (path, content) in files {
            fixture.create_file(path, content);
        }
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.project-index.toml` in the root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".project-index.toml", content);
    }

    /// Writes the root `.gitignore`.
    pub fn create_gitignore(&self, content: &str) {
        self.create_file(".gitignore", content);
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

/// Runs the binary on `root` with extra args and parses its JSON output.
pub fn scan_json(root: &Path, args: &[&str]) -> serde_json::Value {
    let output = project_index!()
        .arg(root)
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success(), "binary failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// Lines of the `tree` field with the root line removed.
pub fn tree_entries(json: &serde_json::Value) -> Vec<String> {
    json["tree"]
        .as_str()
        .expect("tree is a string")
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}
