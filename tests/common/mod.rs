#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the src-ana binary.
#[macro_export]
macro_rules! src_ana {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("src-ana"))
    };
}

/// Temporary directory holding the tree a test walks.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file, and any missing parent directories, in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.src-ana.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".src-ana.toml", content);
    }

    /// A small Java/XML project with a build directory.
    pub fn create_project(&self) {
        self.create_file(
            "src/Main.java",
            "public class Main {\n    // entry point\n    public static void main(String[] a) {\n    }\n}\n",
        );
        self.create_file("src/MainHandler.java", "class MainHandler {}\n");
        self.create_file("src/c/util.c", "int x;\n// comment\n");
        self.create_file("res/layout.xml", "<a/>\n<!-- start\nmid -->end\n");
        self.create_file("target/Gen.java", "class Gen {}\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters for the project from [`TestFixture::create_project`].
pub const PROJECT_CONFIG: &str = r#"
[scan]
ignore = ["/target"]

[[counter]]
kind = "c-family"
extensions = [".java", ".c"]

[[counter]]
kind = "markup"
extensions = [".xml"]

[[replace]]
extensions = [".java"]
[[replace.rules]]
find = "Main"
with = "Entry"
"#;
