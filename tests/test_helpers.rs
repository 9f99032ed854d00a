#![allow(dead_code)]

use anyhow::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project tree rooted at `<tmp>/frontend`.
pub struct TestTree {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestTree {
    /// Creates the tree with the given `(relative path, content)` files.
    pub fn with_files(files: &[(&str, &str)]) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("frontend");
        fs::create_dir_all(&root)?;

        for (relative, content) in files {
            write_file(&root.join(relative), content.as_bytes())?;
        }

        Ok(TestTree {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// Absolute path of a file inside the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// Writes `bytes` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    Ok(())
}

/// The mixed project used by most tests: sources, excluded build output,
/// a lockfile and a Finder metadata file.
pub fn sample_project() -> Result<TestTree> {
    TestTree::with_files(&[
        ("src/a.py", "print('a')\n"),
        ("src/b.py", "print('b')\n"),
        ("src/components/Header.tsx", "export const Header = () => null;\n"),
        ("src/dist/bundle.js", "bundled\n"),
        ("node_modules/x.js", "module.exports = {};\n"),
        ("node_modules/pkg/index.js", "nested\n"),
        (".git/HEAD", "ref: refs/heads/main\n"),
        (".next/cache/page.js", "cache\n"),
        ("__pycache__/a.cpython-312.pyc", "pyc"),
        ("build/out.txt", "out\n"),
        (".mw/state", "state\n"),
        ("package-lock.json", "{}\n"),
        ("src/.DS_Store", "junk"),
        (".env", "API_URL=http://localhost\n"),
        ("README.md", "# Frontend\n"),
    ])
}
