//! Test fixtures for building directory hierarchies.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree rooted at a canonical base directory.
pub struct Hierarchy {
    _temp: TempDir,
    root: PathBuf,
}

impl Hierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("org");
        fs::create_dir(&root).expect("Failed to create base directory");
        let root = root.canonicalize().expect("Failed to canonicalize base");
        Self { _temp: temp, root }
    }

    /// The base directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create (if needed) and return a directory below the base.
    ///
    /// An empty `rel` is the base itself.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let dir = if rel.is_empty() {
            self.root.clone()
        } else {
            self.root.join(rel)
        };
        fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Write `config.yaml` in `rel`.
    pub fn config(&self, rel: &str, yaml: &str) -> PathBuf {
        self.file(rel, "config.yaml", yaml)
    }

    /// Write an arbitrary file in `rel`.
    pub fn file(&self, rel: &str, name: &str, content: &str) -> PathBuf {
        let path = self.dir(rel).join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// A sibling directory next to the base, outside the hierarchy.
    pub fn outside(&self) -> PathBuf {
        let dir = self
            .root
            .parent()
            .expect("base has a parent")
            .join("elsewhere");
        fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }
}

/// The environment/region layout with three contributing levels:
/// base, `env/prod` and `env/prod/region/eu`.
pub fn environment_hierarchy() -> Hierarchy {
    let h = Hierarchy::new();
    h.config(
        "",
        r#"
name: base_config
settings:
  timeout: 30
  retries: 3
"#,
    );
    h.config(
        "env/prod",
        r#"
name: production_config
settings:
  timeout: 60
  ssl: true
database:
  host: prod.db.example.com
"#,
    );
    h.config(
        "env/prod/region/eu",
        r#"
name: eu_production_config
settings:
  timeout: 90
database:
  host: eu.prod.db.example.com
  region: eu-west-1
"#,
    );
    h.config("env/staging", "name: staging_config\n");
    h
}
