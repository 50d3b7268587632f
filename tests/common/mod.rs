//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use lcd::cache::CacheReader;
use tempfile::TempDir;

/// Builder for a temp directory tree plus the cache file describing it
///
/// Paths are written Unix-style (`/a/b`) and re-rooted under the temp
/// directory with the host separator. Entries added with [`stale`] appear in
/// the cache but are never created on disk.
///
/// [`stale`]: CacheBuilder::stale
pub struct CacheBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl CacheBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute host path for a Unix-style test path
    pub fn path(&self, path: &str) -> String {
        let relative = path.trim_start_matches('/').replace('/', &MAIN_SEPARATOR.to_string());
        let mut full = self.root().join(relative).to_string_lossy().into_owned();
        if path.ends_with('/') && !full.ends_with(MAIN_SEPARATOR) {
            full.push(MAIN_SEPARATOR);
        }
        full
    }

    /// Add an existing directory to the cache
    pub fn dir(mut self, path: &str) -> Self {
        let full = self.path(path);
        fs::create_dir_all(&full).expect("Failed to create directory");
        self.lines.push(full);
        self
    }

    /// Add a cache entry that does not exist on disk
    pub fn stale(mut self, path: &str) -> Self {
        self.lines.push(self.path(path));
        self
    }

    /// Add a cache entry that exists as a regular file
    pub fn file(mut self, path: &str) -> Self {
        let full = self.path(path);
        if let Some(parent) = Path::new(&full).parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&full, "").expect("Failed to create file");
        self.lines.push(full);
        self
    }

    /// Add a blank line to the cache
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Cache file content
    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    /// In-memory reader over the cache content
    pub fn reader(&self) -> CacheReader<Cursor<Vec<u8>>> {
        CacheReader::new(Cursor::new(self.content().into_bytes()))
    }

    /// Write the cache to `<root>/.lcd/cache` and return the temp dir as HOME
    pub fn build_home(self) -> TempDir {
        let lcd_dir = self.temp_dir.path().join(".lcd");
        fs::create_dir_all(&lcd_dir).expect("Failed to create .lcd dir");
        fs::write(lcd_dir.join("cache"), self.content()).expect("Failed to write cache");
        self.temp_dir
    }

    /// Write the cache to an arbitrary file under the root
    pub fn write_cache(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, self.content()).expect("Failed to write cache");
        path
    }
}

impl Default for CacheBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Tree mirroring a Go workspace, with two entries deleted from disk
pub fn go_workspace() -> CacheBuilder {
    CacheBuilder::new()
        .blank()
        .dir("/home/user/go/src/github.com/lukpank/")
        .dir("/home/user/go/src/github.com/lukpank/go-glpk")
        .dir("/home/user/go/src/github.com/lukpank/go-glpk/examples")
        .dir("/home/user/go/src/github.com/lukpank/go-glpk/glpk")
        .stale("/NOT_EXISTS/glpk")
        .dir("/home/user/go/src/github.com/lukpank/jsonlexer")
        .dir("/home/user/go/src/github.com/lukpank/jsondoc")
        .dir("/home/user/go/src/github.com/lukpank/jsondoc/cmd")
        .dir("/home/user/go/src/github.com/lukpank/jsondoc/cmd/jsondoc")
        .dir("/home/user/go/src/github.com/lukpank/jsondoc/example")
        .dir("/home/user/go/src/github.com/lukpank/jsondoc/example/another")
        .stale("/NOT_EXISTS/jsontest")
        .dir("/home/user/go/src/github.com/lukpank/lcd")
        .dir("/home/user/go/src/github.com/lukpank/lcd/cmd")
        .dir("/home/user/go/src/github.com/lukpank/lcd/cmd/lcd")
}
