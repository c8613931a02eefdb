#![allow(dead_code)]

use std::fs;
use std::path::Path;

use compsrt::Config;
use tempfile::TempDir;

/// A scratch component directory with the given top-level files
pub fn component_dir(files: &[&str]) -> (TempDir, Config) {
    let tmp = TempDir::new().unwrap();
    for file in files {
        touch(tmp.path(), file);
    }
    let config = Config::new(false, tmp.path());
    (tmp, config)
}

pub fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), format!("// {name}\n")).unwrap();
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}
