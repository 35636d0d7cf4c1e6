use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn digraph() -> Command {
    cargo_bin_cmd!("digraph")
}

/// Write a graph definition into `dir` and return its path
#[allow(dead_code)]
pub fn write_graph(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("graph.toml");
    fs::write(&path, contents).expect("write graph file");
    path
}

/// Parse JSON written to stdout
#[allow(dead_code)]
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout is valid JSON")
}
