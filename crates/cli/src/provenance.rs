//! `<artifact>.provenance.json` sidecars: which command, inputs and parameters
//! produced an output file.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Provenance {
    pub command: &'static str,
    pub version: &'static str,
    pub code_rev: String,
    pub tag: Option<String>,
    pub inputs: Vec<String>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(command: &'static str, tag: Option<String>) -> Self {
        Self {
            command,
            version: dchull::VERSION,
            code_rev: code_rev(),
            tag,
            inputs: Vec::new(),
            params: Value::Null,
            outputs: Vec::new(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.display().to_string());
        self
    }

    pub fn params<T: Serialize>(mut self, params: &T) -> Result<Self> {
        self.params = serde_json::to_value(params).context("serializing sidecar params")?;
        Ok(self)
    }

    /// Record `artifact` as the output and write the sidecar next to it.
    pub fn write_for(mut self, artifact: &Path) -> Result<PathBuf> {
        self.outputs.push(artifact.display().to_string());
        let path = sidecar_path(artifact);
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `out/hull.json` -> `out/hull.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Short git revision of the working directory, or `"unknown"` outside a checkout.
pub fn code_rev() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("runs/a/hull.json")),
            Path::new("runs/a/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("points")),
            Path::new("points.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_command_inputs_and_outputs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.csv");
        let artifact = dir.path().join("hull.json");
        std::fs::write(&artifact, "{}").unwrap();
        let path = Provenance::new("hull", Some("run-7".into()))
            .input(&input)
            .params(&json!({"n_hull": 3}))
            .unwrap()
            .write_for(&artifact)
            .unwrap();
        assert_eq!(path, dir.path().join("hull.provenance.json"));

        let doc: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["command"], "hull");
        assert_eq!(doc["tag"], "run-7");
        assert_eq!(doc["version"], dchull::VERSION);
        assert_eq!(doc["inputs"][0], input.display().to_string());
        assert_eq!(doc["outputs"][0], artifact.display().to_string());
        assert_eq!(doc["params"]["n_hull"], 3);
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
