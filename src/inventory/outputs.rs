//! 基础设施输出：terraform output -json 或保存下来的同格式 JSON

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use crate::utils::{ProvcheckError, Result};

pub const IP_KEY: &str = "instance_public_ip";
pub const USER_KEY: &str = "ssh_user";

// ── 数据结构 ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct OutputValue {
    pub value: serde_json::Value,
    #[serde(default)]
    pub sensitive: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct InfrastructureOutputs(BTreeMap<String, OutputValue>);

impl InfrastructureOutputs {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| ProvcheckError::Parse(format!("infrastructure outputs JSON: {}", e)))
    }

    /// A required string attribute, with surrounding whitespace trimmed.
    ///
    /// Absent, non-string and blank values all fail: the inventory format is
    /// whitespace-separated and could not carry them back out.
    pub fn required(&self, key: &str) -> Result<String> {
        let v = self.0.get(key)
            .ok_or_else(|| ProvcheckError::MissingAttribute(key.to_string()))?;

        tracing::debug!(key, sensitive = v.sensitive, "resolving output");
        match v.value.as_str().map(str::trim) {
            Some(s) if !s.is_empty() => Ok(s.to_string()),
            Some(_) => Err(ProvcheckError::MissingAttribute(format!("{} (empty)", key))),
            None => Err(ProvcheckError::MissingAttribute(format!("{} (not a string)", key))),
        }
    }
}

// ── 来源 ────────────────────────────────────────────────────────────────────

pub trait OutputSource {
    fn fetch(&self) -> Result<InfrastructureOutputs>;
}

/// Runs `terraform output -json` inside the terraform working directory.
pub struct TerraformCli {
    pub dir: PathBuf,
}

impl OutputSource for TerraformCli {
    fn fetch(&self) -> Result<InfrastructureOutputs> {
        if !self.dir.is_dir() {
            return Err(ProvcheckError::Provisioner(format!(
                "terraform directory not found: {}", self.dir.display()
            )));
        }
        tracing::debug!(dir = %self.dir.display(), "running terraform output -json");

        let out = Command::new("terraform")
            .args(&["output", "-json"])
            .current_dir(&self.dir)
            .output()
            .map_err(|e| ProvcheckError::Provisioner(format!(
                "could not run terraform in {}: {}", self.dir.display(), e
            )))?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            return Err(ProvcheckError::Provisioner(if stderr.is_empty() {
                format!("terraform output in {} exited with {}", self.dir.display(), out.status)
            } else {
                format!("terraform output in {}: {}", self.dir.display(), stderr)
            }));
        }

        InfrastructureOutputs::from_json(&out.stdout)
    }
}

/// Reads saved outputs from a file, or stdin when the path is `-`.
pub struct JsonFile {
    pub path: PathBuf,
}

impl OutputSource for JsonFile {
    fn fetch(&self) -> Result<InfrastructureOutputs> {
        let bytes = if self.path.as_os_str() == "-" {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        } else {
            std::fs::read(&self.path)?
        };
        InfrastructureOutputs::from_json(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(json: &str) -> InfrastructureOutputs {
        InfrastructureOutputs::from_json(json.as_bytes()).unwrap()
    }

    #[test]
    fn reads_terraform_shape() {
        let o = outputs(r#"{
            "instance_public_ip": {"sensitive": false, "type": "string", "value": "10.0.0.5"},
            "ssh_user": {"value": "deploy"}
        }"#);
        assert_eq!(o.required(IP_KEY).unwrap(), "10.0.0.5");
        assert_eq!(o.required(USER_KEY).unwrap(), "deploy");
    }

    #[test]
    fn rejects_missing_empty_and_non_string() {
        let o = outputs(r#"{"instance_public_ip": {"value": ""}, "ssh_user": {"value": 3}}"#);
        assert!(matches!(o.required(IP_KEY), Err(ProvcheckError::MissingAttribute(_))));
        assert!(matches!(o.required(USER_KEY), Err(ProvcheckError::MissingAttribute(_))));
        match o.required("nope") {
            Err(ProvcheckError::MissingAttribute(k)) => assert_eq!(k, "nope"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn trims_values_and_rejects_blank() {
        let o = outputs(r#"{"instance_public_ip": {"value": " 10.0.0.5\n"}, "ssh_user": {"value": "   "}}"#);
        assert_eq!(o.required(IP_KEY).unwrap(), "10.0.0.5");
        match o.required(USER_KEY) {
            Err(ProvcheckError::MissingAttribute(k)) => assert_eq!(k, "ssh_user (empty)"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn missing_terraform_dir_is_named() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("terraform");

        match (TerraformCli { dir: missing.clone() }).fetch() {
            Err(ProvcheckError::Provisioner(msg)) => {
                assert!(msg.contains("terraform directory not found"));
                assert!(msg.contains(&missing.display().to_string()));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = InfrastructureOutputs::from_json(b"[1,2]").unwrap_err();
        assert!(matches!(err, ProvcheckError::Parse(_)));
    }

    #[test]
    fn json_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs.json");
        std::fs::write(&path, r#"{"ssh_user": {"value": "ubuntu"}}"#).unwrap();

        let o = JsonFile { path }.fetch().unwrap();
        assert_eq!(o.required(USER_KEY).unwrap(), "ubuntu");
    }
}
