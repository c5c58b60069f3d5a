//! 解析 inventory 文件

use std::path::PathBuf;
use crate::inventory::writer::HOST_ALIAS;
use crate::utils::types::InventoryRecord;
use crate::utils::{ProvcheckError, Result};

const HOST_KEY: &str = "ansible_host=";
const USER_KEY: &str = "ansible_user=";

pub struct InventoryReader {
    path: PathBuf,
}

impl InventoryReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryReader { path: path.into() }
    }

    pub fn read(&self) -> Result<InventoryRecord> {
        if !self.path.exists() {
            return Err(ProvcheckError::MissingInventory(self.path.clone()));
        }
        let text = std::fs::read_to_string(&self.path)?;
        parse_str(&text)
    }
}

/// Scans the whole text; later matches replace earlier ones.
pub fn parse_str(text: &str) -> Result<InventoryRecord> {
    let mut host: Option<(String, String)> = None;
    let mut user: Option<String> = None;

    for line in text.lines().map(str::trim) {
        if line.contains(HOST_KEY) && !line.starts_with('[') {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if let Some(ip) = tokens.iter().find_map(|t| t.strip_prefix(HOST_KEY)) {
                let alias = match tokens.first() {
                    Some(first) if !first.starts_with(HOST_KEY) => first.to_string(),
                    _ => HOST_ALIAS.to_string(),
                };
                host = Some((alias, ip.to_string()));
            }
        }
        if let Some(rest) = line.strip_prefix(USER_KEY) {
            user = Some(rest.to_string());
        }
    }

    let host = host.filter(|(_, ip)| !ip.is_empty());
    let user = user.filter(|u| !u.is_empty());

    match (host, user) {
        (Some((host_alias, ip)), Some(user)) => Ok(InventoryRecord { host_alias, ip, user }),
        (host, user) => {
            let mut missing = Vec::new();
            if host.is_none() { missing.push("ip"); }
            if user.is_none() { missing.push("user"); }
            Err(ProvcheckError::Parse(format!(
                "could not parse {} from inventory", missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::outputs::InfrastructureOutputs;
    use crate::inventory::writer::InventoryWriter;

    #[test]
    fn round_trip_through_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.ini");
        let pairs = [("10.0.0.5", "deploy"), ("ec2-1-2-3-4.compute.amazonaws.com", "ubuntu"), ("::1", "root")];

        for (ip, user) in pairs {
            let json = serde_json::json!({
                "instance_public_ip": {"value": ip},
                "ssh_user": {"value": user},
            });
            let outputs = InfrastructureOutputs::from_json(json.to_string().as_bytes()).unwrap();
            let written = InventoryWriter::new(&path).generate(&outputs).unwrap();
            let read = InventoryReader::new(&path).read().unwrap();

            assert_eq!(read, written);
            assert_eq!((read.ip.as_str(), read.user.as_str()), (ip, user));
        }
    }

    #[test]
    fn tolerates_whitespace_and_extra_tokens() {
        let text = "  [web]\n   db-2   ansible_port=2222 ansible_host=192.168.1.9  other=x \n\n[all:vars]\n   ansible_user=admin  \n";
        let r = parse_str(text).unwrap();
        assert_eq!(r.ip, "192.168.1.9");
        assert_eq!(r.user, "admin");
        assert_eq!(r.host_alias, "db-2");
    }

    #[test]
    fn ignores_host_key_in_section_headers() {
        let err = parse_str("[ansible_host=1.2.3.4]\nansible_user=u\n").unwrap_err();
        assert!(matches!(err, ProvcheckError::Parse(ref m) if m.contains("ip") && !m.contains("user")));
    }

    #[test]
    fn missing_ip_is_parse_error() {
        match parse_str("[web]\nweb-1\n") {
            Err(ProvcheckError::Parse(msg)) => {
                assert!(msg.contains("ip"));
                assert!(msg.contains("user"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InventoryReader::new(dir.path().join("nope.ini")).read().unwrap_err();
        assert!(matches!(err, ProvcheckError::MissingInventory(_)));
        assert!(err.to_string().contains("provcheck inventory"));
    }
}
