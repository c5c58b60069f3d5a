use serde::{Deserialize, Serialize};

/// Connection metadata for the single managed host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub host_alias: String,
    pub ip: String,
    pub user: String,
}

impl InventoryRecord {
    pub fn target(&self) -> Target {
        Target {
            user: self.user.clone(),
            ip: self.ip.clone(),
        }
    }
}

/// Where remote checks run; serialized as the report's `target` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub user: String,
    pub ip: String,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.user, self.ip)
    }
}
