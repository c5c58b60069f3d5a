//! 生成 inventory 文件

use std::path::{Path, PathBuf};
use crate::inventory::outputs::{InfrastructureOutputs, IP_KEY, USER_KEY};
use crate::utils::fs::write_atomic;
use crate::utils::types::InventoryRecord;
use crate::utils::Result;

pub const HOST_ALIAS: &str = "web-1";
pub const HOST_GROUP: &str = "web";
pub const SSH_COMMON_ARGS: &str = "-o StrictHostKeyChecking=no";

pub struct InventoryWriter {
    path: PathBuf,
}

impl InventoryWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryWriter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves both required outputs, then replaces the inventory file.
    ///
    /// Nothing is written unless both attributes are present.
    pub fn generate(&self, outputs: &InfrastructureOutputs) -> Result<InventoryRecord> {
        let ip = outputs.required(IP_KEY)?;
        let user = outputs.required(USER_KEY)?;

        let record = InventoryRecord {
            host_alias: HOST_ALIAS.to_string(),
            ip,
            user,
        };

        write_atomic(&self.path, render(&record).as_bytes())?;
        tracing::info!(path = %self.path.display(), ip = %record.ip, "inventory written");
        Ok(record)
    }
}

pub fn render(record: &InventoryRecord) -> String {
    format!(
        "[{group}]\n{alias} ansible_host={ip}\n\n[all:vars]\nansible_user={user}\nansible_ssh_common_args='{args}'\n",
        group = HOST_GROUP,
        alias = record.host_alias,
        ip = record.ip,
        user = record.user,
        args = SSH_COMMON_ARGS,
    )
}
