//! 路径配置：由 CLI / 环境变量构造一次，显式传给各组件

use std::path::{Path, PathBuf};

pub const TERRAFORM_DIR: &str = "terraform";
pub const INVENTORY_FILE: &str = "ansible/inventory/generated.ini";
pub const REPORT_FILE: &str = "reports/report.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub root: PathBuf,
    pub terraform_dir: PathBuf,
    pub inventory: PathBuf,
    pub report: PathBuf,
}

impl Paths {
    /// Standard project layout under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Paths {
            terraform_dir: root.join(TERRAFORM_DIR),
            inventory: root.join(INVENTORY_FILE),
            report: root.join(REPORT_FILE),
            root,
        }
    }

    pub fn with_inventory(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.inventory = self.resolve(p);
        }
        self
    }

    pub fn with_report(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.report = self.resolve(p);
        }
        self
    }

    pub fn with_terraform_dir(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.terraform_dir = self.resolve(p);
        }
        self
    }

    /// Relative overrides are taken relative to the project root.
    fn resolve(&self, p: PathBuf) -> PathBuf {
        if p.is_absolute() {
            p
        } else {
            self.root.join(p)
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
