//! 顶层报告结构体

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::utils::types::Target;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: String,
    pub target: Target,
    pub checks: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub output: String,
}

impl Report {
    pub fn new(timestamp: String, target: Target, results: Vec<CheckResult>) -> Self {
        Report {
            timestamp,
            target,
            checks: results.into_iter().map(|r| (r.name, r.output)).collect(),
        }
    }
}
