use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvcheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing infrastructure output: {0}")]
    MissingAttribute(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing inventory: {} (run `provcheck inventory` first)", .0.display())]
    MissingInventory(PathBuf),

    #[error("Connection to {target} failed: {message}")]
    Connection { target: String, message: String },

    #[error("Command on {target} timed out after {secs}s")]
    Timeout { target: String, secs: u64 },

    #[error("Provisioner error: {0}")]
    Provisioner(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Interrupted")]
    Interrupted,
}

impl ProvcheckError {
    /// Errors that mean the target could not be reached or the remote side failed.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, ProvcheckError::Connection { .. } | ProvcheckError::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProvcheckError>;
