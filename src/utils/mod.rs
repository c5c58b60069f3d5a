pub mod error;
pub mod fs;
pub mod interrupt;
pub mod logging;
pub mod types;

pub use error::{ProvcheckError, Result};
