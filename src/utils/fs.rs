//! 文件写入工具：整文件原子替换

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use crate::utils::Result;

/// Replaces `path` with `contents`, creating parent directories as needed.
///
/// The data goes to a temporary file in the destination directory first and is
/// renamed over `path`, so readers see either the old file or the new one.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "file written");
    Ok(())
}
