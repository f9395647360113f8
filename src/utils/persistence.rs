use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{core::utils::ensure_dir, errors::WizardError};

const TMP_SUFFIX: &str = "tmp";

/// Sibling path used to stage a write before it replaces `path`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to `path` by staging to a temporary file and renaming it into place.
///
/// A failed write leaves any previous file at `path` untouched and removes
/// the staging file.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), WizardError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let staged = stage_and_replace(&tmp, path, data);
    if let Err(err) = staged {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            tracing::debug!(path = %tmp.display(), "Could not remove staging file: {}", cleanup);
        }
        return Err(err.into());
    }
    Ok(())
}

fn stage_and_replace(tmp: &Path, path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    drop(file);
    fs::rename(tmp, path)
}
