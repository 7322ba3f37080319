//! Moving confirmed entries into the destination directory.
//!
//! A plain rename is tried first; when source and destination live on
//! different filesystems the entry is copied recursively and the source
//! removed, matching the semantics of a shell `mv`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// A single move that could not be completed.
///
/// The entry may be partially copied when the cross-device fallback was
/// interrupted; nothing is rolled back.
#[derive(Debug, Error)]
#[error("Failed to move {src:?} to {dst:?}")]
pub struct RelocateError {
    pub src: PathBuf,
    pub dst: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Move the entry at `src` to `dst`.
///
/// Under `dry_run` the intended move is logged and nothing is touched.
/// Errors are returned to the caller for accounting; they never panic and
/// never abort the surrounding batch.
pub async fn relocate(src: &Path, dst: &Path, dry_run: bool) -> Result<(), RelocateError> {
    info!("Move {:?} to {:?}", src, dst);

    if dry_run {
        info!("Dry run, leaving {:?} in place", src);
        return Ok(());
    }

    match tokio::fs::rename(src, dst).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy_and_remove(src.to_path_buf(), dst.to_path_buf()).await
        }
        Err(e) => Err(RelocateError {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source: e,
        }),
    }
}

/// Cross-device fallback: copy the whole entry, then remove the source.
async fn copy_and_remove(src: PathBuf, dst: PathBuf) -> Result<(), RelocateError> {
    let (src_clone, dst_clone) = (src.clone(), dst.clone());
    let result = tokio::task::spawn_blocking(move || {
        copy_tree(&src_clone, &dst_clone)?;
        if src_clone.is_dir() {
            std::fs::remove_dir_all(&src_clone)
        } else {
            std::fs::remove_file(&src_clone)
        }
    })
    .await
    .map_err(|e| io::Error::other(e.to_string()))
    .and_then(|r| r);

    result.map_err(|e| RelocateError {
        src,
        dst,
        source: e,
    })
}

/// Copy a file or directory tree. Directories are created at the
/// destination and their entries copied depth-first.
fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    if src.is_dir() {
        std::fs::create_dir_all(dst)?;
        for entry in std::fs::read_dir(src)? {
            let entry = entry?;
            copy_tree(&entry.path(), &dst.join(entry.file_name()))?;
        }
    } else {
        std::fs::copy(src, dst)?;
    }
    Ok(())
}
