use crate::error::{FetchError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name for one captured address: the lowercase hex digest of
/// the address string.
pub fn target_dir_name(address: &str) -> String {
    hex::encode(Sha256::digest(address.as_bytes()))
}

/// Create the target directory for `address` under `parent`.
///
/// Creation is idempotent: a directory that already exists is accepted
/// as-is. Distinct addresses that happen to share a digest are not
/// detected - the last capture wins.
pub fn create_target_dir(parent: &Path, address: &str) -> Result<PathBuf> {
    let dir = parent.join(target_dir_name(address));
    match fs::create_dir(&dir) {
        Ok(()) => {
            debug!("Created target directory {}", dir.display());
            Ok(dir)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(dir),
        Err(e) => Err(FetchError::DirCreate {
            path: dir,
            source: e,
        }),
    }
}
