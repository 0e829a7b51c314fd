//! # Configuration
//!
//! Resolves where the shared credentials file lives and where its backup is
//! written.

use std::env;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::consts::{BACKUP_EXTENSION, CREDENTIALS_FILE_ENV};
use crate::error::{CredsError, Result};

/// Returns the conventional credentials path for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use awsctx_core::config::credentials_path_in;
///
/// let path = credentials_path_in(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.aws/credentials"));
/// ```
pub fn credentials_path_in(home: &Path) -> PathBuf {
  home.join(".aws").join("credentials")
}

/// Returns the sibling backup path for a credentials file.
///
/// The extension is replaced, so `credentials` becomes `credentials.bak`.
pub fn backup_path_for(path: &Path) -> PathBuf {
  path.with_extension(BACKUP_EXTENSION)
}

/// Resolves the credentials file location.
///
/// Priority: the explicit path, then `AWS_SHARED_CREDENTIALS_FILE`, then
/// `~/.aws/credentials`.
pub fn resolve_credentials_path(explicit: Option<&Path>) -> Result<PathBuf> {
  if let Some(path) = explicit {
    return Ok(path.to_path_buf());
  }

  if let Some(path) = env::var_os(CREDENTIALS_FILE_ENV).filter(|value| !value.is_empty()) {
    return Ok(PathBuf::from(path));
  }

  let base_dirs = BaseDirs::new().ok_or(CredsError::NoHomeDirectory)?;
  Ok(credentials_path_in(base_dirs.home_dir()))
}
