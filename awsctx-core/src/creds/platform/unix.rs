//! Unix file permissions using chmod-style modes

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use super::FilePermissions;
use crate::error::{CredsError, Result};

/// Unix implementation of file permissions using chmod-style permissions
pub struct UnixFilePermissions;

impl FilePermissions for UnixFilePermissions {
  fn set_secure_permissions(path: &Path) -> Result<()> {
    let mut perms = fs::metadata(path).map_err(|e| CredsError::io(path, e))?.permissions();
    perms.set_mode(0o600); // Owner read/write only
    fs::set_permissions(path, perms).map_err(|e| CredsError::io(path, e))
  }

  fn has_secure_permissions(path: &Path) -> Result<bool> {
    let mode = fs::metadata(path).map_err(|e| CredsError::io(path, e))?.permissions().mode();

    // No group/other bits
    Ok(mode & 0o077 == 0)
  }
}
