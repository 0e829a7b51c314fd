//! Windows file permissions
//!
//! ACL management is not implemented; files keep the permissions inherited
//! from the user profile directory.

use std::fs;
use std::path::Path;

use super::FilePermissions;
use crate::error::Result;

/// Windows implementation of file permissions
pub struct WindowsFilePermissions;

impl FilePermissions for WindowsFilePermissions {
  fn set_secure_permissions(_path: &Path) -> Result<()> {
    Ok(())
  }

  fn has_secure_permissions(path: &Path) -> Result<bool> {
    Ok(fs::File::open(path).is_ok())
  }
}
