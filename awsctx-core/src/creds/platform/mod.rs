//! Platform-specific file permission handling
//!
//! Credentials files hold secrets, so they are kept readable by their owner
//! only where the platform supports it.

use std::path::Path;

use crate::error::Result;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixFilePermissions as PlatformFilePermissions;
#[cfg(windows)]
pub use windows::WindowsFilePermissions as PlatformFilePermissions;

/// Trait for platform-specific file permission operations
pub trait FilePermissions {
  /// Set secure permissions on a credentials file
  fn set_secure_permissions(path: &Path) -> Result<()>;

  /// Check if a file has secure permissions
  fn has_secure_permissions(path: &Path) -> Result<bool>;
}

/// Restrict a credentials file to its owner
pub fn secure_file(path: &Path) -> Result<()> {
  PlatformFilePermissions::set_secure_permissions(path)
}

/// Whether a credentials file is restricted to its owner
pub fn is_secure(path: &Path) -> Result<bool> {
  PlatformFilePermissions::has_secure_permissions(path)
}
