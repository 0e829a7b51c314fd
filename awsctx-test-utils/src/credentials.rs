//! Throwaway credentials files for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for a test credentials file
///
/// Creates `<tmp>/.aws/credentials` with the given content. The whole
/// directory, backup included, is removed when the guard is dropped. HOME is
/// left alone; pass [`CredentialsFileGuard::path`] to the code under test.
pub struct CredentialsFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl CredentialsFileGuard {
  /// Create a credentials file with the given content
  pub fn new(content: &str) -> Self {
    let guard = Self::without_file();
    fs::create_dir_all(guard.path.parent().expect("credentials path has a parent"))
      .expect("Failed to create .aws directory");
    fs::write(&guard.path, content).expect("Failed to write test credentials file");
    guard
  }

  /// Reserve a credentials path without creating the file or its directory
  pub fn without_file() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(".aws").join("credentials");
    Self { temp_dir, path }
  }

  /// Get the path to the credentials file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Get the path the backup is written to
  pub fn backup_path(&self) -> PathBuf {
    self.path.with_extension("bak")
  }

  /// Get the path to the temporary directory standing in for HOME
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Current content of the credentials file
  pub fn read(&self) -> String {
    fs::read_to_string(&self.path).expect("Failed to read test credentials file")
  }

  /// Current content of the backup file, if one was written
  pub fn read_backup(&self) -> Option<String> {
    fs::read_to_string(self.backup_path()).ok()
  }
}
