//! # Errors
//!
//! Error type shared by the credentials store and the profile manager.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout `awsctx-core`
pub type Result<T> = std::result::Result<T, CredsError>;

/// Errors raised while reading, validating, or persisting credential profiles
#[derive(Debug, Error)]
pub enum CredsError {
  /// A filesystem operation on a credentials or backup file failed.
  #[error("I/O error on {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  /// The temporary file could not be moved over the credentials file.
  #[error("Failed to replace {}: {source}", path.display())]
  Persist {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  /// Profile name is empty or would break the `[section]` syntax.
  #[error("Invalid profile name: '{0}'")]
  InvalidProfileName(String),
  /// The `default` section is reserved for the active profile alias.
  #[error("'default' is reserved for the active profile and cannot be added directly")]
  ReservedProfileName,
  /// A required credential value was empty.
  #[error("Missing required value: {0}")]
  MissingField(&'static str),
  /// A credential value contained a line break.
  #[error("Value for {0} must be a single line")]
  InvalidValue(&'static str),
  /// No home directory could be resolved for the default credentials path.
  #[error("Could not determine home directory")]
  NoHomeDirectory,
}

impl CredsError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }

  /// Whether the error was caused by bad input rather than the filesystem.
  pub const fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::InvalidProfileName(_) | Self::ReservedProfileName | Self::MissingField(_) | Self::InvalidValue(_)
    )
  }
}
