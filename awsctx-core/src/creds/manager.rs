//! # Credential Manager
//!
//! Profile operations over a credentials file at a fixed path. Every
//! operation reloads the file, so edits made by other tools between calls are
//! always observed. Mutations copy the current file to a single-generation
//! backup first and then replace the file atomically.
//!
//! The manager does no locking. Two processes mutating the same file race
//! and the last writer wins; the backup holds the state the loser overwrote.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{backup_path_for, resolve_credentials_path};
use crate::consts::{ACCESS_KEY_ID, DEFAULT_SECTION, SECRET_ACCESS_KEY, SESSION_TOKEN};
use crate::creds::platform;
use crate::error::{CredsError, Result};
use crate::store::{self, Entries, Store, is_valid_section_name};

/// Manages named profiles in a shared credentials file
#[derive(Debug, Clone)]
pub struct CredentialManager {
  path: PathBuf,
}

impl CredentialManager {
  /// Create a manager for the credentials file at `path`.
  ///
  /// The parent directory and an empty file are created if they are missing,
  /// so later loads never see a missing file.
  ///
  /// # Errors
  ///
  /// Returns [`CredsError::Io`] if the directory or file cannot be created.
  pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
    let manager = Self { path: path.into() };
    manager.ensure_file()?;
    Ok(manager)
  }

  /// Create a manager for the conventional credentials location.
  ///
  /// See [`resolve_credentials_path`] for how the location is chosen.
  pub fn from_env() -> Result<Self> {
    Self::new(resolve_credentials_path(None)?)
  }

  /// Path of the managed credentials file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Path of the single-generation backup
  pub fn backup_path(&self) -> PathBuf {
    backup_path_for(&self.path)
  }

  fn ensure_file(&self) -> Result<()> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|e| CredsError::io(parent, e))?;
    }

    match OpenOptions::new().write(true).create_new(true).open(&self.path) {
      Ok(_) => {
        info!(path = %self.path.display(), "Created empty credentials file");
        platform::secure_file(&self.path)
      }
      Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
      Err(e) => Err(CredsError::io(&self.path, e)),
    }
  }

  fn load(&self) -> Result<Store> {
    store::load(&self.path)
  }

  /// Copy the current file over the backup.
  ///
  /// A file deleted since construction has nothing to back up.
  fn backup(&self) -> Result<()> {
    let backup_path = self.backup_path();
    match fs::copy(&self.path, &backup_path) {
      Ok(_) => {
        platform::secure_file(&backup_path)?;
        debug!(backup = %backup_path.display(), "Backed up credentials file");
        Ok(())
      }
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "Credentials file missing, skipping backup");
        Ok(())
      }
      Err(e) => Err(CredsError::io(&backup_path, e)),
    }
  }

  /// Names of all profiles in file order, excluding the `default` alias.
  pub fn list_profiles(&self) -> Result<Vec<String>> {
    let store = self.load()?;
    Ok(
      store
        .names()
        .filter(|name| *name != DEFAULT_SECTION)
        .map(str::to_string)
        .collect(),
    )
  }

  /// Whether a section called `name` exists, `default` included.
  pub fn has_profile(&self, name: &str) -> Result<bool> {
    Ok(self.load()?.contains(name))
  }

  /// Entries of a profile, or an empty map if it does not exist.
  ///
  /// Values are returned verbatim, secrets included; redact before display
  /// with [`crate::output::redact_entries`].
  pub fn get_profile_details(&self, name: &str) -> Result<Entries> {
    let store = self.load()?;
    Ok(store.section(name).cloned().unwrap_or_default())
  }

  /// Create or update a profile.
  ///
  /// Sets the access key id and secret access key, plus the session token
  /// when one is given and non-empty. Other keys already present in the
  /// section are left alone. Values are trimmed.
  ///
  /// # Errors
  ///
  /// Validation errors are returned before anything is read or written:
  /// - [`CredsError::ReservedProfileName`] if `name` is `default`
  /// - [`CredsError::InvalidProfileName`] if `name` breaks the section syntax
  /// - [`CredsError::MissingField`] if a required key is empty
  /// - [`CredsError::InvalidValue`] if a value spans multiple lines
  pub fn add_profile(&self, name: &str, access_key: &str, secret_key: &str, session_token: Option<&str>) -> Result<()> {
    validate_profile_name(name)?;
    let access_key = required_value(ACCESS_KEY_ID, access_key)?;
    let secret_key = required_value(SECRET_ACCESS_KEY, secret_key)?;
    let session_token = match session_token.map(str::trim).filter(|token| !token.is_empty()) {
      Some(token) => Some(single_line(SESSION_TOKEN, token)?),
      None => None,
    };

    let mut store = self.load()?;
    self.backup()?;

    let existed = store.contains(name);
    let section = store.ensure_section(name);
    section.insert(ACCESS_KEY_ID.to_string(), access_key.to_string());
    section.insert(SECRET_ACCESS_KEY.to_string(), secret_key.to_string());
    if let Some(token) = session_token {
      section.insert(SESSION_TOKEN.to_string(), token.to_string());
    }

    store::save(&self.path, &store)?;
    info!(profile = name, updated = existed, "Saved profile");
    Ok(())
  }

  /// Make `source` the active profile by copying it into `default`.
  ///
  /// The `default` section is removed and recreated, so it ends up with
  /// exactly the entries of `source`. Returns `Ok(false)` without creating a
  /// backup or touching the file when `source` does not exist.
  pub fn set_default(&self, source: &str) -> Result<bool> {
    let mut store = self.load()?;
    let Some(entries) = store.section(source).cloned() else {
      debug!(profile = source, "Profile not found, leaving default unchanged");
      return Ok(false);
    };

    self.backup()?;
    store.replace_section(DEFAULT_SECTION, entries);
    store::save(&self.path, &store)?;

    info!(profile = source, "Activated profile as default");
    Ok(true)
  }

  /// The profile whose entries currently match `default`, if any.
  ///
  /// Which profile was activated is not stored in the file, so this compares
  /// entries and returns the first profile, in file order, that is an exact
  /// match.
  pub fn active_profile(&self) -> Result<Option<String>> {
    let store = self.load()?;
    let Some(default) = store.section(DEFAULT_SECTION).filter(|entries| !entries.is_empty()) else {
      return Ok(None);
    };

    Ok(
      store
        .iter()
        .find(|(name, entries)| *name != DEFAULT_SECTION && *entries == default)
        .map(|(name, _)| name.to_string()),
    )
  }

  /// Whether the credentials file is readable by its owner only
  pub fn has_secure_permissions(&self) -> Result<bool> {
    platform::is_secure(&self.path)
  }
}

/// Check that `name` can be stored as a profile.
pub fn validate_profile_name(name: &str) -> Result<()> {
  if name == DEFAULT_SECTION {
    return Err(CredsError::ReservedProfileName);
  }
  if !is_valid_section_name(name) {
    return Err(CredsError::InvalidProfileName(name.to_string()));
  }
  Ok(())
}

fn required_value<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
  let value = value.trim();
  if value.is_empty() {
    return Err(CredsError::MissingField(field));
  }
  single_line(field, value)
}

fn single_line<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
  if value.contains(['\n', '\r']) {
    return Err(CredsError::InvalidValue(field));
  }
  Ok(value)
}
