//! # Credentials Store
//!
//! Parser and serializer for the INI-style shared credentials file. A
//! [`Store`] is an ordered set of named sections, each holding an ordered
//! mapping of string keys to string values.
//!
//! Parsing is tolerant: blank lines, `#`/`;` comments, and lines that match
//! neither `[section]` nor `key = value` are skipped so a hand-edited file with
//! a few bad lines stays usable. Writes go through a temporary file in the same
//! directory and are renamed into place, so readers only ever see the old or
//! the new content.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{CredsError, Result};

/// Ordered key/value entries of a single section
pub type Entries = IndexMap<String, String>;

/// Checks the section name invariant.
///
/// Names must be non-empty, carry no surrounding whitespace, and contain no
/// bracket or line break that would collide with the header syntax.
pub fn is_valid_section_name(name: &str) -> bool {
  !name.is_empty() && name.trim() == name && !name.contains(['[', ']', '\n', '\r'])
}

/// Section name of a `[name]` header line.
///
/// The name ends at the first `]`. Anything after it must be blank or a
/// comment.
fn section_header(line: &str) -> Option<&str> {
  let rest = line.strip_prefix('[')?;
  let (name, trailing) = rest.split_once(']')?;
  let trailing = trailing.trim_start();
  if trailing.is_empty() || trailing.starts_with('#') || trailing.starts_with(';') {
    Some(name.trim())
  } else {
    None
  }
}

/// In-memory representation of a credentials file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
  sections: IndexMap<String, Entries>,
}

impl Store {
  /// Create an empty store
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse credentials file content.
  ///
  /// Never fails. Malformed lines are logged and skipped; key/value lines
  /// that appear before any valid section header are ignored. A section
  /// header that repeats continues the earlier section. A leading byte order
  /// mark is dropped, and a header may be followed by a `#` or `;` comment.
  pub fn parse(text: &str) -> Self {
    let mut store = Self::new();
    let mut current: Option<String> = None;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (index, raw) in text.lines().enumerate() {
      let line_number = index + 1;
      let line = raw.trim();

      if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        continue;
      }

      if line.starts_with('[') {
        current = match section_header(line) {
          Some(name) if is_valid_section_name(name) => {
            store.ensure_section(name);
            Some(name.to_string())
          }
          _ => {
            warn!(line = line_number, "Skipping malformed section header");
            None
          }
        };
        continue;
      }

      let Some(split) = line.find(['=', ':']) else {
        warn!(line = line_number, "Skipping line without a key/value delimiter");
        continue;
      };

      let key = line[..split].trim();
      let value = line[split + 1..].trim();

      if key.is_empty() {
        warn!(line = line_number, "Skipping entry with an empty key");
        continue;
      }

      match current.as_deref() {
        Some(section) => {
          store.ensure_section(section).insert(key.to_string(), value.to_string());
        }
        None => warn!(line = line_number, "Skipping entry outside of any section"),
      }
    }

    store
  }

  /// Render the store in credentials file syntax.
  ///
  /// Every section is a `[name]` header, its `key = value` lines, and one
  /// blank line.
  pub fn render(&self) -> String {
    let mut out = String::new();
    for (name, entries) in &self.sections {
      let _ = writeln!(out, "[{name}]");
      for (key, value) in entries {
        let _ = writeln!(out, "{key} = {value}");
      }
      out.push('\n');
    }
    out
  }

  /// Section names in file order
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.sections.keys().map(String::as_str)
  }

  /// Iterate over sections in file order
  pub fn iter(&self) -> impl Iterator<Item = (&str, &Entries)> {
    self.sections.iter().map(|(name, entries)| (name.as_str(), entries))
  }

  /// Entries of a section, if present
  pub fn section(&self, name: &str) -> Option<&Entries> {
    self.sections.get(name)
  }

  /// Whether a section exists
  pub fn contains(&self, name: &str) -> bool {
    self.sections.contains_key(name)
  }

  /// Get a section for editing, appending an empty one if it is absent
  pub fn ensure_section(&mut self, name: &str) -> &mut Entries {
    self.sections.entry(name.to_string()).or_default()
  }

  /// Drop a section and append a fresh one holding exactly `entries`
  pub fn replace_section(&mut self, name: &str, entries: Entries) {
    self.sections.shift_remove(name);
    self.sections.insert(name.to_string(), entries);
  }

  /// Remove a section, keeping the order of the others
  pub fn remove_section(&mut self, name: &str) -> Option<Entries> {
    self.sections.shift_remove(name)
  }

  pub fn len(&self) -> usize {
    self.sections.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sections.is_empty()
  }
}

/// Load a store from disk.
///
/// A missing file is treated as an empty store.
pub fn load(path: &Path) -> Result<Store> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      debug!(path = %path.display(), "Credentials file not found, starting empty");
      return Ok(Store::new());
    }
    Err(e) => return Err(CredsError::io(path, e)),
  };

  let store = Store::parse(&content);
  debug!(path = %path.display(), sections = store.len(), "Loaded credentials file");
  Ok(store)
}

/// Atomically write a store to disk.
///
/// The rendered content is written and synced to a temporary file next to
/// `path`, then renamed over it. A failure at any point leaves the previous
/// file untouched. When `path` is a symlink the file it points to is
/// replaced and the link is kept.
pub fn save(path: &Path, store: &Store) -> Result<()> {
  let target = resolve_symlink(path)?;
  let dir = match target.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let mut temp = NamedTempFile::new_in(dir).map_err(|e| CredsError::io(dir, e))?;
  temp
    .write_all(store.render().as_bytes())
    .map_err(|e| CredsError::io(temp.path(), e))?;
  temp.as_file().sync_all().map_err(|e| CredsError::io(temp.path(), e))?;

  temp.persist(&target).map_err(|e| CredsError::Persist {
    path: target.clone(),
    source: e.error,
  })?;

  debug!(path = %target.display(), sections = store.len(), "Saved credentials file");
  Ok(())
}

/// The file a write to `path` should replace.
///
/// Follows a symlink to its final target. A dangling link resolves to where
/// it points, relative to the link's own directory.
fn resolve_symlink(path: &Path) -> Result<PathBuf> {
  match fs::symlink_metadata(path) {
    Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
      Ok(target) => Ok(target),
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        let link = fs::read_link(path).map_err(|e| CredsError::io(path, e))?;
        Ok(match path.parent() {
          Some(parent) if link.is_relative() => parent.join(link),
          _ => link,
        })
      }
      Err(e) => Err(CredsError::io(path, e)),
    },
    _ => Ok(path.to_path_buf()),
  }
}
