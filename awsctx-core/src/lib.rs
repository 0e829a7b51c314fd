//! # awsctx Core Library
//!
//! Reads and writes the INI-style shared credentials file, manages named
//! profiles in it, and activates one of them by copying it into the reserved
//! `default` section. The command line front end is a thin layer over
//! [`CredentialManager`].

pub mod config;
pub mod consts;
pub mod creds;
pub mod error;
pub mod output;
pub mod store;

pub use config::{backup_path_for, credentials_path_in, resolve_credentials_path};
pub use creds::CredentialManager;
pub use error::{CredsError, Result};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning, redact_entries};
pub use store::{Entries, Store};
