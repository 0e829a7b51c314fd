//! # Credential Management
//!
//! Profile management on top of the shared credentials file, plus the
//! platform-specific handling that keeps that file private to its owner.

pub mod manager;
pub mod platform;

pub use manager::{CredentialManager, validate_profile_name};
