//! # awsctx CLI Library
//!
//! Command definitions and interactive prompts for the awsctx command-line
//! tool. All credential handling is delegated to `awsctx-core`.

pub mod cli;
pub mod prompts;
