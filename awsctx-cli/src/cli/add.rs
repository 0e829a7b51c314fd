//! # Add Command
//!
//! Creates or updates a profile, prompting for anything not passed as an
//! option.

use anyhow::Result;
use awsctx_core::CredentialManager;
use awsctx_core::creds::validate_profile_name;
use awsctx_core::output::{format_command, format_path, print_info, print_success};
use clap::Args;
use tracing::debug;

use crate::prompts::{optional_secret_or_prompt, secret_or_prompt, value_or_prompt};

/// Arguments for the add command
#[derive(Args)]
pub struct AddArgs {
  /// Name of the profile to add or update
  #[arg(index = 1)]
  pub name: Option<String>,

  /// AWS access key id
  #[arg(long, value_name = "KEY_ID")]
  pub access_key_id: Option<String>,

  /// AWS secret access key (prompted without echo when omitted)
  #[arg(long, value_name = "SECRET")]
  pub secret_access_key: Option<String>,

  /// Optional session token for temporary credentials (prompted when omitted
  /// on a terminal; leave empty for none)
  #[arg(long, value_name = "TOKEN")]
  pub session_token: Option<String>,
}

/// Handle the add command
pub(crate) fn handle_add_command(manager: &CredentialManager, args: AddArgs) -> Result<()> {
  let name = value_or_prompt(args.name, "Profile name", "<NAME>")?;
  // Reject a bad name before asking for secrets
  validate_profile_name(name.trim())?;
  let name = name.trim();

  let access_key = value_or_prompt(args.access_key_id, "AWS Access Key ID", "--access-key-id")?;
  let secret_key = secret_or_prompt(args.secret_access_key, "AWS Secret Access Key", "--secret-access-key")?;
  let session_token = optional_secret_or_prompt(args.session_token, "AWS Session Token")?;

  debug!(profile = name, "Adding profile");
  manager.add_profile(name, &access_key, &secret_key, session_token.as_deref())?;

  print_success(&format!("Saved profile '{name}'."));
  print_info(&format!(
    "Previous file backed up to {}",
    format_path(&manager.backup_path().display().to_string())
  ));
  println!("Activate it with {}", format_command(&format!("awsctx use {name}")));

  Ok(())
}
