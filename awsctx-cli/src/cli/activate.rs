//! # Use and Current Commands
//!
//! Activates a profile as the default and reports which profile is active.

use anyhow::Result;
use awsctx_core::CredentialManager;
use awsctx_core::consts::DEFAULT_SECTION;
use awsctx_core::output::{format_profile_name, print_info, print_success, print_warning};
use clap::Args;

/// Arguments for the use command
#[derive(Args)]
pub struct UseArgs {
  /// Profile to make the default
  #[arg(required = true, index = 1)]
  pub profile: String,
}

/// Handle the use command
///
/// An unknown profile leaves the file untouched and is reported as a warning.
pub(crate) fn handle_use_command(manager: &CredentialManager, args: UseArgs) -> Result<()> {
  if manager.set_default(&args.profile)? {
    print_success(&format!(
      "Profile {} is now the default.",
      format_profile_name(&args.profile)
    ));
  } else {
    print_warning(&format!(
      "Profile '{}' not found. The default profile was not changed.",
      args.profile
    ));
  }
  Ok(())
}

/// Handle the current command
pub(crate) fn handle_current_command(manager: &CredentialManager) -> Result<()> {
  match manager.active_profile()? {
    Some(name) => println!("{name}"),
    None if manager.get_profile_details(DEFAULT_SECTION)?.is_empty() => {
      print_info("No default profile is set.");
    }
    None => print_info("The default profile does not match any named profile."),
  }
  Ok(())
}
