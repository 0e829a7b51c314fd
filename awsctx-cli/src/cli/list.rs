//! # List Command
//!
//! Lists the profiles in the credentials file and marks the active one.

use anyhow::Result;
use awsctx_core::CredentialManager;
use awsctx_core::output::{format_command, format_path, format_profile_name, print_header, print_info, print_warning};
use clap::Args;
use serde::Serialize;

use super::OutputFormat;

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
  /// Output format
  #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,
}

/// JSON shape of the profile listing
#[derive(Serialize)]
struct ProfileListing {
  path: String,
  active: Option<String>,
  profiles: Vec<String>,
}

/// Handle the list command
pub(crate) fn handle_list_command(manager: &CredentialManager, args: ListArgs) -> Result<()> {
  let profiles = manager.list_profiles()?;
  let active = manager.active_profile()?;

  if args.format == OutputFormat::Json {
    let listing = ProfileListing {
      path: manager.path().display().to_string(),
      active,
      profiles,
    };
    println!("{}", serde_json::to_string_pretty(&listing)?);
    return Ok(());
  }

  if !manager.has_secure_permissions()? {
    print_warning("Your credentials file is readable by other users.");
    println!(
      "For security, change permissions to 600: {}",
      format_command(&format!("chmod 600 {}", manager.path().display()))
    );
  }

  if profiles.is_empty() {
    print_info(&format!(
      "No profiles found in {}",
      format_path(&manager.path().display().to_string())
    ));
    println!("Add one with {}", format_command("awsctx add <NAME>"));
    return Ok(());
  }

  print_header("Profiles");
  for name in &profiles {
    if active.as_deref() == Some(name.as_str()) {
      println!("* {} (active)", format_profile_name(name));
    } else {
      println!("  {name}");
    }
  }

  Ok(())
}
