//! # Show Command
//!
//! Displays a single profile with its secrets masked.

use anyhow::Result;
use awsctx_core::CredentialManager;
use awsctx_core::output::{format_profile_name, print_header, print_warning, redact_entries};
use clap::Args;

use super::OutputFormat;

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
  /// Profile to show
  #[arg(required = true, index = 1)]
  pub profile: String,

  /// Output format
  #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,
}

/// Handle the show command
///
/// A profile that does not exist is reported as a warning, not a failure.
pub(crate) fn handle_show_command(manager: &CredentialManager, args: ShowArgs) -> Result<()> {
  if !manager.has_profile(&args.profile)? {
    print_warning(&format!("Profile '{}' not found.", args.profile));
    return Ok(());
  }

  let details = manager.get_profile_details(&args.profile)?;
  let redacted = redact_entries(&details);

  if args.format == OutputFormat::Json {
    println!("{}", serde_json::to_string_pretty(&redacted)?);
    return Ok(());
  }

  print_header(&format!("Profile {}", format_profile_name(&args.profile)));
  if redacted.is_empty() {
    println!("  (no entries)");
    return Ok(());
  }
  let width = redacted.keys().map(|key| key.len()).max().unwrap_or(0);
  for (key, value) in &redacted {
    println!("  {key:<width$}  {value}");
  }

  Ok(())
}
