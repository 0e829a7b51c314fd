//! # Prompts Module
//!
//! Interactive input for values that were not given on the command line,
//! styled with a shared dialoguer theme.

use anyhow::{Context, Result, bail};
use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

/// Returns a custom dialoguer theme matching awsctx's color palette.
///
/// Features:
/// - Cyan bold prompt text
/// - Green `❯` prefix on active item
/// - Green highlight on active item text
pub fn awsctx_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}

/// Use `value` if given, otherwise ask for it on the terminal.
///
/// `flag` names the command line option to suggest when there is no terminal
/// to prompt on.
pub fn value_or_prompt(value: Option<String>, prompt: &str, flag: &str) -> Result<String> {
  if let Some(value) = value {
    return Ok(value);
  }
  ensure_attended(flag)?;

  Input::<String>::with_theme(&awsctx_theme())
    .with_prompt(prompt)
    .interact_text()
    .with_context(|| format!("Failed to read {prompt}"))
}

/// Like [`value_or_prompt`] but with hidden input.
pub fn secret_or_prompt(value: Option<String>, prompt: &str, flag: &str) -> Result<String> {
  if let Some(value) = value {
    return Ok(value);
  }
  ensure_attended(flag)?;

  Password::with_theme(&awsctx_theme())
    .with_prompt(prompt)
    .interact()
    .with_context(|| format!("Failed to read {prompt}"))
}

/// Optional hidden value: `value` if given, otherwise a prompt where an empty
/// answer means none.
///
/// Without a terminal nothing is asked and `None` is returned.
pub fn optional_secret_or_prompt(value: Option<String>, prompt: &str) -> Result<Option<String>> {
  if value.is_some() || !console::user_attended() {
    return Ok(value);
  }

  let answer = Password::with_theme(&awsctx_theme())
    .with_prompt(format!("{prompt} (leave empty for none)"))
    .allow_empty_password(true)
    .interact()
    .with_context(|| format!("Failed to read {prompt}"))?;

  Ok(Some(answer).filter(|answer| !answer.trim().is_empty()))
}

fn ensure_attended(flag: &str) -> Result<()> {
  if !console::user_attended() {
    bail!("Missing {flag} and no terminal to prompt on");
  }
  Ok(())
}
