//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the awsctx tool.

mod activate;
mod add;
mod list;
mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use awsctx_core::output::ColorMode;
use awsctx_core::CredentialManager;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Top-level CLI command for the awsctx tool
#[derive(Parser)]
#[command(name = "awsctx")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Manage AWS credential profiles and switch the default profile")]
#[command(
  long_about = "awsctx keeps named profiles in your shared AWS credentials file and switches\n\
        which one is active by copying it into the [default] section.\n\n\
        Every change first copies the current file to credentials.bak and then\n\
        replaces the file atomically."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Credentials file to manage
  #[arg(
    long,
    short = 'f',
    value_name = "PATH",
    global = true,
    long_help = "Credentials file to manage.\n\n\
             Defaults to $AWS_SHARED_CREDENTIALS_FILE when set, otherwise\n\
             ~/.aws/credentials. The file and its directory are created if missing."
  )]
  pub file: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the awsctx tool
#[derive(Subcommand)]
pub enum Commands {
  /// List profiles
  #[command(long_about = "Lists every profile in the credentials file in file order.\n\n\
            The [default] section is not listed; the profile it currently matches\n\
            is marked as active.")]
  #[command(alias = "ls")]
  List(list::ListArgs),

  /// Show a profile with secrets masked
  #[command(long_about = "Shows the entries of a profile.\n\n\
            The access key id is shortened to its first four characters and secret\n\
            values such as the secret access key and session token are masked.")]
  Show(show::ShowArgs),

  /// Add or update a profile
  #[command(long_about = "Adds a profile, or updates the keys of an existing one.\n\n\
            Values that are not given as options are prompted for interactively;\n\
            the secret access key is read without echo. Other keys already present\n\
            in the profile, such as region, are kept.")]
  Add(add::AddArgs),

  /// Make a profile the default
  #[command(long_about = "Activates a profile by replacing the [default] section with an exact\n\
            copy of the profile's entries.\n\n\
            Nothing is written if the profile does not exist.")]
  #[command(alias = "activate")]
  Use(activate::UseArgs),

  /// Show which profile is active
  #[command(long_about = "Prints the profile whose entries match the [default] section.\n\n\
            The file does not record which profile was activated, so a profile\n\
            edited after activation no longer matches.")]
  Current,
}

/// Output format for commands that print data
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
  /// Human readable text
  #[default]
  Text,
  /// JSON on stdout
  Json,
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
    }
  }

  let manager = open_manager(cli.file.as_deref())?;

  match cli.command {
    Commands::List(args) => list::handle_list_command(&manager, args),
    Commands::Show(args) => show::handle_show_command(&manager, args),
    Commands::Add(args) => add::handle_add_command(&manager, args),
    Commands::Use(args) => activate::handle_use_command(&manager, args),
    Commands::Current => activate::handle_current_command(&manager),
  }
}

fn open_manager(file: Option<&Path>) -> Result<CredentialManager> {
  match file {
    Some(path) => {
      CredentialManager::new(path).with_context(|| format!("Failed to open credentials file {}", path.display()))
    }
    None => CredentialManager::from_env().context("Failed to open the shared credentials file"),
  }
}
