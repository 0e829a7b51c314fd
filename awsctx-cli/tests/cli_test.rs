use std::str;

use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use awsctx_test_utils::CredentialsFileGuard;
use predicates::prelude::*;

fn awsctx(guard: &CredentialsFileGuard) -> assert_cmd::Command {
  let mut cmd = cargo_bin_cmd!("awsctx");
  cmd
    .env("NO_COLOR", "1")
    .env_remove("AWS_SHARED_CREDENTIALS_FILE")
    .arg("--file")
    .arg(guard.path());
  cmd
}

#[test]
fn help_output_lists_commands() {
  cargo_bin_cmd!("awsctx")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("list"))
    .stdout(predicate::str::contains("show"))
    .stdout(predicate::str::contains("add"))
    .stdout(predicate::str::contains("use"))
    .stdout(predicate::str::contains("current"));
}

#[test]
fn list_on_missing_file_creates_it() {
  let guard = CredentialsFileGuard::without_file();

  awsctx(&guard)
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("No profiles found"));

  assert_eq!(guard.read(), "");
}

#[test]
fn add_list_show_and_use() -> Result<()> {
  let guard = CredentialsFileGuard::new("");

  awsctx(&guard)
    .args([
      "add",
      "alpha",
      "--access-key-id",
      "AKIA123456",
      "--secret-access-key",
      "supersecret",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Saved profile 'alpha'"));

  awsctx(&guard)
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("alpha"))
    .stdout(predicate::str::contains("(active)").not());

  awsctx(&guard)
    .args(["show", "alpha"])
    .assert()
    .success()
    .stdout(predicate::str::contains("AKIA..."))
    .stdout(predicate::str::contains("AKIA123456").not())
    .stdout(predicate::str::contains("supersecret").not());

  awsctx(&guard)
    .args(["use", "alpha"])
    .assert()
    .success()
    .stdout(predicate::str::contains("is now the default"));

  assert!(guard.read().contains("[default]\naws_access_key_id = AKIA123456\n"));

  awsctx(&guard)
    .arg("current")
    .assert()
    .success()
    .stdout(predicate::str::diff("alpha\n"));

  awsctx(&guard)
    .arg("ls")
    .assert()
    .success()
    .stdout(predicate::str::contains("alpha (active)"));

  Ok(())
}

#[test]
fn list_json_output() -> Result<()> {
  let guard = CredentialsFileGuard::new(
    "[default]\nk = 2\n\n[beta]\nk = 1\n\n[alpha]\nk = 2\n",
  );

  let assert = awsctx(&guard).args(["list", "--format", "json"]).assert().success();
  let stdout = str::from_utf8(&assert.get_output().stdout)?;
  let listing: serde_json::Value = serde_json::from_str(stdout)?;

  assert_eq!(listing["profiles"], serde_json::json!(["beta", "alpha"]));
  assert_eq!(listing["active"], serde_json::json!("alpha"));

  Ok(())
}

#[test]
fn show_json_is_redacted() -> Result<()> {
  let guard = CredentialsFileGuard::new(
    "[work]\naws_access_key_id = AKIAWORKKEY\naws_secret_access_key = hunter2\naws_session_token = tok\nregion = eu-west-1\n",
  );

  let assert = awsctx(&guard).args(["show", "work", "--format", "json"]).assert().success();
  let stdout = str::from_utf8(&assert.get_output().stdout)?;
  let details: serde_json::Value = serde_json::from_str(stdout)?;

  assert_eq!(details["aws_access_key_id"], "AKIA...");
  assert_eq!(details["aws_secret_access_key"], "************");
  assert_eq!(details["aws_session_token"], "************");
  assert_eq!(details["region"], "eu-west-1");
  assert!(!stdout.contains("hunter2"));

  Ok(())
}

#[test]
fn show_missing_profile_warns() {
  let guard = CredentialsFileGuard::new("[alpha]\nk = v\n");

  awsctx(&guard)
    .args(["show", "ghost"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Profile 'ghost' not found"));
}

#[test]
fn show_empty_profile_is_not_missing() -> Result<()> {
  let guard = CredentialsFileGuard::new("[empty]\n[alpha]\nk = v\n");

  awsctx(&guard)
    .args(["show", "empty"])
    .assert()
    .success()
    .stdout(predicate::str::contains("not found").not())
    .stdout(predicate::str::contains("no entries"));

  let assert = awsctx(&guard).args(["show", "empty", "--format", "json"]).assert().success();
  let details: serde_json::Value = serde_json::from_str(str::from_utf8(&assert.get_output().stdout)?)?;
  assert_eq!(details, serde_json::json!({}));

  Ok(())
}

#[test]
fn add_without_terminal_skips_session_token() {
  let guard = CredentialsFileGuard::new("");

  awsctx(&guard)
    .args(["add", "plain", "--access-key-id", "AKIA1", "--secret-access-key", "s1"])
    .assert()
    .success();
  assert!(!guard.read().contains("aws_session_token"));

  awsctx(&guard)
    .args([
      "add",
      "temp",
      "--access-key-id",
      "AKIA2",
      "--secret-access-key",
      "s2",
      "--session-token",
      "tok2",
    ])
    .assert()
    .success();
  assert!(guard.read().contains("[temp]\naws_access_key_id = AKIA2\naws_secret_access_key = s2\naws_session_token = tok2\n"));
}

#[test]
fn use_unknown_profile_changes_nothing() {
  let original = "[alpha]\nk = v\n";
  let guard = CredentialsFileGuard::new(original);

  awsctx(&guard)
    .args(["use", "ghost"])
    .assert()
    .success()
    .stdout(predicate::str::contains("not found"));

  assert_eq!(guard.read(), original);
  assert!(guard.read_backup().is_none());
}

#[test]
fn add_default_is_rejected() {
  let guard = CredentialsFileGuard::new("");

  awsctx(&guard)
    .args([
      "add",
      "default",
      "--access-key-id",
      "AKIA1",
      "--secret-access-key",
      "s1",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("reserved"));

  assert_eq!(guard.read(), "");
}

#[test]
fn add_without_terminal_requires_flags() {
  let guard = CredentialsFileGuard::new("");

  awsctx(&guard)
    .args(["add", "alpha", "--access-key-id", "AKIA1"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--secret-access-key"));

  assert_eq!(guard.read(), "");
}

#[test]
fn current_without_default() {
  let guard = CredentialsFileGuard::new("[alpha]\nk = v\n");

  awsctx(&guard)
    .arg("current")
    .assert()
    .success()
    .stdout(predicate::str::contains("No default profile is set"));
}

#[test]
fn credentials_file_from_environment() {
  let guard = CredentialsFileGuard::new("[from-env]\nk = v\n");

  cargo_bin_cmd!("awsctx")
    .env("NO_COLOR", "1")
    .env("AWS_SHARED_CREDENTIALS_FILE", guard.path())
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("from-env"));
}
