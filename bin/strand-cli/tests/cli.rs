//! End-to-end check of the demonstration transcript.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_transcript_order_and_exit_code() {
	let mut cmd = Command::cargo_bin("strand").unwrap();
	cmd.env_remove("RUST_LOG");

	cmd.assert()
		.success()
		.stdout(predicate::str::starts_with("String : ABC\0DEF\0GHI\0\n"))
		.stdout(predicate::str::contains("Length : 12\n"))
		.stdout(predicate::str::contains("chars[2] : J\n"))
		.stdout(predicate::str::contains("str3 : ADC\n"))
		.stdout(predicate::str::contains("str2 : ABCDEF\n"))
		.stdout(predicate::str::ends_with(
			"str is not interned\nstr is interned\n",
		));
}

#[test]
fn test_diagnostics_stay_off_stdout() {
	let mut cmd = Command::cargo_bin("strand").unwrap();
	cmd.env("RUST_LOG", "debug");

	cmd.assert()
		.success()
		.stdout(predicate::str::contains("interned").and(predicate::str::contains("literal table loaded").not()))
		.stderr(predicate::str::contains("literal table loaded"));
}
