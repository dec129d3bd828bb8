//! Integration tests for the aes256 CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive prompts cannot be driven without a TTY, so every test
//! passes the secret with `--key` or `AES256_SECRET_KEY`, and runs in a
//! scratch directory so no stray `.aes256.toml` is picked up.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const KEY: &str = "01234567890123456789012345678901";
const IV: &str = "0123456789123456";
const HELLO_CT: &str = "IZzEEC52qnlO5SVxGZPzgw==";

/// Helper: get a Command pointing at the aes256 binary, run inside `dir`.
fn aes256(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("aes256").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("AES256_SECRET_KEY")
        .env_remove("AES256_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("stdout is UTF-8")
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AES-256"))
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("decrypt"))
        .stdout(predicate::str::contains("gen-key"))
        .stdout(predicate::str::contains("gen-iv"))
        .stdout(predicate::str::contains("params"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aes256"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn encrypt_matches_known_answer() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .args(["--key", KEY, "encrypt", "Hello World", "--iv", IV])
        .assert()
        .success()
        .stdout(format!("{HELLO_CT}\n"));
}

#[test]
fn decrypt_matches_known_answer() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .args(["--key", KEY, "decrypt", HELLO_CT, "--iv", IV])
        .assert()
        .success()
        .stdout("Hello World\n");
}

#[test]
fn secret_key_can_come_from_the_environment() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .env("AES256_SECRET_KEY", KEY)
        .args(["encrypt", "Hello World", "--iv", IV])
        .assert()
        .success()
        .stdout(format!("{HELLO_CT}\n"));
}

#[test]
fn stdin_roundtrip_with_wrapped_output() {
    let tmp = TempDir::new().unwrap();
    let text = "a fairly long line of text ".repeat(10);

    let ct = stdout_of(
        aes256(&tmp)
            .args(["--key", KEY, "encrypt", "--iv", IV, "--wrap"])
            .write_stdin(format!("{text}\n")),
    );
    assert!(ct.lines().count() > 1, "wrapped output should span lines");

    aes256(&tmp)
        .args(["--key", KEY, "decrypt", "--iv", IV])
        .write_stdin(ct)
        .assert()
        .success()
        .stdout(format!("{text}\n"));
}

#[test]
fn encrypt_without_iv_fails_in_cbc_mode() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .args(["--key", KEY, "encrypt", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--iv is required"));
}

#[test]
fn short_iv_is_rejected() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .args(["--key", KEY, "encrypt", "text", "--iv", "012345678912345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid IV length"));
}

#[test]
fn decrypt_rejects_bad_base64() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .args(["--key", KEY, "decrypt", "not base64!!", "--iv", IV])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Base64"));
}

#[test]
fn gen_key_prints_32_hex_chars() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .args(["gen-key", "password"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]{32}\n$").unwrap());
}

#[test]
fn gen_iv_json_reports_512_bits() {
    let tmp = TempDir::new().unwrap();
    let out = stdout_of(aes256(&tmp).args(["gen-iv", "password", "--json"]));
    let doc: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(doc["bits"], 512);
    assert_eq!(doc["iv"].as_str().map(str::len), Some(128));
}

#[test]
fn params_table_lists_fixed_parameters() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .arg("params")
        .assert()
        .success()
        .stdout(predicate::str::contains("VA9aJs1wud3al1aD"))
        .stdout(predicate::str::contains("1001"))
        .stdout(predicate::str::contains("AES/CBC/PKCS7Padding"));
}

#[test]
fn params_json_is_machine_readable() {
    let tmp = TempDir::new().unwrap();
    let out = stdout_of(aes256(&tmp).args(["params", "--json"]));
    let doc: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(doc["iterations"], 1001);
    assert_eq!(doc["iv_bytes"], 16);
}

#[test]
fn config_file_selects_gcm_mode() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".aes256.toml")
        .write_str("default_mode = \"gcm\"\nsealed_iterations = 1001\n")
        .unwrap();

    let ct = stdout_of(aes256(&tmp).args(["--key", "hunter2", "encrypt", "sealed value"]));
    assert_ne!(ct.trim(), HELLO_CT);

    aes256(&tmp)
        .args(["--key", "hunter2", "decrypt", ct.trim()])
        .assert()
        .success()
        .stdout("sealed value\n");

    aes256(&tmp)
        .args(["--key", "wrong", "decrypt", ct.trim()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tampered"));
}

#[test]
fn sealed_value_survives_a_rounds_change() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.child(".aes256.toml");
    config
        .write_str("default_mode = \"gcm\"\nsealed_iterations = 1001\n")
        .unwrap();
    let ct = stdout_of(aes256(&tmp).args(["--key", "hunter2", "encrypt", "kept"]));

    config
        .write_str("default_mode = \"gcm\"\nsealed_iterations = 2002\n")
        .unwrap();
    aes256(&tmp)
        .args(["--key", "hunter2", "decrypt", ct.trim()])
        .assert()
        .success()
        .stdout("kept\n");
}

#[test]
fn empty_key_is_accepted() {
    let tmp = TempDir::new().unwrap();
    let ct = stdout_of(aes256(&tmp).args(["--key", "", "encrypt", "blank secret", "--iv", IV]));

    aes256(&tmp)
        .args(["--key", "", "decrypt", ct.trim(), "--iv", IV])
        .assert()
        .success()
        .stdout("blank secret\n");
}

#[test]
fn invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".aes256.toml").write_str("default_mode = 5\n").unwrap();

    aes256(&tmp)
        .args(["--key", KEY, "encrypt", "x", "--iv", IV])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));
}

#[test]
fn completions_generate_a_script() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aes256"));
}

#[test]
fn verbose_flag_emits_debug_diagnostics() {
    let tmp = TempDir::new().unwrap();
    aes256(&tmp)
        .args(["--verbose", "--key", KEY, "encrypt", "Hello World", "--iv", IV])
        .assert()
        .success()
        .stdout(format!("{HELLO_CT}\n"))
        .stderr(predicate::str::contains("encrypted with AES-256-CBC"))
        .stderr(predicate::str::contains(KEY).not());
}
