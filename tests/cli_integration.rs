//! Integration tests for the cryptocore CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`. The
//! symmetric key is always supplied through `CRYPTOCORE_KEY` so no test
//! reaches the interactive prompt.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Base64url of 32 bytes of 0x01.
const TEST_KEY: &str = "AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE";

/// Helper: get a Command pointing at the cryptocore binary.
fn cryptocore() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("cryptocore").expect("binary should exist");
    cmd.env_remove("CRYPTOCORE_KEY")
        .env_remove("CRYPTOCORE_LOG")
        .env_remove("CRYPTOCORE_CONFIG_DIR");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf-8 stdout").trim().to_string()
}

#[test]
fn help_flag_shows_usage() {
    cryptocore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Envelope encryption"))
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("decrypt"))
        .stdout(predicate::str::contains("pack"))
        .stdout(predicate::str::contains("unpack"))
        .stdout(predicate::str::contains("fingerprint"));
}

#[test]
fn version_flag_shows_version() {
    cryptocore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cryptocore"));
}

#[test]
fn no_args_shows_help() {
    cryptocore()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// random / encode / decode / fingerprint
// ---------------------------------------------------------------------------

#[test]
fn random_prints_requested_length() {
    let hex = stdout_of(cryptocore().args(["random", "--bytes", "16", "--hex"]));
    assert_eq!(hex.len(), 32);

    let b64 = stdout_of(cryptocore().args(["random"]));
    assert_eq!(b64.len(), 43);
}

#[test]
fn random_rejects_zero_bytes() {
    cryptocore()
        .args(["random", "--bytes", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bytes"));
}

#[test]
fn encode_uses_url_safe_alphabet() {
    cryptocore()
        .args(["encode"])
        .write_stdin(vec![0xfbu8, 0xff])
        .assert()
        .success()
        .stdout("-_8\n");

    cryptocore()
        .args(["encode", "--standard"])
        .write_stdin(vec![0xfbu8, 0xff])
        .assert()
        .success()
        .stdout("+/8=\n");
}

#[test]
fn decode_accepts_both_alphabets() {
    cryptocore()
        .args(["decode", "--hex", "-_8"])
        .assert()
        .success()
        .stdout("fbff\n");

    cryptocore()
        .args(["decode", "aGVsbG8="])
        .assert()
        .success()
        .stdout("hello");
}

#[test]
fn decode_rejects_garbage() {
    cryptocore()
        .args(["decode", "not*base64"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid encoding"));
}

#[test]
fn fingerprint_of_empty_input_is_sha256() {
    cryptocore()
        .arg("fingerprint")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("e3:b0:c4:42:98:fc:1c:14"));
}

#[test]
fn fingerprint_metadata_changes_output() {
    let plain = stdout_of(cryptocore().args(["fingerprint", "key"]));
    let with_meta = stdout_of(cryptocore().args(["fingerprint", "key", "--metadata", "v2"]));
    let concatenated = stdout_of(cryptocore().args(["fingerprint", "keyv2"]));
    assert_ne!(plain, with_meta);
    assert_eq!(with_meta, concatenated);
}

// ---------------------------------------------------------------------------
// encrypt / decrypt
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let ct = stdout_of(
        cryptocore()
            .env("CRYPTOCORE_KEY", TEST_KEY)
            .args(["encrypt", "attack at dawn", "--aad", "orders"]),
    );

    cryptocore()
        .env("CRYPTOCORE_KEY", TEST_KEY)
        .args(["decrypt", ct.as_str(), "--aad", "orders"])
        .assert()
        .success()
        .stdout("attack at dawn");
}

#[test]
fn decrypt_with_wrong_aad_fails() {
    let ct = stdout_of(
        cryptocore()
            .env("CRYPTOCORE_KEY", TEST_KEY)
            .args(["encrypt", "attack at dawn", "--aad", "orders"]),
    );

    cryptocore()
        .env("CRYPTOCORE_KEY", TEST_KEY)
        .args(["decrypt", ct.as_str(), "--aad", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn explicit_iv_is_deterministic() {
    let iv = "AAAAAAAAAAAAAAAA"; // 12 zero bytes
    let a = stdout_of(
        cryptocore()
            .env("CRYPTOCORE_KEY", TEST_KEY)
            .args(["encrypt", "same", "--iv", iv]),
    );
    let b = stdout_of(
        cryptocore()
            .env("CRYPTOCORE_KEY", TEST_KEY)
            .args(["encrypt", "same", "--iv", iv]),
    );
    assert_eq!(a, b);

    cryptocore()
        .env("CRYPTOCORE_KEY", TEST_KEY)
        .args(["decrypt", a.as_str(), "--iv", iv])
        .assert()
        .success()
        .stdout("same");
}

#[test]
fn encrypt_rejects_bad_key_length() {
    cryptocore()
        .env("CRYPTOCORE_KEY", "AAAA")
        .args(["encrypt", "data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key"));
}

#[test]
fn encrypt_reads_file() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.child("plain.bin");
    input.write_binary(&[0u8, 1, 2, 3]).unwrap();

    let ct = stdout_of(
        cryptocore()
            .env("CRYPTOCORE_KEY", TEST_KEY)
            .args(["encrypt", "--file", input.path().to_str().unwrap()]),
    );

    cryptocore()
        .env("CRYPTOCORE_KEY", TEST_KEY)
        .args(["decrypt", ct.as_str()])
        .assert()
        .success()
        .stdout(vec![0u8, 1, 2, 3]);
}

// ---------------------------------------------------------------------------
// pack / unpack / inspect
// ---------------------------------------------------------------------------

#[test]
fn pack_unpack_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().to_str().unwrap();

    let packed = stdout_of(cryptocore().args([
        "pack",
        "--key",
        "a2V5",
        "--data",
        "AQID",
        "--config-dir",
        config_dir,
    ]));

    cryptocore()
        .args(["unpack", packed.as_str(), "--config-dir", config_dir])
        .assert()
        .success()
        .stdout("a2V5\nAQID\n");
}

#[test]
fn unpack_json_output() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().to_str().unwrap();

    let packed = stdout_of(cryptocore().args([
        "pack", "--key", "a2V5", "--data", "AQID", "--config-dir", config_dir,
    ]));
    let json = stdout_of(cryptocore().args(["unpack", packed.as_str(), "--json", "--config-dir", config_dir]));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["encrypted_key"], "a2V5");
    assert_eq!(value["encrypted_data"], "AQID");
    assert_eq!(value["splitter"], "#KEY_SPLITTER#");
}

#[test]
fn splitter_comes_from_config_file() {
    let tmp = TempDir::new().unwrap();
    tmp.child("cryptocore.toml")
        .write_str("key_splitter = \"::SPLIT::\"\n")
        .unwrap();
    let config_dir = tmp.path().to_str().unwrap();

    let packed = stdout_of(cryptocore().args([
        "pack", "--key", "a2V5", "--data", "AQID", "--config-dir", config_dir,
    ]));

    // The default splitter does not find the configured one.
    cryptocore()
        .current_dir(tmp.path())
        .args(["unpack", packed.as_str(), "--splitter", "#KEY_SPLITTER#"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    cryptocore()
        .args(["unpack", packed.as_str(), "--splitter", "::SPLIT::"])
        .assert()
        .success()
        .stdout("a2V5\nAQID\n");
}

#[test]
fn config_dir_can_come_from_env() {
    let tmp = TempDir::new().unwrap();
    tmp.child("cryptocore.toml")
        .write_str("key_splitter = \"|\"\n")
        .unwrap();

    let packed = stdout_of(
        cryptocore()
            .env("CRYPTOCORE_CONFIG_DIR", tmp.path())
            .args(["pack", "--key", "a2V5", "--data", "AQID"]),
    );

    cryptocore()
        .args(["unpack", packed.as_str(), "--splitter", "|"])
        .assert()
        .success()
        .stdout("a2V5\nAQID\n");
}

#[test]
fn base64_only_splitter_is_rejected() {
    cryptocore()
        .args(["pack", "--key", "a2V5", "--data", "AQID", "--splitter", "SPLIT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key splitter"));
}

#[test]
fn invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    tmp.child("cryptocore.toml").write_str("not valid {{toml").unwrap();

    cryptocore()
        .args(["pack", "--key", "a2V5", "--data", "AQID"])
        .args(["--config-dir", tmp.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));
}

#[test]
fn inspect_shows_segment_table() {
    let tmp = TempDir::new().unwrap();
    let config_dir = tmp.path().to_str().unwrap();

    let packed = stdout_of(cryptocore().args([
        "pack", "--key", "a2V5", "--data", "AQID", "--config-dir", config_dir,
    ]));

    cryptocore()
        .args(["inspect", packed.as_str(), "--config-dir", config_dir])
        .assert()
        .success()
        .stdout(predicate::str::contains("encrypted key"))
        .stdout(predicate::str::contains("encrypted data"))
        .stdout(predicate::str::contains("Fingerprint"));
}

// ---------------------------------------------------------------------------
// keygen / seal / open
// ---------------------------------------------------------------------------

#[test]
fn keygen_seal_open_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().to_str().unwrap();

    cryptocore()
        .args(["keygen", "--out-dir", dir, "--config-dir", dir])
        .assert()
        .success();

    tmp.child("private.pem").assert(predicate::path::exists());
    tmp.child("public.pem")
        .assert(predicate::str::contains("BEGIN PUBLIC KEY"));

    let public = tmp.path().join("public.pem");
    let private = tmp.path().join("private.pem");

    let sealed = stdout_of(cryptocore().args([
        "seal",
        "-k",
        public.to_str().unwrap(),
        "a payload larger than any single RSA block would allow",
        "--config-dir",
        dir,
    ]));

    cryptocore()
        .args([
            "open",
            "-k",
            private.to_str().unwrap(),
            sealed.as_str(),
            "--config-dir",
            dir,
        ])
        .assert()
        .success()
        .stdout("a payload larger than any single RSA block would allow");

    // Refuses to clobber existing keys.
    cryptocore()
        .args(["keygen", "--out-dir", dir, "--config-dir", dir])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn keygen_rejects_small_modulus() {
    let tmp = TempDir::new().unwrap();
    cryptocore()
        .args(["keygen", "--bits", "1024", "--out-dir"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2048"));
}

// ---------------------------------------------------------------------------
// completions
// ---------------------------------------------------------------------------

#[test]
fn completions_bash() {
    cryptocore()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cryptocore"));
}

#[test]
fn completions_unknown_shell_fails() {
    cryptocore().args(["completions", "csh"]).assert().failure();
}
