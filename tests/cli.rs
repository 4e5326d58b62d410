//! CLI integration tests for phrase-share
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const PACK: &str = r#"[{"id":"cat-1","key":"1","text":"Tactical","children":[{"id":"msg-1","key":"1","text":"Rotate B"}]}]"#;

fn phrase_share() -> Command {
    let mut cmd = Command::cargo_bin("phrase-share").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn share_code(codec: &str) -> String {
    let output = phrase_share()
        .args(["share", "--codec", codec])
        .write_stdin(PACK)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    phrase_share()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("share codes"));
}

#[test]
fn test_version() {
    phrase_share()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("phrase-share"));
}

// ============================================================================
// Share / Load
// ============================================================================

#[test]
fn test_share_then_load_every_codec() {
    for codec in ["blocky", "arrow", "standard", "sussy"] {
        let code = share_code(codec);
        phrase_share()
            .arg("load")
            .write_stdin(code)
            .assert()
            .success()
            .stdout(predicate::str::contains("Rotate B"))
            .stdout(predicate::str::contains("\"children\""));
    }
}

#[test]
fn test_share_default_codec_from_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("share.toml");
    std::fs::write(&config, "[share]\ndefault_codec = \"arrow\"\n").unwrap();

    let output = phrase_share()
        .arg("share")
        .arg("--config")
        .arg(&config)
        .write_stdin(PACK)
        .output()
        .unwrap();
    assert!(output.status.success());

    phrase_share()
        .arg("detect")
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout("arrow\n");
}

#[test]
fn test_load_pretty() {
    phrase_share()
        .args(["load", "--pretty"])
        .write_stdin(share_code("blocky"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  {"));
}

#[test]
fn test_share_rejects_non_dialog_json() {
    phrase_share()
        .args(["share", "--codec", "arrow"])
        .write_stdin("{\"not\": \"a list\"}")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: Input is not a dialog list"));
}

#[test]
fn test_share_unknown_codec_suggests() {
    phrase_share()
        .args(["share", "--codec", "arow"])
        .write_stdin(PACK)
        .assert()
        .failure()
        .stderr(predicate::str::contains("codec 'arow' not found"))
        .stderr(predicate::str::contains("did you mean 'arrow'?"));
}

#[test]
fn test_load_empty_input() {
    phrase_share()
        .arg("load")
        .write_stdin("  \n")
        .assert()
        .failure()
        .code(1)
        .stderr("error: Code is empty.\n");
}

#[test]
fn test_load_unknown_format() {
    phrase_share()
        .arg("load")
        .write_stdin("hello, world!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown code format"));
}

#[test]
fn test_load_rejects_plain_json_payload() {
    // valid base64, but the payload was never gzip'd
    let dir = tempdir().unwrap();
    let file = dir.path().join("obj.json");
    std::fs::write(&file, "{\"id\": \"x\"}").unwrap();
    let output = phrase_share().args(["encode", "--codec", "standard"]).arg(&file).output().unwrap();
    assert!(output.status.success());

    phrase_share()
        .arg("load")
        .write_stdin(output.stdout)
        .assert()
        .failure();
}

// ============================================================================
// Detect / Encode / Decode
// ============================================================================

#[test]
fn test_detect() {
    phrase_share()
        .arg("detect")
        .write_stdin("▀▄█▌")
        .assert()
        .success()
        .stdout("blocky\n");

    phrase_share()
        .arg("detect")
        .write_stdin("ඞීඞී")
        .assert()
        .success()
        .stdout("sussy\n");

    phrase_share()
        .arg("detect")
        .write_stdin("Zm9vYmFy")
        .assert()
        .success()
        .stdout("standard\n");
}

#[test]
fn test_encode_decode_raw() {
    phrase_share()
        .args(["encode", "--codec", "base64"])
        .write_stdin("foobar")
        .assert()
        .success()
        .stdout("Zm9vYmFy\n");

    phrase_share()
        .args(["decode", "--codec", "standard"])
        .write_stdin("Zm9v\nYmFy\n")
        .assert()
        .success()
        .stdout("foobar");
}

#[test]
fn test_decode_sniffs_codec() {
    let output = phrase_share()
        .args(["encode", "--codec", "sussy"])
        .write_stdin("gg")
        .output()
        .unwrap();
    assert!(output.status.success());

    phrase_share()
        .arg("decode")
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout("gg");
}

#[test]
fn test_decode_bad_base64_reports_diagnostic() {
    phrase_share()
        .args(["decode", "--codec", "standard"])
        .write_stdin("Zm9v_mFy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '_'"));
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_preset_list_defaults() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("presets.json");

    phrase_share()
        .args(["preset", "--store"])
        .arg(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("* FPS Tactical"))
        .stdout(predicate::str::contains("Team Fortress 2"));

    // listing does not create the file
    assert!(!store.exists());
}

#[test]
fn test_preset_import_export() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("presets.json");

    phrase_share()
        .args(["preset", "--store"])
        .arg(&store)
        .args(["select", "moba strategy"])
        .assert()
        .success()
        .stdout("MOBA Strategy\n");

    phrase_share()
        .args(["preset", "--store"])
        .arg(&store)
        .arg("import")
        .write_stdin(share_code("arrow"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded 1 messages into 'MOBA Strategy'"));

    let output = phrase_share()
        .args(["preset", "--store"])
        .arg(&store)
        .args(["export", "--codec", "standard"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let notice = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(notice.contains("Exported 'MOBA Strategy' as Standard (Base64)"));

    phrase_share()
        .arg("load")
        .write_stdin(output.stdout)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rotate B"));
}

#[test]
fn test_preset_failed_import_keeps_store() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("presets.json");

    phrase_share()
        .args(["preset", "--store"])
        .arg(&store)
        .arg("import")
        .write_stdin("▀▄█▌▐░▒▓")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid or corrupted code"));

    assert!(!store.exists());
}

#[test]
fn test_preset_reset() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("presets.json");

    phrase_share()
        .args(["preset", "--store"])
        .arg(&store)
        .arg("import")
        .write_stdin(share_code("blocky"))
        .assert()
        .success();

    phrase_share()
        .args(["--quiet", "preset", "--store"])
        .arg(&store)
        .arg("reset")
        .assert()
        .success()
        .stderr("");

    let saved = std::fs::read_to_string(&store).unwrap();
    assert!(!saved.contains("Rotate B"));
}
