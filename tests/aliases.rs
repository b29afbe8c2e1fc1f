use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command() -> Command {
    Command::cargo_bin("fileinfo").expect("binary exists")
}

#[test]
fn alias_i_works_like_info() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("notes.md");
    file.write_str("# notes").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("i")
        .arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("~/notes.md"))
        .stdout(predicate::str::contains("7 bytes"));
}

#[test]
fn alias_b64_works_like_base64() {
    let mut cmd = command();
    cmd.arg("b64").arg("--help");

    cmd.assert().success().stdout(predicate::str::contains("base64 encoding of a file"));
}

#[test]
fn alias_cfg_works_like_config() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("cfg")
        .arg("--path");

    cmd.assert().success().stdout(predicate::str::contains("config.toml"));
}
