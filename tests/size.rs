use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command(config: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fileinfo").expect("binary exists");
    cmd.env("HOME", config.path()).env("XDG_CONFIG_HOME", config.child("config").path());
    cmd
}

#[test]
fn size_formats_bracket_boundaries() {
    let temp = assert_fs::TempDir::new().unwrap();

    for (input, expected) in [
        ("1023", "1023 bytes\n"),
        ("1024", "1 KB\n"),
        ("1047552", "1023 KB\n"),
        ("1048575", "1 MB\n"),
    ] {
        command(&temp).arg("size").arg(input).assert().success().stdout(expected);
    }
}

#[test]
fn size_honours_decimal_places() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp).args(["size", "5368709120", "-d", "2"]).assert().success().stdout("5.00 GB\n");
    command(&temp).args(["size", "0", "--decimals", "3"]).assert().success().stdout("0.000 bytes\n");
    command(&temp).args(["size", "-500", "-d", "1"]).assert().success().stdout("0.0 bytes\n");
}

#[test]
fn size_accepts_unit_quantities() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp).args(["sz", "5 GiB", "-d", "2"]).assert().success().stdout("5.00 GB\n");
    command(&temp).args(["sz", "100 EiB"]).assert().success().stdout("100 EB\n");
}

#[test]
fn size_reads_back_its_own_labels() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp).args(["size", "5 GB", "-d", "2"]).assert().success().stdout("5.00 GB\n");
    command(&temp).args(["size", "1.50 KB", "-d", "2"]).assert().success().stdout("1.50 KB\n");
}

#[test]
fn size_rejects_excessive_decimal_places() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp)
        .args(["size", "1", "-d", "2147483647"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 28"));
}

#[test]
fn size_rejects_negative_decimal_places() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp)
        .args(["size", "1024", "-d", "-1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn size_rejects_garbage_input() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp)
        .args(["size", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid byte quantity 'lots'"));
}

#[test]
fn version_flag_works() {
    let temp = assert_fs::TempDir::new().unwrap();

    command(&temp).arg("--version").assert().success();
}
