use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_mentions_the_server_url_flag() {
    Command::cargo_bin("mediatecactl")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--server-url"));
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("mediatecactl")
        .expect("binary builds")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediatecactl"));
}
