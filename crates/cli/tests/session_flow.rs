use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn legol(state_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("legol").expect("legol binary");
    cmd.arg("--state-dir").arg(state_dir);
    cmd
}

#[test]
fn say_surfaces_matching_documents() {
    let dir = tempfile::TempDir::new().expect("tempdir");

    legol(dir.path())
        .args(["say", "I need help with my F-1 visa renewal", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ds-160"))
        .stdout(predicate::str::contains("sevis-receipt"));
}

#[test]
fn suggestions_read_the_persisted_session() {
    let dir = tempfile::TempDir::new().expect("tempdir");

    legol(dir.path())
        .args(["say", "How do I file taxes?"])
        .assert()
        .success();

    legol(dir.path())
        .args(["suggestions", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tax-returns"));
}

#[test]
fn fresh_session_suggests_the_defaults() {
    let dir = tempfile::TempDir::new().expect("tempdir");

    legol(dir.path())
        .args(["suggestions", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passport"))
        .stdout(predicate::str::contains("bank-statement"));
}

#[test]
fn clear_resets_to_the_seeded_state() {
    let dir = tempfile::TempDir::new().expect("tempdir");

    legol(dir.path())
        .args(["say", "marriage green card petition"])
        .assert()
        .success();
    legol(dir.path()).arg("clear").assert().success();

    legol(dir.path())
        .args(["suggestions", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marriage-cert").not());
}

#[test]
fn flowchart_emits_the_derived_graph() {
    let dir = tempfile::TempDir::new().expect("tempdir");

    legol(dir.path())
        .args(["say", "Do I need an FBI background check?"])
        .assert()
        .success();

    legol(dir.path())
        .args(["flowchart", "--json", "--focus", "background-check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("background-analysis"))
        .stdout(predicate::str::contains("connections"))
        .stdout(predicate::str::contains("highlighted"));
}

#[test]
fn show_dumps_the_transcript() {
    let dir = tempfile::TempDir::new().expect("tempdir");

    legol(dir.path())
        .args(["say", "hello"])
        .assert()
        .success();

    legol(dir.path())
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"messages\""))
        .stdout(predicate::str::contains("hello"));
}
