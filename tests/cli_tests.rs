use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn packlang() -> Command {
    Command::cargo_bin("packlang").unwrap()
}

#[test]
fn cli_prints_ast_from_stdin() {
    packlang()
        .write_stdin("main() { 1 + 2 }")
        .assert()
        .success()
        .stdout(contains("Add").and(contains("main")));
}

#[test]
fn cli_emits_source() {
    packlang()
        .args(["--emit", "source"])
        .write_stdin("main(){x=1;x}")
        .assert()
        .success()
        .stdout("main() {\n    x = 1;\n    x\n}\n");
}

#[test]
fn cli_emits_stats() {
    packlang()
        .args(["--emit", "stats", "--threaded"])
        .write_stdin("main() { ((1)) }")
        .assert()
        .success()
        .stdout(contains("functions: 1").and(contains("memo hits:")));
}

#[test]
fn cli_fails_on_trailing_input() {
    packlang()
        .write_stdin("main() { 1 } 2")
        .assert()
        .failure()
        .stderr(contains("not fully consumed"));
}

#[test]
fn cli_fails_on_missing_file() {
    packlang()
        .arg("does/not/exist.pk")
        .assert()
        .failure()
        .stderr(contains("failed to read"));
}

#[test]
fn cli_handles_deep_nesting() {
    let depth = 2000;
    let input = format!("main() {{ {}1{} }}", "(".repeat(depth), ")".repeat(depth));
    packlang()
        .args(["--emit", "stats"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("functions: 1"));
}
