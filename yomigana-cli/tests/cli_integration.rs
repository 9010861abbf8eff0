//! Integration tests for the yomigana CLI
//!
//! No compiled dictionary ships with the repository, so these tests pin
//! down the pass-through behavior and the failure modes around it.

use assert_cmd::Command;
use predicates::prelude::*;

fn yomigana() -> Command {
    let mut cmd = Command::cargo_bin("yomigana").expect("binary builds");
    cmd.env_remove("YOMIGANA_DICT");
    cmd
}

#[test]
fn annotate_without_dictionary_passes_text_through() {
    yomigana()
        .args(["annotate", "--quiet"])
        .write_stdin("私は学校で食べる\nsecond line\n")
        .assert()
        .success()
        .stdout("私は学校で食べる\nsecond line\n");
}

#[test]
fn annotate_json_without_dictionary_emits_plain_segments() {
    let assert = yomigana()
        .args(["annotate", "--quiet", "--format", "json"])
        .write_stdin("学校\n")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(lines[0]["text"], "学校");
    assert_eq!(lines[0]["segments"][0]["reading"], serde_json::Value::Null);
}

#[test]
fn annotate_html_without_dictionary_keeps_line_breaks() {
    yomigana()
        .args(["annotate", "--quiet", "--format", "html"])
        .write_stdin("一行目\n二行目\n")
        .assert()
        .success()
        .stdout("一行目<br>\n二行目<br>\n");
}

#[test]
fn annotate_reads_named_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, "ファイルの中身\n".as_bytes()).unwrap();
    yomigana()
        .args(["annotate", "--quiet"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("ファイルの中身\n");
}

#[test]
fn annotate_rejects_missing_input_file() {
    yomigana()
        .args(["annotate", "--quiet", "no/such/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no/such/input.txt"));
}

#[test]
fn annotate_rejects_missing_dictionary_file() {
    yomigana()
        .args(["annotate", "--quiet", "--dictionary", "no/such/system.dic"])
        .write_stdin("学校\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no/such/system.dic"));
}

#[test]
fn tokens_requires_a_dictionary() {
    yomigana()
        .args(["tokens", "--quiet"])
        .write_stdin("学校\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dictionary"));
}

#[test]
fn config_file_supplies_the_dictionary_path() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(
        &mut config,
        b"[analyzer]\ndictionary = \"no/such/from_config.dic\"\nreading_field = 7\n",
    )
    .unwrap();
    yomigana()
        .args(["annotate", "--quiet", "--config"])
        .arg(config.path())
        .write_stdin("学校\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("from_config.dic"));
}
