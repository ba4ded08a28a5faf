use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

use common::command::{
    FIRST, SECOND, address_change, configs_dir, run_ios_diff_command, write_configs,
};

#[rstest]
fn skipped_indentation_level_fails(configs_dir: TempDir) {
    write_configs(
        configs_dir.path(),
        "interface Gi0/1\n   shutdown\n",
        "hostname r1\n",
    );

    run_ios_diff_command(configs_dir.path(), &["diff", FIRST, SECOND])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to parse first.cfg"))
        .stderr(predicate::str::contains("line 2"));
}

#[rstest]
fn unterminated_banner_fails(configs_dir: TempDir) {
    write_configs(
        configs_dir.path(),
        "hostname r1\n",
        "banner motd #\nWelcome\n",
    );

    run_ios_diff_command(configs_dir.path(), &["patch", FIRST, SECOND])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse second.cfg"))
        .stderr(predicate::str::contains("never terminated"));
}

#[rstest]
fn missing_input_fails(address_change: TempDir) {
    run_ios_diff_command(address_change.path(), &["common", FIRST, "missing.cfg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("missing.cfg"));
}

#[rstest]
fn failed_parse_leaves_no_output_file(configs_dir: TempDir) {
    write_configs(configs_dir.path(), "hostname r1\n", "  hostname r2\n");

    run_ios_diff_command(configs_dir.path(), &["diff", "-o", "out.cfg", FIRST, SECOND])
        .assert()
        .code(1);

    assert!(!configs_dir.path().join("out.cfg").exists());
}

#[rstest]
#[case(&["diff", "first.cfg"])]
#[case(&["unknown", "first.cfg", "second.cfg"])]
#[case(&["patch", "--negation-marker"])]
fn usage_errors_exit_with_two(address_change: TempDir, #[case] args: &[&str]) {
    run_ios_diff_command(address_change.path(), args)
        .assert()
        .code(2);
}

#[test]
fn help_lists_every_verb() {
    let mut cmd = assert_cmd::Command::cargo_bin("ios-diff").unwrap();

    let assert = cmd.arg("--help").assert().success();
    let help = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for verb in ["first", "second", "common", "diff", "merge", "patch"] {
        assert!(help.contains(verb), "missing {verb} in:\n{help}");
    }
}
