use crate::common::file::{ConfigSpec, write_config};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const FIRST: &str = "first.cfg";
pub const SECOND: &str = "second.cfg";

#[fixture]
pub fn configs_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// The address of one interface changes, everything else is shared
#[fixture]
pub fn address_change(configs_dir: TempDir) -> TempDir {
    write_configs(
        configs_dir.path(),
        "hostname r1\ninterface Gi0/1\n description uplink\n ip address 10.0.0.1 255.255.255.0\n",
        "hostname r1\ninterface Gi0/1\n description uplink\n ip address 10.0.0.2 255.255.255.0\n",
    );

    configs_dir
}

/// A second router that drops an interface, adds routing and changes a banner
#[fixture]
pub fn router_upgrade(configs_dir: TempDir) -> TempDir {
    write_configs(
        configs_dir.path(),
        "hostname r1\n\
         banner motd ^C\n\
         Authorized access only\n\
         ^C\n\
         interface Gi0/1\n \
          description uplink\n \
          shutdown\n\
         interface Gi0/2\n \
          description spare\n \
          shutdown\n\
         ip domain-lookup\n",
        "hostname r1\n\
         banner motd ^C\n\
         Authorized access only!\n\
         ^C\n\
         interface Gi0/1\n \
          description uplink\n\
         router ospf 1\n \
          network 10.0.0.0 0.0.0.255 area 0\n\
         no ip domain-lookup\n",
    );

    configs_dir
}

pub fn write_configs(dir: &Path, first: &str, second: &str) {
    write_config(&ConfigSpec::new(dir.join(FIRST), first.to_string()));
    write_config(&ConfigSpec::new(dir.join(SECOND), second.to_string()));
}

pub fn run_ios_diff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("ios-diff").expect("Failed to find ios-diff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Runs a verb on the two fixture files and returns its stdout
pub fn ios_diff_output(dir: &Path, verb: &str, flags: &[&str]) -> String {
    let mut args = vec![verb];
    args.extend_from_slice(flags);
    args.extend_from_slice(&[FIRST, SECOND]);

    let assert = run_ios_diff_command(dir, &args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
