use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_arc_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_arc_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("arc").expect("Failed to find arc binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
