use assert_cmd::Command;
use predicates::prelude::predicate;

mod common;

use common::command::run_arc_command;

#[test]
fn init_creates_the_repository_layout() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("arc")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty repository in .+$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let metadata = dir.path().join(".git");
    assert!(metadata.join("objects").is_dir());
    assert!(metadata.join("refs").join("heads").is_dir());
    assert!(metadata.join("refs").join("tags").is_dir());
    assert!(metadata.join("branches").is_dir());

    let head = std::fs::read_to_string(metadata.join("HEAD"))?;
    assert_eq!(head, "ref: refs/heads/master\n");

    let config = std::fs::read_to_string(metadata.join("config"))?;
    assert!(config.contains("repositoryformatversion = 0"));
    assert!(config.contains("filemode = false"));
    assert!(config.contains("bare = false"));

    let description = std::fs::read_to_string(metadata.join("description"))?;
    assert!(description.contains("Unnamed repository"));

    Ok(())
}

#[test]
fn init_defaults_to_the_current_directory() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;

    run_arc_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty repository in"));

    assert!(dir.path().join(".git").join("objects").is_dir());

    Ok(())
}

#[test]
fn init_on_a_non_empty_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    std::fs::write(dir.path().join("occupant.txt"), "already here")?;

    let mut sut = Command::cargo_bin("arc")?;
    sut.arg("init").arg(dir.path());

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert!(!dir.path().join(".git").exists());

    Ok(())
}

#[test]
fn init_on_a_regular_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let file_path = dir.path().join("plain.txt");
    std::fs::write(&file_path, "not a directory")?;

    let mut sut = Command::cargo_bin("arc")?;
    sut.arg("init").arg(&file_path);

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));

    Ok(())
}

#[test]
fn init_on_a_fresh_path_creates_it_and_reopens_cleanly() -> Result<(), Box<dyn std::error::Error>>
{
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;

    // "demo" does not exist yet
    run_arc_command(dir.path(), &["init", "demo"])
        .assert()
        .success();

    let demo = dir.path().join("demo");
    let config = std::fs::read_to_string(demo.join(".git").join("config"))?;
    assert!(config.contains("repositoryformatversion = 0"));

    // a follow-up command re-opens the repository without complaint
    std::fs::write(demo.join("greeting.txt"), "hello")?;
    let output = run_arc_command(&demo, &["hash-object", "-w", "greeting.txt"]).output()?;
    assert!(output.status.success());
    let object_id = String::from_utf8(output.stdout)?;

    run_arc_command(&demo, &["cat-file", "blob", object_id.trim()])
        .assert()
        .success()
        .stdout(predicate::str::diff("hello"));

    Ok(())
}

#[test]
fn commands_refuse_an_unsupported_format_version() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    run_arc_command(dir.path(), &["init"]).assert().success();

    // metadata directory and config file both exist; only the version is off
    std::fs::write(
        dir.path().join(".git").join("config"),
        "[core]\nrepositoryformatversion = 1\nfilemode = false\nbare = false\n",
    )?;

    run_arc_command(
        dir.path(),
        &["cat-file", "blob", "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "Unsupported repository format version: 1",
    ));

    Ok(())
}

#[test]
fn commands_refuse_a_repository_without_a_config_file() -> Result<(), Box<dyn std::error::Error>>
{
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    run_arc_command(dir.path(), &["init"]).assert().success();

    std::fs::remove_file(dir.path().join(".git").join("config"))?;

    run_arc_command(
        dir.path(),
        &["cat-file", "blob", "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("Configuration file missing"));

    Ok(())
}
