use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{repository_dir, run_mygit_command};

#[rstest]
fn new_repository_initiated_with_metadata_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata_path = repository_dir.path().canonicalize()?.join(".mygit");

    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty mygit repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(metadata_path.display().to_string()));

    assert!(metadata_path.join("objects").is_dir());
    assert!(metadata_path.join("refs").join("heads").is_dir());
    pretty_assertions::assert_eq!(
        std::fs::read_to_string(metadata_path.join("HEAD"))?,
        "ref: refs/heads/main\n"
    );
    assert_eq!(common::count_objects(repository_dir.path()), 0);

    Ok(())
}

#[rstest]
fn init_at_explicit_path_creates_the_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mygit_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(
        repository_dir
            .path()
            .join("nested/project/.mygit/objects")
            .is_dir()
    );

    Ok(())
}

#[rstest]
fn init_twice_keeps_existing_repository(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let head_path = repository_dir.path().join(".mygit").join("HEAD");
    std::fs::write(&head_path, "ref: refs/heads/feature\n")?;

    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(
        std::fs::read_to_string(&head_path)?,
        "ref: refs/heads/feature\n"
    );

    Ok(())
}
