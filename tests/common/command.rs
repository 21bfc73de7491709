use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_mygit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

#[fixture]
pub fn nested_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let file1 = FileSpec::new(
        init_repository_dir.path().join("file1.txt"),
        "content1".to_string(),
    );
    write_file(file1);

    let file2 = FileSpec::new(
        init_repository_dir.path().join("dir1").join("file2.txt"),
        "content2".to_string(),
    );
    write_file(file2);

    init_repository_dir
}

pub fn run_mygit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("mygit").expect("Failed to find mygit binary");
    cmd.env_remove("MYGIT_DIR");
    cmd.env_remove("MYGIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn write_tree(dir: &Path) -> String {
    let assert = run_mygit_command(dir, &["write-tree"]).assert().success();
    crate::common::stdout_of(assert).trim().to_string()
}
