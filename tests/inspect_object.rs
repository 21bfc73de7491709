use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{init_repository_dir, nested_repository_dir, run_mygit_command, write_tree};

const ROOT_TREE_OID: &str = "60c6b9d6f5fb7a7966c9f0488b3927cfbec32e62";
const DIR1_TREE_OID: &str = "295a2e4d8c533806ae8a486b03d1301553bb8f2b";
const CONTENT1_OID: &str = "dd954e7a4e1a62ff90c5a0709dce5928716535c1";
const CONTENT2_OID: &str = "db00fd65b218578127ea51f3dffac701f12f486a";

#[rstest]
fn inspect_blob_prints_header_and_content(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    init_repository_dir.child("hello.txt").write_str("hello")?;
    run_mygit_command(init_repository_dir.path(), &["hash-object", "-w", "hello.txt"])
        .assert()
        .success();

    run_mygit_command(
        init_repository_dir.path(),
        &["inspect-object", common::HELLO_BLOB_OID],
    )
    .assert()
    .success()
    .stdout(predicate::str::diff(
        "type: blob\nsize: 5\n-------------------------\nhello\n",
    ));

    Ok(())
}

#[rstest]
fn inspect_tree_lists_entries_in_order(nested_repository_dir: TempDir) {
    write_tree(nested_repository_dir.path());

    run_mygit_command(
        nested_repository_dir.path(),
        &["inspect-object", ROOT_TREE_OID],
    )
    .assert()
    .success()
    .stdout(predicate::str::diff(format!(
        "type: tree\nsize: 68\n-------------------------\n40000 dir1 {DIR1_TREE_OID}\n100644 file1.txt {CONTENT1_OID}\n"
    )));
}

#[rstest]
fn abbreviated_ids_are_resolved(nested_repository_dir: TempDir) {
    write_tree(nested_repository_dir.path());

    run_mygit_command(nested_repository_dir.path(), &["cat-file", "-t", "60c6b9d"])
        .assert()
        .success()
        .stdout(predicate::str::diff("tree\n"));
}

#[rstest]
fn too_short_ids_are_rejected(nested_repository_dir: TempDir) {
    write_tree(nested_repository_dir.path());

    run_mygit_command(nested_repository_dir.path(), &["inspect-object", "60c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid object id"));
}

#[rstest]
fn missing_object_fails(init_repository_dir: TempDir) {
    run_mygit_command(
        init_repository_dir.path(),
        &["inspect-object", common::HELLO_BLOB_OID],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains(format!(
        "object {} not found",
        common::HELLO_BLOB_OID
    )));
}

#[rstest]
fn corrupt_object_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let (shard, file) = common::HELLO_BLOB_OID.split_at(2);
    let object_dir = init_repository_dir.path().join(".mygit/objects").join(shard);
    std::fs::create_dir_all(&object_dir)?;
    std::fs::write(object_dir.join(file), b"definitely not zlib")?;

    run_mygit_command(
        init_repository_dir.path(),
        &["inspect-object", common::HELLO_BLOB_OID],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("corrupt object"));

    Ok(())
}

#[rstest]
fn cat_file_prints_blob_type_and_size(nested_repository_dir: TempDir) {
    write_tree(nested_repository_dir.path());

    run_mygit_command(nested_repository_dir.path(), &["cat-file", "-p", CONTENT2_OID])
        .assert()
        .success()
        .stdout(predicate::str::diff("content2"));

    run_mygit_command(nested_repository_dir.path(), &["cat-file", "-t", CONTENT2_OID])
        .assert()
        .success()
        .stdout(predicate::str::diff("blob\n"));

    run_mygit_command(nested_repository_dir.path(), &["cat-file", "-s", CONTENT2_OID])
        .assert()
        .success()
        .stdout(predicate::str::diff("8\n"));
}

#[rstest]
fn cat_file_pretty_prints_tree(nested_repository_dir: TempDir) {
    write_tree(nested_repository_dir.path());

    run_mygit_command(nested_repository_dir.path(), &["cat-file", "-p", ROOT_TREE_OID])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "040000 tree {DIR1_TREE_OID}\tdir1\n100644 blob {CONTENT1_OID}\tfile1.txt\n"
        )));
}

#[rstest]
fn ls_tree_recurses_into_subtrees(nested_repository_dir: TempDir) {
    write_tree(nested_repository_dir.path());

    run_mygit_command(nested_repository_dir.path(), &["ls-tree", "-r", ROOT_TREE_OID])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "100644 blob {CONTENT2_OID}\tdir1/file2.txt\n100644 blob {CONTENT1_OID}\tfile1.txt\n"
        )));
}

#[rstest]
fn ls_tree_rejects_blobs(nested_repository_dir: TempDir) {
    write_tree(nested_repository_dir.path());

    run_mygit_command(nested_repository_dir.path(), &["ls-tree", CONTENT1_OID])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a tree object"));
}

#[rstest]
fn unknown_prefix_fails(nested_repository_dir: TempDir) {
    write_tree(nested_repository_dir.path());

    run_mygit_command(nested_repository_dir.path(), &["cat-file", "-t", "ffff0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No object matches ffff0"));
}

#[rstest]
fn ambiguous_prefix_lists_candidates(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let shard_dir = init_repository_dir.path().join(".mygit/objects/ab");
    std::fs::create_dir_all(&shard_dir)?;
    std::fs::write(shard_dir.join(format!("cd0{}", "0".repeat(35))), b"")?;
    std::fs::write(shard_dir.join(format!("cd1{}", "0".repeat(35))), b"")?;

    run_mygit_command(init_repository_dir.path(), &["inspect-object", "abcd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("short object ID abcd is ambiguous"))
        .stderr(predicate::str::contains("abcd000"))
        .stderr(predicate::str::contains("abcd100"));

    Ok(())
}

#[rstest]
fn cat_file_pretty_prints_nothing_for_empty_tree(init_repository_dir: TempDir) {
    let oid = write_tree(init_repository_dir.path());
    assert_eq!(oid, common::EMPTY_TREE_OID);

    run_mygit_command(init_repository_dir.path(), &["cat-file", "-p", &oid])
        .assert()
        .success()
        .stdout(predicate::str::diff(""));

    run_mygit_command(init_repository_dir.path(), &["cat-file", "-s", &oid])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}
