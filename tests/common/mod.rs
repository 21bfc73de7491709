#![allow(dead_code)]

pub mod command;
pub mod file;

pub const EMPTY_TREE_OID: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
pub const HELLO_BLOB_OID: &str = "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0";

/// Count the object files below `.mygit/objects`
pub fn count_objects(repository_dir: &std::path::Path) -> usize {
    walkdir::WalkDir::new(repository_dir.join(".mygit").join("objects"))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count()
}

/// Stdout of a finished command as a string
pub fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
