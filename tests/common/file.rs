use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Write a random directory hierarchy below `dir` and return the files written
pub fn write_generated_directory(
    dir: &Path,
    files_count: usize,
    subdirs_count: usize,
    depth: usize,
) -> Vec<FileSpec> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    let mut files = Vec::new();

    for index in 0..files_count {
        // the index keeps generated names unique within a directory
        let file_name = format!("{}_{index}.txt", Word().fake::<String>());
        let file_content = Words(5..10).fake::<Vec<String>>().join(" ");

        let file_spec = FileSpec::new(dir.join(file_name), file_content);
        write_file(file_spec.clone());
        files.push(file_spec);
    }

    if depth > 0 {
        for index in 0..subdirs_count {
            let dir_name = format!("dir_{}_{index}", Word().fake::<String>());
            files.extend(write_generated_directory(
                &dir.join(dir_name),
                files_count,
                subdirs_count,
                depth - 1,
            ));
        }
    }

    files
}
