use crate::artifacts::objects::entry_mode::{EntryMode, FileMode};
use crate::errors::{ObjectError, ObjectResult};
use bytes::Bytes;
use derive_new::new;
use is_executable::IsExecutable;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Name of the repository metadata directory, never part of a snapshot
pub const METADATA_DIR: &str = ".mygit";

/// A directory entry that can be recorded in a tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct WorkspaceEntry {
    pub path: PathBuf,
    pub name: String,
    pub mode: EntryMode,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the direct children of `dir_path` in byte-wise name order.
    ///
    /// The metadata directory is excluded by name and entries that are neither
    /// directories, regular files nor symlinks are skipped.
    pub fn list_dir(&self, dir_path: &Path) -> ObjectResult<Vec<WorkspaceEntry>> {
        let dir_path = self.path.join(dir_path);

        let mut entries = Vec::new();
        for entry in WalkDir::new(&dir_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry))
        {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(&dir_path).to_path_buf();
                ObjectError::unreadable(path, err.into())
            })?;

            let Some(mode) = Self::classify(&entry) else {
                tracing::debug!(path = %entry.path().display(), "skipping unsupported entry type");
                continue;
            };

            let name = entry.file_name().to_str().ok_or_else(|| {
                ObjectError::unreadable(
                    entry.path(),
                    std::io::Error::new(std::io::ErrorKind::InvalidData, "file name is not UTF-8"),
                )
            })?;

            entries.push(WorkspaceEntry::new(
                entry.path().to_path_buf(),
                name.to_string(),
                mode,
            ));
        }

        Ok(entries)
    }

    fn is_ignored(entry: &DirEntry) -> bool {
        entry.file_name() == std::ffi::OsStr::new(METADATA_DIR)
    }

    fn classify(entry: &DirEntry) -> Option<EntryMode> {
        let file_type = entry.file_type();

        if file_type.is_dir() {
            Some(EntryMode::Directory)
        } else if file_type.is_symlink() {
            Some(EntryMode::Symlink)
        } else if file_type.is_file() {
            match entry.path().is_executable() {
                true => Some(EntryMode::File(FileMode::Executable)),
                false => Some(EntryMode::File(FileMode::Regular)),
            }
        } else {
            None
        }
    }

    pub fn read_file(&self, file_path: &Path) -> ObjectResult<Bytes> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .map(Bytes::from)
            .map_err(|err| ObjectError::unreadable(file_path, err))
    }

    /// The target of a symlink as raw bytes; the link itself is not followed.
    pub fn read_link(&self, link_path: &Path) -> ObjectResult<Bytes> {
        let link_path = self.path.join(link_path);
        let target = std::fs::read_link(&link_path)
            .map_err(|err| ObjectError::unreadable(&link_path, err))?;

        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            Ok(Bytes::copy_from_slice(target.as_os_str().as_bytes()))
        }

        #[cfg(not(unix))]
        {
            Ok(Bytes::from(target.to_string_lossy().into_owned()))
        }
    }
}
