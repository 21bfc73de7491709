use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;

const DEFAULT_BRANCH: &str = "main";

impl Repository {
    /// Create the metadata directory, the object store and a HEAD pointer.
    ///
    /// An existing metadata directory is left untouched.
    pub fn init(&mut self) -> anyhow::Result<()> {
        let metadata_path = self.metadata_path();

        if metadata_path.exists() {
            writeln!(
                self.writer(),
                "A mygit repository already exists in {}",
                metadata_path.display()
            )?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .mygit/objects directory")?;

        fs::create_dir_all(metadata_path.join("refs").join("heads"))
            .context("Failed to create .mygit/refs/heads directory")?;

        fs::write(
            metadata_path.join("HEAD"),
            format!("ref: refs/heads/{DEFAULT_BRANCH}\n"),
        )
        .context("Failed to create initial HEAD reference")?;

        tracing::info!(path = %metadata_path.display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty mygit repository in {}",
            metadata_path.display()
        )?;

        Ok(())
    }
}
