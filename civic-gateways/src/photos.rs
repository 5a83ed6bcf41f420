//! The `photos` bucket as a directory on the local file system.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{bail, Result};

use civic_core::gateways::photos::PhotoStorageGateway;

#[derive(Debug, Clone)]
pub struct FileSystemPhotoStorage {
    root_dir: PathBuf,
    public_base_url: String,
}

impl FileSystemPhotoStorage {
    pub fn new(root_dir: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            root_dir: root_dir.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}

impl PhotoStorageGateway for FileSystemPhotoStorage {
    fn store(&self, path: &str, data: &[u8]) -> Result<String> {
        let relative = Path::new(path);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            bail!("Invalid photo path: {path}");
        }
        let file_path = self.root_dir.join(relative);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, data)?;
        log::debug!("Stored photo {}", file_path.display());
        Ok(format!("{}/{path}", self.public_base_url))
    }
}
