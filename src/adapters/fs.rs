use crate::domain::ports::ImageStore;
use crate::utils::error::Result;
use std::path::Path;

/// Lists image folders on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalImageStore;

impl LocalImageStore {
    pub fn new() -> Self {
        Self
    }
}

impl ImageStore for LocalImageStore {
    async fn list_files(&self, dir: &str) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(Path::new(dir)).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            // 非 UTF-8 檔名無法組成 URL，直接略過
            if let Ok(name) = entry.file_name().into_string() {
                files.push(name);
            }
        }

        tracing::debug!("Listed {} files in {}", files.len(), dir);
        Ok(files)
    }
}
