use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;

use crate::input::Input;

/// FileInput reads the document from a file
#[derive(Debug)]
pub struct FileInput {
    /// path on the file system
    path: PathBuf,
}

impl FileInput {
    /// * `path`: path on the file system
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Input for FileInput {
    async fn read_document(&mut self) -> anyhow::Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("unable to read {}", self.path.display()))
    }
}
