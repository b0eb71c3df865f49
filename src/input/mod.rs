pub(crate) mod file;
pub(crate) mod stdin;
pub(crate) mod url;

use async_trait::async_trait;

/// Input is the trait all document sources must implement
#[async_trait]
pub trait Input {
    /// reads the whole markdown document
    async fn read_document(&mut self) -> anyhow::Result<String>;
}
