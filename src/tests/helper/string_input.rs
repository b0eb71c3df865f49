use async_trait::async_trait;

use crate::input::Input;

/// StringInput implements the Input trait for an in-memory document
#[derive(Debug)]
pub struct StringInput {
    document: String,
}

impl StringInput {
    pub fn new(document: &str) -> Self {
        Self {
            document: document.to_string(),
        }
    }
}

#[async_trait]
impl Input for StringInput {
    async fn read_document(&mut self) -> anyhow::Result<String> {
        Ok(self.document.clone())
    }
}
