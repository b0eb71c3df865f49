use anyhow::Context;
use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::input::Input;

/// StdinInput reads the document from standard input until EOF
#[derive(Debug, Default)]
pub struct StdinInput;

#[async_trait]
impl Input for StdinInput {
    async fn read_document(&mut self) -> anyhow::Result<String> {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .with_context(|| "unable to read document from stdin")?;
        Ok(text)
    }
}
