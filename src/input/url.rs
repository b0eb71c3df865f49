use anyhow::Context;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::input::Input;

/// UrlInput downloads the document from an Url
#[derive(Debug)]
pub struct UrlInput {
    url: Url,
}

impl UrlInput {
    /// Initalize a new UrlInput
    ///
    /// * `url`: url to download from
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// * `url`: an absolute http or https url
    pub fn parse(url: &str) -> anyhow::Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid document url: {}", url))?;
        match url.scheme() {
            "http" | "https" => Ok(Self::new(url)),
            s => Err(anyhow::anyhow!("unsupported url scheme: {}", s)),
        }
    }
}

#[async_trait]
impl Input for UrlInput {
    async fn read_document(&mut self) -> anyhow::Result<String> {
        let response = reqwest::get(self.url.clone())
            .await
            .with_context(|| format!("{}", self.url))?;

        let status_code = response.status();
        if status_code != StatusCode::OK {
            return Err(anyhow::anyhow!("status code {}: {}", status_code, self.url));
        }

        response
            .text()
            .await
            .with_context(|| format!("{}", self.url))
    }
}
