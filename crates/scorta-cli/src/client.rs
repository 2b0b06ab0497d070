//! HTTP access to the store service's collection resource.

use reqwest::{Client, Url};
use scorta_api_types::Collection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server error: {0}")]
    Server(String),
    #[error("no product with id `{0}`")]
    NotFound(String),
    #[error("invalid input: {0}")]
    Validation(String),
}

/// Connection to one store service. The collection is the only resource; it
/// is always read and replaced whole.
#[derive(Clone, Debug)]
pub struct Remote {
    client: Client,
    collection_url: Url,
}

impl Remote {
    pub fn new(endpoint: &str) -> Result<Self, CliError> {
        let collection_url = Url::parse(endpoint)?.join("/collection")?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            client,
            collection_url,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("scorta-cli/", env!("CARGO_PKG_VERSION"))
    }

    /// Fetch the entire remote collection.
    pub async fn fetch_collection(&self) -> Result<Collection, CliError> {
        let resp = self.client.get(self.collection_url.clone()).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return Err(CliError::Server(format!("status {status} body {text}")));
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| CliError::Server(format!("failed to parse body: {e}")))
    }

    /// Replace the entire remote collection with `collection`.
    pub async fn replace_collection(&self, collection: &Collection) -> Result<(), CliError> {
        let resp = self
            .client
            .put(self.collection_url.clone())
            .json(collection)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(CliError::Server(format!("status {status} body {text}")));
        }
        Ok(())
    }
}
