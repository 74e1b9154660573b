use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::error::FetchError;
use super::format::format_word;
use super::WordSource;
use crate::config::LookupConfig;

/// One entry of the service's response array. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct WordEntry {
    word: String,
}

/// HTTP client for the Datamuse `/words` endpoint.
pub struct DatamuseClient {
    client: Client,
    base_url: String,
    relation: String,
}

impl DatamuseClient {
    pub fn new(config: &LookupConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            relation: config.relation.clone(),
        })
    }

    /// Full request URL for `word`.
    ///
    /// Built by hand: a query builder would percent-encode the `+`.
    pub fn lookup_url(&self, word: &str) -> String {
        format!(
            "{}/words?{}={}",
            self.base_url,
            self.relation,
            format_word(word)
        )
    }
}

#[async_trait]
impl WordSource for DatamuseClient {
    async fn related_words(&self, word: &str) -> Result<Vec<String>, FetchError> {
        let url = self.lookup_url(word);
        tracing::debug!(%url, "lookup request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let entries: Vec<WordEntry> = serde_json::from_slice(&body)?;
        tracing::debug!(count = entries.len(), "lookup response");

        Ok(entries.into_iter().map(|entry| entry.word).collect())
    }
}
