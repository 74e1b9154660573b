//! Word lookup against the lexical service.
//!
//! `WordSource` is the seam between the view and the network;
//! `DatamuseClient` is the HTTP implementation.

mod client;
mod error;
mod format;

pub use client::DatamuseClient;
pub use error::FetchError;
pub use format::format_word;

use async_trait::async_trait;

/// Something that can return words related to a query word.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Returns related words in the order the source ranks them.
    async fn related_words(&self, word: &str) -> Result<Vec<String>, FetchError>;
}
