use crate::error::{LookupError, TransportError};

/// Fetches raw documents
///
/// The body is read to the end before returning, so nothing stays open
/// once the call completes, on success or failure.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url`; a non-success status is a `TransportError::Status`
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// A dictionary site that can be queried and parsed into a model
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync + 'static {
    type Entry: Send + 'static;

    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    /// Page that `query` would be looked up at, if known
    fn url(&self, query: &str) -> Option<String>;

    /// Fetch and parse the page for `query`
    async fn get(&self, query: &str) -> Result<Self::Entry, LookupError>;
}
