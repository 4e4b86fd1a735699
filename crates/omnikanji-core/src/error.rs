use std::time::Duration;

/// Failure while fetching a URL
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("reading body of {url} failed: {message}")]
    Body { url: String, message: String },
}

/// A fetched document lacks an element the parser relies on
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("glyph carries neither text nor an image")]
    MissingGlyph,

    #[error("invalid link {link:?}: {source}")]
    InvalidLink {
        link: String,
        #[source]
        source: url::ParseError,
    },

    #[error("fetching glyph image {url} failed: {source}")]
    Image {
        url: String,
        #[source]
        source: TransportError,
    },
}

/// Everything a single source lookup can fail with
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    #[error("parsing: {0}")]
    Parse(#[from] ParseError),

    #[error("no detail page known for {glyph:?}")]
    NotFound { glyph: String },

    #[error("{dictionary} lookup for {query:?} timed out after {after:?}")]
    Timeout {
        dictionary: &'static str,
        query: String,
        after: Duration,
    },

    #[error("lookup task failed: {0}")]
    TaskFailed(String),
}
