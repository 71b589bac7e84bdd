use thiserror::Error;

/// Structural inconsistency found while cutting a tagged document into segments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("fragment {index} opens a position label but never closes it: {fragment:?}")]
    UnterminatedLabel { index: usize, fragment: String },
}

/// The document bytes could not be turned into flattened text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("document could not be rendered: {0}")]
pub struct RenderError(pub String);

/// Listing or fetching result documents failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("listing failed: {0}")]
    Listing(String),

    #[error("download of {reference} failed: {reason}")]
    Download { reference: String, reason: String },
}

/// One lottery's document could not contribute to a snapshot.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("{lottery}: {source}")]
    Source { lottery: String, source: SourceError },

    #[error("{lottery}: {source}")]
    Render { lottery: String, source: RenderError },

    #[error("{lottery}: {source}")]
    Parse { lottery: String, source: ParseError },

    #[error("{lottery}: worker task failed: {reason}")]
    Task { lottery: String, reason: String },
}

impl DocumentError {
    pub fn lottery(&self) -> &str {
        match self {
            DocumentError::Source { lottery, .. }
            | DocumentError::Render { lottery, .. }
            | DocumentError::Parse { lottery, .. }
            | DocumentError::Task { lottery, .. } => lottery,
        }
    }
}

/// A refresh that published nothing; the previous snapshot stays in place.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("failed to fetch lottery list: {0}")]
    Listing(#[source] SourceError),

    #[error("no lottery list found")]
    NoDocuments,

    #[error("no results found ({} documents failed)", .failed.len())]
    NoResults { failed: Vec<DocumentError> },
}
