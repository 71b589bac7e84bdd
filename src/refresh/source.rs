use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{RenderError, SourceError};

/// One entry of a published result listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Lottery name; becomes the key in [`LotteryResults::results`](crate::LotteryResults).
    pub name: String,
    /// Draw date as printed in the listing (`DD/MM/YYYY` by default).
    pub date: String,
    /// Opaque handle handed back to [`ResultSource::fetch_document`].
    pub reference: String,
}

impl DocumentRef {
    pub fn new(name: impl Into<String>, date: impl Into<String>, reference: impl Into<String>) -> Self {
        Self { name: name.into(), date: date.into(), reference: reference.into() }
    }
}

/// Where result documents come from.
///
/// An empty listing is a valid answer ("nothing published yet"); the
/// refresher decides whether that is an error.
#[async_trait]
pub trait ResultSource: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<DocumentRef>, SourceError>;

    async fn fetch_document(&self, reference: &str) -> Result<Vec<u8>, SourceError>;
}

/// Turns a page-oriented document into one left-to-right, top-to-bottom line
/// of words.
pub trait Renderer: Send + Sync {
    fn render_to_flat_text(&self, bytes: &[u8]) -> Result<String, RenderError>;
}

/// Renderer for documents that are already UTF-8 text. Line breaks become
/// single spaces; spacing inside a line is kept as the normalizer relies on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn render_to_flat_text(&self, bytes: &[u8]) -> Result<String, RenderError> {
        let text = std::str::from_utf8(bytes).map_err(|e| RenderError(format!("not UTF-8 text: {e}")))?;
        Ok(text.lines().collect::<Vec<_>>().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_flattened_to_one_line() {
        let text = PlainTextRenderer.render_to_flat_text(b"1st Prize\nAB 123456\r\n4567").unwrap();
        assert_eq!(text, "1st Prize AB 123456 4567");
    }

    #[test]
    fn inline_spacing_is_preserved() {
        let text = PlainTextRenderer.render_to_flat_text(b"Page 1  IT Support").unwrap();
        assert_eq!(text, "Page 1  IT Support");
    }

    #[test]
    fn invalid_utf8_is_a_render_error() {
        let err = PlainTextRenderer.render_to_flat_text(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(err.0.contains("UTF-8"));
    }
}
