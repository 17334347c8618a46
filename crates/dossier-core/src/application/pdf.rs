//! PDF layout options and the rendered artifact.
//!
//! [`PdfOptions`] is fixed, non-derived configuration applied identically to
//! every generated document: numeric page numbers, the standard header on the
//! first page only. Nothing in it depends on the application being rendered.

use serde::{Deserialize, Serialize};

/// Fixed header markup stamped onto documents.
pub const DEFAULT_HEADER_HTML: &str = "<div class=\"doc-header\">Dossier &mdash; Application Summary</div>";

/// Page numbering style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageNumbers {
    /// `Page 1`, `Page 2`, ...
    #[default]
    Numeric,
    /// No page numbers.
    None,
}

/// How often the header is repeated across pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderRepeat {
    #[default]
    FirstPageOnly,
    AllPages,
    None,
}

/// Header placement and markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderOptions {
    pub repeat: HeaderRepeat,
    pub html: String,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            repeat: HeaderRepeat::FirstPageOnly,
            html: DEFAULT_HEADER_HTML.to_string(),
        }
    }
}

/// Layout options handed to the PDF renderer.
///
/// `Default` IS the document standard — every generated document uses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfOptions {
    pub page_numbers: PageNumbers,
    pub header: HeaderOptions,
}

/// A rendered PDF, convertible to raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfArtifact {
    bytes: Vec<u8>,
}

impl PdfArtifact {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Consume the artifact and hand back the raw byte sequence.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Borrow the raw byte sequence.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
