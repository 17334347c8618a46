//! Minimal PDF renderer built on `lopdf`.
//!
//! Produces a plain-text rendition of the markup: tags are stripped, the
//! remaining text is laid out line by line in Helvetica on A4 pages. Header
//! repetition and page numbering honour the supplied options. This is the
//! built-in stand-in for a full HTML-to-PDF engine; anything heavier plugs in
//! behind the same port.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use tracing::{debug, instrument};

use dossier_core::application::pdf::{HeaderRepeat, PageNumbers, PdfArtifact, PdfOptions};
use dossier_core::application::{GenerationError, ports::PdfRenderer};
use dossier_core::error::DossierResult;

// A4 in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;

const MARGIN: f32 = 50.0;
const BODY_FONT_SIZE: i64 = 11;
const LINE_HEIGHT: f32 = 14.0;
const BODY_LINES_PER_PAGE: usize = 48;

/// PDF renderer producing text-only documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalPdfRenderer;

impl MinimalPdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PdfRenderer for MinimalPdfRenderer {
    #[instrument(skip_all, fields(markup_len = markup.len()))]
    fn render_from_html(&self, markup: &str, options: &PdfOptions) -> DossierResult<PdfArtifact> {
        let body_lines = extract_text_lines(markup);
        let header_line = extract_text_lines(&options.header.html).join(" ");

        let mut pages: Vec<&[String]> = body_lines.chunks(BODY_LINES_PER_PAGE).collect();
        if pages.is_empty() {
            pages.push(&[]);
        }
        let page_count = pages.len();
        debug!(page_count, "laying out document");

        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_ids: Vec<Object> = Vec::with_capacity(page_count);
        for (index, page_lines) in pages.iter().enumerate() {
            let header = match options.header.repeat {
                HeaderRepeat::AllPages => Some(header_line.as_str()),
                HeaderRepeat::FirstPageOnly if index == 0 => Some(header_line.as_str()),
                _ => None,
            };
            let footer = match options.page_numbers {
                PageNumbers::Numeric => Some(format!("Page {}", index + 1)),
                PageNumbers::None => None,
            };

            let content = page_content(header, page_lines, footer.as_deref());
            let encoded = content
                .encode()
                .map_err(|e| conversion_error("encoding page content", e))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
                "Resources" => resources_id,
                "Contents" => content_id,
            });
            page_ids.push(page_id.into());
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids,
                "Count" => page_count as i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| conversion_error("serializing document", e))?;
        Ok(PdfArtifact::new(buffer))
    }
}

fn conversion_error(stage: &str, source: impl std::fmt::Display) -> GenerationError {
    GenerationError::PdfConversion {
        reason: format!("{stage}: {source}"),
    }
}

fn page_content(header: Option<&str>, body: &[String], footer: Option<&str>) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), BODY_FONT_SIZE.into()]),
        Operation::new("TL", vec![LINE_HEIGHT.into()]),
        Operation::new(
            "Td",
            vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()],
        ),
    ];

    if let Some(header) = header.filter(|h| !h.is_empty()) {
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(header)],
        ));
        operations.push(Operation::new("T*", vec![]));
        operations.push(Operation::new("T*", vec![]));
    }

    for line in body {
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.as_str())],
        ));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    if let Some(footer) = footer {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 9.into()]));
        operations.push(Operation::new("Td", vec![MARGIN.into(), 30.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(footer)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    Content { operations }
}

/// Strip tags and decode common entities, yielding non-empty text lines.
///
/// Block-level closers and `<br>` introduce line breaks; everything else is
/// flattened into the current line.
fn extract_text_lines(markup: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        current.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) => {
                let tag = after[..close].trim().to_ascii_lowercase();
                if is_line_break_tag(&tag) {
                    flush_line(&mut lines, &mut current);
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unclosed tag: keep the raw text rather than dropping it.
                current.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    current.push_str(rest);
    flush_line(&mut lines, &mut current);
    lines
}

fn is_line_break_tag(tag: &str) -> bool {
    matches!(
        tag,
        "br" | "br/" | "br /"
            | "/p" | "/div" | "/li" | "/h1" | "/h2" | "/h3" | "/tr" | "/ul" | "/table"
    )
}

fn flush_line(lines: &mut Vec<String>, current: &mut String) {
    let text = decode_entities(current.trim());
    if !text.is_empty() {
        lines.push(text);
    }
    current.clear();
}

fn decode_entities(text: &str) -> String {
    text.replace("&mdash;", "\u{2014}")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
