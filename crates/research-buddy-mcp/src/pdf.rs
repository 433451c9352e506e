//! Open-access PDF text extraction.
//!
//! Downloads a PDF, reads its pages in order with lopdf and truncates the
//! text to a character budget. The caller is a tool host that shows return
//! values to the model, so every failure comes back as a readable
//! `Error...` string instead of an `Err`.

use std::time::Duration;

use lopdf::Document;
use reqwest::header::CONTENT_TYPE;

/// Returned when the response is not a PDF.
pub const NOT_A_PDF: &str = "Error: URL does not point to a PDF file.";

/// Returned when a valid PDF yields no text.
pub const NO_TEXT: &str = "Error: No text could be extracted from the PDF.";

/// Appended when the text was cut at the character budget.
pub const TRUNCATION_MARKER: &str = "... [Truncated]";

/// Default character budget.
pub const DEFAULT_MAX_CHARS: usize = 10_000;

/// Fetches PDFs and extracts their text.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    client: reqwest::Client,
}

impl PdfExtractor {
    /// Create an extractor whose downloads time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Download `url` and return at most `max_chars` characters of its text.
    ///
    /// Never fails: errors are reported in the returned string.
    pub async fn extract_text(&self, url: &str, max_chars: usize) -> String {
        match self.try_extract(url, max_chars).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(url, error = %e, "PDF extraction failed");
                format!("Error extracting PDF text: {e}")
            }
        }
    }

    async fn try_extract(&self, url: &str, max_chars: usize) -> anyhow::Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let is_pdf = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/pdf"));

        if !is_pdf {
            tracing::debug!(url, "Response is not a PDF");
            return Ok(NOT_A_PDF.to_string());
        }

        let bytes = response.bytes().await?;
        tracing::debug!(url, bytes = bytes.len(), "Downloaded PDF");

        let text = tokio::task::spawn_blocking(move || extract_from_bytes(&bytes, max_chars)).await??;
        Ok(text)
    }
}

/// Parse a PDF held in memory and collect its text under the character budget.
///
/// # Errors
///
/// Returns error if the document cannot be parsed.
pub fn extract_from_bytes(bytes: &[u8], max_chars: usize) -> Result<String, lopdf::Error> {
    let doc = Document::load_mem(bytes)?;

    let pages = doc.get_pages().into_keys().map(|page| {
        doc.extract_text(&[page]).unwrap_or_else(|e| {
            tracing::warn!(page, error = %e, "Failed to extract text from page, skipping");
            String::new()
        })
    });

    Ok(collect_pages(pages, max_chars))
}

/// Join page texts, one line break after each page.
///
/// Pages are pulled lazily and reading stops at the first page that pushes
/// the text past `max_chars`; the text is then cut to exactly `max_chars`
/// characters and marked as truncated.
pub fn collect_pages<I>(pages: I, max_chars: usize) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    let mut chars = 0;

    for page in pages {
        chars += page.chars().count() + 1;
        text.push_str(&page);
        text.push('\n');

        if chars > max_chars {
            let cut = text.char_indices().nth(max_chars).map_or(text.len(), |(i, _)| i);
            text.truncate(cut);
            text.push_str(TRUNCATION_MARKER);
            break;
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() { NO_TEXT.to_string() } else { trimmed.to_string() }
}
