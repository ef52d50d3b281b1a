use scraper::{ElementRef, Html};

/// A fetched page, parsed once and owned by a single pipeline run.
pub struct Page {
    url: String,
    document: Html,
}

impl Page {
    pub fn parse(url: impl Into<String>, markup: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(markup),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn document(&self) -> &Html {
        &self.document
    }
}

/// Visible text of an element: every text node trimmed, empty ones dropped,
/// the rest joined without separator.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
