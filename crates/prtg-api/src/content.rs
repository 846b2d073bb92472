use std::fmt;

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderMap, HeaderName};

/// Serialization format of a PRTG response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Json,
    Xml,
}

impl ContentKind {
    /// Work out the body format from response headers.
    ///
    /// PRTG marks XML table exports with
    /// `Content-Disposition: attachment; filename=table.xml` while sending a
    /// `text/html` content type, so the disposition is checked first. When
    /// neither header is conclusive the format of the requested endpoint
    /// (`requested`) is assumed.
    pub fn from_headers(headers: &HeaderMap, requested: ContentKind) -> Self {
        let header = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_ascii_lowercase)
        };

        if let Some(disposition) = header(CONTENT_DISPOSITION) {
            if disposition.contains(".xml") {
                return Self::Xml;
            }
            if disposition.contains(".json") {
                return Self::Json;
            }
        }

        match header(CONTENT_TYPE) {
            Some(ct) if ct.contains("xml") => Self::Xml,
            Some(ct) if ct.contains("json") => Self::Json,
            _ => requested,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Xml => f.write_str("XML"),
        }
    }
}
