use crate::pipeline::document::UploadedDocument;

/// The fixed set of extraction strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    PlainText,
    PdfText,
    WordXml,
    SlidesXml,
    Spreadsheet,
    RichText,
    Image,
    Archive,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 8] = [
        HandlerKind::PlainText,
        HandlerKind::PdfText,
        HandlerKind::WordXml,
        HandlerKind::SlidesXml,
        HandlerKind::Spreadsheet,
        HandlerKind::RichText,
        HandlerKind::Image,
        HandlerKind::Archive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::PdfText => "pdf_text",
            Self::WordXml => "word_xml",
            Self::SlidesXml => "slides_xml",
            Self::Spreadsheet => "spreadsheet",
            Self::RichText => "rich_text",
            Self::Image => "image",
            Self::Archive => "archive",
        }
    }

    /// Lower-cased extensions (without dot) this handler claims.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::PlainText => &[
                // plain text and logs
                "txt", "text", "log", "ini", "cfg", "conf", "bat", "sh", "bash", "zsh",
                // code and markup
                "js", "jsx", "ts", "tsx", "html", "htm", "css", "scss", "less", "php", "py",
                "java", "cpp", "c", "h", "cs", "rb", "go", "rs", "swift", "kt", "kts",
                // documentation
                "md", "markdown", "rst", "tex", "latex",
                // structured data
                "json", "xml", "yaml", "yml", "toml", "csv", "tsv",
            ],
            Self::PdfText => &["pdf"],
            Self::WordXml => &["docx", "doc"],
            Self::SlidesXml => &["pptx", "ppt"],
            Self::Spreadsheet => &["xlsx", "xls", "xlsm", "xlsb"],
            Self::RichText => &["rtf"],
            Self::Image => &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"],
            Self::Archive => &["zip"],
        }
    }

    /// Declared MIME types this handler claims.
    pub fn mime_types(&self) -> &'static [&'static str] {
        match self {
            Self::PlainText => &[
                "text/plain",
                "application/javascript",
                "application/json",
                "text/html",
                "text/css",
                "application/xml",
                "text/x-python",
                "text/x-java",
                "text/x-c",
                "text/markdown",
                "text/x-rst",
                "text/csv",
                "text/tab-separated-values",
            ],
            Self::PdfText => &["application/pdf"],
            Self::WordXml => &[
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "application/msword",
            ],
            Self::SlidesXml => &[
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
                "application/vnd.ms-powerpoint",
            ],
            Self::Spreadsheet => &[
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                "application/vnd.ms-excel",
            ],
            Self::RichText => &["application/rtf", "text/rtf"],
            Self::Image => &[
                "image/jpeg",
                "image/png",
                "image/gif",
                "image/bmp",
                "image/tiff",
                "image/webp",
            ],
            Self::Archive => &["application/zip"],
        }
    }
}

/// Select the extraction handler for one uploaded file.
///
/// Extension first, declared MIME type second. Uploaded MIME types are
/// frequently wrong or empty, while the extension is what the user named
/// the file, which is more reliable for this domain. `None` means unsupported.
pub fn dispatch(doc: &UploadedDocument) -> Option<HandlerKind> {
    if let Some(ext) = doc.extension() {
        for kind in HandlerKind::ALL {
            if kind.extensions().contains(&ext.as_str()) {
                return Some(kind);
            }
        }
    }
    if !doc.mime_type.is_empty() {
        for kind in HandlerKind::ALL {
            if kind.mime_types().contains(&doc.mime_type.as_str()) {
                return Some(kind);
            }
        }
    }
    None
}
