/// One uploaded file as handed over by the caller (UI layer).
///
/// Immutable once constructed: the pipeline reads the payload but never
/// mutates it, and a document is consumed by at most one analysis run.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Display name, typically the original filename.
    pub name: String,
    /// MIME type as declared by the uploader. Browsers and OSes often get
    /// this wrong or leave it empty, so dispatch trusts the extension first.
    pub mime_type: String,
    /// Raw binary payload.
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Size in kilobytes, for human-readable fallback descriptors.
    pub fn size_kb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }

    /// Lower-cased file extension without the dot, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Declared MIME type, or `"unknown"` when the uploader left it empty.
    pub fn declared_type(&self) -> &str {
        if self.mime_type.is_empty() {
            "unknown"
        } else {
            &self.mime_type
        }
    }
}
