use super::ExtractionError;
use crate::pipeline::document::UploadedDocument;

/// Plain/code/markup text: the raw bytes read as UTF-8, unmodified.
/// Invalid sequences are replaced rather than rejected, so a text file with
/// a stray byte is still mostly text.
pub fn extract(doc: &UploadedDocument) -> Result<String, ExtractionError> {
    Ok(String::from_utf8_lossy(&doc.bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_utf8_verbatim() {
        let doc = UploadedDocument::new(
            "policy.txt",
            "text/plain",
            "Data retention policy — version 3".as_bytes().to_vec(),
        );
        assert_eq!(extract(&doc).unwrap(), "Data retention policy — version 3");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let doc = UploadedDocument::new("mixed.log", "text/plain", vec![b'o', b'k', 0xFF, b'!']);
        let text = extract(&doc).unwrap();
        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }
}
