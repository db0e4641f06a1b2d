use super::types::{Engines, OcrEngine};
use super::ExtractionError;
use crate::pipeline::document::UploadedDocument;
use crate::progress::ProgressChannel;

/// Raster images: OCR when an engine is available, otherwise an advisory
/// descriptor. Recognition progress is forwarded as a sub-stage on the
/// run's progress channel.
pub fn extract(
    doc: &UploadedDocument,
    engines: &Engines,
    progress: &ProgressChannel,
) -> Result<String, ExtractionError> {
    if let Some(ocr) = &engines.ocr {
        progress.emit(&format!("Performing OCR on {}...", doc.name), 0);

        let result = ocr.recognize(&doc.bytes, &|fraction: f32| {
            let fraction = fraction.clamp(0.0, 1.0);
            // OCR sub-stage maps into the 30-60 band of the run.
            let percent = 30 + (fraction * 30.0).round() as u8;
            progress.emit(
                &format!("OCR progress: {}%", (fraction * 100.0).round() as u32),
                percent,
            );
        });

        match result {
            Ok(text) if !text.trim().is_empty() => {
                return Ok(format!("[OCR extracted text from {}:\n{}]", doc.name, text));
            }
            Ok(_) => {
                tracing::debug!(file = %doc.name, "OCR recognized no text");
            }
            Err(e) => {
                tracing::warn!(file = %doc.name, error = %e, "OCR failed");
            }
        }
    }

    Ok(format!(
        "[Image file: {} - Size: {:.1}KB. For text extraction from images, \
         please enable OCR or convert to PDF/text.]",
        doc.name,
        doc.size_kb()
    ))
}

/// Mock OCR engine. Returns a configurable recognition result and emits
/// a fixed number of progress ticks.
pub struct MockOcrEngine {
    text: String,
    ticks: usize,
}

impl MockOcrEngine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ticks: 3,
        }
    }

    pub fn with_ticks(mut self, ticks: usize) -> Self {
        self.ticks = ticks;
        self
    }
}

impl OcrEngine for MockOcrEngine {
    fn recognize(
        &self,
        _bytes: &[u8],
        on_progress: &dyn Fn(f32),
    ) -> Result<String, ExtractionError> {
        for i in 1..=self.ticks {
            on_progress(i as f32 / self.ticks as f32);
        }
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::CollectingSink;
    use std::sync::Arc;

    fn image_doc() -> UploadedDocument {
        UploadedDocument::new("receipt.png", "image/png", vec![0u8; 2048])
    }

    fn channel() -> (Arc<CollectingSink>, ProgressChannel) {
        let sink = Arc::new(CollectingSink::new());
        let channel = ProgressChannel::new(sink.clone());
        (sink, channel)
    }

    #[test]
    fn recognized_text_gets_provenance_marker() {
        let engines = Engines {
            pdf: None,
            ocr: Some(Arc::new(MockOcrEngine::new("TOTAL DUE: R1,240.00"))),
        };
        let (_sink, progress) = channel();
        let text = extract(&image_doc(), &engines, &progress).unwrap();
        assert!(text.starts_with("[OCR extracted text from receipt.png:\n"));
        assert!(text.contains("TOTAL DUE"));
    }

    #[test]
    fn ocr_sub_progress_lands_in_band() {
        let engines = Engines {
            pdf: None,
            ocr: Some(Arc::new(MockOcrEngine::new("text").with_ticks(4))),
        };
        let (sink, progress) = channel();
        extract(&image_doc(), &engines, &progress).unwrap();

        let ocr_events: Vec<(String, u8)> = sink
            .events()
            .into_iter()
            .filter(|(m, _)| m.starts_with("OCR progress"))
            .collect();
        assert_eq!(ocr_events.len(), 4);
        assert!(ocr_events.iter().all(|(_, p)| (30..=60).contains(p)));
        assert_eq!(ocr_events.last().unwrap().1, 60);
    }

    #[test]
    fn no_engine_yields_advisory_descriptor() {
        let (_sink, progress) = channel();
        let text = extract(&image_doc(), &Engines::default(), &progress).unwrap();
        assert!(text.starts_with("[Image file: receipt.png - Size: 2.0KB."));
        assert!(text.contains("please enable OCR"));
    }

    #[test]
    fn empty_recognition_falls_back_to_descriptor() {
        let engines = Engines {
            pdf: None,
            ocr: Some(Arc::new(MockOcrEngine::new("   "))),
        };
        let (_sink, progress) = channel();
        let text = extract(&image_doc(), &engines, &progress).unwrap();
        assert!(text.starts_with("[Image file:"));
    }
}
