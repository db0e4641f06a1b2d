use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};

use super::ExtractionError;
use crate::pipeline::document::UploadedDocument;

/// Spreadsheets: every non-empty sheet rendered as a flat tab-separated
/// table under a sheet-name header. Empty sheets are skipped.
pub fn extract(doc: &UploadedDocument) -> Result<String, ExtractionError> {
    let cursor = Cursor::new(doc.bytes.as_slice());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| ExtractionError::Spreadsheet(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::new();

    for name in sheet_names {
        let range = match workbook.worksheet_range(&name) {
            Ok(range) => range,
            Err(e) => {
                tracing::warn!(file = %doc.name, sheet = %name, error = %e, "skipping unreadable sheet");
                continue;
            }
        };
        if range.is_empty() {
            continue;
        }

        let mut lines = Vec::new();
        for row in range.rows() {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            let line = cells.join("\t");
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        if lines.is_empty() {
            continue;
        }

        sheets.push(format!("--- Sheet: {name} ---\n{}", lines.join("\n")));
    }

    if sheets.is_empty() {
        Ok(format!("[Excel file: {} - No data found]", doc.name))
    } else {
        Ok(sheets.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_an_error() {
        let doc = UploadedDocument::new("ledger.xlsx", "", b"definitely not a workbook".to_vec());
        assert!(matches!(
            extract(&doc),
            Err(ExtractionError::Spreadsheet(_))
        ));
    }

    #[test]
    fn minimal_xlsx_roundtrip() {
        // calamine cannot write, so synthesize the minimal xlsx container
        // by hand: a workbook with one sheet holding two inline strings.
        let doc = UploadedDocument::new("mini.xlsx", "", make_minimal_xlsx());
        let text = extract(&doc).unwrap();
        assert!(text.starts_with("--- Sheet: Sheet1 ---"), "got: {text}");
        assert!(text.contains("Asset"));
        assert!(text.contains("Laptop"));
    }

    fn make_minimal_xlsx() -> Vec<u8> {
        use std::io::{Cursor, Write};
        use zip::write::SimpleFileOptions;

        let parts: &[(&str, &str)] = &[
            (
                "[Content_Types].xml",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#,
            ),
            (
                "_rels/.rels",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
            ),
            (
                "xl/workbook.xml",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#,
            ),
            (
                "xl/_rels/workbook.xml.rels",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#,
            ),
            (
                "xl/worksheets/sheet1.xml",
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>
<row r="1"><c r="A1" t="inlineStr"><is><t>Asset</t></is></c></row>
<row r="2"><c r="A2" t="inlineStr"><is><t>Laptop</t></is></c></row>
</sheetData>
</worksheet>"#,
            ),
        ];

        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            for (name, content) in parts {
                writer
                    .start_file(name.to_string(), SimpleFileOptions::default())
                    .unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        buf.into_inner()
    }
}
