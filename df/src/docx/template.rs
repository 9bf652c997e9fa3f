//! DOCX template: open, render, save

use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tera::{Context, Tera};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::DocxError;
use super::patch::patch_xml;
use crate::config::FilterConfig;
use crate::filters;

/// The main document part every docx has
pub const DOCUMENT_PART: &str = "word/document.xml";

/// One entry of the docx archive
#[derive(Debug, Clone)]
struct Entry {
    name: String,
    compression: CompressionMethod,
    is_dir: bool,
    data: Vec<u8>,
}

/// A docx template loaded into memory
#[derive(Debug)]
pub struct DocxTemplate {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl DocxTemplate {
    /// Load every entry of the archive at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocxError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| DocxError::Open {
            path: path.clone(),
            source,
        })?;
        let bytes_err = |source| DocxError::Open {
            path: path.clone(),
            source,
        };
        let archive_err = |source| DocxError::Archive {
            path: path.clone(),
            source,
        };

        let mut archive = ZipArchive::new(file).map_err(archive_err)?;
        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut file = archive.by_index(index).map_err(archive_err)?;
            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data).map_err(bytes_err)?;
            entries.push(Entry {
                name: file.name().to_string(),
                compression: file.compression(),
                is_dir: file.is_dir(),
                data,
            });
        }

        if !entries.iter().any(|e| e.name == DOCUMENT_PART) {
            return Err(DocxError::MissingDocument { path });
        }

        debug!(path = %path.display(), entries = entries.len(), "Opened docx template");
        Ok(Self { path, entries })
    }

    /// Path the template was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the parts that contain template tags
    pub fn template_parts(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.is_dir && is_template_part(&e.name))
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Raw bytes of a part, if present
    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.data.as_slice())
    }

    /// Render every template part against `data` in place
    pub fn render(&mut self, data: &Value, filter_config: &FilterConfig) -> Result<(), DocxError> {
        let context = Context::from_serialize(data).map_err(DocxError::Context)?;

        let mut tera = Tera::default();
        tera.set_escape_fn(escape_xml);
        filters::register(&mut tera, filter_config);

        let parts: Vec<String> = self.template_parts().into_iter().map(String::from).collect();
        for name in &parts {
            let Some(raw) = self.part(name) else { continue };
            let xml = std::str::from_utf8(raw).map_err(|_| DocxError::Encoding { part: name.clone() })?;
            tera.add_raw_template(name, &patch_xml(xml))
                .map_err(|source| DocxError::Syntax {
                    part: name.clone(),
                    source,
                })?;
        }

        for entry in self.entries.iter_mut().filter(|e| parts.contains(&e.name)) {
            let rendered = tera.render(&entry.name, &context).map_err(|source| DocxError::Render {
                part: entry.name.clone(),
                source,
            })?;
            entry.data = rendered.into_bytes();
        }

        info!(path = %self.path.display(), parts = parts.len(), "Rendered docx template");
        Ok(())
    }

    /// Serialize the archive, keeping entry order and compression
    pub fn to_bytes(&self) -> zip::result::ZipResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        for entry in &self.entries {
            let method = match entry.compression {
                CompressionMethod::Stored => CompressionMethod::Stored,
                _ => CompressionMethod::Deflated,
            };
            let options = SimpleFileOptions::default().compression_method(method);

            if entry.is_dir {
                zip.add_directory(entry.name.as_str(), options)?;
                continue;
            }
            zip.start_file(entry.name.as_str(), options)?;
            zip.write_all(&entry.data)?;
        }

        Ok(zip.finish()?.into_inner())
    }

    /// Write the document to `path`
    ///
    /// The archive is built in memory first, so a failure leaves no partial file.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let bytes = self.to_bytes()?;
        fs::write(path.as_ref(), bytes)?;
        info!(path = %path.as_ref().display(), "Saved document");
        Ok(())
    }
}

/// Escape text substituted into XML character data
fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_template_part(name: &str) -> bool {
    let Some(file) = name.strip_prefix("word/") else {
        return false;
    };
    if file.contains('/') || !file.ends_with(".xml") {
        return false;
    }
    file == "document.xml"
        || file == "footnotes.xml"
        || file == "endnotes.xml"
        || file.starts_with("header")
        || file.starts_with("footer")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn wrap(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        )
    }

    fn write_docx(dir: &Path, parts: &[(&str, &str)]) -> PathBuf {
        let path = dir.join("template.docx");
        let mut zip = ZipWriter::new(File::create(&path).unwrap());
        let options = SimpleFileOptions::default();
        for (name, content) in parts {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
        path
    }

    fn document(doc: &DocxTemplate) -> String {
        String::from_utf8(doc.part(DOCUMENT_PART).unwrap().to_vec()).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b && c > \"d\""), "a &lt; b &amp;&amp; c &gt; &quot;d&quot;");
        assert_eq!(escape_xml("12/100 'x'"), "12/100 'x'");
    }

    #[test]
    fn test_is_template_part() {
        assert!(is_template_part("word/document.xml"));
        assert!(is_template_part("word/header1.xml"));
        assert!(is_template_part("word/footer2.xml"));
        assert!(is_template_part("word/footnotes.xml"));
        assert!(!is_template_part("word/styles.xml"));
        assert!(!is_template_part("word/_rels/document.xml.rels"));
        assert!(!is_template_part("[Content_Types].xml"));
        assert!(!is_template_part("word/media/header.png"));
    }

    #[test]
    fn test_open_requires_document_part() {
        let dir = TempDir::new().unwrap();
        let path = write_docx(dir.path(), &[("[Content_Types].xml", "<Types/>")]);

        let err = DocxTemplate::open(&path).unwrap_err();
        assert!(matches!(err, DocxError::MissingDocument { .. }));
    }

    #[test]
    fn test_open_rejects_non_zip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.docx");
        fs::write(&path, b"plain text, not a zip archive").unwrap();

        let err = DocxTemplate::open(&path).unwrap_err();
        assert!(matches!(err, DocxError::Archive { .. }));
    }

    #[test]
    fn test_render_substitutes_and_escapes() {
        let dir = TempDir::new().unwrap();
        let body = wrap("<w:p><w:r><w:t>{{ client }} / {{ amount | fmt_currency }}</w:t></w:r></w:p>");
        let path = write_docx(dir.path(), &[(DOCUMENT_PART, &body)]);

        let mut doc = DocxTemplate::open(&path).unwrap();
        doc.render(&json!({"client": "Smith & Sons", "amount": 1234.5}), &FilterConfig::default())
            .unwrap();

        let xml = document(&doc);
        assert!(xml.contains("Smith &amp; Sons"));
        assert!(xml.contains("1\u{a0}234,50\u{a0}zł"));
        assert!(!xml.contains("{{"));
    }

    #[test]
    fn test_render_headers_and_keeps_other_parts() {
        let dir = TempDir::new().unwrap();
        let body = wrap("<w:p><w:r><w:t>{{ title }}</w:t></w:r></w:p>");
        let styles = "<w:styles>{{ not a template }}</w:styles>";
        let path = write_docx(
            dir.path(),
            &[
                ("word/styles.xml", styles),
                (DOCUMENT_PART, &body),
                ("word/header1.xml", "<w:hdr><w:t>{{ title | upper }}</w:t></w:hdr>"),
            ],
        );

        let mut doc = DocxTemplate::open(&path).unwrap();
        assert_eq!(doc.path(), path.as_path());
        assert_eq!(doc.template_parts(), vec![DOCUMENT_PART, "word/header1.xml"]);
        doc.render(&json!({"title": "Umowa"}), &FilterConfig::default()).unwrap();

        assert!(document(&doc).contains("<w:t>Umowa</w:t>"));
        assert_eq!(doc.part("word/header1.xml").unwrap(), b"<w:hdr><w:t>UMOWA</w:t></w:hdr>");
        assert_eq!(doc.part("word/styles.xml").unwrap(), styles.as_bytes());
    }

    #[test]
    fn test_render_missing_variable_fails() {
        let dir = TempDir::new().unwrap();
        let body = wrap("<w:p><w:r><w:t>{{ missing }}</w:t></w:r></w:p>");
        let path = write_docx(dir.path(), &[(DOCUMENT_PART, &body)]);

        let mut doc = DocxTemplate::open(&path).unwrap();
        let err = doc.render(&json!({}), &FilterConfig::default()).unwrap_err();
        assert!(matches!(err, DocxError::Render { .. }));
    }

    #[test]
    fn test_render_syntax_error() {
        let dir = TempDir::new().unwrap();
        let body = wrap("<w:p><w:r><w:t>{% if %}</w:t></w:r></w:p>");
        let path = write_docx(dir.path(), &[(DOCUMENT_PART, &body)]);

        let mut doc = DocxTemplate::open(&path).unwrap();
        let err = doc.render(&json!({}), &FilterConfig::default()).unwrap_err();
        assert!(matches!(err, DocxError::Syntax { .. }));
    }

    #[test]
    fn test_save_round_trips_entries() {
        let dir = TempDir::new().unwrap();
        let body = wrap("<w:p><w:r><w:t>{{ n }}</w:t></w:r></w:p>");
        let path = write_docx(
            dir.path(),
            &[("[Content_Types].xml", "<Types/>"), (DOCUMENT_PART, &body)],
        );

        let mut doc = DocxTemplate::open(&path).unwrap();
        doc.render(&json!({"n": 7}), &FilterConfig::default()).unwrap();
        let out = dir.path().join("out.docx");
        doc.save(&out).unwrap();

        let saved = DocxTemplate::open(&out).unwrap();
        let names: Vec<&str> = saved.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["[Content_Types].xml", DOCUMENT_PART]);
        assert!(document(&saved).contains("<w:t>7</w:t>"));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let body = wrap("<w:p/>");
        let path = write_docx(dir.path(), &[(DOCUMENT_PART, &body)]);

        let doc = DocxTemplate::open(&path).unwrap();
        let err = doc.save(dir.path().join("no/such/dir/out.docx")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
