//! Fixtures shared by the integration tests

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

pub const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

pub const INVOICE_DATA: &str = r#"
client: Kowalski & Syn
signed: 2024-01-05
tasks:
  - name: Analiza
    begin: 2024-01-08
    end: 2024-01-31
    value: 1000
  - name: Wdrożenie
    begin: 2024-01-06
    end: 2024-02-15
    value: 234.5
"#;

/// A Word body with the client name split across two runs, the way Word saves it
pub const INVOICE_BODY: &str = concat!(
    "<w:p><w:r><w:t>Klient: {{ cli</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>ent }}</w:t></w:r></w:p>",
    "<w:tbl>",
    "<w:tr><w:tc><w:p><w:r><w:t>{%tr for task in tasks %}</w:t></w:r></w:p></w:tc></w:tr>",
    "<w:tr><w:tc><w:p><w:r><w:t>{{ task.name }}: {{ task.value | fmt_currency }}</w:t></w:r></w:p></w:tc></w:tr>",
    "<w:tr><w:tc><w:p><w:r><w:t>{%tr endfor %}</w:t></w:r></w:p></w:tc></w:tr>",
    "</w:tbl>",
    "<w:p><w:r><w:t>Od {{ tasks | begin | fmt_date }} do {{ tasks | end | fmt_datetime }}</w:t></w:r></w:p>",
    "<w:p><w:r><w:t>Razem: {{ tasks | total | fmt_currency }} ({{ tasks | total | slownie }})</w:t></w:r></w:p>",
    "<w:p><w:r><w:t>Termin: {{ tasks | final | fmt_date }}</w:t></w:r></w:p>",
);

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    )
}

/// Write a minimal docx with the given body
pub fn write_docx(path: &Path, body: &str) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document_xml(body).as_bytes()).unwrap();
    zip.finish().unwrap();
}

/// Read `word/document.xml` out of a docx
pub fn read_document(path: &Path) -> String {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Temp dir holding a template, a data file and an output path
pub struct Workspace {
    pub dir: TempDir,
    pub template: PathBuf,
    pub data: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn new(body: &str, data: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template.docx");
        let data_path = dir.path().join("data.yml");
        write_docx(&template, body);
        fs::write(&data_path, data).unwrap();

        Self {
            output: dir.path().join("out.docx"),
            template,
            data: data_path,
            dir,
        }
    }

    pub fn invoice() -> Self {
        Self::new(INVOICE_BODY, INVOICE_DATA)
    }
}
