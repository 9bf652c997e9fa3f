//! DOCX Template Engine
//!
//! A `.docx` file is a zip archive of XML parts. The parts that hold text
//! (`word/document.xml`, headers, footers, foot- and endnotes) are prepared
//! with [`patch_xml`] and rendered with Tera; everything else is copied
//! through unchanged.
//!
//! Tags use Tera syntax. Filter arguments are named:
//!
//! ```text
//! {{ client.name }}
//! {{ tasks | total | fmt_currency }}
//! {{ signed_on | delta(days=14) | fmt_date }}
//! {%tr for task in tasks %} ... {%tr endfor %}
//! ```

mod patch;
mod template;

use std::path::PathBuf;
use thiserror::Error;

pub use patch::patch_xml;
pub use template::{DOCUMENT_PART, DocxTemplate};

/// Errors that can occur while loading or rendering a docx template
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Failed to read {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid docx archive", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("{} has no word/document.xml part", .path.display())]
    MissingDocument { path: PathBuf },

    #[error("Part {part} is not valid UTF-8")]
    Encoding { part: String },

    #[error("Invalid template syntax in {part}")]
    Syntax {
        part: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to render {part}")]
    Render {
        part: String,
        #[source]
        source: tera::Error,
    },

    #[error("Data cannot be used as template context")]
    Context(#[source] tera::Error),
}
