//! Top-level error type
//!
//! Every failure of a run is reported as one `AppError`. Variants keep their
//! underlying cause as `#[source]` so the full chain can be printed and logged
//! while the message itself stays short.

use std::path::PathBuf;
use thiserror::Error;

use crate::docx::DocxError;

/// Errors that abort a docxfill run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Correct usage is:\n{usage}")]
    Usage { usage: String },

    #[error("The specified {name} \"{value}\" is not valid.")]
    InvalidArgument { name: &'static str, value: String },

    #[error("File {} already exists, please choose a different name.", .path.display())]
    OverwriteDeclined { path: PathBuf },

    #[error("Could not read yaml file {}. Failed to get yaml data.", .path.display())]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "There was an error on line {line}, column {column} while trying to parse file {}. Failed to get yaml data.",
        .path.display()
    )]
    DataSyntax {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Could not parse file {}. Failed to get yaml data.", .path.display())]
    DataInvalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("The data in {} must be a mapping at the top level. Failed to get yaml data.", .path.display())]
    DataShape { path: PathBuf },

    #[error("Could not create docx template.")]
    Template {
        #[source]
        source: DocxError,
    },

    #[error("An error occurred while trying to render the docx.")]
    Render {
        #[source]
        source: DocxError,
    },

    #[error("{source}. Could not save file {}. Failed to save file.", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => 2,
            _ => 1,
        }
    }

    /// Messages of the underlying causes, outermost first
    pub fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut current = std::error::Error::source(self);
        while let Some(err) = current {
            causes.push(err.to_string());
            current = err.source();
        }
        causes
    }
}
