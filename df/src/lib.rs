//! docxfill - fill a docx template with YAML data
//!
//! Reads a YAML data file, renders it into the tagged fields of a `.docx`
//! template and writes the result to a new document.
//!
//! # Modules
//!
//! - [`cli`] - command-line interface
//! - [`args`] - argument validation and overwrite confirmation
//! - [`config`] - configuration types and loading
//! - [`data`] - YAML data loading
//! - [`docx`] - docx template engine
//! - [`filters`] - template filters (dates, PLN amounts, task aggregates)
//! - [`app`] - one run from validation to save
//!
//! # Example
//!
//! ```ignore
//! use docxfill::{Arguments, Config, FixedAnswer, run};
//!
//! let args = Arguments {
//!     template_path: "invoice.docx".into(),
//!     yaml_path: "invoice.yml".into(),
//!     output_path: "out/invoice-001.docx".into(),
//!     overwrite: false,
//!     quiet: true,
//! };
//! run(&args, &Config::default(), &mut FixedAnswer(false))?;
//! ```

pub mod app;
pub mod args;
pub mod cli;
pub mod config;
pub mod data;
pub mod docx;
pub mod error;
pub mod filters;

pub use app::run;
pub use args::{Arguments, Confirm, FixedAnswer, StdinConfirm};
pub use config::{Config, FilterConfig};
pub use docx::{DocxError, DocxTemplate};
pub use error::AppError;
