//! CLI argument parsing for docxfill

use clap::Parser;
use std::path::PathBuf;

use crate::args::{OUTPUT_ARG, TEMPLATE_ARG, YAML_ARG};

#[derive(Parser, Debug)]
#[command(name = "docxfill")]
#[command(
    author,
    version,
    about = "Make docx file from existing template docx and yaml data.",
    long_about = None,
    override_usage = "docxfill [-h] [-o] [-q] template_path yaml_path output_filename"
)]
pub struct Cli {
    /// The path to the template docx file.
    #[arg(value_name = TEMPLATE_ARG)]
    pub template_path: PathBuf,

    /// The path to the yaml file with the data.
    #[arg(value_name = YAML_ARG)]
    pub yaml_path: PathBuf,

    /// The filename to save the generated docx.
    #[arg(value_name = OUTPUT_ARG)]
    pub output_filename: PathBuf,

    /// If output file already exists, overwrites without asking for confirmation
    #[arg(short, long)]
    pub overwrite: bool,

    /// Do not display unnecessary messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}
