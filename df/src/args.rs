//! Argument validation and overwrite confirmation

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::AppError;

pub const TEMPLATE_ARG: &str = "template_path";
pub const YAML_ARG: &str = "yaml_path";
pub const OUTPUT_ARG: &str = "output_filename";

const TEMPLATE_EXTENSIONS: &[&str] = &["docx"];
const YAML_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Parsed arguments of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    pub template_path: PathBuf,
    pub yaml_path: PathBuf,
    pub output_path: PathBuf,
    pub overwrite: bool,
    pub quiet: bool,
}

impl From<&Cli> for Arguments {
    fn from(cli: &Cli) -> Self {
        Self {
            template_path: cli.template_path.clone(),
            yaml_path: cli.yaml_path.clone(),
            output_path: cli.output_filename.clone(),
            overwrite: cli.overwrite,
            quiet: cli.quiet,
        }
    }
}

/// Asks the user a yes/no question
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Prompts on stdout and reads the answer from stdin
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{}", question);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
        }
    }
}

/// Always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, question: &str) -> bool {
        debug!(question, answer = self.0, "Answering confirmation");
        self.0
    }
}

/// Validate all arguments, asking before an existing output is overwritten
pub fn validate(args: &Arguments, confirm: &mut dyn Confirm) -> Result<(), AppError> {
    if !(args.template_path.is_file() && has_extension(&args.template_path, TEMPLATE_EXTENSIONS)) {
        return Err(invalid(TEMPLATE_ARG, &args.template_path));
    }

    if !(args.yaml_path.is_file() && has_extension(&args.yaml_path, YAML_EXTENSIONS)) {
        return Err(invalid(YAML_ARG, &args.yaml_path));
    }

    if !has_extension(&args.output_path, TEMPLATE_EXTENSIONS) {
        return Err(invalid(OUTPUT_ARG, &args.output_path));
    }

    check_overwrite(&args.output_path, args.overwrite, confirm)
}

fn check_overwrite(path: &Path, overwrite: bool, confirm: &mut dyn Confirm) -> Result<(), AppError> {
    if overwrite || !path.exists() {
        return Ok(());
    }

    let question = format!(
        "File {} already exists, would you like to overwrite the existing file? (y/n) ",
        path.display()
    );
    if confirm.confirm(&question) {
        info!(path = %path.display(), "Overwrite confirmed");
        Ok(())
    } else {
        Err(AppError::OverwriteDeclined {
            path: path.to_path_buf(),
        })
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

fn invalid(name: &'static str, value: &Path) -> AppError {
    AppError::InvalidArgument {
        name,
        value: value.display().to_string(),
    }
}
