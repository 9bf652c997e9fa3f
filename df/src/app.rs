//! One docxfill run: validate, load, render, save

use tracing::{debug, info};

use crate::args::{self, Arguments, Confirm};
use crate::config::Config;
use crate::data;
use crate::docx::DocxTemplate;
use crate::error::AppError;

/// Fill the template with the data and write the output document
pub fn run(args: &Arguments, config: &Config, confirm: &mut dyn Confirm) -> Result<(), AppError> {
    args::validate(args, confirm)?;
    debug!(?args, "Arguments validated");

    let data = data::load(&args.yaml_path)?;

    let mut doc = DocxTemplate::open(&args.template_path).map_err(|source| AppError::Template { source })?;
    debug!(template = %doc.path().display(), parts = ?doc.template_parts(), "Template loaded");

    doc.render(&data, &config.filters)
        .map_err(|source| AppError::Render { source })?;

    doc.save(&args.output_path).map_err(|source| AppError::Save {
        path: args.output_path.clone(),
        source,
    })?;

    info!(
        template = %args.template_path.display(),
        output = %args.output_path.display(),
        "Document generated"
    );
    Ok(())
}
