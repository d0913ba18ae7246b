use anyhow::Result;
use clap::Args;
use duke_api::types::{MeasureCategory, MeasureLevel};
use duke_api::Client;

use crate::output::{print_json, print_measures_csv, print_measures_markdown, print_measures_table, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct MeasuresArgs {
    /// Measure category: demographics, indices, economy, infrastructure,
    /// health, education, environment, housing
    #[arg(long)]
    pub category: String,

    /// Geographic level: block_group (bg) or tract
    #[arg(long)]
    pub level: String,
}

pub fn validate(args: &MeasuresArgs) -> Result<(MeasureCategory, MeasureLevel)> {
    Ok((
        validation::validate_category(&args.category)?,
        validation::validate_level(&args.level)?,
    ))
}

pub async fn run(
    (category, level): (MeasureCategory, MeasureLevel),
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let measures = client.list_measures(category, level).await?;

    eprintln!("{} measures for {}/{}", measures.len(), category, level);

    match format {
        OutputFormat::Table => print_measures_table(&measures),
        OutputFormat::Json => print_json(&measures),
        OutputFormat::Csv => print_measures_csv(&measures)?,
        OutputFormat::Markdown => print_measures_markdown(&measures),
    }

    Ok(())
}
