use anyhow::Result;
use clap::Args;
use duke_api::{Client, MeasureYearsQuery};

use crate::output::{print_json, print_years_csv, print_years_markdown, print_years_table, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct YearsArgs {
    /// Measure category (e.g. demographics)
    #[arg(long)]
    pub category: String,

    /// Geographic level: block_group (bg) or tract
    #[arg(long)]
    pub level: String,

    /// Measure name (e.g. "ethnicity_hispanic:percent")
    #[arg(long)]
    pub measure: String,
}

pub fn validate(args: &YearsArgs) -> Result<MeasureYearsQuery> {
    let category = validation::validate_category(&args.category)?;
    let level = validation::validate_level(&args.level)?;
    let measure = validation::validate_measure(&args.measure)?;
    Ok(MeasureYearsQuery::new(category, level, &measure))
}

pub async fn run(query: &MeasureYearsQuery, client: &Client, format: &OutputFormat) -> Result<()> {
    let years = client
        .list_measure_years(query.category, query.level, &query.measure)
        .await?;

    eprintln!("{} years for {}", years.len(), query.measure);

    match format {
        OutputFormat::Table => print_years_table(&years),
        OutputFormat::Json => print_json(&years),
        OutputFormat::Csv => print_years_csv(&years)?,
        OutputFormat::Markdown => print_years_markdown(&years),
    }

    Ok(())
}
