use anyhow::{bail, Result};
use clap::Args;
use duke_api::{Client, CubeQuery};

use crate::output::{print_json, print_rows_csv, print_rows_markdown, print_rows_table, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct QueryArgs {
    /// Measure category (e.g. demographics)
    #[arg(long)]
    pub category: String,

    /// Geographic level: block_group (bg) or tract
    #[arg(long)]
    pub level: String,

    /// Measure name; repeat or comma-separate for several
    #[arg(long = "measure", value_delimiter = ',')]
    pub measures: Vec<String>,

    /// State FIPS code (e.g. 37); repeat or comma-separate for several
    #[arg(long = "state", value_delimiter = ',')]
    pub states: Vec<String>,

    /// Year (e.g. 2020); repeat or comma-separate for several
    #[arg(long = "year", value_delimiter = ',')]
    pub years: Vec<String>,
}

pub fn validate(args: &QueryArgs) -> Result<CubeQuery> {
    if args.measures.is_empty() {
        bail!("at least one --measure is required");
    }
    if args.states.is_empty() {
        bail!("at least one --state is required");
    }
    if args.years.is_empty() {
        bail!("at least one --year is required");
    }

    let mut query = CubeQuery::new(
        validation::validate_category(&args.category)?,
        validation::validate_level(&args.level)?,
    );
    for measure in &args.measures {
        query = query.with_measure(&validation::validate_measure(measure)?);
    }
    for state in &args.states {
        query = query.with_state(&validation::validate_state(state)?);
    }
    for year in &args.years {
        query = query.with_year(validation::validate_year(year)?);
    }
    Ok(query)
}

pub async fn run(query: &CubeQuery, client: &Client, format: &OutputFormat) -> Result<()> {
    let rows = client.query(query).await?;

    eprintln!(
        "{} rows ({} measures, {} states, {} years)",
        rows.len(),
        query.measures.len(),
        query.states.len(),
        query.years.len()
    );

    match format {
        OutputFormat::Table => print_rows_table(&rows),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Csv => print_rows_csv(&rows)?,
        OutputFormat::Markdown => print_rows_markdown(&rows),
    }

    Ok(())
}
