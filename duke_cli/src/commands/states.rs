use anyhow::Result;
use duke_api::Client;

use crate::output::{print_json, print_states_csv, print_states_markdown, print_states_table, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let states = client.list_states().await?;

    eprintln!("{} states available", states.len());

    match format {
        OutputFormat::Table => print_states_table(&states),
        OutputFormat::Json => print_json(&states),
        OutputFormat::Csv => print_states_csv(&states)?,
        OutputFormat::Markdown => print_states_markdown(&states),
    }

    Ok(())
}
