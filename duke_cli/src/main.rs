mod commands;
mod output;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};
use duke_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "duke")]
#[command(about = "Query demographic data from the Duke API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API username (falls back to DUKE_API_USERNAME)
    #[arg(long, global = true)]
    username: Option<String>,

    /// API password (falls back to DUKE_API_PASSWORD)
    #[arg(long, global = true)]
    password: Option<String>,

    /// API host (falls back to DUKE_API_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List states with available data
    States,
    /// List measures for a category and level
    Measures(commands::measures::MeasuresArgs),
    /// List the years a measure has data for
    Years(commands::years::YearsArgs),
    /// Query demographic rows
    Query(commands::query::QueryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("duke=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let config = Config::resolve(
        cli.username.clone(),
        cli.password.clone(),
        cli.host.clone(),
        |var| std::env::var(var).ok(),
    )?;
    tracing::debug!("Using host {}", config.host);

    // Subcommand input is validated before login.
    match &cli.command {
        Commands::States => {
            let client = Client::connect(&config).await?;
            commands::states::run(&client, &format).await?
        }
        Commands::Measures(args) => {
            let input = commands::measures::validate(args)?;
            let client = Client::connect(&config).await?;
            commands::measures::run(input, &client, &format).await?
        }
        Commands::Years(args) => {
            let query = commands::years::validate(args)?;
            let client = Client::connect(&config).await?;
            commands::years::run(&query, &client, &format).await?
        }
        Commands::Query(args) => {
            let query = commands::query::validate(args)?;
            let client = Client::connect(&config).await?;
            commands::query::run(&query, &client, &format).await?
        }
    }

    Ok(())
}
