use anyhow::Result;
use duke_api::types::{DemographicData, State};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct StateRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct DemographicRow {
    #[tabled(rename = "FIPS")]
    #[serde(rename = "FIPS")]
    fips: i64,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Primary")]
    #[serde(rename = "Primary")]
    primary: String,
    #[tabled(rename = "Secondary")]
    #[serde(rename = "Secondary")]
    secondary: String,
    #[tabled(rename = "Percent")]
    #[serde(rename = "Percent")]
    percent: String,
    #[tabled(rename = "Quartile")]
    #[serde(rename = "Quartile")]
    quartile: i32,
}

#[derive(Tabled, Serialize)]
struct MeasureRow {
    #[tabled(rename = "Measure")]
    #[serde(rename = "Measure")]
    measure: String,
}

#[derive(Tabled, Serialize)]
struct YearRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: String,
}

// -- Row builders --

fn build_state_rows(states: &[State]) -> Vec<StateRow> {
    states
        .iter()
        .map(|s| StateRow {
            id: s.id.clone(),
            name: s.name.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_demographic_rows(rows: &[DemographicData]) -> Vec<DemographicRow> {
    rows.iter()
        .map(|d| DemographicRow {
            fips: d.fips,
            year: d.year,
            primary: format_pair(&d.demographic_type_primary, &d.demographic_value_primary),
            secondary: format_pair(&d.demographic_type_secondary, &d.demographic_value_secondary),
            percent: format_percent(d.percent_cont),
            quartile: d.quartile,
        })
        .collect()
}

fn build_measure_rows(measures: &[String]) -> Vec<MeasureRow> {
    measures
        .iter()
        .map(|m| MeasureRow { measure: m.clone() })
        .collect()
}

fn build_year_rows(years: &[String]) -> Vec<YearRow> {
    years.iter().map(|y| YearRow { year: y.clone() }).collect()
}

// -- Generic writers --

fn print_table<T: Tabled>(rows: Vec<T>) {
    println!("{}", Table::new(rows));
}

fn print_markdown<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

fn print_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Table output --

pub fn print_states_table(states: &[State]) {
    print_table(build_state_rows(states));
}

pub fn print_rows_table(rows: &[DemographicData]) {
    print_table(build_demographic_rows(rows));
}

pub fn print_measures_table(measures: &[String]) {
    print_table(build_measure_rows(measures));
}

pub fn print_years_table(years: &[String]) {
    print_table(build_year_rows(years));
}

// -- Markdown output --

pub fn print_states_markdown(states: &[State]) {
    print_markdown(build_state_rows(states));
}

pub fn print_rows_markdown(rows: &[DemographicData]) {
    print_markdown(build_demographic_rows(rows));
}

pub fn print_measures_markdown(measures: &[String]) {
    print_markdown(build_measure_rows(measures));
}

pub fn print_years_markdown(years: &[String]) {
    print_markdown(build_year_rows(years));
}

// -- CSV output --

pub fn print_states_csv(states: &[State]) -> Result<()> {
    print_csv(build_state_rows(states))
}

pub fn print_rows_csv(rows: &[DemographicData]) -> Result<()> {
    print_csv(build_demographic_rows(rows))
}

pub fn print_measures_csv(measures: &[String]) -> Result<()> {
    print_csv(build_measure_rows(measures))
}

pub fn print_years_csv(years: &[String]) -> Result<()> {
    print_csv(build_year_rows(years))
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_pair(kind: &str, value: &str) -> String {
    match (kind.is_empty(), value.is_empty()) {
        (true, true) => String::new(),
        (false, true) => kind.to_string(),
        (true, false) => value.to_string(),
        (false, false) => format!("{}={}", kind, value),
    }
}

fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}
