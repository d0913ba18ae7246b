use serde::{Deserialize, Serialize};

/// One row of a cube query result: a measure value for one area and year.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DemographicData {
    /// FIPS code of the block group or tract.
    pub fips: i64,
    pub year: i32,
    pub demographic_type_primary: String,
    pub demographic_value_primary: String,
    pub demographic_type_secondary: String,
    pub demographic_value_secondary: String,
    /// Share of the population, as reported by the service.
    pub percent_cont: f64,
    pub quartile: i32,
}
