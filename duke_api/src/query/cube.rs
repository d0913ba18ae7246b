use serde::Serialize;

use crate::types::{MeasureCategory, MeasureLevel, StateID};

use super::Query;

/// Filters for a `/cube/query` request.
///
/// Serializes to exactly the JSON body the endpoint expects:
/// `{category, level, measures, states, years}`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CubeQuery {
    pub category: MeasureCategory,
    pub level: MeasureLevel,
    pub measures: Vec<String>,
    pub states: Vec<StateID>,
    pub years: Vec<i32>,
}

impl Query for CubeQuery {
    fn path_segments(&self) -> Vec<String> {
        vec!["cube".to_string(), "query".to_string()]
    }
}

impl CubeQuery {
    pub fn new(category: MeasureCategory, level: MeasureLevel) -> Self {
        Self {
            category,
            level,
            measures: Vec::new(),
            states: Vec::new(),
            years: Vec::new(),
        }
    }

    pub fn with_measure(mut self, measure: &str) -> Self {
        self.measures.push(measure.to_string());
        self
    }
    pub fn with_measures(mut self, measures: &[String]) -> Self {
        self.measures.extend_from_slice(measures);
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.states.push(state.to_string());
        self
    }
    pub fn with_states(mut self, states: &[StateID]) -> Self {
        self.states.extend_from_slice(states);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.years.push(year);
        self
    }
    pub fn with_years(mut self, years: &[i32]) -> Self {
        self.years.extend_from_slice(years);
        self
    }
}
