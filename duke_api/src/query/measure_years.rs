use url::Url;

use crate::types::{MeasureCategory, MeasureLevel};

use super::Query;

/// Lookup of the years a measure has data for.
///
/// The service takes the three values both as path segments and as query
/// parameters; this builder emits both.
#[derive(Clone, Debug)]
pub struct MeasureYearsQuery {
    pub category: MeasureCategory,
    pub level: MeasureLevel,
    pub measure: String,
}

impl MeasureYearsQuery {
    pub fn new(category: MeasureCategory, level: MeasureLevel, measure: &str) -> Self {
        Self {
            category,
            level,
            measure: measure.to_string(),
        }
    }
}

impl Query for MeasureYearsQuery {
    fn path_segments(&self) -> Vec<String> {
        vec![
            "cube".to_string(),
            "measure-years".to_string(),
            self.category.to_string(),
            self.level.to_string(),
            self.measure.clone(),
        ]
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("category", self.category.as_str())
            .append_pair("level", self.level.as_str())
            .append_pair("measure", &self.measure);
        url
    }
}
