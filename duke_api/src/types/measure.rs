//! Measure classification enums. Both are sent verbatim as URL path segments
//! and JSON values, so their string forms are part of the wire contract.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topic area a measure belongs to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MeasureCategory {
    Demographics,
    Indices,
    Economy,
    Infrastructure,
    Health,
    Education,
    Environment,
    Housing,
}

impl MeasureCategory {
    pub const ALL: [MeasureCategory; 8] = [
        MeasureCategory::Demographics,
        MeasureCategory::Indices,
        MeasureCategory::Economy,
        MeasureCategory::Infrastructure,
        MeasureCategory::Health,
        MeasureCategory::Education,
        MeasureCategory::Environment,
        MeasureCategory::Housing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureCategory::Demographics => "demographics",
            MeasureCategory::Indices => "indices",
            MeasureCategory::Economy => "economy",
            MeasureCategory::Infrastructure => "infrastructure",
            MeasureCategory::Health => "health",
            MeasureCategory::Education => "education",
            MeasureCategory::Environment => "environment",
            MeasureCategory::Housing => "housing",
        }
    }
}

impl std::fmt::Display for MeasureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasureCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasureCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// Geographic granularity of a measure.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MeasureLevel {
    BlockGroup,
    Tract,
}

impl MeasureLevel {
    pub const ALL: [MeasureLevel; 2] = [MeasureLevel::BlockGroup, MeasureLevel::Tract];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureLevel::BlockGroup => "block_group",
            MeasureLevel::Tract => "tract",
        }
    }
}

impl std::fmt::Display for MeasureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasureLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "block_group" => Ok(MeasureLevel::BlockGroup),
            "tract" => Ok(MeasureLevel::Tract),
            _ => Err(()),
        }
    }
}
