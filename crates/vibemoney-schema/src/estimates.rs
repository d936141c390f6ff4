use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Symbol, ValidationError};

/// Which estimate periods a caller asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EstimatePeriod {
    Annual,
    Quarterly,
    #[default]
    Both,
}

impl EstimatePeriod {
    pub fn includes(self, period: ReportPeriod) -> bool {
        matches!(
            (self, period),
            (Self::Both, _)
                | (Self::Annual, ReportPeriod::Annual)
                | (Self::Quarterly, ReportPeriod::Quarterly)
        )
    }
}

impl FromStr for EstimatePeriod {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(Self::Annual),
            "quarterly" => Ok(Self::Quarterly),
            "both" => Ok(Self::Both),
            other => Err(ValidationError::InvalidEstimatePeriod {
                value: other.to_owned(),
            }),
        }
    }
}

/// Period a single estimate covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Annual,
    Quarterly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RevisionSign {
    Good,
    Bad,
    Flat,
}

/// Direction of an estimate across its revision history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RevisionSignal {
    /// True when the history holds at least two values
    pub revised: bool,
    pub first: Option<f64>,
    pub last: Option<f64>,
    /// `last - first`
    pub delta: Option<f64>,
    pub sign: Option<RevisionSign>,
}

impl RevisionSignal {
    pub fn unrevised() -> Self {
        Self {
            revised: false,
            first: None,
            last: None,
            delta: None,
            sign: None,
        }
    }
}

/// Consensus EPS and revenue estimates for one fiscal period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EstimatePoint {
    pub fiscal_date_ending: Option<NaiveDate>,
    pub period: ReportPeriod,
    /// Provider quarter label, e.g. `Q3 2025`
    pub quarter: Option<String>,
    pub eps_avg: Option<f64>,
    pub eps_low: Option<f64>,
    pub eps_high: Option<f64>,
    pub eps_num_analysts: Option<u32>,
    pub revenue_avg: Option<f64>,
    pub revenue_low: Option<f64>,
    pub revenue_high: Option<f64>,
    pub revenue_num_analysts: Option<u32>,
    pub eps_revision: RevisionSignal,
    pub revenue_revision: RevisionSignal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EstimatesResponse {
    #[schema(value_type = String, example = "AAPL")]
    pub symbol: Symbol,
    pub period: EstimatePeriod,
    pub points: Vec<EstimatePoint>,
}
