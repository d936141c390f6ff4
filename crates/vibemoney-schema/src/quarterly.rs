use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{FiscalPeriod, Symbol};

pub const REVENUES: &str = "Revenues";
pub const SALES_REVENUE_NET: &str = "SalesRevenueNet";
pub const NET_INCOME_LOSS: &str = "NetIncomeLoss";

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Key fundamentals reported for one fiscal quarter.
///
/// ```json
/// {
///     "symbol": "AAPL",
///     "fiscal_period": "2025Q1",
///     "period_end_date": "2024-12-28",
///     "release_date": "2025-01-30",
///     "filing_date": "2025-01-31",
///     "metrics": {
///         "NetIncomeLoss": 36330000000.0,
///         "Revenues": 124300000000.0
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuarterlyFundamentals {
    #[schema(value_type = String, example = "AAPL")]
    pub symbol: Symbol,
    #[schema(value_type = String, example = "2025Q1")]
    pub fiscal_period: FiscalPeriod,
    pub period_end_date: Option<NaiveDate>,
    /// Date the results were announced
    pub release_date: Option<NaiveDate>,
    /// Date the report was filed with the regulator
    pub filing_date: Option<NaiveDate>,
    pub metrics: BTreeMap<String, f64>,
}

impl QuarterlyFundamentals {
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    /// Total revenue, falling back to net sales for filers that only report the latter.
    pub fn revenue(&self) -> Option<f64> {
        self.metric(REVENUES).or_else(|| self.metric(SALES_REVENUE_NET))
    }

    pub fn net_income(&self) -> Option<f64> {
        self.metric(NET_INCOME_LOSS)
    }
}

/// Quarterly fundamentals for one symbol, earliest quarter first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuarterlyResponse {
    #[schema(value_type = String, example = "AAPL")]
    pub symbol: Symbol,
    pub quarters: Vec<QuarterlyFundamentals>,
}
