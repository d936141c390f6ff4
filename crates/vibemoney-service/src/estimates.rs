use log::debug;
use vibemoney_schema::{
    EstimatePeriod, EstimatePoint, EstimatesResponse, Limit, ReportPeriod, RevisionSign,
    RevisionSignal, Symbol,
};

use crate::{EstimateRecord, EstimatesProvider, ProviderError};

/// Summarise a revision history; fewer than two finite values means "not revised".
pub fn revision_signal(history: &[f64]) -> RevisionSignal {
    let values: Vec<f64> = history.iter().copied().filter(|v| v.is_finite()).collect();

    match (values.first(), values.last()) {
        (Some(&first), Some(&last)) if values.len() >= 2 => {
            let sign = if last > first {
                RevisionSign::Good
            } else if last < first {
                RevisionSign::Bad
            } else {
                RevisionSign::Flat
            };

            RevisionSignal {
                revised: true,
                first: Some(first),
                last: Some(last),
                delta: Some(last - first),
                sign: Some(sign),
            }
        }
        _ => RevisionSignal::unrevised(),
    }
}

fn to_point(record: EstimateRecord) -> EstimatePoint {
    EstimatePoint {
        eps_revision: revision_signal(&record.eps_history),
        revenue_revision: revision_signal(&record.revenue_history),
        fiscal_date_ending: record.fiscal_date_ending,
        period: record.period,
        quarter: record.quarter,
        eps_avg: record.eps_avg,
        eps_low: record.eps_low,
        eps_high: record.eps_high,
        eps_num_analysts: record.eps_num_analysts,
        revenue_avg: record.revenue_avg,
        revenue_low: record.revenue_low,
        revenue_high: record.revenue_high,
        revenue_num_analysts: record.revenue_num_analysts,
    }
}

/// Earnings estimates for the requested periods: annual rows first, then quarterly, each
/// capped at `limit` and kept in provider order.
pub async fn estimates(
    provider: &dyn EstimatesProvider,
    symbol: &Symbol,
    period: EstimatePeriod,
    limit: Limit,
) -> Result<EstimatesResponse, ProviderError> {
    let records = provider.estimates(symbol).await?;
    debug!("[{symbol}] {} estimate rows received", records.len());

    let (annual, quarterly): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| record.period == ReportPeriod::Annual);

    let mut points = Vec::new();
    for (report_period, rows) in [
        (ReportPeriod::Annual, annual),
        (ReportPeriod::Quarterly, quarterly),
    ] {
        if period.includes(report_period) {
            points.extend(rows.into_iter().take(limit.get()).map(to_point));
        }
    }

    Ok(EstimatesResponse {
        symbol: symbol.clone(),
        period,
        points,
    })
}
