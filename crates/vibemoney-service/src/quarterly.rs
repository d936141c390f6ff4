use log::debug;
use vibemoney_schema::{QuarterlyResponse, Symbol};

use crate::{ProviderError, QuarterlyProvider};

/// Fetch quarterly fundamentals ordered by fiscal period, earliest first.
pub async fn quarterly(
    provider: &dyn QuarterlyProvider,
    symbol: &Symbol,
) -> Result<QuarterlyResponse, ProviderError> {
    let mut quarters = provider.quarterly(symbol).await?;
    debug!("[{symbol}] {} quarters received", quarters.len());

    quarters.sort_by_key(|quarter| quarter.fiscal_period);

    Ok(QuarterlyResponse {
        symbol: symbol.clone(),
        quarters,
    })
}
