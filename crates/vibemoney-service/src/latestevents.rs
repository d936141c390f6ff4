use std::cmp::Reverse;

use log::debug;
use vibemoney_schema::{LatestEventsResponse, Limit, Symbol};

use crate::{LatestEventsProvider, ProviderError};

/// Fetch the latest events for a symbol, newest first, at most `limit` of them.
pub async fn latest_events(
    provider: &dyn LatestEventsProvider,
    symbol: &Symbol,
    limit: Limit,
) -> Result<LatestEventsResponse, ProviderError> {
    let mut events = provider.latest_events(symbol, limit).await?;
    debug!("[{symbol}] {} events received", events.len());

    events.sort_by_key(|event| Reverse(event.published_at));
    events.truncate(limit.get());

    Ok(LatestEventsResponse {
        symbol: symbol.clone(),
        events,
    })
}
