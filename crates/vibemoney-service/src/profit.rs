use log::debug;
use vibemoney_schema::{AsOf, ProfitResponse, Symbol};

use crate::{PriceProvider, ProviderError};

/// Price change between the close of the `as_of` day and the latest close.
pub async fn profit(
    provider: &dyn PriceProvider,
    symbol: &Symbol,
    as_of: AsOf,
) -> Result<ProfitResponse, ProviderError> {
    let price_then = provider.close_on(symbol, as_of.day).await?;
    let price_now = provider.latest_close(symbol).await?;
    debug!("[{symbol}] close on {}: {price_then:?}, latest: {price_now:?}", as_of.day);

    let profit = price_then.zip(price_now).map(|(then, now)| now - then);

    Ok(ProfitResponse {
        symbol: symbol.clone(),
        as_of: as_of.at,
        price_then,
        price_now,
        profit,
    })
}
