use log::debug;
use vibemoney_schema::{
    Limit, SentimentItem, SentimentLabel, SentimentResponse, Symbol, ValidationError,
};

use crate::{NewsArticle, ProviderError, SentimentProvider};

pub const DEFAULT_GOOD_THRESHOLD: f64 = 0.07;

/// Aggregation knobs for a sentiment request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentOptions {
    pub good_threshold: f64,
    /// Maximum articles requested per ticker
    pub limit: Limit,
    /// Ignore mentions less relevant than this, in `[0, 1]`
    pub min_relevance: Option<f64>,
}

impl SentimentOptions {
    pub fn new(
        good_threshold: Option<f64>,
        limit: Limit,
        min_relevance: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let good_threshold = good_threshold.unwrap_or(DEFAULT_GOOD_THRESHOLD);
        if !good_threshold.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "good_threshold",
            });
        }

        if let Some(relevance) = min_relevance {
            if !(0.0..=1.0).contains(&relevance) {
                return Err(ValidationError::OutOfRange {
                    field: "min_relevance",
                    min: 0.0,
                    max: 1.0,
                });
            }
        }

        Ok(Self {
            good_threshold,
            limit,
            min_relevance,
        })
    }
}

/// Parse, upper-case and de-duplicate tickers, keeping first-seen order. Blank entries are
/// skipped; at least one ticker must remain.
pub fn normalize_tickers<'a, I>(raw: I) -> Result<Vec<Symbol>, ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tickers: Vec<Symbol> = Vec::new();
    for entry in raw {
        if entry.trim().is_empty() {
            continue;
        }
        let symbol = Symbol::parse(entry)?;
        if !tickers.contains(&symbol) {
            tickers.push(symbol);
        }
    }

    if tickers.is_empty() {
        return Err(ValidationError::EmptyTickers);
    }
    Ok(tickers)
}

/// Average the scores an article feed attaches to `ticker`.
pub fn summarize(
    ticker: &Symbol,
    feed: &[NewsArticle],
    options: &SentimentOptions,
) -> SentimentItem {
    let scores: Vec<f64> = feed
        .iter()
        .flat_map(|article| article.ticker_sentiment.iter())
        .filter(|mention| mention.ticker == ticker.as_str())
        .filter(|mention| {
            options
                .min_relevance
                .map_or(true, |min| mention.relevance_score >= min)
        })
        .map(|mention| mention.sentiment_score)
        .filter(|score| score.is_finite())
        .collect();

    let avg_sentiment = match scores.len() {
        0 => None,
        n => Some(scores.iter().sum::<f64>() / n as f64),
    };

    SentimentItem {
        ticker: ticker.clone(),
        article_count: feed.len(),
        avg_sentiment,
        label: avg_sentiment.map(SentimentLabel::from_score),
        good: avg_sentiment.is_some_and(|avg| avg >= options.good_threshold),
    }
}

/// News sentiment for each ticker, in request order.
pub async fn sentiment(
    provider: &dyn SentimentProvider,
    tickers: &[Symbol],
    options: &SentimentOptions,
) -> Result<SentimentResponse, ProviderError> {
    let mut results = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        let feed = provider.news_feed(ticker, options.limit).await?;
        debug!("[{ticker}] {} articles received", feed.len());
        results.push(summarize(ticker, &feed, options));
    }

    Ok(SentimentResponse {
        tickers: tickers.to_vec(),
        used_threshold: options.good_threshold,
        results,
    })
}
