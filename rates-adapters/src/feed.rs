//! HTTP adapter for the upstream rate provider.

use rates_types::{ExchangeRate, FeedError, RateFeed, RateRecordDto, RateTable};

/// `RateFeed` implementation over a plain HTTP GET.
///
/// The provider URL is injected at construction; one request per
/// `fetch_rates` call, no retry.
pub struct HttpRateFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpRateFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Uses a caller-supplied client (e.g. one with a request timeout).
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

/// Re-tags the provider's optional-field records into domain records.
/// A single malformed record makes the whole response unusable.
fn into_table(records: Vec<RateRecordDto>) -> Result<RateTable, FeedError> {
    records
        .into_iter()
        .map(ExchangeRate::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map(RateTable::new)
        .map_err(|err| {
            tracing::warn!("discarding provider response: {err}");
            FeedError::UnexpectedResponse
        })
}

#[async_trait::async_trait]
impl RateFeed for HttpRateFeed {
    async fn fetch_rates(&self) -> Result<RateTable, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| FeedError::Transport(err.to_string()))?;

        let records: Vec<RateRecordDto> = response
            .json()
            .await
            .map_err(|_| FeedError::UnexpectedResponse)?;

        into_table(records)
    }
}
