/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Lazy paginated item sequences
//!
//! List endpoints return pages wrapped in a `{data: [...], meta: {...}}`
//! envelope. [`PagedItems`] exposes the whole result set as one flat,
//! forward-only sequence of items, fetching pages on demand and stopping at
//! true server-side exhaustion or at the configured page ceiling, whichever
//! comes first.

use crate::application::config::RequestOptions;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::DATA_KEY;
use crate::error::AppError;
use crate::model::types::PageMeta;
use crate::session::auth::Authenticator;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Builds the query string for one page fetch
///
/// The `per_page` default comes first so caller filters can override it;
/// the cursor's `page` key is applied last and always wins.
fn build_page_query(
    items_per_page: u32,
    query: &[(String, String)],
    page: u64,
) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> =
        vec![("per_page".to_string(), items_per_page.to_string())];

    for (key, value) in query {
        if key == "page" {
            continue;
        }
        match pairs.iter_mut().find(|(existing, _)| existing == key) {
            Some(slot) => slot.1 = value.clone(),
            None => pairs.push((key.clone(), value.clone())),
        }
    }

    pairs.push(("page".to_string(), page.to_string()));
    pairs
}

/// Lazy, single-pass sequence of items spanning pages
///
/// State machine with an explicit cursor: `current_page` starts at 0 ("no
/// page fetched yet") and never decreases; an exhausted sequence keeps
/// yielding nothing without refetching. Not restartable, and not safe for
/// concurrent consumption without external synchronization.
pub struct PagedItems {
    http: Client,
    auth: Arc<Authenticator>,
    limiter: Option<Arc<RateLimiter>>,
    base_url: String,
    endpoint: String,
    query: Vec<(String, String)>,
    unwrap_key: String,
    options: RequestOptions,
    current_page: u64,
    last_page: u64,
    total: Option<u64>,
    items: Option<VecDeque<Value>>,
}

impl PagedItems {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        http: Client,
        auth: Arc<Authenticator>,
        limiter: Option<Arc<RateLimiter>>,
        base_url: String,
        endpoint: String,
        query: Vec<(String, String)>,
        options: RequestOptions,
    ) -> Self {
        Self {
            http,
            auth,
            limiter,
            base_url,
            endpoint,
            query,
            unwrap_key: DATA_KEY.to_string(),
            options,
            current_page: 0,
            last_page: 1,
            total: None,
            items: Some(VecDeque::new()),
        }
    }

    /// Produces the next item, fetching the next page when the buffer drains
    ///
    /// Returns `None` once the sequence is exhausted; calling again after
    /// that yields nothing and issues no further network requests. A failed
    /// page fetch is surfaced here, at the point of iteration, and ends the
    /// sequence.
    pub async fn next(&mut self) -> Option<Result<Value, AppError>> {
        loop {
            let buffer = self.items.as_mut()?;
            if let Some(item) = buffer.pop_front() {
                return Some(Ok(item));
            }
            if let Err(e) = self.next_page().await {
                self.items = None;
                return Some(Err(e));
            }
        }
    }

    /// Drains the remainder of the sequence into a vector
    pub async fn collect_all(&mut self) -> Result<Vec<Value>, AppError> {
        let mut out = Vec::new();
        while let Some(item) = self.next().await {
            out.push(item?);
        }
        Ok(out)
    }

    /// Total item count reported by the server, once a page has been fetched
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// 1-based index of the page fetched most recently, 0 before the first
    #[must_use]
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Advances the cursor by one page, or terminates the sequence
    async fn next_page(&mut self) -> Result<(), AppError> {
        let ceiling = match self.options.max_pages {
            Some(max_pages) => self.last_page.min(u64::from(max_pages)),
            None => self.last_page,
        };

        if self.current_page >= ceiling {
            if self.options.max_pages.is_some() && self.current_page < self.last_page {
                debug!(
                    "Hard page limit reached, stopping iteration with {} leftover pages",
                    self.last_page - self.current_page
                );
            }
            self.items = None;
            return Ok(());
        }
        self.current_page += 1;

        let pairs = build_page_query(self.options.items_per_page, &self.query, self.current_page);
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        );
        let mut url = Url::parse(&url)
            .map_err(|e| AppError::InvalidInput(format!("invalid URL {url}: {e}")))?;
        url.query_pairs_mut().extend_pairs(pairs.iter());

        debug!("GET {}", url);

        let request = self
            .http
            .get(url.clone())
            .timeout(self.options.transfer_timeout_duration())
            .build()?;

        if let Some(limiter) = &self.limiter {
            limiter.wait_for_slot().await;
        }
        let response = self.auth.send(&self.http, request).await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::UnexpectedStatus {
                got: status,
                expected: StatusCode::OK,
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        let envelope: Value = serde_json::from_str(&text)?;

        let meta = PageMeta::from_envelope(&envelope);
        if let Some(served) = meta.current_page {
            // Server-reported position; the cursor never moves backwards.
            if served > self.current_page {
                self.current_page = served;
            }
        }
        self.last_page = meta.last_page.unwrap_or(self.current_page);
        if meta.total.is_some() {
            self.total = meta.total;
        }

        self.items = envelope
            .get(&self.unwrap_key)
            .and_then(Value::as_array)
            .map(|items| items.iter().cloned().collect());

        Ok(())
    }
}
