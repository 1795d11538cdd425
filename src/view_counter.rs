//! Site view counter backed by a remote counting service.
//!
//! A browser session counts once: the first page load calls the service's
//! `hit` endpoint and records `hasVisited` in session storage; later loads
//! in the same session only `get` the current value. Failures are
//! reported and replaced by a fixed placeholder, never shown as errors.

use log::Level;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use url::Url;

use crate::config::{join_path, SiteConfig};
use crate::report::Reporter;
use crate::storage::KeyValueStore;

pub const VISITED_KEY: &str = "hasVisited";
pub const FALLBACK_DISPLAY: &str = "1,234";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitState {
    FirstVisit,
    Returning,
}

impl VisitState {
    pub fn from_session(session: &impl KeyValueStore) -> Self {
        match session.read(VISITED_KEY) {
            Some(_) => Self::Returning,
            None => Self::FirstVisit,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::FirstVisit => "first",
            Self::Returning => "returning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterEndpoints {
    hit: Url,
    get: Url,
}

impl CounterEndpoints {
    pub fn new(base: &Url, namespace: &str, key: &str) -> Option<Self> {
        Some(Self {
            hit: join_path(base, &format!("hit/{namespace}/{key}"))?,
            get: join_path(base, &format!("get/{namespace}/{key}"))?,
        })
    }

    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        Self::new(
            &config.counter_base_url,
            &config.counter_namespace,
            &config.counter_key,
        )
    }

    pub fn for_visit(&self, visit: VisitState) -> &Url {
        match visit {
            VisitState::FirstVisit => &self.hit,
            VisitState::Returning => &self.get,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CounterResponse {
    pub value: u64,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("counter request failed: {0}")]
    Network(String),
    #[error("counter responded with status {0}")]
    Status(u16),
    #[error("counter response was malformed: {0}")]
    Decode(String),
    #[error("counter request timed out after {0} ms")]
    Timeout(u32),
}

impl CounterError {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
            Self::Timeout(_) => "timeout",
        }
    }
}

pub fn decode_count(body: &str) -> Result<u64, CounterError> {
    serde_json::from_str::<CounterResponse>(body)
        .map(|response| response.value)
        .map_err(|error| CounterError::Decode(error.to_string()))
}

#[allow(async_fn_in_trait)]
pub trait CounterClient {
    async fn fetch_count(&self, url: &Url) -> Result<u64, CounterError>;
}

/// Resolves the text for `#view-counter`, marking the session as counted
/// after a successful first-visit hit.
pub async fn resolve_display<C, S, R>(
    client: &C,
    endpoints: &CounterEndpoints,
    session: &S,
    reporter: &R,
) -> String
where
    C: CounterClient,
    S: KeyValueStore,
    R: Reporter,
{
    let visit = VisitState::from_session(session);
    let url = endpoints.for_visit(visit);

    match client.fetch_count(url).await {
        Ok(count) => {
            if visit == VisitState::FirstVisit {
                session.write(VISITED_KEY, "true");
            }
            reporter.report(
                Level::Debug,
                "view_counter_resolved",
                json!({ "visit": visit.as_str(), "value": count }),
            );
            format_count(count)
        }
        Err(error) => {
            reporter.report(
                Level::Error,
                "view_counter_failed",
                json!({
                    "visit": visit.as_str(),
                    "error_class": error.class(),
                    "error": error.to_string(),
                }),
            );
            FALLBACK_DISPLAY.to_string()
        }
    }
}

/// Compact display form: `2.5M`, `1.5K`, else the comma-grouped number.
/// Tenths round half up.
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        return format_tenths(count, 1_000_000, 'M');
    }

    if count >= 1_000 {
        return format_tenths(count, 1_000, 'K');
    }

    group_thousands(count)
}

fn format_tenths(count: u64, unit: u64, suffix: char) -> String {
    let tenths = (u128::from(count) * 10 + u128::from(unit) / 2) / u128::from(unit);
    format!("{}.{}{suffix}", tenths / 10, tenths % 10)
}

fn group_thousands(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
