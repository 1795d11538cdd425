//! Values are baked in at compile time through `option_env!`.

use log::LevelFilter;
use url::Url;

pub const DEFAULT_COUNTER_BASE_URL: &str = "https://api.countapi.xyz";
pub const DEFAULT_COUNTER_NAMESPACE: &str = "alexchen.dev";
pub const DEFAULT_COUNTER_KEY: &str = "visits";
pub const DEFAULT_COUNTER_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_FORM_BASE_URL: &str = "https://formspree.io";
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 2_000;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const COUNTER_TIMEOUT_MS_BOUNDS: (u32, u32) = (500, 30_000);
const SUBMIT_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub counter_base_url: Url,
    pub counter_namespace: String,
    pub counter_key: String,
    pub counter_timeout_ms: u32,
    /// Real form endpoint. `None` keeps the simulated submission.
    pub form_endpoint: Option<Url>,
    pub submit_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "PORTFOLIO_COUNTER_URL" => option_env!("PORTFOLIO_COUNTER_URL"),
                "PORTFOLIO_COUNTER_NAMESPACE" => option_env!("PORTFOLIO_COUNTER_NAMESPACE"),
                "PORTFOLIO_COUNTER_KEY" => option_env!("PORTFOLIO_COUNTER_KEY"),
                "PORTFOLIO_COUNTER_TIMEOUT_MS" => option_env!("PORTFOLIO_COUNTER_TIMEOUT_MS"),
                "PORTFOLIO_FORM_URL" => option_env!("PORTFOLIO_FORM_URL"),
                "PORTFOLIO_FORM_ID" => option_env!("PORTFOLIO_FORM_ID"),
                "PORTFOLIO_SUBMIT_DELAY_MS" => option_env!("PORTFOLIO_SUBMIT_DELAY_MS"),
                "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let counter_base_url = parse_http_url(lookup("PORTFOLIO_COUNTER_URL"))
            .unwrap_or_else(|| default_url(DEFAULT_COUNTER_BASE_URL));
        let counter_namespace = parse_non_empty(lookup("PORTFOLIO_COUNTER_NAMESPACE"))
            .unwrap_or_else(|| DEFAULT_COUNTER_NAMESPACE.to_string());
        let counter_key = parse_non_empty(lookup("PORTFOLIO_COUNTER_KEY"))
            .unwrap_or_else(|| DEFAULT_COUNTER_KEY.to_string());
        let counter_timeout_ms = parse_u32_with_bounds(
            lookup("PORTFOLIO_COUNTER_TIMEOUT_MS"),
            DEFAULT_COUNTER_TIMEOUT_MS,
            COUNTER_TIMEOUT_MS_BOUNDS,
        );
        let form_base_url = parse_http_url(lookup("PORTFOLIO_FORM_URL"))
            .unwrap_or_else(|| default_url(DEFAULT_FORM_BASE_URL));
        let form_endpoint = parse_non_empty(lookup("PORTFOLIO_FORM_ID"))
            .and_then(|form_id| form_endpoint(&form_base_url, &form_id));
        let submit_delay_ms = parse_u32_with_bounds(
            lookup("PORTFOLIO_SUBMIT_DELAY_MS"),
            DEFAULT_SUBMIT_DELAY_MS,
            SUBMIT_DELAY_MS_BOUNDS,
        );
        let log_level = lookup("PORTFOLIO_LOG_LEVEL")
            .and_then(|value| value.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            counter_base_url,
            counter_namespace,
            counter_key,
            counter_timeout_ms,
            form_endpoint,
            submit_delay_ms,
            log_level,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Joins `path` onto `base` as a child, whether or not `base` ends in `/`.
pub fn join_path(base: &Url, path: &str) -> Option<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path).ok()
}

fn form_endpoint(base: &Url, form_id: &str) -> Option<Url> {
    join_path(base, &format!("f/{form_id}"))
}

// Only reached for the compile-time defaults above, which always parse.
fn default_url(raw: &str) -> Url {
    Url::parse(raw).unwrap_or_else(|_| unreachable!("default URL {raw} is valid"))
}

fn parse_u32_with_bounds(raw: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

fn parse_non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_http_url(raw: Option<String>) -> Option<Url> {
    let url = Url::parse(parse_non_empty(raw)?.as_str()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(entries: &[(&str, &str)]) -> SiteConfig {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = SiteConfig::default();

        assert_eq!(config.counter_base_url.as_str(), "https://api.countapi.xyz/");
        assert_eq!(config.counter_namespace, "alexchen.dev");
        assert_eq!(config.counter_key, "visits");
        assert_eq!(config.counter_timeout_ms, DEFAULT_COUNTER_TIMEOUT_MS);
        assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
        assert_eq!(config.form_endpoint, None);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn out_of_bounds_numbers_fall_back_to_defaults() {
        let config = config_with(&[
            ("PORTFOLIO_COUNTER_TIMEOUT_MS", "10"),
            ("PORTFOLIO_SUBMIT_DELAY_MS", "not-a-number"),
        ]);

        assert_eq!(config.counter_timeout_ms, DEFAULT_COUNTER_TIMEOUT_MS);
        assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
    }

    #[test]
    fn in_bounds_numbers_are_used() {
        let config = config_with(&[
            ("PORTFOLIO_COUNTER_TIMEOUT_MS", "1500"),
            ("PORTFOLIO_SUBMIT_DELAY_MS", "0"),
        ]);

        assert_eq!(config.counter_timeout_ms, 1_500);
        assert_eq!(config.submit_delay_ms, 0);
    }

    #[test]
    fn form_id_enables_the_real_endpoint() {
        let config = config_with(&[("PORTFOLIO_FORM_ID", "xyzzy")]);

        assert_eq!(
            config.form_endpoint.as_ref().map(Url::as_str),
            Some("https://formspree.io/f/xyzzy")
        );
    }

    #[test]
    fn non_http_counter_url_is_rejected() {
        let config = config_with(&[("PORTFOLIO_COUNTER_URL", "ftp://counter.example")]);

        assert_eq!(config.counter_base_url.as_str(), "https://api.countapi.xyz/");
    }

    #[test]
    fn log_level_is_parsed_case_insensitively() {
        let config = config_with(&[("PORTFOLIO_LOG_LEVEL", "DEBUG")]);

        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn join_path_treats_base_as_directory() {
        let base = Url::parse("https://counter.example/api").expect("valid URL");

        assert_eq!(
            join_path(&base, "hit/site/visits").map(String::from).as_deref(),
            Some("https://counter.example/api/hit/site/visits")
        );
    }
}
