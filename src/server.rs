use axum::Router;
use serde_json::json;
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .filter(|port| *port != 0)
            .unwrap_or(DEFAULT_PORT);
        let host = lookup("PORTFOLIO_BIND")
            .and_then(|value| value.trim().parse::<IpAddr>().ok())
            .unwrap_or(DEFAULT_BIND_ADDRESS);
        let dist_dir = lookup("PORTFOLIO_DIST_DIR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Self {
            bind_address: SocketAddr::new(host, port),
            dist_dir,
        }
    }
}

pub fn router(config: &ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new().fallback_service(static_service)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    log_event(
        "preview_server_listening",
        json!({
            "address": config.bind_address.to_string(),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn log_event(event: &str, fields: serde_json::Value) {
    let payload = crate::report::event_payload(log::Level::Info, event, fields);
    println!("{payload}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(entries: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let config = config_with(&[]);

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:8080");
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        assert_eq!(config_with(&[("PORT", "http")]).bind_address.port(), 8080);
        assert_eq!(config_with(&[("PORT", "0")]).bind_address.port(), 8080);
        assert_eq!(config_with(&[("PORT", "3000")]).bind_address.port(), 3000);
    }

    #[test]
    fn bind_host_and_dist_dir_are_configurable() {
        let config = config_with(&[
            ("PORTFOLIO_BIND", "127.0.0.1"),
            ("PORTFOLIO_DIST_DIR", "site/out"),
        ]);

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.dist_dir, PathBuf::from("site/out"));
    }
}
