//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use catalog_client::net::api::{DEFAULT_API_URL, normalize_base_url};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    /// REST base advertised to the browser client.
    pub api_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3001
    /// - `CATALOG_API_URL`: default `http://localhost:3000/products`
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidVar`] when a value is present but unusable.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidVar`] when a value is present but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| HostError::InvalidVar { var: "HOST", value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| HostError::InvalidVar { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let api_url = match lookup("CATALOG_API_URL") {
            Some(raw) => parse_api_url(&raw).ok_or(HostError::InvalidVar { var: "CATALOG_API_URL", value: raw })?,
            None => DEFAULT_API_URL.to_owned(),
        };
        Ok(Self { host, port, api_url })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_api_url(raw: &str) -> Option<String> {
    let url = normalize_base_url(raw);
    let accepted = url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/');
    (accepted && url.len() > 1).then_some(url)
}
