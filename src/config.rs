use std::{env, net::IpAddr};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DB_CONNECTION_STRING").context("DB_CONNECTION_STRING is not set")?;
        let host = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("HOST is not a valid IP address")?;
        let port = match lookup("PORT") {
            Some(p) => p.parse::<u16>().context("PORT is not a valid port number")?,
            None => 3000,
        };
        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
