use std::env;
use std::num::ParseIntError;
use thiserror::Error as ThisError;

pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 5100;

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

pub const DEFAULT_YAHOO_COOKIE_URL: &str = "https://fc.yahoo.com";

pub const DEFAULT_LOG_FILTER: &str = "companydata=debug,stockview=debug,tower_http=debug,axum=debug";

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Invalid SERVER_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub yahoo_base_url: String,
    pub yahoo_cookie_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SERVER_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| Error::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            host: lookup("SERVER_HOST").unwrap_or(DEFAULT_HOST.to_string()),
            port,
            yahoo_base_url: lookup("YAHOO_BASE_URL").unwrap_or(DEFAULT_YAHOO_BASE_URL.to_string()),
            yahoo_cookie_url: lookup("YAHOO_COOKIE_URL")
                .unwrap_or(DEFAULT_YAHOO_COOKIE_URL.to_string()),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
