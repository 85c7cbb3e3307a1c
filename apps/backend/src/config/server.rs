use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;

/// Listener address plus an optional shuffle seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Fixed seed makes every deal reproducible.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Read `EUCHRE_HOST`, `EUCHRE_PORT` and `EUCHRE_SEED`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("EUCHRE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("EUCHRE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("EUCHRE_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };
        let seed = lookup("EUCHRE_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!("EUCHRE_SEED must be an unsigned integer, got '{raw}'"))
                })
            })
            .transpose()?;
        Ok(Self { host, port, seed })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
