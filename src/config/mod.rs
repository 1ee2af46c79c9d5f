use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
};

use url::Url;

use crate::error::ConfigError;

const REDACTED: &str = "***";

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// sqlx connection string, e.g. `sqlite://data.db`.
    /// Env: `DATABASE_URL`. Required, no default.
    #[serde(default)]
    pub database_url: String,

    /// HTTP server listen address.
    /// Env: `LISTEN_ADDR`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port.
    /// Env: `PORT`. Default: `5000`.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level for the tracing subscriber when `RUST_LOG` is unset.
    /// Env: `LOGLEVEL`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Frontend build directory, tried before the built-in candidates.
    /// Env: `STATIC_DIR`.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            listen_addr: default_listen_ip(),
            port: default_port(),
            loglevel: default_loglevel(),
            static_dir: None,
        }
    }
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

const ENV_KEYS: [&str; 5] = [
    "database_url",
    "listen_addr",
    "port",
    "loglevel",
    "static_dir",
];

impl Config {
    /// Defaults, then `config.toml` if present, then the process environment.
    pub fn figment() -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        figment.merge(Env::raw().only(&ENV_KEYS))
    }

    /// Loads configuration and checks the fields the server cannot start without.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let cfg: Self = figment.extract()?;
        if cfg.database_url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(cfg)
    }

    /// `database_url` with any password masked, for logging.
    pub fn redacted_database_url(&self) -> String {
        match Url::parse(&self.database_url) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some(REDACTED));
                }
                url.to_string()
            }
            Err(_) => REDACTED.to_string(),
        }
    }
}

fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

fn default_port() -> u16 {
    5000
}

fn default_loglevel() -> String {
    "info".to_string()
}
