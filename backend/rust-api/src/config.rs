use serde::Deserialize;
use std::{env, str::FromStr};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", value)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub log_format: LogFormat,
    /// Upper bound on problems returned by one generation request.
    pub max_problems_per_request: usize,
    /// `username:password` expected on `/metrics`.
    pub metrics_auth: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8081".to_string(),
            log_format: LogFormat::Pretty,
            max_problems_per_request: 200,
            metrics_auth: "admin:changeme".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Root .env first (two levels up), then a local one
        let skip_root_env = env::var("SKIP_ROOT_ENV").is_ok();
        if skip_root_env {
            dotenvy::dotenv().ok();
        } else if dotenvy::from_path("../../.env").is_err() {
            dotenvy::dotenv().ok();
        }

        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // config/{env}.toml, then APP__SECTION__KEY overrides
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let defaults = Config::default();

        let bind_addr = settings
            .get_string("server.bind_addr")
            .or_else(|_| env::var("BIND_ADDR"))
            .unwrap_or(defaults.bind_addr);

        let log_format = match settings
            .get_string("logging.format")
            .or_else(|_| env::var("LOG_FORMAT"))
        {
            Ok(raw) => raw.parse::<LogFormat>().map_err(config::ConfigError::Message)?,
            Err(_) => defaults.log_format,
        };

        let max_problems_per_request = match settings
            .get_string("practice.max_problems_per_request")
            .or_else(|_| env::var("MAX_PROBLEMS_PER_REQUEST"))
        {
            Ok(raw) => parse_limit(&raw)?,
            Err(_) => defaults.max_problems_per_request,
        };

        let metrics_auth = settings
            .get_string("metrics.auth")
            .or_else(|_| env::var("METRICS_AUTH"))
            .unwrap_or_else(|_| {
                if env == "prod" {
                    eprintln!("WARNING: METRICS_AUTH not set, /metrics uses default credentials");
                }
                defaults.metrics_auth
            });

        Ok(Config {
            bind_addr,
            log_format,
            max_problems_per_request,
            metrics_auth,
        })
    }
}

fn parse_limit(raw: &str) -> Result<usize, config::ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(config::ConfigError::Message(
            "max_problems_per_request must be positive".to_string(),
        )),
        Ok(limit) => Ok(limit),
        Err(_) => Err(config::ConfigError::Message(format!(
            "Invalid max_problems_per_request: {}",
            raw
        ))),
    }
}
