use anyhow::{Context, Result, anyhow};
use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub seed_sample_data: bool,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<HeaderValue>,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset keys fall back to
    /// their defaults; set but unparsable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => 8000,
        };

        let seed_sample_data = parse_flag("SEED_SAMPLE_DATA", lookup("SEED_SAMPLE_DATA"), true)?;
        let is_dev = parse_flag("DEV_MODE", lookup("DEV_MODE"), false)?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG", lookup("ENABLE_FILE_LOG"), false)?;

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) if raw.trim() != "*" => parse_origins(&raw)?,
            _ => Vec::new(),
        };

        Ok(Self {
            port,
            seed_sample_data,
            cors_allowed_origins,
            is_dev,
            enable_file_log,
        })
    }
}

fn parse_flag(name: &str, value: Option<String>, default: bool) -> Result<bool> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("CORS_ALLOWED_ORIGINS has an invalid origin: '{origin}'"))
        })
        .collect()
}
