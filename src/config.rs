use std::env;

use anyhow::{anyhow, Context, Result};

use crate::ai::config::AiConfig;
use crate::api::ApiConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub ai: AiConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Read configuration from the environment. `.env` is loaded by
    /// [`crate::run`] before this is called.
    ///
    /// Fails when `GOOGLE_API_KEY` is missing since nothing can be generated
    /// without it.
    pub fn from_env() -> Result<Self> {
        let ai = AiConfig::from_env().ok_or_else(|| {
            anyhow!("API Key not found. Please set the GOOGLE_API_KEY environment variable.")
        })?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("RATE_LIMIT_PER_SECOND must be a whole number")?
            .filter(|limit| *limit > 0);
        Ok(Self {
            bind_addr,
            ai,
            api: ApiConfig {
                rate_limit_per_second,
            },
        })
    }
}
