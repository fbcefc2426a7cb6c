//! Store configuration sourced from the process environment.
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `UPSTASH_REDIS_URL` | Endpoint of the Upstash Redis database |
//! | `UPSTASH_REDIS_TOKEN` | Auth token for the endpoint |
//!
//! Both are required and have no defaults. An empty value counts as unset; a value that is
//! not valid unicode is rejected as invalid.

use std::env::{self, VarError};
use std::fmt;

use crate::errors::InitError;

pub const REDIS_URL_ENV: &str = "UPSTASH_REDIS_URL";
pub const REDIS_TOKEN_ENV: &str = "UPSTASH_REDIS_TOKEN";

#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    url: String,
    token: String,
}

impl StoreConfig {
    /// Reads both variables from the process environment.
    pub fn from_env() -> Result<Self, InitError> {
        for key in [REDIS_URL_ENV, REDIS_TOKEN_ENV] {
            if let Err(VarError::NotUnicode(_)) = env::var(key) {
                return Err(InitError::InvalidConfiguration(key));
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same validation as [`StoreConfig::from_env`] over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let url = read(REDIS_URL_ENV);
        let token = read(REDIS_TOKEN_ENV);

        match (url, token) {
            (Some(url), Some(token)) => Ok(Self { url, token }),
            (url, token) => {
                let mut missing = Vec::with_capacity(2);
                if url.is_none() {
                    missing.push(REDIS_URL_ENV);
                }
                if token.is_none() {
                    missing.push(REDIS_TOKEN_ENV);
                }
                Err(InitError::MissingConfiguration(missing))
            }
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// keep the token out of logs
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("token", &"***")
            .finish()
    }
}
