//! Application settings loaded from environment variables.

use std::env;

use super::constants::DEFAULT_HOME_ROUTE;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Route navigated to after a successful sign-up or sign-in
    pub home_route: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_route: DEFAULT_HOME_ROUTE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            home_route: env::var("HOME_ROUTE").unwrap_or_else(|_| DEFAULT_HOME_ROUTE.to_string()),
        }
    }
}
