// config.rs

use crate::error::ConfigError;

pub const LOG_VAR: &str = "CALC_LOG";
pub const PROMPT_VAR: &str = "CALC_PROMPT";
pub const WINDOW_VAR: &str = "CALC_HISTORY_WINDOW";

/// Settings for the interactive shell, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// `tracing` filter directive, e.g. `warn` or `calc_history=debug`.
    pub log_filter: String,
    pub prompt: String,
    /// Records shown by `history` when no count is given.
    pub history_window: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            prompt: "> ".to_string(),
            history_window: 10,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_VAR) {
            config.log_filter = filter;
        }
        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }
        if let Some(window) = lookup(WINDOW_VAR) {
            config.history_window =
                window
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidWindow {
                        var: WINDOW_VAR,
                        value: window.clone(),
                        source,
                    })?;
        }
        Ok(config)
    }
}
