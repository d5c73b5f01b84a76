use derive_more::{Display, Error};
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;
use wasm_bindgen::JsValue;

/// Options accepted by the `TicTacToe` constructor.
///
/// Missing fields take their defaults, and `undefined`/`null` means "all defaults".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Initial move list order.
    pub ascending: bool,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ascending: true,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::new(format!("unknown log level {:?}", self.log_level))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid config: {message}")]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for ConfigError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
