use serde::{Deserialize, Serialize};

/// Settings of the storage environment.
///
/// Nothing here affects how check digits or case codes are computed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    pub time_zone: String,
    pub sql_mode: String,
    pub charset: String,
    pub collation: String,
    /// Width of the item code column. `None` stores item codes of any length.
    pub max_item_code_length: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            time_zone: "+00:00".to_string(),
            sql_mode: "NO_AUTO_VALUE_ON_ZERO".to_string(),
            charset: "utf8mb4".to_string(),
            collation: "utf8mb4_general_ci".to_string(),
            max_item_code_length: Some(11),
        }
    }
}

impl StoreConfig {
    // This method will help users to discover the builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder {
            config: StoreConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Session variables a SQL backend applies to every new connection.
    pub fn session_settings(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("time_zone", self.time_zone.as_str()),
            ("sql_mode", self.sql_mode.as_str()),
            ("character_set_client", self.charset.as_str()),
            ("collation_connection", self.collation.as_str()),
        ]
    }
}

pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> StoreConfigBuilder {
        self.config.time_zone = time_zone.into();
        self
    }

    pub fn sql_mode(mut self, sql_mode: impl Into<String>) -> StoreConfigBuilder {
        self.config.sql_mode = sql_mode.into();
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> StoreConfigBuilder {
        self.config.charset = charset.into();
        self
    }

    pub fn collation(mut self, collation: impl Into<String>) -> StoreConfigBuilder {
        self.config.collation = collation.into();
        self
    }

    pub fn max_item_code_length(mut self, max: Option<usize>) -> StoreConfigBuilder {
        self.config.max_item_code_length = max;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
