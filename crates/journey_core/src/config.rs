use crate::error::ConfigError;
use crate::validation::SchemaVariant;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.staticforms.xyz/submit";
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

pub const ENV_ACCESS_KEY: &str = "STATICFORMS_API_KEY";
pub const ENV_ENDPOINT: &str = "JOURNEY_SUBMIT_URL";
pub const ENV_TIMEOUT: &str = "JOURNEY_SUBMIT_TIMEOUT_SECS";
pub const ENV_SCHEMA: &str = "JOURNEY_FORM_SCHEMA";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurveyConfig {
    /// Relay credential. Absence only fails at submit time.
    pub access_key: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
    pub schema: SchemaVariant,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            schema: SchemaVariant::default(),
        }
    }
}

impl SurveyConfig {
    /// Read the process environment, falling back to values baked in at
    /// compile time (the only source on wasm32).
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| compiled_in(key))
        })?)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timeout = match get(ENV_TIMEOUT) {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            ),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        let schema = match get(ENV_SCHEMA) {
            Some(raw) => raw.parse()?,
            None => SchemaVariant::default(),
        };

        Ok(Self {
            access_key: get(ENV_ACCESS_KEY),
            endpoint: get(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout,
            schema,
        })
    }

    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    pub fn without_access_key(mut self) -> Self {
        self.access_key = None;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_schema(mut self, schema: SchemaVariant) -> Self {
        self.schema = schema;
        self
    }
}

fn compiled_in(key: &str) -> Option<String> {
    let value = match key {
        ENV_ACCESS_KEY => option_env!("STATICFORMS_API_KEY"),
        ENV_ENDPOINT => option_env!("JOURNEY_SUBMIT_URL"),
        ENV_TIMEOUT => option_env!("JOURNEY_SUBMIT_TIMEOUT_SECS"),
        ENV_SCHEMA => option_env!("JOURNEY_FORM_SCHEMA"),
        _ => None,
    };
    value.map(str::to_string)
}
