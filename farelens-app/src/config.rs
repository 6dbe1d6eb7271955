use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the search service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. The original client had none at all; this is
    /// the only bound on a hung request.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            // Optional layered files; the binary runs fine with neither.
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `FARELENS_API__BASE_URL=...`
            .add_source(config::Environment::with_prefix("FARELENS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
