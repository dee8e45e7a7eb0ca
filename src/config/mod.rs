#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_socket_addr, validate_url, Validate,
};
use std::net::SocketAddr;
use std::time::Duration;
use self::toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str =
    "https://soiplanillaproxy-production.up.railway.app/planillas/consultar";
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// 查詢端點與逾時設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl QueryConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// 合併後的伺服器設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub query: QueryConfig,
    pub verbose: bool,
    pub json_logs: bool,
}

impl AppConfig {
    /// 優先順序：命令列／環境變數 > 設定檔 > 預設值
    pub fn resolve(overrides: Overrides, file: Option<&TomlConfig>) -> Self {
        let server = file.and_then(|f| f.server.as_ref());
        let query = file.and_then(|f| f.query.as_ref());
        let logging = file.and_then(|f| f.logging.as_ref());

        let bind = overrides
            .bind
            .or_else(|| server.and_then(|s| s.bind.clone()))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let endpoint = overrides
            .endpoint
            .or_else(|| query.and_then(|q| q.endpoint.clone()))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = overrides
            .timeout_secs
            .or_else(|| query.and_then(|q| q.timeout_seconds))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            bind,
            query: QueryConfig::new(endpoint).with_timeout(Duration::from_secs(timeout_secs)),
            verbose: overrides.verbose || logging.and_then(|l| l.verbose).unwrap_or(false),
            json_logs: overrides.json_logs || logging.and_then(|l| l.json).unwrap_or(false),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.bind", &self.bind)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(Overrides::default(), None)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.bind", &self.bind)?;
        self.socket_addr()?;

        validate_url("query.endpoint", &self.query.endpoint)?;
        validate_range(
            "query.timeout_seconds",
            self.query.timeout.as_secs(),
            1,
            MAX_TIMEOUT_SECS,
        )?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

/// 來自命令列或環境變數的設定
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub verbose: bool,
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_config_defaults() {
        let config = QueryConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(45));
    }

    #[test]
    fn test_default_app_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.query, QueryConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_take_precedence_over_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[server]
bind = "0.0.0.0:9000"

[query]
endpoint = "https://file.example/consultar"
timeout_seconds = 10
"#,
        )
        .unwrap();

        let overrides = Overrides {
            endpoint: Some("https://flag.example/consultar".to_string()),
            ..Overrides::default()
        };
        let config = AppConfig::resolve(overrides, Some(&file));

        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.query.endpoint, "https://flag.example/consultar");
        assert_eq!(config.query.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.query.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.query.timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.bind = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }
}
