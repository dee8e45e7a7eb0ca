use super::toml_config::TomlConfig;
use super::{AppConfig, Overrides};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "soi-consulta")]
#[command(about = "Formulario web para consultar planillas SOI")]
pub struct CliConfig {
    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "SOI_PROXY_URL", help = "Remote query endpoint")]
    pub endpoint: Option<String>,

    #[arg(long, env = "SOI_BIND_ADDR", help = "Address the web server listens on")]
    pub bind: Option<String>,

    #[arg(long, help = "Seconds before an outbound query is abandoned")]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併命令列參數與設定檔；空白的端點視為未設定
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let overrides = Overrides {
            bind: self.bind.clone(),
            endpoint: self.endpoint.clone().filter(|e| !e.trim().is_empty()),
            timeout_secs: self.timeout_secs,
            verbose: self.verbose,
            json_logs: self.json_logs,
        };

        Ok(AppConfig::resolve(overrides, file.as_ref()))
    }
}
