//! 配置
//!
//! 加载顺序（后者覆盖前者）：
//! 1. 内置默认值
//! 2. `<config dir>/config.json`（不存在时使用默认值）
//! 3. 环境变量 `CUSTOMER_API_ENDPOINT` / `CUSTOMER_LOG_LEVEL`
//! 4. 命令行参数 `--endpoint` / `--log-level`
//!
//! 3 和 4 由 clap 合并后经 [`Overrides`] 传入。配置目录本身可由
//! `CUSTOMER_CONFIG_DIR` 或 `--config-dir` 指定，否则为平台配置目录下的
//! `customer-console/`。

mod error;
mod log_level;

use std::path::{Path, PathBuf};
use std::time::Duration;

use customer_client::{ClientConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT};
use serde::Deserialize;
use url::Url;

use crate::view::theme::Theme;

pub use error::{ConfigError, ConfigResult};
pub use log_level::LogLevel;

const APP_DIR: &str = "customer-console";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_LOG_FILE: &str = "customer-console.log";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub theme: Theme,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// 集合接口地址，例如 `http://127.0.0.1:8080/api/customers`
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    /// 整个请求的超时；缺省为不限时
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// 相对路径以配置目录为基准；缺省为 `customer-console.log`
    pub file: Option<PathBuf>,
}

/// 来自环境变量与命令行的覆盖项
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub log_level: Option<LogLevel>,
}

impl ConsoleConfig {
    /// 平台配置目录下的 `customer-console/`
    pub fn default_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// 从配置目录加载；目录不存在时自动创建
    ///
    /// 不做校验，加载后需调用 [`validate`](Self::validate)。
    pub fn load(config_dir: &Path) -> ConfigResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::Json { path, source: e })
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(endpoint) = overrides.endpoint {
            self.api.endpoint = endpoint;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let endpoint = self.api.endpoint.trim();
        let url = Url::parse(endpoint).map_err(|e| {
            ConfigError::Invalid(format!("api.endpoint '{endpoint}' is not a valid URL: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api.endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::Invalid(format!(
                "api.endpoint has no host: '{endpoint}'"
            )));
        }

        if self.api.connect_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "api.connect_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.api.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "api.request_timeout_secs must be greater than 0 when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.api.endpoint.trim().to_string(),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
            request_timeout: self.api.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// 日志文件的绝对路径
    pub fn log_file(&self, config_dir: &Path) -> PathBuf {
        match &self.logging.file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => config_dir.join(file),
            None => config_dir.join(DEFAULT_LOG_FILE),
        }
    }

    /// 记录配置摘要
    pub fn log_summary(&self) {
        log::info!("Configuration loaded:");
        log::info!(
            "  api: {} (connect {}s, request {})",
            self.api.endpoint,
            self.api.connect_timeout_secs,
            self.api
                .request_timeout_secs
                .map_or_else(|| "unlimited".to_string(), |s| format!("{s}s"))
        );
        log::info!("  logging: {}", self.logging.level);
        log::info!("  theme: {:?}", self.theme);
    }
}
