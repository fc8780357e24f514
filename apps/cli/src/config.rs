//! 配置加载
//!
//! 优先级 (低 -> 高)：程序默认值 -> YAML 配置文件 -> `SYNA_*` 环境变量。

use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use syna_cognitive::{IntegrationConfig, SelectorConfig, SynaConfig};

/// 日志输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 默认日志级别 (`RUST_LOG` 优先)
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub selector: SelectorConfig,
    pub integration: IntegrationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 认知引擎部分的配置
    pub fn syna(&self) -> SynaConfig {
        SynaConfig {
            selector: self.selector.clone(),
            integration: self.integration.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        self.syna().validate()?;
        self.logging
            .level
            .parse::<tracing::Level>()
            .map_err(|_| {
                anyhow::anyhow!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )
            })?;
        Ok(())
    }
}

/// 加载并校验配置，配置文件不存在时仅使用默认值与环境变量
pub fn load(path: &Path) -> Result<AppConfig> {
    let config: AppConfig = Figment::new()
        .merge(Serialized::defaults(AppConfig::default()))
        .merge(Yaml::file(path))
        .merge(Env::prefixed("SYNA_").split("__"))
        .extract()
        .context("Failed to extract configuration from figment")?;

    config.validate()?;
    Ok(config)
}
