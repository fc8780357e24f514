//! 全局错误处理机制

use thiserror::Error;

use crate::mode::ProcessingMode;

/// Syna 统一错误类型
#[derive(Error, Debug)]
pub enum SynaError {
    /// 任务画像数值越界 (构造时立即拒绝，绝不静默截断)
    #[error("Invalid task profile: {field} = {value} is outside [0, 1]")]
    InvalidProfile { field: &'static str, value: f64 },

    /// 某一路策略执行失败
    #[error("{mode} strategy failed: {reason}")]
    StrategyFailure { mode: ProcessingMode, reason: String },

    /// 整合置信度在截断前越界超过容差
    #[error("Integration inconsistency: raw confidence {raw} exceeds tolerance {tolerance}")]
    IntegrationInconsistency { raw: f64, tolerance: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SynaError {
    /// 构造策略失败错误
    pub fn strategy(mode: ProcessingMode, reason: impl Into<String>) -> Self {
        Self::StrategyFailure {
            mode,
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type Result<T> = std::result::Result<T, SynaError>;
