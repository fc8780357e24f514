//! 认知引擎配置
//!
//! 所有阈值都归属于使用它的组件实例，不存在进程级全局常量。

use serde::{Deserialize, Serialize};

use syna_core::Result;

use crate::integration::IntegrationConfig;
use crate::selector::SelectorConfig;

/// Syna 配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynaConfig {
    /// 模式选择
    pub selector: SelectorConfig,
    /// 整合引擎
    pub integration: IntegrationConfig,
}

impl SynaConfig {
    /// 校验全部子配置
    pub fn validate(&self) -> Result<()> {
        self.selector.validate()?;
        self.integration.validate()
    }
}
