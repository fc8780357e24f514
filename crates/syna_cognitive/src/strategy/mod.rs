//! 策略接口 - 发散 / 收敛两路分析策略
//!
//! 核心只依赖 [`ThoughtProcessor`] 的结果契约；此处附带的两路参考实现
//! 仅做确定性的关键词重组，方便端到端运行。

pub mod convergent;
pub mod divergent;

use async_trait::async_trait;

use syna_core::{ProcessingMode, ProcessingResult, Result};

pub use convergent::ConvergentProcessor;
pub use divergent::DivergentProcessor;

/// 思维处理器特征
///
/// 必须可被并发调用，且不与兄弟实例共享可变状态。
#[async_trait]
pub trait ThoughtProcessor: Send + Sync {
    /// 处理器所代表的模式
    fn mode(&self) -> ProcessingMode;

    /// 处理一次输入
    async fn process_thought(&self, input: &str) -> Result<ProcessingResult>;
}
