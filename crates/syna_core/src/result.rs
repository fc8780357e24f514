//! 处理结果 - 各组件之间流转的统一值对象

use serde::{Deserialize, Serialize};

/// 处理结果
///
/// 由某一路策略或整合引擎一次性创建，之后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// 洞见列表 (顺序即推导顺序)
    pub insights: Vec<String>,
    /// 置信度 [0, 1]
    pub confidence: f64,
    /// 处理路径 (仅用于审计与解释，不参与控制流)
    pub processing_path: Vec<String>,
    /// 资源消耗 (抽象成本单位，非负)
    pub resource_usage: f64,
    /// 新颖度 [0, 1]
    pub novelty_score: f64,
}

impl ProcessingResult {
    /// 创建新的处理结果
    pub fn new(
        insights: Vec<String>,
        confidence: f64,
        processing_path: Vec<String>,
        resource_usage: f64,
        novelty_score: f64,
    ) -> Self {
        Self {
            insights,
            confidence,
            processing_path,
            resource_usage,
            novelty_score,
        }
    }

    /// 检查结果不变量，返回第一处违反的描述
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.processing_path.is_empty() {
            return Err("processing path is empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("confidence {} is outside [0, 1]", self.confidence));
        }
        if !(0.0..=1.0).contains(&self.novelty_score) {
            return Err(format!("novelty score {} is outside [0, 1]", self.novelty_score));
        }
        if !self.resource_usage.is_finite() || self.resource_usage < 0.0 {
            return Err(format!("resource usage {} is negative", self.resource_usage));
        }
        Ok(())
    }
}
