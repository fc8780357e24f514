//! 处理模式

use std::fmt;

use serde::{Deserialize, Serialize};

/// 处理模式，每次请求选定一次，处理过程中不再变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    /// 发散 (探索式)
    Divergent,
    /// 收敛 (分析式)
    Convergent,
    /// 双侧并行 + 整合
    Bilateral,
}

impl ProcessingMode {
    /// 获取模式名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::Divergent => "divergent",
            ProcessingMode::Convergent => "convergent",
            ProcessingMode::Bilateral => "bilateral",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
