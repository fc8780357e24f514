//! 发散处理器 - 探索式重组

use async_trait::async_trait;

use syna_core::{ProcessingMode, ProcessingResult, Result};

use super::ThoughtProcessor;
use crate::text;

/// 发散处理器
#[derive(Debug, Clone)]
pub struct DivergentProcessor {
    /// 最多参与重组的关键词数
    max_terms: usize,
}

impl DivergentProcessor {
    /// 创建新的发散处理器
    pub fn new(max_terms: usize) -> Self {
        Self {
            max_terms: max_terms.max(1),
        }
    }
}

impl Default for DivergentProcessor {
    fn default() -> Self {
        Self::new(6)
    }
}

#[async_trait]
impl ThoughtProcessor for DivergentProcessor {
    fn mode(&self) -> ProcessingMode {
        ProcessingMode::Divergent
    }

    async fn process_thought(&self, input: &str) -> Result<ProcessingResult> {
        let terms = text::key_terms(input, self.max_terms);
        let n = terms.len();

        let insights = match n {
            0 => vec!["reimagine the question from first principles".to_string()],
            1 => vec![format!("reimagine {} from an unexpected angle", terms[0])],
            _ => (0..n)
                .map(|i| format!("reimagine {} through {}", terms[i], terms[(i + 1) % n]))
                .collect(),
        };

        Ok(ProcessingResult::new(
            insights,
            (0.45 + 0.05 * n as f64).min(0.65),
            vec!["divergent:expand".to_string(), "divergent:recombine".to_string()],
            1.0 + 0.25 * n as f64,
            (0.55 + 0.05 * n as f64).min(0.9),
        ))
    }
}
