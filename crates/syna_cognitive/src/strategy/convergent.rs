//! 收敛处理器 - 分析式归纳

use async_trait::async_trait;

use syna_core::{ProcessingMode, ProcessingResult, Result};

use super::ThoughtProcessor;
use crate::text;

/// 收敛处理器
#[derive(Debug, Clone)]
pub struct ConvergentProcessor {
    /// 最多参与归纳的关键词数
    max_terms: usize,
}

impl ConvergentProcessor {
    /// 创建新的收敛处理器
    pub fn new(max_terms: usize) -> Self {
        Self {
            max_terms: max_terms.max(1),
        }
    }
}

impl Default for ConvergentProcessor {
    fn default() -> Self {
        Self::new(6)
    }
}

#[async_trait]
impl ThoughtProcessor for ConvergentProcessor {
    fn mode(&self) -> ProcessingMode {
        ProcessingMode::Convergent
    }

    async fn process_thought(&self, input: &str) -> Result<ProcessingResult> {
        let terms = text::ranked_terms(input, self.max_terms);
        let n = terms.len();

        let insights = match n {
            0 => vec!["no analysable terms in input".to_string()],
            1 => vec![format!("{} is the central factor", terms[0])],
            _ => terms
                .windows(2)
                .map(|pair| format!("{} depends on {}", pair[0], pair[1]))
                .collect(),
        };

        Ok(ProcessingResult::new(
            insights,
            (0.6 + 0.05 * n as f64).min(0.85),
            vec![
                "convergent:decompose".to_string(),
                "convergent:evaluate".to_string(),
            ],
            0.8 + 0.2 * n as f64,
            0.2,
        ))
    }
}
