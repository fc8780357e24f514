//! 协同检测 - 寻找两路之间互补的洞见对

use serde::{Deserialize, Serialize};

use syna_core::ProcessingResult;

use crate::text;

/// 一对协同洞见
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synergy {
    /// 发散侧洞见
    pub divergent: String,
    /// 收敛侧洞见
    pub convergent: String,
    /// 协同强度 [0, 1]
    pub strength: f64,
}

impl Synergy {
    pub fn new(divergent: impl Into<String>, convergent: impl Into<String>, strength: f64) -> Self {
        Self {
            divergent: divergent.into(),
            convergent: convergent.into(),
            strength,
        }
    }
}

/// 协同检测器特征
pub trait SynergyDetector: Send + Sync {
    /// 检测协同对，结果顺序必须确定
    fn find_synergies(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
    ) -> Vec<Synergy>;
}

/// 默认协同检测：内容词重叠系数严格高于阈值的洞见对
///
/// 完全相同的洞见视为重复而非协同；仅一侧带否定的洞见对属于潜在矛盾，
/// 交由冲突消解处理；恰好等于阈值时不算协同。
#[derive(Debug, Clone)]
pub struct PatternIntegrator {
    threshold: f64,
}

impl PatternIntegrator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl SynergyDetector for PatternIntegrator {
    fn find_synergies(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
    ) -> Vec<Synergy> {
        let convergent_terms: Vec<_> = convergent
            .insights
            .iter()
            .map(|insight| (insight, text::has_negation(insight), text::content_terms(insight)))
            .collect();

        let mut synergies = Vec::new();
        for d in &divergent.insights {
            let d_negated = text::has_negation(d);
            let d_terms = text::content_terms(d);
            for (c, c_negated, c_terms) in &convergent_terms {
                if d == *c || d_negated != *c_negated {
                    continue;
                }
                let strength = text::overlap(&d_terms, c_terms);
                if strength > self.threshold {
                    synergies.push(Synergy::new(d.as_str(), c.as_str(), strength));
                }
            }
        }
        synergies
    }
}
