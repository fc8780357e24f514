//! 冲突消解 - 识别两路之间相互矛盾的洞见对并给出裁决

use serde::{Deserialize, Serialize};

use syna_core::ProcessingResult;

use crate::text;

/// 冲突裁决
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// 保留发散侧
    KeepDivergent,
    /// 保留收敛侧
    KeepConvergent,
    /// 两侧合并为一条限定性表述
    Qualified(String),
    /// 两侧均丢弃
    DropBoth,
}

impl Resolution {
    /// 裁决描述 (写入处理路径)
    pub fn describe(&self) -> String {
        match self {
            Resolution::KeepDivergent => "kept divergent".to_string(),
            Resolution::KeepConvergent => "kept convergent".to_string(),
            Resolution::Qualified(statement) => format!("qualified as \"{statement}\""),
            Resolution::DropBoth => "dropped both".to_string(),
        }
    }
}

/// 一处冲突
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// 发散侧洞见
    pub divergent: String,
    /// 收敛侧洞见
    pub convergent: String,
    /// 冲突惩罚 [0, 1]
    pub penalty: f64,
    /// 裁决
    pub resolution: Resolution,
}

impl Conflict {
    /// 发散侧被此次裁决移除的洞见
    pub fn dropped_divergent(&self) -> Option<&str> {
        match self.resolution {
            Resolution::KeepDivergent => None,
            _ => Some(self.divergent.as_str()),
        }
    }

    /// 收敛侧被此次裁决移除的洞见
    pub fn dropped_convergent(&self) -> Option<&str> {
        match self.resolution {
            Resolution::KeepConvergent => None,
            _ => Some(self.convergent.as_str()),
        }
    }

    /// 被此次裁决移除的原始洞见 (发散侧在前)
    pub fn dropped(&self) -> Vec<&str> {
        self.dropped_divergent()
            .into_iter()
            .chain(self.dropped_convergent())
            .collect()
    }

    /// 裁决产生的新表述
    pub fn statement(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::Qualified(statement) => Some(statement.as_str()),
            _ => None,
        }
    }
}

/// 冲突检测器特征
pub trait ConflictDetector: Send + Sync {
    /// 检测并裁决冲突，结果顺序必须确定
    fn resolve(&self, divergent: &ProcessingResult, convergent: &ProcessingResult)
        -> Vec<Conflict>;
}

/// 默认冲突消解：恰有一侧带否定、且内容词重叠系数严格高于阈值的洞见对
///
/// 保留原始置信度更高的一侧；置信度完全相同时保留收敛侧。
#[derive(Debug, Clone)]
pub struct ConflictResolver {
    threshold: f64,
}

impl ConflictResolver {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// 按原始置信度裁决
    pub fn arbitrate(divergent_confidence: f64, convergent_confidence: f64) -> Resolution {
        if divergent_confidence > convergent_confidence {
            Resolution::KeepDivergent
        } else {
            Resolution::KeepConvergent
        }
    }
}

impl ConflictDetector for ConflictResolver {
    fn resolve(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
    ) -> Vec<Conflict> {
        let convergent_claims: Vec<_> = convergent
            .insights
            .iter()
            .map(|insight| (insight, text::has_negation(insight), text::content_terms(insight)))
            .collect();

        let mut conflicts = Vec::new();
        for d in &divergent.insights {
            let d_negated = text::has_negation(d);
            let d_terms = text::content_terms(d);
            for (c, c_negated, c_terms) in &convergent_claims {
                if d == *c || d_negated == *c_negated {
                    continue;
                }
                let penalty = text::overlap(&d_terms, c_terms);
                if penalty > self.threshold {
                    conflicts.push(Conflict {
                        divergent: d.clone(),
                        convergent: (*c).clone(),
                        penalty,
                        resolution: Self::arbitrate(divergent.confidence, convergent.confidence),
                    });
                }
            }
        }
        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(insights: &[&str], confidence: f64) -> ProcessingResult {
        ProcessingResult::new(
            insights.iter().map(|s| s.to_string()).collect(),
            confidence,
            vec!["test".to_string()],
            0.0,
            0.5,
        )
    }

    #[test]
    fn test_negated_claim_conflicts() {
        let resolver = ConflictResolver::new(0.75);
        let d = result(&["caching reduces latency"], 0.4);
        let c = result(&["caching does not reduce latency", "caching reduces latency"], 0.8);

        let conflicts = resolver.resolve(&d, &c);
        assert_eq!(conflicts.len(), 0, "'reduce' and 'reduces' differ, overlap is 2/3");

        let c = result(&["caching never reduces latency"], 0.8);
        let conflicts = resolver.resolve(&d, &c);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].penalty, 1.0);
        assert_eq!(conflicts[0].resolution, Resolution::KeepConvergent);
        assert_eq!(conflicts[0].dropped(), vec!["caching reduces latency"]);
    }

    #[test]
    fn test_higher_confidence_side_wins() {
        let resolver = ConflictResolver::new(0.75);
        let d = result(&["caching never reduces latency"], 0.9);
        let c = result(&["caching reduces latency"], 0.3);

        let conflicts = resolver.resolve(&d, &c);
        assert_eq!(conflicts[0].resolution, Resolution::KeepDivergent);
        assert_eq!(conflicts[0].dropped(), vec!["caching reduces latency"]);
        assert_eq!(conflicts[0].dropped_divergent(), None);
        assert_eq!(conflicts[0].dropped_convergent(), Some("caching reduces latency"));
    }

    #[test]
    fn test_exact_tie_prefers_convergent() {
        assert_eq!(ConflictResolver::arbitrate(0.6, 0.6), Resolution::KeepConvergent);
        assert_eq!(ConflictResolver::arbitrate(0.61, 0.6), Resolution::KeepDivergent);
        assert_eq!(ConflictResolver::arbitrate(0.2, 0.6), Resolution::KeepConvergent);
    }

    #[test]
    fn test_both_negated_is_not_conflict() {
        let resolver = ConflictResolver::new(0.5);
        let d = result(&["caching never reduces latency"], 0.5);
        let c = result(&["caching does not reduce latency"], 0.5);
        assert!(resolver.resolve(&d, &c).is_empty());
    }

    #[test]
    fn test_qualified_drops_both() {
        let conflict = Conflict {
            divergent: "a".to_string(),
            convergent: "b".to_string(),
            penalty: 0.5,
            resolution: Resolution::Qualified("a, unless b".to_string()),
        };
        assert_eq!(conflict.dropped(), vec!["a", "b"]);
        assert_eq!(conflict.dropped_divergent(), Some("a"));
        assert_eq!(conflict.dropped_convergent(), Some("b"));
        assert_eq!(conflict.statement(), Some("a, unless b"));
    }
}
