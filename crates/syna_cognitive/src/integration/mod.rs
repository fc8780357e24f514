//! 整合引擎 - 合并发散与收敛两路结果
//!
//! 依次执行：协同检测 -> 冲突消解 -> 洞见合并 -> 置信度 / 路径 / 资源 / 新颖度。
//! 整合是两路输入的纯函数，不读取任何外部状态。

pub mod conflict;
pub mod synergy;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use syna_core::{ProcessingResult, Result, SynaError};

pub use conflict::{Conflict, ConflictDetector, ConflictResolver, Resolution};
pub use synergy::{PatternIntegrator, Synergy, SynergyDetector};

use crate::text::clamp01;

/// 整合配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// 协同阈值 (默认检测器使用，严格大于才算协同)
    pub synergy_threshold: f64,
    /// 冲突阈值 (默认检测器使用，严格大于才算冲突)
    pub conflict_threshold: f64,
    /// 每单位协同强度带来的置信度加成
    pub synergy_weight: f64,
    /// 协同加成上限
    pub max_synergy_bonus: f64,
    /// 每单位冲突惩罚带来的置信度扣减
    pub conflict_weight: f64,
    /// 冲突扣减上限
    pub max_conflict_penalty: f64,
    /// 整合步骤自身的固定资源开销
    pub integration_overhead: f64,
    /// 每单位协同强度带来的新颖度加成
    pub novelty_weight: f64,
    /// 新颖度加成上限
    pub max_novelty_bonus: f64,
    /// 截断前置信度允许越界的容差
    pub consistency_tolerance: f64,
    /// 是否为每个协同对生成一条综合洞见
    pub synthesize_synergy_insights: bool,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            synergy_threshold: 0.6,
            conflict_threshold: 0.75,
            synergy_weight: 0.1,
            max_synergy_bonus: 0.3,
            conflict_weight: 0.1,
            max_conflict_penalty: 0.3,
            integration_overhead: 0.1,
            novelty_weight: 0.05,
            max_novelty_bonus: 0.2,
            consistency_tolerance: 0.5,
            synthesize_synergy_insights: true,
        }
    }
}

impl IntegrationConfig {
    /// 校验配置
    ///
    /// 上限值只要求非负；过大的上限由整合时的一致性检查兜底。
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("synergy_threshold", self.synergy_threshold),
            ("conflict_threshold", self.conflict_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SynaError::InvalidConfig(format!(
                    "integration.{name} {value} must be within [0, 1]"
                )));
            }
        }
        for (name, value) in [
            ("synergy_weight", self.synergy_weight),
            ("max_synergy_bonus", self.max_synergy_bonus),
            ("conflict_weight", self.conflict_weight),
            ("max_conflict_penalty", self.max_conflict_penalty),
            ("integration_overhead", self.integration_overhead),
            ("novelty_weight", self.novelty_weight),
            ("max_novelty_bonus", self.max_novelty_bonus),
            ("consistency_tolerance", self.consistency_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SynaError::InvalidConfig(format!(
                    "integration.{name} {value} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

/// 整合明细：结果以及得出结果所依据的协同与冲突记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub result: ProcessingResult,
    pub synergies: Vec<Synergy>,
    pub conflicts: Vec<Conflict>,
}

impl Integration {
    /// 被冲突裁决移除的原始洞见
    pub fn dropped_insights(&self) -> HashSet<&str> {
        self.conflicts.iter().flat_map(Conflict::dropped).collect()
    }

    /// 输入洞见要么出现在结果中，要么有冲突裁决记录
    pub fn accounts_for(&self, insight: &str) -> bool {
        self.result.insights.iter().any(|i| i == insight)
            || self.dropped_insights().contains(insight)
    }
}

/// 整合引擎
pub struct IntegrationEngine {
    config: IntegrationConfig,
    synergy_detector: Box<dyn SynergyDetector>,
    conflict_detector: Box<dyn ConflictDetector>,
}

impl IntegrationEngine {
    /// 使用默认检测器创建整合引擎
    pub fn new(config: IntegrationConfig) -> Result<Self> {
        let synergy = PatternIntegrator::new(config.synergy_threshold);
        let conflicts = ConflictResolver::new(config.conflict_threshold);
        Self::with_detectors(config, Box::new(synergy), Box::new(conflicts))
    }

    /// 使用自定义检测器创建整合引擎
    pub fn with_detectors(
        config: IntegrationConfig,
        synergy_detector: Box<dyn SynergyDetector>,
        conflict_detector: Box<dyn ConflictDetector>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            synergy_detector,
            conflict_detector,
        })
    }

    /// 创建默认配置的整合引擎
    pub fn default_engine() -> Self {
        let config = IntegrationConfig::default();
        Self {
            synergy_detector: Box::new(PatternIntegrator::new(config.synergy_threshold)),
            conflict_detector: Box::new(ConflictResolver::new(config.conflict_threshold)),
            config,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// 整合两路结果
    pub fn integrate(
        &self,
        divergent_result: &ProcessingResult,
        convergent_result: &ProcessingResult,
    ) -> Result<ProcessingResult> {
        self.integrate_detailed(divergent_result, convergent_result)
            .map(|integration| integration.result)
    }

    /// 整合两路结果并返回协同 / 冲突明细
    pub fn integrate_detailed(
        &self,
        divergent_result: &ProcessingResult,
        convergent_result: &ProcessingResult,
    ) -> Result<Integration> {
        let synergies: Vec<Synergy> = self
            .synergy_detector
            .find_synergies(divergent_result, convergent_result)
            .into_iter()
            .filter(|s| s.strength.is_finite() && s.strength > 0.0)
            .map(|mut s| {
                s.strength = s.strength.min(1.0);
                s
            })
            .collect();

        let conflicts: Vec<Conflict> = self
            .conflict_detector
            .resolve(divergent_result, convergent_result)
            .into_iter()
            .map(|mut c| {
                c.penalty = clamp01(c.penalty);
                c
            })
            .collect();

        debug!(
            synergies = synergies.len(),
            conflicts = conflicts.len(),
            "integrating divergent and convergent results"
        );

        let insights = self.merge_insights(divergent_result, convergent_result, &synergies, &conflicts);
        let confidence =
            self.calculate_confidence(divergent_result, convergent_result, &synergies, &conflicts)?;
        let processing_path =
            self.combine_paths(divergent_result, convergent_result, &synergies, &conflicts);
        let resource_usage = divergent_result.resource_usage
            + convergent_result.resource_usage
            + self.config.integration_overhead;
        let novelty_score = self.calculate_novelty(divergent_result, convergent_result, &synergies);

        Ok(Integration {
            result: ProcessingResult::new(
                insights,
                confidence,
                processing_path,
                resource_usage,
                novelty_score,
            ),
            synergies,
            conflicts,
        })
    }

    /// 合并洞见：发散侧 -> 收敛侧新增 -> 协同综合 -> 限定表述
    ///
    /// 按值去重；裁决只从败方一侧移除洞见，另一侧同值的洞见照常保留。
    /// 被移除的洞见不参与生成综合洞见。
    fn merge_insights(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
        synergies: &[Synergy],
        conflicts: &[Conflict],
    ) -> Vec<String> {
        let dropped_divergent: HashSet<&str> =
            conflicts.iter().filter_map(Conflict::dropped_divergent).collect();
        let dropped_convergent: HashSet<&str> =
            conflicts.iter().filter_map(Conflict::dropped_convergent).collect();
        let mut merged = Vec::new();
        let mut seen = HashSet::new();

        let kept_divergent = divergent
            .insights
            .iter()
            .filter(|i| !dropped_divergent.contains(i.as_str()));
        let kept_convergent = convergent
            .insights
            .iter()
            .filter(|i| !dropped_convergent.contains(i.as_str()));
        for insight in kept_divergent.chain(kept_convergent) {
            push_unique(&mut merged, &mut seen, insight.clone());
        }

        if self.config.synthesize_synergy_insights {
            let live = synergies.iter().filter(|s| {
                !dropped_divergent.contains(s.divergent.as_str())
                    && !dropped_convergent.contains(s.convergent.as_str())
            });
            for synergy in live {
                push_unique(
                    &mut merged,
                    &mut seen,
                    format!("synthesis: {} / {}", synergy.divergent, synergy.convergent),
                );
            }
        }

        for statement in conflicts.iter().filter_map(Conflict::statement) {
            push_unique(&mut merged, &mut seen, statement.to_string());
        }

        merged
    }

    fn calculate_confidence(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
        synergies: &[Synergy],
        conflicts: &[Conflict],
    ) -> Result<f64> {
        let base = (divergent.confidence + convergent.confidence) / 2.0;
        let strength: f64 = synergies.iter().map(|s| s.strength).sum();
        let penalty: f64 = conflicts.iter().map(|c| c.penalty).sum();

        let bonus = (strength * self.config.synergy_weight).min(self.config.max_synergy_bonus);
        let deduction = (penalty * self.config.conflict_weight).min(self.config.max_conflict_penalty);
        let raw = base + bonus - deduction;

        let tolerance = self.config.consistency_tolerance;
        if !raw.is_finite() || raw < -tolerance || raw > 1.0 + tolerance {
            error!(raw, tolerance, "integrated confidence out of tolerance");
            return Err(SynaError::IntegrationInconsistency { raw, tolerance });
        }

        Ok(clamp01(raw))
    }

    fn combine_paths(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
        synergies: &[Synergy],
        conflicts: &[Conflict],
    ) -> Vec<String> {
        let mut path = Vec::with_capacity(
            divergent.processing_path.len() + convergent.processing_path.len() + conflicts.len() + 1,
        );
        path.extend(divergent.processing_path.iter().cloned());
        path.extend(convergent.processing_path.iter().cloned());
        path.push(format!(
            "integration: {} synergies, {} conflicts",
            synergies.len(),
            conflicts.len()
        ));
        path.extend(
            conflicts
                .iter()
                .map(|c| format!("conflict resolved: {}", c.resolution.describe())),
        );
        path
    }

    /// 新颖度只增不减：在两路最大值上叠加非负的协同加成
    fn calculate_novelty(
        &self,
        divergent: &ProcessingResult,
        convergent: &ProcessingResult,
        synergies: &[Synergy],
    ) -> f64 {
        let best = divergent.novelty_score.max(convergent.novelty_score);
        let strength: f64 = synergies.iter().map(|s| s.strength).sum();
        let bonus = (strength * self.config.novelty_weight).min(self.config.max_novelty_bonus);
        clamp01(best + bonus)
    }
}

impl Default for IntegrationEngine {
    fn default() -> Self {
        Self::default_engine()
    }
}

fn push_unique(merged: &mut Vec<String>, seen: &mut HashSet<String>, insight: String) {
    if seen.insert(insight.clone()) {
        merged.push(insight);
    }
}
