//! 模式选择器
//!
//! 从原始输入派生任务画像，并按固定策略选出处理模式。

use serde::{Deserialize, Serialize};
use tracing::debug;

use syna_core::{ProcessingMode, Result, SynaError, TaskProfile};

use crate::text;

/// 模式选择配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// 双侧模式阈值 (创造性与分析性都需严格大于此值)
    pub bilateral_threshold: f64,
    /// 每命中一个线索词增加的分值
    pub cue_weight: f64,
    /// 复杂度饱和所需的词数
    pub complexity_word_scale: usize,
    /// 创造性线索词 (可为多词短语)
    pub creative_cues: Vec<String>,
    /// 分析性线索词 (可为多词短语)
    pub analytical_cues: Vec<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            bilateral_threshold: 0.7,
            cue_weight: 0.25,
            complexity_word_scale: 60,
            creative_cues: to_owned_list(&[
                "imagine",
                "create",
                "invent",
                "design",
                "brainstorm",
                "novel",
                "story",
                "idea",
                "ideas",
                "creative",
                "explore",
                "alternative",
                "alternatives",
                "what if",
                "reimagine",
                "metaphor",
            ]),
            analytical_cues: to_owned_list(&[
                "analyze",
                "analyse",
                "compare",
                "calculate",
                "prove",
                "evaluate",
                "measure",
                "verify",
                "explain",
                "why",
                "data",
                "logic",
                "optimize",
                "cost",
                "risk",
                "evidence",
            ]),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SelectorConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.bilateral_threshold) {
            return Err(SynaError::InvalidConfig(format!(
                "selector.bilateral_threshold {} must be within [0, 1]",
                self.bilateral_threshold
            )));
        }
        if !self.cue_weight.is_finite() || self.cue_weight <= 0.0 {
            return Err(SynaError::InvalidConfig(format!(
                "selector.cue_weight {} must be positive",
                self.cue_weight
            )));
        }
        if self.complexity_word_scale == 0 {
            return Err(SynaError::InvalidConfig(
                "selector.complexity_word_scale must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 模式选择器
#[derive(Debug, Clone)]
pub struct ModeSelector {
    config: SelectorConfig,
    creative: Vec<Vec<String>>,
    analytical: Vec<Vec<String>>,
}

impl ModeSelector {
    /// 创建新的模式选择器
    pub fn new(config: SelectorConfig) -> Result<Self> {
        config.validate()?;
        let creative = compile_cues(&config.creative_cues);
        let analytical = compile_cues(&config.analytical_cues);
        Ok(Self {
            config,
            creative,
            analytical,
        })
    }

    /// 创建默认配置的选择器
    pub fn default_selector() -> Self {
        let config = SelectorConfig::default();
        Self {
            creative: compile_cues(&config.creative_cues),
            analytical: compile_cues(&config.analytical_cues),
            config,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// 分析输入，派生任务画像
    pub fn analyze_task(&self, input: &str) -> Result<TaskProfile> {
        let words = text::tokens(input);
        let creative_hits = count_hits(&words, &self.creative);
        let analytical_hits = count_hits(&words, &self.analytical);

        let complexity = (words.len() as f64 / self.config.complexity_word_scale as f64).min(1.0);
        let creativity = (creative_hits as f64 * self.config.cue_weight).min(1.0);
        let analysis = (analytical_hits as f64 * self.config.cue_weight).min(1.0);

        debug!(
            words = words.len(),
            creative_hits, analytical_hits, "analyzed task characteristics"
        );
        TaskProfile::new(complexity, creativity, analysis)
    }

    /// 选择处理模式
    ///
    /// 创造性与分析性都严格大于阈值时走双侧；否则创造性严格更高时走发散；
    /// 其余情况 (含相等) 走收敛。
    pub fn select_mode(&self, profile: &TaskProfile) -> ProcessingMode {
        let threshold = self.config.bilateral_threshold;
        let creativity = profile.creativity_required();
        let analysis = profile.analysis_required();

        if creativity > threshold && analysis > threshold {
            ProcessingMode::Bilateral
        } else if creativity > analysis {
            ProcessingMode::Divergent
        } else {
            ProcessingMode::Convergent
        }
    }

    /// 根据显式给出的任务特征决定处理模式
    pub fn optimize_processing(
        &self,
        task: &str,
        complexity: f64,
        creativity_required: f64,
        analysis_required: f64,
    ) -> Result<ProcessingMode> {
        let profile = TaskProfile::new(complexity, creativity_required, analysis_required)?;
        let mode = self.select_mode(&profile);
        debug!(task_len = task.len(), %mode, "optimized processing mode");
        Ok(mode)
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::default_selector()
    }
}

fn compile_cues(cues: &[String]) -> Vec<Vec<String>> {
    cues.iter()
        .map(|cue| text::tokens(cue))
        .filter(|cue| !cue.is_empty())
        .collect()
}

/// 统计线索命中次数，多词线索按连续词窗匹配
fn count_hits(words: &[String], cues: &[Vec<String>]) -> usize {
    cues.iter()
        .map(|cue| {
            if cue.len() > words.len() {
                return 0;
            }
            words
                .windows(cue.len())
                .filter(|window| window == &cue.as_slice())
                .count()
        })
        .sum()
}
