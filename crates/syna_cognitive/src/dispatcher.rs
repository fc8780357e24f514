//! 顶层调度器
//!
//! 先由模式选择器决定模式，再执行单路策略或双侧编排。

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use syna_core::{ProcessingMode, ProcessingResult, Result, TaskProfile};

use crate::config::SynaConfig;
use crate::integration::IntegrationEngine;
use crate::orchestrator::{run_strategy, BilateralProcessor};
use crate::selector::ModeSelector;
use crate::strategy::{ConvergentProcessor, DivergentProcessor, ThoughtProcessor};

/// 一次调度的完整结果
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    /// 请求 ID
    pub request_id: Uuid,
    /// 任务画像
    pub profile: TaskProfile,
    /// 选定的模式
    pub mode: ProcessingMode,
    /// 处理结果
    pub result: ProcessingResult,
}

/// 调度器
pub struct Dispatcher {
    selector: ModeSelector,
    divergent: Arc<dyn ThoughtProcessor>,
    convergent: Arc<dyn ThoughtProcessor>,
    bilateral: BilateralProcessor,
}

impl Dispatcher {
    /// 创建调度器
    pub fn new(
        selector: ModeSelector,
        divergent: Arc<dyn ThoughtProcessor>,
        convergent: Arc<dyn ThoughtProcessor>,
        engine: IntegrationEngine,
    ) -> Result<Self> {
        let bilateral =
            BilateralProcessor::new(Arc::clone(&divergent), Arc::clone(&convergent), engine)?;
        Ok(Self {
            selector,
            divergent,
            convergent,
            bilateral,
        })
    }

    /// 按配置创建调度器，使用内置的两路参考策略
    pub fn from_config(config: &SynaConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            ModeSelector::new(config.selector.clone())?,
            Arc::new(DivergentProcessor::default()),
            Arc::new(ConvergentProcessor::default()),
            IntegrationEngine::new(config.integration.clone())?,
        )
    }

    /// 获取模式选择器
    pub fn selector(&self) -> &ModeSelector {
        &self.selector
    }

    /// 处理一次输入
    pub async fn process_input(&self, raw_input: &str) -> Result<ProcessingResult> {
        self.process_with_profile(raw_input)
            .await
            .map(|outcome| outcome.result)
    }

    /// 处理一次输入，并附带画像与模式
    pub async fn process_with_profile(&self, raw_input: &str) -> Result<DispatchOutcome> {
        let request_id = Uuid::new_v4();
        let span = info_span!("process_input", %request_id);

        self.dispatch(raw_input, request_id).instrument(span).await
    }

    async fn dispatch(&self, raw_input: &str, request_id: Uuid) -> Result<DispatchOutcome> {
        let profile = self.selector.analyze_task(raw_input)?;
        let mode = self.selector.select_mode(&profile);
        info!(
            %mode,
            complexity = profile.complexity(),
            creativity = profile.creativity_required(),
            analysis = profile.analysis_required(),
            "processing mode selected"
        );

        let result = match mode {
            ProcessingMode::Bilateral => self.bilateral.process(raw_input).await?,
            ProcessingMode::Divergent => {
                run_strategy(Arc::clone(&self.divergent), mode, raw_input.to_owned()).await?
            }
            ProcessingMode::Convergent => {
                run_strategy(Arc::clone(&self.convergent), mode, raw_input.to_owned()).await?
            }
        };

        info!(
            insights = result.insights.len(),
            confidence = result.confidence,
            "input processed"
        );
        Ok(DispatchOutcome {
            request_id,
            profile,
            mode,
            result,
        })
    }
}
