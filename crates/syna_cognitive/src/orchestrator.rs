//! 双模编排器
//!
//! 双侧模式下同时派发发散与收敛两路任务，等待两者全部完成后交给整合引擎。
//! 任一路失败时直接向调用方传播错误，绝不整合残缺的结果对。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinError;
use tracing::{debug, instrument, warn};

use syna_core::{ProcessingMode, ProcessingResult, Result, SynaError};

use crate::integration::IntegrationEngine;
use crate::strategy::ThoughtProcessor;

/// 双侧处理器
pub struct BilateralProcessor {
    divergent: Arc<dyn ThoughtProcessor>,
    convergent: Arc<dyn ThoughtProcessor>,
    engine: IntegrationEngine,
}

impl BilateralProcessor {
    /// 创建双侧处理器，两路处理器的模式必须分别为发散与收敛
    pub fn new(
        divergent: Arc<dyn ThoughtProcessor>,
        convergent: Arc<dyn ThoughtProcessor>,
        engine: IntegrationEngine,
    ) -> Result<Self> {
        expect_mode(divergent.as_ref(), ProcessingMode::Divergent)?;
        expect_mode(convergent.as_ref(), ProcessingMode::Convergent)?;
        Ok(Self {
            divergent,
            convergent,
            engine,
        })
    }

    /// 并发执行两路策略并整合
    #[instrument(name = "bilateral", skip_all, fields(input_len = input.len()))]
    pub async fn process(&self, input: &str) -> Result<ProcessingResult> {
        // 两路任务先全部派发，再统一等待
        let divergent_task = tokio::spawn(run_strategy(
            Arc::clone(&self.divergent),
            ProcessingMode::Divergent,
            input.to_owned(),
        ));
        let convergent_task = tokio::spawn(run_strategy(
            Arc::clone(&self.convergent),
            ProcessingMode::Convergent,
            input.to_owned(),
        ));

        let (divergent, convergent) = futures::future::join(divergent_task, convergent_task).await;
        let divergent = settle(ProcessingMode::Divergent, divergent)?;
        let convergent = settle(ProcessingMode::Convergent, convergent)?;

        debug!(
            divergent_insights = divergent.insights.len(),
            convergent_insights = convergent.insights.len(),
            "both strategies completed"
        );
        self.engine.integrate(&divergent, &convergent)
    }
}

#[async_trait]
impl ThoughtProcessor for BilateralProcessor {
    fn mode(&self) -> ProcessingMode {
        ProcessingMode::Bilateral
    }

    async fn process_thought(&self, input: &str) -> Result<ProcessingResult> {
        self.process(input).await
    }
}

fn expect_mode(processor: &dyn ThoughtProcessor, expected: ProcessingMode) -> Result<()> {
    let actual = processor.mode();
    if actual == expected {
        Ok(())
    } else {
        Err(SynaError::InvalidConfig(format!(
            "expected a {expected} processor, got {actual}"
        )))
    }
}

/// 执行单路策略并校验其结果
pub(crate) async fn run_strategy(
    strategy: Arc<dyn ThoughtProcessor>,
    mode: ProcessingMode,
    input: String,
) -> Result<ProcessingResult> {
    let result = strategy
        .process_thought(&input)
        .await
        .map_err(|err| match err {
            SynaError::StrategyFailure { .. } => err,
            other => SynaError::strategy(mode, other.to_string()),
        })?;
    result
        .check_invariants()
        .map_err(|reason| SynaError::strategy(mode, format!("invalid result: {reason}")))?;
    Ok(result)
}

/// 展开任务结果，panic 或中止同样视为策略失败
fn settle(
    mode: ProcessingMode,
    joined: std::result::Result<Result<ProcessingResult>, JoinError>,
) -> Result<ProcessingResult> {
    let outcome = joined
        .unwrap_or_else(|err| Err(SynaError::strategy(mode, format!("task failed: {err}"))));
    if let Err(err) = &outcome {
        warn!(%mode, error = %err, "strategy failed, integration abandoned");
    }
    outcome
}
