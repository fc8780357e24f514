//! # syna_cognitive - Syna Cognitive Engine
//!
//! 双模认知引擎：发散 (探索式) 与收敛 (分析式) 两路策略并发运行，
//! 由整合引擎合并为单一结果；模式选择器决定每次请求走哪条路径。

pub mod config;
pub mod dispatcher;
pub mod integration;
pub mod orchestrator;
pub mod selector;
pub mod strategy;
pub mod text;

pub use config::SynaConfig;
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use integration::{
    Conflict, ConflictDetector, ConflictResolver, Integration, IntegrationConfig,
    IntegrationEngine, PatternIntegrator, Resolution, Synergy, SynergyDetector,
};
pub use orchestrator::BilateralProcessor;
pub use selector::{ModeSelector, SelectorConfig};
pub use strategy::{ConvergentProcessor, DivergentProcessor, ThoughtProcessor};

pub use syna_core::{ProcessingMode, ProcessingResult, Result, SynaError, TaskProfile};
