//! # syna_core - Syna Core Primitives
//!
//! 核心原语层，定义处理模式、处理结果、任务画像以及全局错误处理机制。
//! 此 crate 是整个项目的基础依赖，不依赖其他业务 crate。

pub mod error;
pub mod mode;
pub mod profile;
pub mod result;

pub use error::{Result, SynaError};
pub use mode::ProcessingMode;
pub use profile::TaskProfile;
pub use result::ProcessingResult;
