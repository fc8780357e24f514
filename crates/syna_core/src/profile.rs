//! 任务画像
//!
//! 每次请求由模式选择器从原始输入派生，不做持久化。

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynaError};

/// 任务画像，三项指标均位于 [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTaskProfile")]
pub struct TaskProfile {
    complexity: f64,
    creativity_required: f64,
    analysis_required: f64,
}

impl TaskProfile {
    /// 创建任务画像，任一指标越界 (含 NaN) 即返回 `InvalidProfile`
    pub fn new(complexity: f64, creativity_required: f64, analysis_required: f64) -> Result<Self> {
        check_unit("complexity", complexity)?;
        check_unit("creativity_required", creativity_required)?;
        check_unit("analysis_required", analysis_required)?;
        Ok(Self {
            complexity,
            creativity_required,
            analysis_required,
        })
    }

    /// 复杂度
    pub fn complexity(&self) -> f64 {
        self.complexity
    }

    /// 创造性需求
    pub fn creativity_required(&self) -> f64 {
        self.creativity_required
    }

    /// 分析性需求
    pub fn analysis_required(&self) -> f64 {
        self.analysis_required
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SynaError::InvalidProfile { field, value })
    }
}

#[derive(Deserialize)]
struct RawTaskProfile {
    complexity: f64,
    creativity_required: f64,
    analysis_required: f64,
}

impl TryFrom<RawTaskProfile> for TaskProfile {
    type Error = SynaError;

    fn try_from(raw: RawTaskProfile) -> Result<Self> {
        Self::new(raw.complexity, raw.creativity_required, raw.analysis_required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accepts_bounds() {
        let profile = TaskProfile::new(0.0, 1.0, 0.5).unwrap();
        assert_eq!(profile.complexity(), 0.0);
        assert_eq!(profile.creativity_required(), 1.0);
        assert_eq!(profile.analysis_required(), 0.5);
    }

    #[test]
    fn test_profile_rejects_out_of_range() {
        let err = TaskProfile::new(0.2, 1.01, 0.5).unwrap_err();
        match err {
            SynaError::InvalidProfile { field, value } => {
                assert_eq!(field, "creativity_required");
                assert_eq!(value, 1.01);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(TaskProfile::new(-0.1, 0.0, 0.0).is_err());
        assert!(TaskProfile::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_profile_deserialize_is_validated() {
        let ok: TaskProfile = serde_json::from_str(
            r#"{"complexity":0.3,"creativity_required":0.8,"analysis_required":0.1}"#,
        )
        .unwrap();
        assert_eq!(ok.creativity_required(), 0.8);

        let bad = serde_json::from_str::<TaskProfile>(
            r#"{"complexity":0.3,"creativity_required":0.8,"analysis_required":7.0}"#,
        );
        assert!(bad.is_err());
    }
}
