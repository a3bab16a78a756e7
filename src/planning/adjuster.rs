//! Weekly plan adjustment
//!
//! Appends at most one recommendation per list based on the latest progress
//! record. Completion below `LOWER_THRESHOLD` lowers the bar, completion above
//! `UPPER_THRESHOLD` raises it, anything in between leaves the list alone.
//! The rules are the same for every category.

use crate::assessment::Category;
use crate::planning::types::{AdjustedPlan, BasePlan, ProgressRecord};

/// Completion ratio below which the plan is made easier
pub const LOWER_THRESHOLD: f64 = 0.6;

/// Completion ratio above which the plan is made harder
pub const UPPER_THRESHOLD: f64 = 1.1;

/// Substring in guardian feedback that signals stress
pub const STRESS_KEYWORD: &str = "压力";

pub const LEARNING_SMALLER_STEPS: &str = "将学习目标拆分为更小步骤，每次 5-8 分钟";
pub const LEARNING_EXTRA_CHALLENGE: &str = "增加一个拓展挑战：本周新增一次延伸任务";
pub const SPORTS_SHORTER_SESSIONS: &str = "将运动改为更短更频的 10 分钟节奏";
pub const SPORTS_HIGHER_INTENSITY: &str = "提高强度或时长 10-15%（量力而行）";
pub const GOALS_SWAP_TASK: &str = "关注兴趣驱动，允许替换 1 项不感兴趣任务";

/// Direction of a single list adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Ease,
    Hold,
    Stretch,
}

impl Adjustment {
    /// Classify a completion ratio against the fixed thresholds
    pub fn for_completion(ratio: f64) -> Self {
        if ratio < LOWER_THRESHOLD {
            Adjustment::Ease
        } else if ratio > UPPER_THRESHOLD {
            Adjustment::Stretch
        } else {
            Adjustment::Hold
        }
    }

    fn pick(self, ease: &str, stretch: &str) -> Option<String> {
        match self {
            Adjustment::Ease => Some(ease.to_string()),
            Adjustment::Stretch => Some(stretch.to_string()),
            Adjustment::Hold => None,
        }
    }
}

/// True when feedback is present and mentions stress
pub fn signals_stress(feedback: Option<&str>) -> bool {
    feedback.is_some_and(|text| text.contains(STRESS_KEYWORD))
}

/// Adjust a base plan by the latest weekly progress
///
/// Returns an independent copy; `base` is never modified. Without a progress
/// record the copy is list-equal to `base`.
pub fn adjust_plan(
    category: Category,
    base: &BasePlan,
    progress: Option<&ProgressRecord>,
) -> AdjustedPlan {
    let mut adjusted = base.clone();
    let Some(progress) = progress else {
        return adjusted;
    };

    let learning = Adjustment::for_completion(progress.learning_completion());
    let sports = Adjustment::for_completion(progress.sports_completion());
    let stressed = signals_stress(progress.feedback.as_deref());

    if let Some(item) = learning.pick(LEARNING_SMALLER_STEPS, LEARNING_EXTRA_CHALLENGE) {
        adjusted.learning.push(item);
    }
    if let Some(item) = sports.pick(SPORTS_SHORTER_SESSIONS, SPORTS_HIGHER_INTENSITY) {
        adjusted.sports.push(item);
    }
    if stressed {
        adjusted.goals.push(GOALS_SWAP_TASK.to_string());
    }

    tracing::debug!(
        %category,
        week_start = %progress.week_start,
        ?learning,
        ?sports,
        stressed,
        "adjusted plan"
    );
    adjusted
}
