//! Core data structures for recommendation plans
//!
//! A plan is three ordered recommendation lists. Base plans are static per
//! category; adjusted plans share the shape and only ever append.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Learning, sports and goal recommendations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub learning: Vec<String>,
    pub sports: Vec<String>,
    pub goals: Vec<String>,
}

/// Static plan for a category
pub type BasePlan = Plan;

/// Base plan plus appended adjustments
pub type AdjustedPlan = Plan;

impl Plan {
    /// Total number of recommendations across all three lists
    pub fn len(&self) -> usize {
        self.learning.len() + self.sports.len() + self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Display label and summary for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanCopy {
    pub label: &'static str,
    pub summary: &'static str,
}

/// One weekly self-report from the guardian
///
/// Only the latest record is kept; a new submission replaces the old one.
/// Field names on the wire follow the scratch-store format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(rename = "weekStartIsoDate")]
    pub week_start: NaiveDate,
    pub completed_learning: u32,
    pub target_learning: u32,
    pub completed_sports: u32,
    pub target_sports: u32,
    #[serde(rename = "parentFeedback", default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl ProgressRecord {
    /// Learning completion ratio; a target of 0 counts as 1
    pub fn learning_completion(&self) -> f64 {
        completion_ratio(self.completed_learning, self.target_learning)
    }

    /// Sports completion ratio; a target of 0 counts as 1
    pub fn sports_completion(&self) -> f64 {
        completion_ratio(self.completed_sports, self.target_sports)
    }
}

fn completion_ratio(completed: u32, target: u32) -> f64 {
    completed as f64 / target.max(1) as f64
}
