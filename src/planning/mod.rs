//! Recommendation plans for each personality category
//!
//! Provides the static base plans, their display copy, and the weekly
//! adjustment rules driven by guardian-reported progress.

pub mod types;
pub mod catalog;
pub mod adjuster;

// Re-export commonly used types
pub use types::{AdjustedPlan, BasePlan, Plan, PlanCopy, ProgressRecord};
pub use catalog::{generate_plan, plan_copy};
pub use adjuster::{adjust_plan, Adjustment};
