//! huidong - Personality Questionnaire & Adaptive Plans
//!
//! Collects answers to a short questionnaire about a child, infers one of
//! four personality types, and produces a learning, sports and goals plan
//! that is nudged each week by guardian-reported progress.
//!
//! # Architecture
//!
//! - **assessment**: question catalog and the classifier (pure)
//! - **planning**: static base plans and the weekly adjuster (pure)
//! - **session**: scratch storage of the chosen type and latest progress
//! - **cli** / **display** / **logging**: the terminal host

pub mod errors;
pub mod assessment;
pub mod planning;
pub mod session;

// Re-export commonly used types
pub use errors::{HuidongError, Result};
pub use assessment::{classify, AnswerSet, Category, Question};
pub use planning::{adjust_plan, generate_plan, AdjustedPlan, BasePlan, Plan, ProgressRecord};

// Terminal host
pub mod cli;
pub mod display;
pub mod logging;
