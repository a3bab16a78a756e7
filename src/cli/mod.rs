//! CLI module for huidong
//!
//! Handles command-line argument parsing, configuration management,
//! and interactive answer collection.

pub mod config;
pub mod args;
pub mod input;

pub use config::Config;
pub use args::{parse_answer_spec, Args, Commands, Verbosity};
pub use input::AnswerPrompt;
