//! Command-line argument parsing for huidong
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::errors::{HuidongError, Result};

/// huidong - personality assessment and adaptive weekly plans for children
#[derive(Parser, Debug)]
#[command(name = "huidong")]
#[command(version)]
#[command(about = "Assess a child's personality type and build an adaptive learning and sports plan", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Session state directory (overrides config)
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the assessment questions and their options
    Questions,

    /// Answer the questionnaire and store the inferred personality type
    Assess {
        /// Answer as QUESTION_ID=OPTION_INDEX (option index 0-3); prompts interactively when omitted
        #[arg(short, long = "answer", value_name = "ID=IDX")]
        answers: Vec<String>,
    },

    /// Show the current plan, adjusted by the latest weekly progress
    Plan,

    /// Record this week's progress and show the re-adjusted plan
    Progress {
        /// Learning activities completed
        #[arg(long)]
        completed_learning: u32,

        /// Learning activities targeted (config default when omitted)
        #[arg(long)]
        target_learning: Option<u32>,

        /// Sports activities completed
        #[arg(long)]
        completed_sports: u32,

        /// Sports activities targeted (config default when omitted)
        #[arg(long)]
        target_sports: Option<u32>,

        /// Guardian feedback
        #[arg(long)]
        feedback: Option<String>,

        /// Week start date, YYYY-MM-DD (today when omitted)
        #[arg(long)]
        week_start: Option<NaiveDate>,
    },

    /// Display current configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Clear the stored personality type and progress
    Clean,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags, falling back to the configured level
    pub fn verbosity(&self, configured: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => configured,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the config file spelling; unknown values map to Normal
    pub fn from_config(value: &str) -> Self {
        match value {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "very_verbose" => Verbosity::VeryVerbose,
            _ => Verbosity::Normal,
        }
    }

    /// Default tracing filter directive for this level
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "huidong=error",
            Verbosity::Normal => "huidong=warn",
            Verbosity::Verbose => "huidong=info",
            Verbosity::VeryVerbose => "huidong=debug",
        }
    }

    /// Check if should show score breakdowns and hints
    pub fn show_details(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

/// Parse a `QUESTION_ID=OPTION_INDEX` answer
pub fn parse_answer_spec(spec: &str) -> Result<(u32, usize)> {
    let invalid = || HuidongError::InvalidAnswerSpec(spec.to_string());
    let (id, index) = spec.split_once('=').ok_or_else(invalid)?;
    let id = id.trim().parse::<u32>().map_err(|_| invalid())?;
    let index = index.trim().parse::<usize>().map_err(|_| invalid())?;
    Ok((id, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> Args {
        Args {
            config: None,
            state_dir: None,
            verbose,
            quiet,
            no_color: false,
            command: None,
        }
    }

    #[test]
    fn test_verbosity_quiet_wins() {
        assert_eq!(args(2, true).verbosity(Verbosity::Normal), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_uses_configured_default() {
        assert_eq!(args(0, false).verbosity(Verbosity::Verbose), Verbosity::Verbose);
        assert_eq!(args(0, false).verbosity(Verbosity::Normal), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(args(1, false).verbosity(Verbosity::Quiet), Verbosity::Verbose);
        assert_eq!(args(3, false).verbosity(Verbosity::Normal), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_verbosity_config_round_trip() {
        for v in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose, Verbosity::VeryVerbose] {
            assert_eq!(Verbosity::from_config(v.as_str()), v);
        }
        assert_eq!(Verbosity::from_config("loud"), Verbosity::Normal);
    }

    #[test]
    fn test_parse_answer_spec() {
        assert_eq!(parse_answer_spec("3=2").unwrap(), (3, 2));
        assert_eq!(parse_answer_spec(" 1 = 0 ").unwrap(), (1, 0));
        assert!(parse_answer_spec("3").is_err());
        assert!(parse_answer_spec("a=1").is_err());
        assert!(parse_answer_spec("1=-1").is_err());
    }

    #[test]
    fn test_parse_assess_command() {
        let parsed = Args::try_parse_from(["huidong", "assess", "-a", "1=0", "--answer", "2=3"]).unwrap();
        match parsed.command {
            Some(Commands::Assess { answers }) => assert_eq!(answers, vec!["1=0", "2=3"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_progress_command() {
        let parsed = Args::try_parse_from([
            "huidong",
            "progress",
            "--completed-learning",
            "2",
            "--completed-sports",
            "4",
            "--target-sports",
            "3",
            "--week-start",
            "2024-09-02",
            "-v",
        ])
        .unwrap();
        assert_eq!(parsed.verbose, 1);
        match parsed.command {
            Some(Commands::Progress {
                completed_learning,
                target_learning,
                target_sports,
                week_start,
                ..
            }) => {
                assert_eq!(completed_learning, 2);
                assert_eq!(target_learning, None);
                assert_eq!(target_sports, Some(3));
                assert_eq!(week_start, NaiveDate::from_ymd_opt(2024, 9, 2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_init() {
        let parsed = Args::try_parse_from(["huidong", "config", "--init"]).unwrap();
        assert!(matches!(parsed.command, Some(Commands::Config { init: true })));

        let parsed = Args::try_parse_from(["huidong", "config"]).unwrap();
        assert!(matches!(parsed.command, Some(Commands::Config { init: false })));
    }

    #[test]
    fn test_progress_requires_completed_counts() {
        assert!(Args::try_parse_from(["huidong", "progress", "--completed-learning", "1"]).is_err());
    }
}
