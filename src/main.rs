//! huidong - Main CLI Entry Point

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use huidong::{
    assessment::{questions, AnswerSet, Classifier},
    cli::{parse_answer_spec, AnswerPrompt, Args, Commands, Config, Verbosity},
    display,
    logging,
    planning::ProgressRecord,
    session::{ScratchStore, SessionContext},
};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let verbosity = args.verbosity(Verbosity::from_config(&config.display.default_verbosity));
    logging::init_tracing(verbosity);

    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    let state_dir = args.state_dir.clone().unwrap_or_else(|| config.state_dir());
    let store = ScratchStore::new(state_dir);
    tracing::debug!(state_dir = %store.storage_dir().display(), "using session storage");

    match &args.command {
        Some(Commands::Questions) => {
            print!("{}", display::render_questions(&questions()));
        }
        Some(Commands::Assess { answers }) => {
            run_assess(&store, answers, verbosity)?;
        }
        Some(Commands::Plan) => {
            show_plan(&store)?;
        }
        Some(Commands::Progress {
            completed_learning,
            target_learning,
            completed_sports,
            target_sports,
            feedback,
            week_start,
        }) => {
            let record = ProgressRecord {
                week_start: week_start.unwrap_or_else(today),
                completed_learning: *completed_learning,
                target_learning: target_learning.unwrap_or(config.progress.default_target_learning),
                completed_sports: *completed_sports,
                target_sports: target_sports.unwrap_or(config.progress.default_target_sports),
                feedback: feedback.clone(),
            };
            record_progress(&store, record)?;
        }
        Some(Commands::Config { init }) => {
            if *init {
                init_config(&args)?;
            }
            show_config(&args, &config, &store, verbosity);
        }
        Some(Commands::Clean) => {
            clean_state(&store)?;
        }
        None => {
            println!("huidong - personality assessment & adaptive plans");
            println!("\nUsage:");
            println!("  huidong questions             List assessment questions");
            println!("  huidong assess                Answer the questionnaire");
            println!("  huidong plan                  Show the current plan");
            println!("  huidong progress ...          Record weekly progress");
            println!("  huidong config [--init]       Show (or create) configuration");
            println!("  huidong clean                 Clear stored session");
            println!("\nExample:");
            println!("  huidong assess -a 1=0 -a 2=1 -a 3=0 -a 4=2 -a 5=0");
            println!();
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn run_assess(store: &ScratchStore, specs: &[String], verbosity: Verbosity) -> Result<()> {
    let qs = questions();

    let answers = if specs.is_empty() {
        AnswerPrompt::new()?.collect(&qs)?
    } else {
        let mut answers = AnswerSet::new();
        for spec in specs {
            let (id, index) = parse_answer_spec(spec)?;
            answers.select(&qs, id, index)?;
        }
        answers
    };
    answers.ensure_complete(&qs)?;

    let classifier = Classifier::new(&qs);
    let board = classifier.tally(&answers);
    let category = classifier.classify(&answers);

    let context = SessionContext::load(store)?.with_category(category);
    context.save(store)?;
    tracing::info!(%category, "stored assessment result");

    let breakdown = verbosity.show_details().then_some(&board);
    print!("{}", display::render_assessment(category, breakdown));
    if verbosity.show_details() {
        println!("\n运行 {} 查看个性化计划", "huidong plan".green());
    }
    Ok(())
}

fn show_plan(store: &ScratchStore) -> Result<()> {
    let context = SessionContext::load(store)?;
    if context.category.is_none() {
        tracing::info!("no stored assessment, planning for the default type");
    }
    let plan = context.current_plan();
    print!(
        "{}",
        display::render_plan(context.category_or_default(), &plan, context.progress.as_ref())
    );
    Ok(())
}

fn record_progress(store: &ScratchStore, record: ProgressRecord) -> Result<()> {
    let week_start = record.week_start;
    let context = SessionContext::load(store)?.with_progress(record);
    context.save(store)?;
    tracing::info!(%week_start, "stored weekly progress");

    let plan = context.current_plan();
    print!(
        "{}",
        display::render_plan(context.category_or_default(), &plan, context.progress.as_ref())
    );
    Ok(())
}

fn clean_state(store: &ScratchStore) -> Result<()> {
    if store.clear()? {
        println!("✓ Cleared session: {}", store.path().display());
    } else {
        println!("No stored session found.");
    }
    Ok(())
}

fn init_config(args: &Args) -> Result<()> {
    let path = args
        .config
        .clone()
        .or_else(Config::default_path)
        .context("No config path given and no home directory found")?;

    if Config::init_file(&path)? {
        println!("✓ Wrote default config: {}", path.display());
    } else {
        println!("Config already exists: {}", path.display());
    }
    println!();
    Ok(())
}

fn show_config(args: &Args, config: &Config, store: &ScratchStore, verbosity: Verbosity) {
    let source = args
        .config
        .clone()
        .or_else(Config::default_path)
        .filter(|p| p.exists())
        .map(|p: PathBuf| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());

    println!("{}", "huidong configuration".bold().cyan());
    println!("  Source:          {}", source);
    println!();
    println!("Paths:");
    println!("  State dir:       {}", store.storage_dir().display());
    println!("  Scratch file:    {}", store.path().display());
    println!();
    println!("Display:");
    println!("  Verbosity:       {}", verbosity.as_str());
    println!("  Color output:    {}", if config.display.color_output && !args.no_color { "enabled" } else { "disabled" });
    println!();
    println!("Progress defaults:");
    println!("  Target learning: {}", config.progress.default_target_learning);
    println!("  Target sports:   {}", config.progress.default_target_sports);
}
