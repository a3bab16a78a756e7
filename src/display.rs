//! Terminal rendering for questions, assessment results and plans
//!
//! Functions return the formatted text; the binary decides where to print.

use colored::*;
use std::fmt::Write;

use crate::assessment::{Category, Question, Scoreboard};
use crate::planning::{plan_copy, Plan, ProgressRecord};

const RULE_WIDTH: usize = 48;

fn rule() -> String {
    "=".repeat(RULE_WIDTH).cyan().to_string()
}

fn section(out: &mut String, heading: &str, items: &[String], bullet: &str) {
    let _ = writeln!(out, "\n{}", heading.bold());
    for item in items {
        let _ = writeln!(out, "  {} {}", bullet, item);
    }
}

/// Numbered question list with option indices
pub fn render_questions(questions: &[Question]) -> String {
    let mut out = String::new();
    for question in questions {
        let _ = writeln!(out, "{} {}", format!("Q{}.", question.id).cyan().bold(), question.title);
        for (idx, option) in question.options.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {}", idx, option);
        }
    }
    out
}

/// Assessment outcome, optionally with per-category points
pub fn render_assessment(category: Category, board: Option<&Scoreboard>) -> String {
    let copy = plan_copy(category);
    let mut out = format!(
        "评估完成，当前更匹配：{} ({})\n",
        copy.label.green().bold(),
        category
    );
    if let Some(board) = board {
        for (c, points) in board.breakdown() {
            let _ = writeln!(out, "  {} ({}): {}", plan_copy(c).label, c.as_str(), points);
        }
    }
    out
}

/// Full plan view
pub fn render_plan(category: Category, plan: &Plan, progress: Option<&ProgressRecord>) -> String {
    let copy = plan_copy(category);
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "{}", "个性化计划".bold().cyan());
    let _ = writeln!(out, "当前更匹配：{}", copy.label.green().bold());
    let _ = writeln!(out, "{}", rule());

    let _ = writeln!(out, "\n{}", "建议概述".bold());
    let _ = writeln!(out, "  {}", copy.summary);

    section(&mut out, "学习（每日/每周）", &plan.learning, "-");
    section(&mut out, "运动（每日/每周）", &plan.sports, "-");
    section(&mut out, "目标管理与动态调整", &plan.goals, "*");

    match progress {
        Some(record) => {
            let _ = writeln!(
                out,
                "\n{}",
                format!(
                    "本周进度（{} 起）：学习 {}/{} ({:.0}%)，运动 {}/{} ({:.0}%)",
                    record.week_start,
                    record.completed_learning,
                    record.target_learning,
                    record.learning_completion() * 100.0,
                    record.completed_sports,
                    record.target_sports,
                    record.sports_completion() * 100.0,
                )
                .dimmed()
            );
            if let Some(feedback) = record.feedback.as_deref().filter(|f| !f.is_empty()) {
                let _ = writeln!(out, "{}", format!("家长反馈：{}", feedback).dimmed());
            }
        }
        None => {
            let _ = writeln!(
                out,
                "\n{}",
                "提示：家长可在每周末记录完成情况与反馈，系统将据此优化计划。".dimmed()
            );
        }
    }

    out
}
