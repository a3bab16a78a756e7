//! Interactive answer collection using rustyline
//!
//! Walks the question list in order and re-asks until a valid option index
//! is entered. Ctrl-D stops early and returns whatever was answered.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::assessment::{AnswerSet, Question, OPTIONS_PER_QUESTION};

/// Readline-backed questionnaire prompt
pub struct AnswerPrompt {
    editor: DefaultEditor,
    prompt: String,
}

impl AnswerPrompt {
    /// Create new prompt
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(AnswerPrompt {
            editor,
            prompt: format!("选择 (0-{})> ", OPTIONS_PER_QUESTION - 1),
        })
    }

    /// Ask every question in order
    pub fn collect(&mut self, questions: &[Question]) -> Result<AnswerSet> {
        let mut answers = AnswerSet::new();

        for question in questions {
            println!("\n{} {}", format!("Q{}.", question.id).cyan().bold(), question.title);
            for (idx, option) in question.options.iter().enumerate() {
                println!("  {} {}", format!("[{}]", idx).green(), option);
            }

            match self.ask_choice()? {
                Some(index) => answers.select(questions, question.id, index)?,
                None => break,
            }
        }

        Ok(answers)
    }

    /// Read one choice; `None` on EOF
    fn ask_choice(&mut self) -> Result<Option<usize>> {
        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => match parse_choice(&line) {
                    Some(index) => return Ok(Some(index)),
                    None => println!("{}", "请输入 0-3 之间的数字".yellow()),
                },
                Err(ReadlineError::Interrupted) => {
                    return Err(anyhow::anyhow!("Interrupted"));
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(anyhow::anyhow!("Readline error: {}", err)),
            }
        }
    }
}

/// Parse a typed option index
pub fn parse_choice(line: &str) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|idx| *idx < OPTIONS_PER_QUESTION)
}
