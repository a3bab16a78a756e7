//! Personality classifier
//!
//! Tallies one point per answered question for the category bound to the
//! chosen option position, then picks the category with the highest total.
//!
//! Tie-break: when several categories share the highest total, the first one
//! in canonical order (Explorer, Thinker, Social, Disciplined) wins. An empty
//! answer set therefore classifies as Explorer.

use std::collections::BTreeMap;

use crate::assessment::catalog::questions;
use crate::assessment::types::{AnswerSet, Category, Question};

/// Per-category point totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    points: [u32; 4],
}

impl Scoreboard {
    /// Award one point to a category
    pub fn award(&mut self, category: Category) {
        self.points[category.position()] += 1;
    }

    /// Points held by a category
    pub fn score(&self, category: Category) -> u32 {
        self.points[category.position()]
    }

    /// Sum of all points
    pub fn total(&self) -> u32 {
        self.points.iter().sum()
    }

    /// Highest-scoring category, first in canonical order on ties
    pub fn leader(&self) -> Category {
        let mut best = Category::ALL[0];
        for category in Category::ALL.iter().skip(1) {
            if self.score(*category) > self.score(best) {
                best = *category;
            }
        }
        best
    }

    /// Scores keyed by category, in canonical order
    pub fn breakdown(&self) -> BTreeMap<Category, u32> {
        Category::ALL.iter().map(|c| (*c, self.score(*c))).collect()
    }
}

/// Classifier over a fixed question list
pub struct Classifier<'a> {
    questions: &'a [Question],
}

impl<'a> Classifier<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        Self { questions }
    }

    /// Tally the answers without picking a winner
    ///
    /// Unanswered questions and answers for ids outside the list score nothing.
    pub fn tally(&self, answers: &AnswerSet) -> Scoreboard {
        let mut board = Scoreboard::default();
        for question in self.questions {
            let Some(index) = answers.get(question.id) else {
                continue;
            };
            match Category::from_position(index) {
                Some(category) => board.award(category),
                None => {
                    tracing::warn!(question_id = question.id, index, "ignoring out-of-range answer");
                }
            }
        }
        board
    }

    /// Classify an answer set into exactly one category
    pub fn classify(&self, answers: &AnswerSet) -> Category {
        let board = self.tally(answers);
        let category = board.leader();
        tracing::debug!(
            answered = answers.len(),
            points = board.total(),
            %category,
            "classified answers"
        );
        category
    }
}

/// Classify against the built-in question catalog
pub fn classify(answers: &AnswerSet) -> Category {
    let qs = questions();
    Classifier::new(&qs).classify(answers)
}
