//! Core data structures for the personality assessment
//!
//! Defines the four personality categories, the fixed question shape,
//! and the partial answer map collected from a respondent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::{HuidongError, Result};

/// Number of options every question offers
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Personality category inferred from the answers
///
/// Declaration order is the canonical order used for tie-breaking:
/// Explorer, Thinker, Social, Disciplined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Explorer,
    Thinker,
    Social,
    Disciplined,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 4] = [
        Category::Explorer,
        Category::Thinker,
        Category::Social,
        Category::Disciplined,
    ];

    /// Category bound to an option position (identical for every question)
    pub fn from_position(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Option position bound to this category
    pub fn position(&self) -> usize {
        match self {
            Category::Explorer => 0,
            Category::Thinker => 1,
            Category::Social => 2,
            Category::Disciplined => 3,
        }
    }

    /// Stable label used in the scratch store
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Explorer => "explorer",
            Category::Thinker => "thinker",
            Category::Social => "social",
            Category::Disciplined => "disciplined",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HuidongError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "explorer" => Ok(Category::Explorer),
            "thinker" => Ok(Category::Thinker),
            "social" => Ok(Category::Social),
            "disciplined" => Ok(Category::Disciplined),
            other => Err(HuidongError::UnknownCategory(other.to_string())),
        }
    }
}

/// A multiple-choice question with exactly four options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub title: String,
    pub options: [String; OPTIONS_PER_QUESTION],
}

/// Selected option index per question id
///
/// Partial until every question has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    selections: BTreeMap<u32, usize>,
}

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier choice for the same question
    ///
    /// Rejects ids not present in `questions` and indices outside 0..=3.
    pub fn select(&mut self, questions: &[Question], question_id: u32, index: usize) -> Result<()> {
        if !questions.iter().any(|q| q.id == question_id) {
            return Err(HuidongError::UnknownQuestion(question_id));
        }
        if index >= OPTIONS_PER_QUESTION {
            return Err(HuidongError::InvalidAnswer { question_id, index });
        }
        self.selections.insert(question_id, index);
        Ok(())
    }

    /// Selected option for a question, if answered
    pub fn get(&self, question_id: u32) -> Option<usize> {
        self.selections.get(&question_id).copied()
    }

    /// Number of answered questions
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// True once every question in `questions` has an answer
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.selections.contains_key(&q.id))
    }

    /// Fail with `IncompleteAnswers` unless every question is answered
    pub fn ensure_complete(&self, questions: &[Question]) -> Result<()> {
        if self.is_complete(questions) {
            return Ok(());
        }
        let answered = questions
            .iter()
            .filter(|q| self.selections.contains_key(&q.id))
            .count();
        Err(HuidongError::IncompleteAnswers {
            answered,
            total: questions.len(),
        })
    }

    /// Iterate over (question id, option index) pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.selections.iter().map(|(id, idx)| (*id, *idx))
    }
}

impl FromIterator<(u32, usize)> for AnswerSet {
    /// Build without validation; callers collecting from a respondent should use `select`
    fn from_iter<I: IntoIterator<Item = (u32, usize)>>(iter: I) -> Self {
        Self {
            selections: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::questions;

    #[test]
    fn test_category_position_mapping() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.position(), i);
            assert_eq!(Category::from_position(i), Some(*category));
        }
        assert_eq!(Category::from_position(4), None);
    }

    #[test]
    fn test_default_category_is_first_in_canonical_order() {
        assert_eq!(Category::default(), Category::Explorer);
        assert_eq!(Category::default(), Category::ALL[0]);
    }

    #[test]
    fn test_category_parse_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("artist".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Disciplined).unwrap();
        assert_eq!(json, "\"disciplined\"");
    }

    #[test]
    fn test_select_rejects_out_of_range_index() {
        let qs = questions();
        let mut answers = AnswerSet::new();
        let err = answers.select(&qs, 1, 4).unwrap_err();
        assert!(matches!(err, HuidongError::InvalidAnswer { question_id: 1, index: 4 }));
        assert!(answers.is_empty());
    }

    #[test]
    fn test_select_rejects_unknown_question() {
        let qs = questions();
        let mut answers = AnswerSet::new();
        assert!(matches!(
            answers.select(&qs, 99, 0),
            Err(HuidongError::UnknownQuestion(99))
        ));
    }

    #[test]
    fn test_select_overwrites_previous_choice() {
        let qs = questions();
        let mut answers = AnswerSet::new();
        answers.select(&qs, 2, 0).unwrap();
        answers.select(&qs, 2, 3).unwrap();
        assert_eq!(answers.get(2), Some(3));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_completeness() {
        let qs = questions();
        let mut answers = AnswerSet::new();
        assert!(!answers.is_complete(&qs));

        for q in &qs[..qs.len() - 1] {
            answers.select(&qs, q.id, 1).unwrap();
        }
        match answers.ensure_complete(&qs) {
            Err(HuidongError::IncompleteAnswers { answered, total }) => {
                assert_eq!(answered, qs.len() - 1);
                assert_eq!(total, qs.len());
            }
            other => panic!("expected IncompleteAnswers, got {:?}", other),
        }

        let last = qs.last().unwrap().id;
        answers.select(&qs, last, 2).unwrap();
        assert!(answers.is_complete(&qs));
        assert!(answers.ensure_complete(&qs).is_ok());
    }
}
