//! Property tests for the classifier and plan adjuster

use chrono::NaiveDate;
use quickcheck_macros::quickcheck;

use huidong::assessment::{classify, questions, AnswerSet, Category, Classifier};
use huidong::planning::{adjust_plan, generate_plan, ProgressRecord};

fn category_from(seed: u8) -> Category {
    Category::ALL[seed as usize % 4]
}

#[quickcheck]
fn classify_picks_first_highest_scorer(raw: Vec<(u8, u8)>) -> bool {
    let answers: AnswerSet = raw
        .into_iter()
        .map(|(id, idx)| (id as u32 % 7, idx as usize % 4))
        .collect();
    let qs = questions();
    let board = Classifier::new(&qs).tally(&answers);
    let winner = classify(&answers);

    let best = Category::ALL.iter().map(|c| board.score(*c)).max().unwrap_or(0);
    let first_best = Category::ALL
        .iter()
        .copied()
        .find(|c| board.score(*c) == best);

    Category::ALL.contains(&winner) && Some(winner) == first_best
}

#[quickcheck]
fn uniform_answers_select_bound_category(mask: Vec<bool>, position: u8) -> bool {
    let position = position as usize % 4;
    let answers: AnswerSet = questions()
        .iter()
        .zip(mask.iter().chain(std::iter::repeat(&false)))
        .filter(|(_, answered)| **answered)
        .map(|(q, _)| (q.id, position))
        .collect();

    let expected = if answers.is_empty() {
        Category::Explorer
    } else {
        Category::from_position(position).unwrap()
    };
    classify(&answers) == expected
}

#[quickcheck]
fn adjustment_appends_at_most_one_per_list(
    seed: u8,
    counts: (u16, u16, u16, u16),
    feedback: Option<String>,
) -> bool {
    let category = category_from(seed);
    let base = generate_plan(category);
    let snapshot = base.clone();
    let progress = ProgressRecord {
        week_start: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        completed_learning: counts.0 as u32,
        target_learning: counts.1 as u32,
        completed_sports: counts.2 as u32,
        target_sports: counts.3 as u32,
        feedback,
    };

    let adjusted = adjust_plan(category, &base, Some(&progress));
    let again = adjust_plan(category, &base, Some(&progress));

    let grows_by_at_most_one = |before: &Vec<String>, after: &Vec<String>| {
        after.len() >= before.len()
            && after.len() <= before.len() + 1
            && after[..before.len()] == before[..]
    };

    base == snapshot
        && adjusted == again
        && grows_by_at_most_one(&base.learning, &adjusted.learning)
        && grows_by_at_most_one(&base.sports, &adjusted.sports)
        && grows_by_at_most_one(&base.goals, &adjusted.goals)
}

#[quickcheck]
fn no_progress_is_identity(seed: u8) -> bool {
    let category = category_from(seed);
    let base = generate_plan(category);
    adjust_plan(category, &base, None) == base
}
