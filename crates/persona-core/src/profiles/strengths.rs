//! Character-strength (virtue) profile.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dimensions::{Dimension, Virtue};
use crate::error::ScoringError;
use crate::model::{AnswerSet, QuestionBank};
use crate::scoring::{self, RankedScore, Scores};

const TOP_COUNT: usize = 3;

/// Virtue scores and the three strongest virtues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthsProfile {
    pub scores: Scores<Virtue>,
    pub top3: Vec<RankedScore<Virtue>>,
    pub labels: BTreeMap<Virtue, &'static str>,
    pub descriptions: BTreeMap<Virtue, &'static str>,
}

impl StrengthsProfile {
    /// The strongest virtue and its score.
    pub fn top(&self) -> RankedScore<Virtue> {
        self.top3.first().copied().unwrap_or(RankedScore {
            dimension: Virtue::Wisdom,
            score: 0,
        })
    }
}

/// Score the strengths section and rank the virtues.
pub fn score(bank: &QuestionBank, answers: &AnswerSet) -> Result<StrengthsProfile, ScoringError> {
    let scores = scoring::compute_trait_scores::<Virtue>(bank, answers)?;
    let top3 = scoring::rank(&scores, Virtue::ALL)
        .into_iter()
        .take(TOP_COUNT)
        .collect();

    Ok(StrengthsProfile {
        labels: scoring::labels(Virtue::ALL),
        descriptions: Virtue::ALL.iter().map(|&v| (v, describe(v))).collect(),
        scores,
        top3,
    })
}

pub fn describe(v: Virtue) -> &'static str {
    match v {
        Virtue::Wisdom => "Applying knowledge and judging with a wide perspective",
        Virtue::Courage => "Facing difficulty and holding to your convictions",
        Virtue::Humanity => "Care for others and deep empathy",
        Virtue::Justice => "Fairness and commitment to the team",
        Virtue::Temperance => "Self-control and humility",
        Virtue::Transcendence => "Gratitude, hope, and a sense of beauty",
    }
}
