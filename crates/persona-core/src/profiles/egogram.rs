//! Egogram (transactional-analysis ego state) profile.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dimensions::{Dimension, EgoState};
use crate::error::ScoringError;
use crate::model::{AnswerSet, QuestionBank};
use crate::pattern::{self, EgoVector, PatternSummary};
use crate::rules::{self, Rule};
use crate::scoring::{self, Scores};

/// Ego state scores, egogram shape, and advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EgogramProfile {
    pub scores: Scores<EgoState>,
    pub dominant: EgoState,
    pub pattern: PatternSummary,
    pub labels: BTreeMap<EgoState, &'static str>,
    pub short_labels: BTreeMap<EgoState, &'static str>,
    pub descriptions: BTreeMap<EgoState, &'static str>,
    pub advice: Vec<&'static str>,
}

impl EgogramProfile {
    /// Score of one dimension; 0 if it was not scored.
    pub fn score(&self, state: EgoState) -> u8 {
        self.scores.get(&state).copied().unwrap_or(0)
    }
}

const FALLBACK_ADVICE: &str = "A well-balanced egogram. You have the flexibility to switch ego states as the situation calls for.";

fn advice_rules() -> [Rule<EgoVector>; 6] {
    [
        // strengths worth building on
        Rule::new(
            |v: &EgoVector| v.np >= 60,
            "Your high NP (Nurturing Parent) is a major strength that enriches your relationships.",
        ),
        Rule::new(
            |v: &EgoVector| v.a >= 60,
            "Your calm judgment (A) is dependable when solving complex problems.",
        ),
        Rule::new(
            |v: &EgoVector| v.fc >= 60,
            "Your free thinking (FC) lets you shine in creative situations.",
        ),
        // imbalances
        Rule::new(
            |v: &EgoVector| v.cp >= 70 && v.np <= 30,
            "Leave some room within your strictness to hear the other person out, and you will be trusted even more.",
        ),
        Rule::new(
            |v: &EgoVector| v.ac >= 70 && v.fc <= 30,
            "Now and then, put what you want to do first. Letting your FC out a little lightens the mood.",
        ),
        Rule::new(
            |v: &EgoVector| v.np >= 70 && v.a <= 30,
            "Bring in a calm point of view (A) alongside your feelings, and your judgment gets sharper.",
        ),
    ]
}

/// Score the egogram section, classify its shape, and collect advice.
pub fn score(bank: &QuestionBank, answers: &AnswerSet) -> Result<EgogramProfile, ScoringError> {
    let scores = scoring::compute_trait_scores::<EgoState>(bank, answers)?;
    let dominant = scoring::rank(&scores, EgoState::ALL)
        .first()
        .map(|r| r.dimension)
        .unwrap_or(EgoState::A);

    let vector = EgoVector::from_scores(&scores);
    let pattern = pattern::classify(&vector).summary();
    let advice = rules::evaluate_or(&advice_rules(), &vector, FALLBACK_ADVICE);

    Ok(EgogramProfile {
        labels: scoring::labels(EgoState::ALL),
        short_labels: EgoState::ALL.iter().map(|&s| (s, s.short_label())).collect(),
        descriptions: EgoState::ALL.iter().map(|&s| (s, describe(s))).collect(),
        scores,
        dominant,
        pattern,
        advice,
    })
}

pub fn describe(state: EgoState) -> &'static str {
    match state {
        EgoState::Cp => "The side of you that values rules and justice, with a strong sense of responsibility. It fuels leadership and guidance, but too much of it turns critical.",
        EgoState::Np => "The side of you that is caring and good at looking after others. People warm to you easily, and you do well in support and care work.",
        EgoState::A => "The side of you that judges calmly from facts. Your logical thinking is strong, and you excel at analysis and problem solving.",
        EgoState::Fc => "The innocent, intuitive side of you. It is the source of creativity and humor, and it generates new ideas.",
        EgoState::Ac => "The cooperative side of you that reads the room. You value teamwork, but holding yourself back too much can become a source of stress.",
    }
}
