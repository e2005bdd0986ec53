//! Big Five personality profile.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dimensions::BigFiveTrait;
use crate::error::ScoringError;
use crate::model::{AnswerSet, QuestionBank};
use crate::scoring::{self, RankedScore, Scores};

/// Number of traits reported as dominant.
const DOMINANT_COUNT: usize = 2;

/// Big Five trait scores with derived stability and dominant traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BigFiveProfile {
    /// All five measured traits plus the derived stability score.
    pub scores: Scores<BigFiveTrait>,
    /// The two highest-ranked traits (stability included, neuroticism not).
    pub dominant: Vec<BigFiveTrait>,
    pub labels: BTreeMap<BigFiveTrait, &'static str>,
    /// Score-banded description of every ranked trait.
    pub descriptions: BTreeMap<BigFiveTrait, &'static str>,
}

impl BigFiveProfile {
    /// Score of one dimension; 0 if it was not scored.
    pub fn score(&self, t: BigFiveTrait) -> u8 {
        self.scores.get(&t).copied().unwrap_or(0)
    }

    /// The description of the top-ranked trait.
    pub fn dominant_description(&self) -> &'static str {
        let description = self
            .dominant
            .first()
            .and_then(|t| self.descriptions.get(t))
            .copied();
        debug_assert!(
            description.is_some(),
            "dominant trait has no description: {:?}",
            self.dominant
        );
        description.unwrap_or("")
    }
}

/// Score the Big Five section and derive stability from neuroticism.
pub fn score(bank: &QuestionBank, answers: &AnswerSet) -> Result<BigFiveProfile, ScoringError> {
    let mut scores = scoring::compute_trait_scores::<BigFiveTrait>(bank, answers)?;
    let neuroticism = scores.get(&BigFiveTrait::Neuroticism).copied().unwrap_or(0);
    scores.insert(BigFiveTrait::Stability, 100 - neuroticism);

    let dominant = scoring::rank(&scores, &BigFiveTrait::RANKED)
        .into_iter()
        .take(DOMINANT_COUNT)
        .map(|RankedScore { dimension, .. }| dimension)
        .collect();

    let descriptions = BigFiveTrait::RANKED
        .iter()
        .map(|&t| (t, describe(t, scores.get(&t).copied().unwrap_or(0))))
        .collect();

    let mut label_order = BigFiveTrait::RANKED.to_vec();
    label_order.push(BigFiveTrait::Neuroticism);

    Ok(BigFiveProfile {
        labels: scoring::labels(&label_order),
        scores,
        dominant,
        descriptions,
    })
}

/// Description of a trait for a score band: `[70, 100]`, `[40, 69]`, `[0, 39]`.
pub fn describe(t: BigFiveTrait, score: u8) -> &'static str {
    let [high, mid, low] = bands(t);
    if score >= 70 {
        high
    } else if score >= 40 {
        mid
    } else {
        low
    }
}

fn bands(t: BigFiveTrait) -> [&'static str; 3] {
    match t {
        BigFiveTrait::Openness => [
            "Highly open to new experiences and ideas. You are curious and drawn to art and abstract concepts.",
            "Balanced between curiosity about the new and comfort in the familiar. You can explore without losing your footing.",
            "Practical and grounded in how you think. You value proven methods and concrete approaches.",
        ],
        BigFiveTrait::Conscientiousness => [
            "Organized, responsible, and steady in pursuing your goals. Your self-discipline is a real asset.",
            "Adaptable enough to plan carefully or improvise as the situation demands. You shift gears without much friction.",
            "Flexible and quick to improvise. You prefer a free style that does not fit a fixed mold.",
        ],
        BigFiveTrait::Extraversion => [
            "Sociable and energetic. You draw energy from being around people.",
            "Comfortable both in company and on your own. You adjust to the situation with ease.",
            "Reflective and inward-looking. You prefer a few deep relationships and recharge with time alone.",
        ],
        BigFiveTrait::Agreeableness => [
            "Considerate and attentive to harmony with others. You cooperate readily and tune into how people feel.",
            "Balanced between cooperation and self-assertion. You adapt your stance to the situation.",
            "Independent and guided by your own convictions. You tend to do well in competitive settings.",
        ],
        BigFiveTrait::Stability | BigFiveTrait::Neuroticism => [
            "Emotionally steady with a high tolerance for stress. You keep a cool head when it matters.",
            "Moderate in your emotional ups and downs. You handle everyday stress well enough.",
            "Sensitive and finely tuned to your surroundings. That same sensitivity gives you deep empathy and insight.",
        ],
    }
}
