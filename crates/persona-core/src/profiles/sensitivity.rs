//! Sensory-processing sensitivity profile.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dimensions::{Dimension, SensitivityDimension};
use crate::error::ScoringError;
use crate::model::{AnswerSet, QuestionBank};
use crate::rules::{self, Rule};
use crate::scoring::{self, Scores};

/// Sensitivity scores, overall level, and coping tips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityProfile {
    pub scores: Scores<SensitivityDimension>,
    /// Rounded mean of the three dimension scores.
    pub overall: u8,
    pub level: &'static str,
    pub description: &'static str,
    pub labels: BTreeMap<SensitivityDimension, &'static str>,
    pub tips: Vec<&'static str>,
}

impl SensitivityProfile {
    /// Score of one dimension; 0 if it was not scored.
    pub fn score(&self, d: SensitivityDimension) -> u8 {
        self.scores.get(&d).copied().unwrap_or(0)
    }
}

/// Inputs of the tip rules.
struct TipContext {
    overall: u8,
    sensory: u8,
    emotional: u8,
    depth: u8,
}

const FALLBACK_TIP: &str = "Your sensitivity brings a healthy balance to everyday life";

fn tip_rules() -> [Rule<TipContext>; 5] {
    [
        Rule::many(
            |c: &TipContext| c.overall >= 60,
            &[
                "Deliberately set aside quiet, low-stimulation time every day",
                "Time spent in nature is an effective reset for body and mind",
            ],
        ),
        Rule::new(
            |c: &TipContext| c.sensory >= 60,
            "Shaping your environment helps, for example noise-cancelling earphones or softer lighting",
        ),
        Rule::new(
            |c: &TipContext| c.emotional >= 60,
            "Practice telling other people's emotions apart from your own, for example with an emotion journal",
        ),
        Rule::new(
            |c: &TipContext| c.depth >= 60,
            "Taking time to decide is a sign of care. Respect your own pace",
        ),
        Rule::many(
            |c: &TipContext| c.overall < 40,
            &[
                "Your mental resilience contributes greatly to a team's stability",
                "To understand more sensitive people, consciously try to take their point of view",
            ],
        ),
    ]
}

/// Score the sensitivity section and band the overall mean.
pub fn score(bank: &QuestionBank, answers: &AnswerSet) -> Result<SensitivityProfile, ScoringError> {
    let scores = scoring::compute_trait_scores::<SensitivityDimension>(bank, answers)?;
    let values: Vec<u8> = scores.values().copied().collect();
    let overall = scoring::mean_rounded(&values);
    let (level, description) = level_for(overall);

    let get = |d: SensitivityDimension| scores.get(&d).copied().unwrap_or(0);
    let ctx = TipContext {
        overall,
        sensory: get(SensitivityDimension::Sensory),
        emotional: get(SensitivityDimension::Emotional),
        depth: get(SensitivityDimension::Depth),
    };
    let tips = rules::evaluate_or(&tip_rules(), &ctx, FALLBACK_TIP);

    Ok(SensitivityProfile {
        labels: scoring::labels(SensitivityDimension::ALL),
        scores,
        overall,
        level,
        description,
        tips,
    })
}

/// Level and description for an overall score, banded at 70 and 40.
pub fn level_for(overall: u8) -> (&'static str, &'static str) {
    if overall >= 70 {
        (
            "High sensitivity",
            "You process stimuli from your surroundings deeply. This is the source of a rich inner world and strong empathy, though it also pays to guard against overstimulation.",
        )
    } else if overall >= 40 {
        (
            "Moderate",
            "Your sensitivity is moderate and you respond flexibly to circumstances. Delicacy and toughness are well balanced in you.",
        )
    } else {
        (
            "Low sensitivity",
            "You have a high tolerance for stimulation. You tend to perform steadily even in stressful environments.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{synthetic_bank, Answers};

    fn ctx(overall: u8, sensory: u8, emotional: u8, depth: u8) -> TipContext {
        TipContext {
            overall,
            sensory,
            emotional,
            depth,
        }
    }

    #[test]
    fn overall_is_rounded_mean() {
        let bank = synthetic_bank();
        let answers = Answers::neutral(&bank)
            .set(SensitivityDimension::Sensory, 5)
            .set(SensitivityDimension::Emotional, 4)
            .build();
        let profile = score(&bank, &answers).unwrap();

        // (100 + 75 + 50) / 3 = 75
        assert_eq!(profile.overall, 75);
        assert_eq!(profile.level, "High sensitivity");
        assert_eq!(
            profile.tips,
            vec![
                "Deliberately set aside quiet, low-stimulation time every day",
                "Time spent in nature is an effective reset for body and mind",
                "Shaping your environment helps, for example noise-cancelling earphones or softer lighting",
                "Practice telling other people's emotions apart from your own, for example with an emotion journal",
            ]
        );
    }

    #[test]
    fn neutral_scores_use_fallback_tip() {
        let bank = synthetic_bank();
        let profile = score(&bank, &Answers::neutral(&bank).build()).unwrap();
        assert_eq!(profile.overall, 50);
        assert_eq!(profile.level, "Moderate");
        assert_eq!(profile.tips, vec![FALLBACK_TIP]);
    }

    #[test]
    fn low_overall_adds_two_tips() {
        let tips = rules::evaluate(&tip_rules(), &ctx(30, 25, 25, 40));
        assert_eq!(tips.len(), 2);
        assert!(tips[0].starts_with("Your mental resilience"));
    }

    #[test]
    fn depth_alone_fires_one_tip() {
        let tips = rules::evaluate(&tip_rules(), &ctx(55, 50, 50, 65));
        assert_eq!(tips, vec!["Taking time to decide is a sign of care. Respect your own pace"]);
    }

    #[test]
    fn levels_are_banded() {
        assert_eq!(level_for(70).0, "High sensitivity");
        assert_eq!(level_for(69).0, "Moderate");
        assert_eq!(level_for(40).0, "Moderate");
        assert_eq!(level_for(39).0, "Low sensitivity");
    }
}
