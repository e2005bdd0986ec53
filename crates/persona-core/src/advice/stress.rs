//! Stress factors, coping strategies, and resilience.

use serde::Serialize;

use super::Signals;
use crate::rules::{self, Rule};
use crate::scoring;

/// Likely stressors, coping strategies, and a resilience estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StressAdvice {
    pub stress_factors: Vec<&'static str>,
    pub coping_strategies: Vec<&'static str>,
    pub resilience: Resilience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resilience {
    pub level: &'static str,
    pub description: &'static str,
    /// Rounded mean of stability, conscientiousness, and inverted sensitivity.
    pub score: u8,
}

const FALLBACK_FACTOR: &str =
    "No particular stressor stands out, but keep an eye on stress building up over time";

fn factor_rules() -> [Rule<Signals>; 5] {
    [
        Rule::new(
            |s: &Signals| s.neuroticism >= 60,
            "Uncertain situations and unexpected change",
        ),
        Rule::new(
            |s: &Signals| s.sensitivity >= 60,
            "Excessive sensory input (noise, crowds)",
        ),
        Rule::new(
            |s: &Signals| s.anxious >= 60,
            "Ambiguity in relationships or shifts in closeness",
        ),
        Rule::new(
            |s: &Signals| s.conscientiousness >= 70,
            "Situations that do not go according to plan",
        ),
        Rule::new(
            |s: &Signals| s.agreeableness >= 70,
            "Conflict and confrontation",
        ),
    ]
}

fn coping_rules() -> [Rule<Signals>; 5] {
    [
        Rule::new(
            |s: &Signals| s.extraversion >= 60,
            "Talk things through with someone you trust",
        ),
        Rule::new(
            |s: &Signals| s.extraversion < 60,
            "Set aside quiet time alone to reflect",
        ),
        Rule::new(
            |s: &Signals| s.openness >= 60,
            "Recharge through creative activities such as art, music, or time in nature",
        ),
        Rule::new(
            |s: &Signals| s.sensory >= 60,
            "Adjust your surroundings to cut stimulation (quiet places, soft lighting)",
        ),
        Rule::many(
            |_: &Signals| true,
            &[
                "Exercise regularly or practice mindfulness",
                "Make a habit of writing down three things you got done today",
            ],
        ),
    ]
}

const HIGH_RESILIENCE: &str =
    "You bounce back from stress quickly and can treat hardship as a chance to grow.";
const NORMAL_RESILIENCE: &str = "You handle everyday stress well, but heavy stress calls for deliberate self-care.";
const LOW_RESILIENCE: &str = "Your delicate sensitivity makes you more susceptible to stress. Make self-care your top priority.";

/// Band the mean of the three inputs: `>= 60` high, `>= 40` normal.
///
/// Bands compare the exact mean; the reported score is rounded.
pub fn resilience(signals: &Signals) -> Resilience {
    let inputs = [
        signals.stability,
        signals.conscientiousness,
        100 - signals.sensitivity.min(100),
    ];
    let sum: u32 = inputs.iter().map(|&v| u32::from(v)).sum();
    let (level, description) = if sum >= 3 * 60 {
        ("High", HIGH_RESILIENCE)
    } else if sum >= 3 * 40 {
        ("Normal", NORMAL_RESILIENCE)
    } else {
        ("Needs care", LOW_RESILIENCE)
    };

    Resilience {
        level,
        description,
        score: scoring::mean_rounded(&inputs),
    }
}

pub fn synthesize(signals: &Signals) -> StressAdvice {
    StressAdvice {
        stress_factors: rules::evaluate_or(&factor_rules(), signals, FALLBACK_FACTOR),
        coping_strategies: rules::evaluate(&coping_rules(), signals),
        resilience: resilience(signals),
    }
}
