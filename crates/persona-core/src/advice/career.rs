//! Career advice and preferred working environment.

use serde::Serialize;

use super::Signals;
use crate::dimensions::{RiasecType, Virtue};
use crate::rules::{self, Rule};

/// Careers, advice, and preferred working environments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAdvice {
    /// Suggested careers for the top two interest types.
    pub careers: &'static [&'static str],
    pub advice: Vec<&'static str>,
    pub work_style: Vec<&'static str>,
}

const FALLBACK_ADVICE: &str = "You have a well-balanced mix of abilities and the potential to thrive in a wide range of fields.";

const FALLBACK_WORK_STYLE: &str = "You can adapt to a wide range of environments";

fn advice_rules() -> [Rule<Signals>; 13] {
    use RiasecType::*;

    [
        // top interest with a supporting Big Five trait
        Rule::new(
            |s: &Signals| s.top_interest == Social && s.agreeableness >= 60,
            "You do your best work helping people. Education, healthcare, and counseling suit you.",
        ),
        Rule::new(
            |s: &Signals| s.top_interest == Investigative && s.openness >= 60,
            "Research and analysis, where your curiosity and intellectual drive pay off, suit you.",
        ),
        Rule::new(
            |s: &Signals| s.top_interest == Artistic && s.openness >= 60,
            "You shine where you can use your creativity to the full. Design, content creation, and the arts suit you.",
        ),
        Rule::new(
            |s: &Signals| s.top_interest == Enterprising && s.extraversion >= 60,
            "You do well in work that uses your leadership and drive to bring people along.",
        ),
        Rule::new(
            |s: &Signals| s.top_interest == Realistic && s.conscientiousness >= 60,
            "Your steady, reliable work is valued. Technical and specialist roles suit you.",
        ),
        Rule::new(
            |s: &Signals| s.top_interest == Conventional && s.conscientiousness >= 60,
            "You show your worth in work that demands accuracy and reliability. Administration, office work, and accounting suit you.",
        ),
        // ego states with the top interest
        Rule::new(
            |s: &Signals| s.ego.np >= 60 && s.top_interest == Social,
            "Your high NP (Nurturing Parent) is a major asset in welfare, education, and healthcare. You have a natural gift for helping people grow.",
        ),
        Rule::new(
            |s: &Signals| s.ego.cp >= 60 && s.top_interest == Enterprising,
            "The leadership of your CP (Critical Parent) combined with an enterprising bent equips you for management and executive roles.",
        ),
        Rule::new(
            |s: &Signals| s.ego.a >= 60,
            "The calm analysis of your A (Adult) is valued in consulting, data analysis, and strategic planning.",
        ),
        Rule::new(
            |s: &Signals| s.ego.fc >= 60 && s.top_interest == Artistic,
            "The imagination of your FC (Free Child) and your artistic bent can carve out a unique place in the creative industries.",
        ),
        // top strength
        Rule::new(
            |s: &Signals| s.top_virtue == Virtue::Wisdom,
            "Your wisdom makes you someone people rely on when sound judgment is needed.",
        ),
        Rule::new(
            |s: &Signals| s.top_virtue == Virtue::Humanity,
            "Your strong empathy is a real asset in teamwork and customer-facing work.",
        ),
        Rule::new(
            |s: &Signals| s.top_virtue == Virtue::Courage,
            "Your readiness to take on challenges makes you a natural driver of new projects.",
        ),
    ]
}

fn work_style_rules() -> [Rule<Signals>; 5] {
    [
        Rule::new(
            |s: &Signals| s.extraversion >= 60,
            "Environments with plenty of team collaboration and discussion",
        ),
        Rule::new(
            |s: &Signals| s.extraversion <= 40,
            "Quiet environments where you can concentrate",
        ),
        Rule::new(
            |s: &Signals| s.openness >= 60,
            "Work with variety and new challenges",
        ),
        Rule::new(
            |s: &Signals| s.conscientiousness >= 60,
            "Organizations with clear goals and plans",
        ),
        Rule::new(
            |s: &Signals| s.conscientiousness <= 40,
            "Flexible environments with plenty of autonomy",
        ),
    ]
}

pub fn synthesize(signals: &Signals, careers: &'static [&'static str]) -> CareerAdvice {
    CareerAdvice {
        careers,
        advice: rules::evaluate_or(&advice_rules(), signals, FALLBACK_ADVICE),
        work_style: rules::evaluate_or(&work_style_rules(), signals, FALLBACK_WORK_STYLE),
    }
}
