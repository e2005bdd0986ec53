//! One-line personality summary: type name, narrative, and keywords.

use serde::Serialize;

use super::Signals;
use crate::dimensions::{AttachmentStyle, Dimension};
use crate::rules::{self, Rule};

/// Maximum number of keywords reported.
const MAX_KEYWORDS: usize = 5;

/// Score at which the top strength becomes a keyword.
const VIRTUE_KEYWORD_THRESHOLD: u8 = 70;

/// Personality type name, narrative summary, and keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub type_name: String,
    pub summary: String,
    pub keywords: Vec<&'static str>,
}

/// Three-word type name, one word per axis: openness, extraversion,
/// agreeableness.
pub fn type_name(signals: &Signals) -> String {
    let axes = [
        (signals.openness, "Inquisitive", "Pragmatic"),
        (signals.extraversion, "Outgoing", "Reflective"),
        (signals.agreeableness, "Harmonizer", "Individualist"),
    ];
    axes.iter()
        .map(|&(score, high, low)| if score >= 60 { high } else { low })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Narrative built from the dominant trait description, the top interest,
/// and the top strength.
pub fn narrative(signals: &Signals, dominant_description: &str) -> String {
    let mut text = format!(
        "You are {}. {} aptitude stands out, and {} is one of your greatest strengths.",
        lead_clause(dominant_description),
        signals.top_interest.label(),
        signals.top_virtue.label().to_lowercase(),
    );
    if signals.sensitivity >= 60 {
        text.push_str(" Your delicate sensitivity lets you stay close to how others feel.");
    }
    text
}

/// First sentence of a description with its leading letter lowercased.
fn lead_clause(description: &str) -> String {
    let first = description
        .split_once('.')
        .map_or(description, |(sentence, _)| sentence)
        .trim();
    let mut chars = first.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn keyword_rules() -> [Rule<Signals>; 8] {
    [
        Rule::new(|s: &Signals| s.openness >= 60, "Curious"),
        Rule::new(|s: &Signals| s.conscientiousness >= 60, "Responsible"),
        Rule::new(|s: &Signals| s.extraversion >= 60, "Sociable"),
        Rule::new(|s: &Signals| s.extraversion <= 30, "Introspective"),
        Rule::new(|s: &Signals| s.agreeableness >= 60, "Compassionate"),
        Rule::new(|s: &Signals| s.stability >= 60, "Composed"),
        Rule::new(|s: &Signals| s.sensitivity >= 60, "Highly sensitive"),
        Rule::new(
            |s: &Signals| s.attachment == AttachmentStyle::Secure,
            "Secure bonds",
        ),
    ]
}

/// Up to five keywords; rule order decides which survive the cut.
pub fn keywords(signals: &Signals) -> Vec<&'static str> {
    let mut keywords = rules::evaluate(&keyword_rules(), signals);
    if signals.top_virtue_score >= VIRTUE_KEYWORD_THRESHOLD {
        keywords.push(signals.top_virtue.label());
    }
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

pub fn synthesize(signals: &Signals, dominant_description: &str) -> Summary {
    Summary {
        type_name: type_name(signals),
        summary: narrative(signals, dominant_description),
        keywords: keywords(signals),
    }
}
