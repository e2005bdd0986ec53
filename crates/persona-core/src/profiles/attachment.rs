//! Attachment style profile.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dimensions::{AttachmentStyle, Dimension};
use crate::error::ScoringError;
use crate::model::{AnswerSet, QuestionBank};
use crate::scoring::{self, Scores};

/// Attachment style scores and the dominant style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentProfile {
    pub scores: Scores<AttachmentStyle>,
    pub dominant: AttachmentStyle,
    pub labels: BTreeMap<AttachmentStyle, &'static str>,
    pub descriptions: BTreeMap<AttachmentStyle, &'static str>,
    /// Three suggestions for the dominant style.
    pub advice: &'static [&'static str],
}

impl AttachmentProfile {
    /// Score of one dimension; 0 if it was not scored.
    pub fn score(&self, style: AttachmentStyle) -> u8 {
        self.scores.get(&style).copied().unwrap_or(0)
    }
}

type AdviceEntry = (AttachmentStyle, &'static [&'static str]);

const SECURE_ADVICE: &[&str] = &[
    "Your ability to build stable relationships is a source of reassurance for the people around you",
    "When a partner or friend feels uneasy, your calm can be a great support",
    "You can use this strength to become a bridge between people in your circle",
];

const ADVICE: &[AdviceEntry] = &[
    (AttachmentStyle::Secure, SECURE_ADVICE),
    (
        AttachmentStyle::Anxious,
        &[
            "When anxiety rises, practice separating the facts from your feelings",
            "No reply does not mean you are disliked; remember the other person has their own circumstances",
            "Making time for your own hobbies and goals helps steady your mind",
        ],
    ),
    (
        AttachmentStyle::Avoidant,
        &[
            "Practice sharing your feelings, little by little, with someone you trust",
            "Try reframing showing vulnerability as a sign of strength rather than defeat",
            "Keep valuing your time alone while you look for a distance that feels comfortable",
        ],
    ),
    (
        AttachmentStyle::Disorganized,
        &[
            "Simply noticing your relationship patterns is already major progress",
            "Build up small, positive experiences with people you feel safe with",
            "Seeking professional support when you need it is a sign of strength",
        ],
    ),
];

/// Score the attachment section and pick the dominant style.
pub fn score(bank: &QuestionBank, answers: &AnswerSet) -> Result<AttachmentProfile, ScoringError> {
    let scores = scoring::compute_trait_scores::<AttachmentStyle>(bank, answers)?;
    let dominant = scoring::rank(&scores, AttachmentStyle::ALL)
        .first()
        .map(|r| r.dimension)
        .unwrap_or(AttachmentStyle::Secure);

    Ok(AttachmentProfile {
        labels: scoring::labels(AttachmentStyle::ALL),
        descriptions: AttachmentStyle::ALL
            .iter()
            .map(|&s| (s, describe(s)))
            .collect(),
        advice: advice_for(ADVICE, dominant),
        scores,
        dominant,
    })
}

/// Advice list for `style`, falling back to the secure list when the table
/// has no entry for it.
fn advice_for(table: &[AdviceEntry], style: AttachmentStyle) -> &'static [&'static str] {
    table
        .iter()
        .find(|(s, _)| *s == style)
        .map(|(_, advice)| *advice)
        .unwrap_or(SECURE_ADVICE)
}

pub fn describe(style: AttachmentStyle) -> &'static str {
    match style {
        AttachmentStyle::Secure => {
            "You feel at ease in relationships and balance trust with independence. You can lean on people close to you openly while respecting their freedom."
        }
        AttachmentStyle::Anxious => {
            "You seek deep bonds and are sensitive to how others respond. You love generously, though you may feel the urge to check how the other person feels. Recognizing your own appeal and worth is the key to growth."
        }
        AttachmentStyle::Avoidant => {
            "You are strongly self-reliant and value your own space. You tend to keep feelings inside, which also makes you calm and dependable. Opening up gradually will make your relationships richer."
        }
        AttachmentStyle::Disorganized => {
            "A wish for closeness and a sense of caution live side by side in you. Past experiences often play a part, and noticing your own patterns is the first step toward change. You can build relationships that feel safe, one step at a time."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{synthetic_bank, Answers};

    #[test]
    fn dominant_style_selects_advice() {
        let bank = synthetic_bank();
        let answers = Answers::neutral(&bank)
            .set(AttachmentStyle::Avoidant, 5)
            .set(AttachmentStyle::Secure, 2)
            .build();
        let profile = score(&bank, &answers).unwrap();

        assert_eq!(profile.dominant, AttachmentStyle::Avoidant);
        assert_eq!(profile.score(AttachmentStyle::Avoidant), 100);
        assert_eq!(profile.advice.len(), 3);
        assert!(profile.advice[0].starts_with("Practice sharing"));
    }

    #[test]
    fn tie_picks_first_style() {
        let bank = synthetic_bank();
        let answers = Answers::neutral(&bank).build();
        let profile = score(&bank, &answers).unwrap();
        assert_eq!(profile.dominant, AttachmentStyle::Secure);
    }

    #[test]
    fn missing_advice_entry_falls_back_to_secure() {
        let partial: &[AdviceEntry] = &[(AttachmentStyle::Anxious, &["only anxious"])];
        assert_eq!(
            advice_for(partial, AttachmentStyle::Disorganized),
            SECURE_ADVICE
        );
        assert_eq!(advice_for(partial, AttachmentStyle::Anxious), &["only anxious"]);
    }
}
