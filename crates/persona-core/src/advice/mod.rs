//! Cross-instrument advice synthesis.
//!
//! Each synthesizer is a fixed, ordered list of rules over [`Signals`], the
//! handful of scores and dominant traits the rules look at. Every rule that
//! holds contributes its text; an empty result is replaced by a
//! synthesizer-specific fallback.

pub mod career;
pub mod relationship;
pub mod stress;
pub mod summary;

pub use career::CareerAdvice;
pub use relationship::RelationshipAdvice;
pub use stress::{Resilience, StressAdvice};
pub use summary::Summary;

use crate::dimensions::{AttachmentStyle, BigFiveTrait, RiasecType, SensitivityDimension, Virtue};
use crate::pattern::EgoVector;
use crate::profiles::{
    AttachmentProfile, BigFiveProfile, EgogramProfile, RiasecProfile, SensitivityProfile,
    StrengthsProfile,
};

/// Borrowed view of all six instrument profiles.
#[derive(Debug, Clone, Copy)]
pub struct Profiles<'a> {
    pub big_five: &'a BigFiveProfile,
    pub riasec: &'a RiasecProfile,
    pub strengths: &'a StrengthsProfile,
    pub attachment: &'a AttachmentProfile,
    pub sensitivity: &'a SensitivityProfile,
    pub egogram: &'a EgogramProfile,
}

/// The values advice rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
    pub stability: u8,
    pub top_interest: RiasecType,
    pub top_virtue: Virtue,
    pub top_virtue_score: u8,
    pub attachment: AttachmentStyle,
    pub anxious: u8,
    pub sensitivity: u8,
    pub sensory: u8,
    pub ego: EgoVector,
}

impl Signals {
    pub fn from_profiles(p: &Profiles<'_>) -> Self {
        let top_virtue = p.strengths.top();
        Self {
            openness: p.big_five.score(BigFiveTrait::Openness),
            conscientiousness: p.big_five.score(BigFiveTrait::Conscientiousness),
            extraversion: p.big_five.score(BigFiveTrait::Extraversion),
            agreeableness: p.big_five.score(BigFiveTrait::Agreeableness),
            neuroticism: p.big_five.score(BigFiveTrait::Neuroticism),
            stability: p.big_five.score(BigFiveTrait::Stability),
            top_interest: p.riasec.top(),
            top_virtue: top_virtue.dimension,
            top_virtue_score: top_virtue.score,
            attachment: p.attachment.dominant,
            anxious: p.attachment.score(AttachmentStyle::Anxious),
            sensitivity: p.sensitivity.overall,
            sensory: p.sensitivity.score(SensitivityDimension::Sensory),
            ego: EgoVector::from_scores(&p.egogram.scores),
        }
    }
}
