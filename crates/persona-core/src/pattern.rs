//! Egogram shape classification.
//!
//! Rules are checked in a fixed order and the first match wins. The order
//! matters: the A-dominant rule overlaps the "highest state" rules and has to
//! be tried before them.

use serde::Serialize;

use crate::dimensions::EgoState;
use crate::scoring::Scores;

/// The five ego-state scores as plain fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EgoVector {
    pub cp: u8,
    pub np: u8,
    pub a: u8,
    pub fc: u8,
    pub ac: u8,
}

impl EgoVector {
    pub fn from_scores(scores: &Scores<EgoState>) -> Self {
        let get = |s: EgoState| scores.get(&s).copied().unwrap_or(0);
        Self {
            cp: get(EgoState::Cp),
            np: get(EgoState::Np),
            a: get(EgoState::A),
            fc: get(EgoState::Fc),
            ac: get(EgoState::Ac),
        }
    }

    fn values(&self) -> [u8; 5] {
        [self.cp, self.np, self.a, self.fc, self.ac]
    }

    pub fn max(&self) -> u8 {
        self.values().into_iter().max().unwrap_or(0)
    }

    pub fn min(&self) -> u8 {
        self.values().into_iter().min().unwrap_or(0)
    }
}

/// Named egogram shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EgogramPattern {
    Flat,
    InverseN,
    N,
    ADominant,
    NpDominant,
    CpDominant,
    FcDominant,
    AcDominant,
    Mixed,
}

/// Largest spread between the highest and lowest state that still counts
/// as flat.
const FLAT_RANGE: u8 = 15;

type PatternRule = (fn(&EgoVector) -> bool, EgogramPattern);

fn rules() -> [PatternRule; 8] {
    [
        (|v: &EgoVector| v.max() - v.min() <= FLAT_RANGE, EgogramPattern::Flat),
        (|v: &EgoVector| v.np >= 60 && v.fc >= 60 && v.cp <= 40, EgogramPattern::InverseN),
        (|v: &EgoVector| v.cp >= 60 && v.ac >= 60 && v.np <= 40, EgogramPattern::N),
        (|v: &EgoVector| v.a >= 60 && v.a >= v.cp && v.a >= v.ac, EgogramPattern::ADominant),
        (|v: &EgoVector| v.np == v.max(), EgogramPattern::NpDominant),
        (|v: &EgoVector| v.cp == v.max(), EgogramPattern::CpDominant),
        (|v: &EgoVector| v.fc == v.max(), EgogramPattern::FcDominant),
        (|v: &EgoVector| v.ac == v.max(), EgogramPattern::AcDominant),
    ]
}

/// Classify the shape of an egogram.
pub fn classify(v: &EgoVector) -> EgogramPattern {
    rules()
        .into_iter()
        .find(|(matches, _)| matches(v))
        .map(|(_, pattern)| pattern)
        .unwrap_or(EgogramPattern::Mixed)
}

impl EgogramPattern {
    pub fn name(self) -> &'static str {
        match self {
            EgogramPattern::Flat => "Flat",
            EgogramPattern::InverseN => "Inverse-N",
            EgogramPattern::N => "N",
            EgogramPattern::ADominant => "A-dominant",
            EgogramPattern::NpDominant => "NP-dominant",
            EgogramPattern::CpDominant => "CP-dominant",
            EgogramPattern::FcDominant => "FC-dominant",
            EgogramPattern::AcDominant => "AC-dominant",
            EgogramPattern::Mixed => "Mixed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EgogramPattern::Flat => "All five ego states are evenly developed. You adapt flexibly, though your distinctive traits may show less.",
            EgogramPattern::InverseN => "Kind and free-spirited at once, an easygoing type.",
            EgogramPattern::N => "Highly responsible and cooperative, but strict with yourself and inclined to hold back.",
            EgogramPattern::ADominant => "Rational, with excellent objective judgment.",
            EgogramPattern::NpDominant => "Caring and nurturing, someone others rely on.",
            EgogramPattern::CpDominant => "Strong leadership with a high regard for discipline.",
            EgogramPattern::FcDominant => "Free, creative, and naturally spontaneous.",
            EgogramPattern::AcDominant => "Highly cooperative and attentive to others. Remember to value your own feelings too.",
            EgogramPattern::Mixed => "Several ego states are strong, and you switch between them to suit the situation.",
        }
    }

    pub fn summary(self) -> PatternSummary {
        PatternSummary {
            kind: self,
            name: self.name(),
            description: self.description(),
        }
    }
}

/// A classified shape with its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternSummary {
    pub kind: EgogramPattern,
    pub name: &'static str,
    pub description: &'static str,
}
