//! RIASEC vocational interest profile.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::careers::CareerMatcher;
use crate::dimensions::{Dimension, RiasecType};
use crate::error::ScoringError;
use crate::model::{AnswerSet, QuestionBank};
use crate::scoring::{self, RankedScore, Scores};

/// Letters in the Holland code.
const CODE_LENGTH: usize = 3;

/// Interest scores, Holland code, and suggested careers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiasecProfile {
    pub scores: Scores<RiasecType>,
    /// All six types, highest first.
    pub ranking: Vec<RankedScore<RiasecType>>,
    pub top3: Vec<RankedScore<RiasecType>>,
    /// Initials of the top three types, e.g. "SAI".
    pub holland_code: String,
    pub labels: BTreeMap<RiasecType, &'static str>,
    pub descriptions: BTreeMap<RiasecType, &'static str>,
    /// Suggestions for the top two types.
    pub careers: &'static [&'static str],
}

impl RiasecProfile {
    /// The highest-ranked type.
    pub fn top(&self) -> RiasecType {
        self.ranking
            .first()
            .map(|r| r.dimension)
            .unwrap_or(RiasecType::Realistic)
    }
}

/// Score the RIASEC section and derive the Holland code and careers.
pub fn score(
    bank: &QuestionBank,
    answers: &AnswerSet,
    careers: &CareerMatcher,
) -> Result<RiasecProfile, ScoringError> {
    let scores = scoring::compute_trait_scores::<RiasecType>(bank, answers)?;
    let ranking = scoring::rank(&scores, RiasecType::ALL);
    let top3: Vec<_> = ranking.iter().take(CODE_LENGTH).copied().collect();
    let holland_code = top3.iter().map(|r| r.dimension.initial()).collect();

    let top2: Vec<RiasecType> = ranking.iter().take(2).map(|r| r.dimension).collect();

    Ok(RiasecProfile {
        careers: careers.suggest_for_top(&top2),
        labels: scoring::labels(RiasecType::ALL),
        descriptions: RiasecType::ALL.iter().map(|&t| (t, describe(t))).collect(),
        scores,
        ranking,
        top3,
        holland_code,
    })
}

/// The kind of work each type gravitates to.
pub fn describe(t: RiasecType) -> &'static str {
    match t {
        RiasecType::Realistic => "Hands-on work with tangible things",
        RiasecType::Investigative => "Investigating, analyzing, and deepening knowledge",
        RiasecType::Artistic => "Creative work with room for free expression",
        RiasecType::Social => "Helping, teaching, and supporting people",
        RiasecType::Enterprising => "Leading people and moving organizations",
        RiasecType::Conventional => "Organizing data and managing it accurately",
    }
}
