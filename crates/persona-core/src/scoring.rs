//! Trait scoring and ranking.
//!
//! Every instrument is scored the same way: the answers of a trait's question
//! group are summed and mapped linearly from `[n, 5n]` onto `[0, 100]`.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::dimensions::Dimension;
use crate::error::ScoringError;
use crate::model::{AnswerSet, QuestionBank, MAX_ANSWER, MIN_ANSWER};

/// Scores of one instrument, keyed by dimension in canonical order.
pub type Scores<D> = BTreeMap<D, u8>;

/// A dimension paired with its score, as produced by [`rank`].
///
/// Serializes as `{"<field>": key, "score": n}` where the field name comes
/// from [`Dimension::RANKED_FIELD`], e.g. `type` for RIASEC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedScore<D> {
    pub dimension: D,
    pub score: u8,
}

impl<D: Dimension> Serialize for RankedScore<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("RankedScore", 2)?;
        entry.serialize_field(D::RANKED_FIELD, &self.dimension)?;
        entry.serialize_field("score", &self.score)?;
        entry.end()
    }
}

/// Reverse-code a value on the 5-point scale (1 ↔ 5, 2 ↔ 4).
pub fn reverse_code(value: u8) -> u8 {
    (MIN_ANSWER + MAX_ANSWER) - value
}

/// Map a group sum onto 0–100, rounding half up.
///
/// `sum` ranges over `[group_size, 5 * group_size]`. Integer arithmetic keeps
/// the half-way cases (12.5, 37.5, ...) exact.
pub fn normalize(sum: u32, group_size: u32) -> u8 {
    debug_assert!(group_size > 0);
    let min = group_size * u32::from(MIN_ANSWER);
    let span = group_size * u32::from(MAX_ANSWER - MIN_ANSWER);
    let raw = sum.saturating_sub(min).min(span);
    ((raw * 200 + span) / (span * 2)) as u8
}

/// Integer mean rounded half up.
pub fn mean_rounded(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let n = values.len() as u32;
    let total: u32 = values.iter().map(|&v| u32::from(v)).sum();
    ((total * 2 + n) / (n * 2)) as u8
}

/// Score every question-backed dimension of `D`.
///
/// Fails with [`ScoringError::EmptyGroup`] for the first dimension with no
/// questions in the bank.
pub fn compute_trait_scores<D: Dimension>(
    bank: &QuestionBank,
    answers: &AnswerSet,
) -> Result<Scores<D>, ScoringError> {
    let mut scores = Scores::new();

    for &dimension in D::ALL {
        let mut total = 0u32;
        let mut count = 0u32;
        for q in bank.group(D::SECTION, dimension.key()) {
            let value = answers.resolve(q.id);
            let value = if q.reverse { reverse_code(value) } else { value };
            total += u32::from(value);
            count += 1;
        }

        if count == 0 {
            return Err(ScoringError::EmptyGroup {
                section: D::SECTION,
                trait_key: dimension.key(),
            });
        }

        scores.insert(dimension, normalize(total, count));
    }

    Ok(scores)
}

/// Rank `order` by descending score.
///
/// The sort is stable, so equal scores keep the order given in `order`.
/// Every dimension in `order` must have a score; in release builds a
/// missing one ranks as 0.
pub fn rank<D: Dimension>(scores: &Scores<D>, order: &[D]) -> Vec<RankedScore<D>> {
    let mut ranked: Vec<RankedScore<D>> = order
        .iter()
        .map(|&dimension| {
            debug_assert!(
                scores.contains_key(&dimension),
                "no score for ranked dimension '{}'",
                dimension.key()
            );
            RankedScore {
                dimension,
                score: scores.get(&dimension).copied().unwrap_or(0),
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Labels of every dimension in `order`.
pub fn labels<D: Dimension>(order: &[D]) -> BTreeMap<D, &'static str> {
    order.iter().map(|&d| (d, d.label())).collect()
}
