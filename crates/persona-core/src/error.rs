//! Engine error types.
//!
//! Scoring errors are configuration problems in the question bank: they are
//! fatal for the instrument they affect and are surfaced to the caller rather
//! than papered over with a default score.

use thiserror::Error;

use crate::model::Section;

/// Errors raised while scoring a single instrument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// No question in the bank belongs to a `(section, trait)` group the
    /// instrument needs.
    #[error("no questions for trait '{trait_key}' in section '{section}'")]
    EmptyGroup {
        section: Section,
        trait_key: &'static str,
    },
}

impl ScoringError {
    /// The instrument this error belongs to.
    pub fn section(&self) -> Section {
        match self {
            ScoringError::EmptyGroup { section, .. } => *section,
        }
    }
}

/// Errors returned by [`crate::engine::AnalysisEngine::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// One or more instruments could not be scored. Every failing
    /// instrument is listed, not only the first one.
    #[error("question bank misconfigured: {}", join_errors(.0))]
    Configuration(Vec<ScoringError>),
}

impl AnalysisError {
    /// Sections whose profiler failed, in report order.
    pub fn failed_sections(&self) -> Vec<Section> {
        match self {
            AnalysisError::Configuration(errors) => {
                let mut sections: Vec<Section> = errors.iter().map(ScoringError::section).collect();
                sections.dedup();
                sections
            }
        }
    }
}

fn join_errors(errors: &[ScoringError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while building an [`crate::model::AnswerSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// Answers are on a 5-point scale.
    #[error("answer for question {id} is {value}, expected 1-5")]
    OutOfRange { id: u32, value: u8 },
}
