//! persona-core — Questionnaire scoring and profile analysis engine.
//!
//! This crate turns a set of 1-5 questionnaire answers into a six-instrument
//! personality profile (Big Five, RIASEC, character strengths, attachment,
//! sensitivity, egogram) plus rule-based career, relationship, and stress
//! advice. The engine is a pure function of the injected question bank and
//! the answers.

pub mod advice;
pub mod careers;
pub mod dimensions;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod pattern;
pub mod profiles;
pub mod report;
pub mod rules;
pub mod scoring;

#[cfg(test)]
mod fixtures;

pub use engine::{analyze, AnalysisEngine};
pub use error::{AnalysisError, AnswerError, ScoringError};
pub use model::{AnswerSet, Question, QuestionBank, Section};
pub use report::Report;
