//! Question bank and answer file parsers.
//!
//! Question banks are TOML, answer sets are JSON. Both are validated on load
//! only as far as their shape goes; [`validate_question_bank`] reports the
//! softer problems.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::dimensions::known_trait_keys;
use crate::model::{AnswerSet, Question, QuestionBank, Section};

/// The shipped 70-question bank.
pub const STANDARD_BANK_TOML: &str = include_str!("../data/standard_bank.toml");

/// Intermediate TOML structure for question bank files.
#[derive(Debug, Deserialize)]
struct TomlQuestionFile {
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    section: String,
    #[serde(rename = "trait")]
    trait_key: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    reverse: bool,
}

/// Parse a TOML question bank file.
pub fn parse_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_question_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_question_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlQuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let section: Section = q
                .section
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;

            Ok(Question {
                id: q.id,
                section,
                trait_key: q.trait_key,
                text: q.text,
                reverse: q.reverse,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank::new(questions))
}

/// The embedded standard question bank.
pub fn standard_question_bank() -> Result<QuestionBank> {
    parse_question_bank_str(STANDARD_BANK_TOML, Path::new("standard_bank.toml"))
}

/// Parse a JSON answer file: an object mapping question ids to 1-5.
pub fn parse_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers: {}", path.display()))?;

    parse_answers_str(&content, path)
}

/// Parse a JSON string into an `AnswerSet`.
pub fn parse_answers_str(content: &str, source_path: &Path) -> Result<AnswerSet> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse answers JSON: {}", source_path.display()))
}

/// A warning from question bank validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_question_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate question IDs
    let mut seen_ids = HashSet::new();
    for q in bank.questions() {
        if !seen_ids.insert(q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    // Check for trait keys the section does not score
    for q in bank.questions() {
        if !known_trait_keys(q.section).contains(&q.trait_key.as_str()) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!(
                    "unknown trait '{}' for section '{}' (question is never scored)",
                    q.trait_key, q.section
                ),
            });
        }
    }

    // Check every scored group has at least one question
    for section in Section::ALL {
        for key in known_trait_keys(section) {
            if bank.group(section, key).next().is_none() {
                warnings.push(ValidationWarning {
                    question_id: None,
                    message: format!("no questions for trait '{key}' in section '{section}'"),
                });
            }
        }
    }

    // Check for blank question text
    for q in bank.questions() {
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: "question text is empty".into(),
            });
        }
    }

    // Only Big Five items are reverse-coded
    for q in bank.questions() {
        if q.reverse && q.section != Section::BigFive {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!("reverse flag has no effect in section '{}'", q.section),
            });
        }
    }

    warnings
}
