//! Core data model types for persona.
//!
//! These are the inputs of the engine: the question bank, which is fixed
//! configuration supplied by the caller, and the answer set collected from a
//! respondent.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnswerError;

/// Lowest value on the answer scale.
pub const MIN_ANSWER: u8 = 1;
/// Highest value on the answer scale.
pub const MAX_ANSWER: u8 = 5;
/// Value substituted for a question the respondent did not answer.
pub const NEUTRAL_ANSWER: u8 = 3;

/// The six instruments that make up the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    BigFive,
    Riasec,
    Strengths,
    Attachment,
    Sensitivity,
    Egogram,
}

impl Section {
    /// All sections in report order.
    pub const ALL: [Section; 6] = [
        Section::BigFive,
        Section::Riasec,
        Section::Strengths,
        Section::Attachment,
        Section::Sensitivity,
        Section::Egogram,
    ];

    /// The key used for this section in question bank files.
    pub fn key(self) -> &'static str {
        match self {
            Section::BigFive => "bigfive",
            Section::Riasec => "riasec",
            Section::Strengths => "strengths",
            Section::Attachment => "attachment",
            Section::Sensitivity => "sensitivity",
            Section::Egogram => "egogram",
        }
    }

    /// Human-readable instrument title.
    pub fn title(self) -> &'static str {
        match self {
            Section::BigFive => "Big Five",
            Section::Riasec => "RIASEC interests",
            Section::Strengths => "Character strengths",
            Section::Attachment => "Attachment style",
            Section::Sensitivity => "Sensitivity",
            Section::Egogram => "Egogram",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bigfive" | "big_five" => Ok(Section::BigFive),
            "riasec" => Ok(Section::Riasec),
            "strengths" => Ok(Section::Strengths),
            "attachment" => Ok(Section::Attachment),
            "sensitivity" => Ok(Section::Sensitivity),
            "egogram" => Ok(Section::Egogram),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique, stable identifier. Answers are keyed by this.
    pub id: u32,
    /// The instrument this question belongs to.
    pub section: Section,
    /// Sub-dimension key, scoped to the section (e.g. "openness").
    #[serde(rename = "trait")]
    pub trait_key: String,
    /// The statement shown to the respondent.
    pub text: String,
    /// Whether agreement counts against the trait.
    #[serde(default)]
    pub reverse: bool,
}

/// The ordered set of questions the engine scores against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// All questions in bank order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions of one section, in bank order.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |q| q.section == section)
    }

    /// Questions of one `(section, trait)` group, in bank order.
    pub fn group<'a>(
        &'a self,
        section: Section,
        trait_key: &'a str,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.section(section).filter(move |q| q.trait_key == trait_key)
    }
}

/// A respondent's answers, keyed by question id.
///
/// Partial sets are legal: [`AnswerSet::resolve`] treats a missing answer as
/// [`NEUTRAL_ANSWER`]. Values outside the 5-point scale are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u32, u8>", into = "BTreeMap<u32, u8>")]
pub struct AnswerSet {
    values: BTreeMap<u32, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous one for the same question.
    pub fn insert(&mut self, id: u32, value: u8) -> Result<(), AnswerError> {
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(AnswerError::OutOfRange { id, value });
        }
        self.values.insert(id, value);
        Ok(())
    }

    /// Builder-style [`AnswerSet::insert`].
    pub fn with(mut self, id: u32, value: u8) -> Result<Self, AnswerError> {
        self.insert(id, value)?;
        Ok(self)
    }

    /// Answer every question in `bank` with the same value.
    pub fn uniform(bank: &QuestionBank, value: u8) -> Result<Self, AnswerError> {
        let mut answers = Self::new();
        for q in bank.questions() {
            answers.insert(q.id, value)?;
        }
        Ok(answers)
    }

    /// The raw answer, if one was given.
    pub fn get(&self, id: u32) -> Option<u8> {
        self.values.get(&id).copied()
    }

    /// The answer used for scoring: the given value or the neutral default.
    pub fn resolve(&self, id: u32) -> u8 {
        self.get(id).unwrap_or(NEUTRAL_ANSWER)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ids of questions in `bank` that have no answer, in bank order.
    pub fn missing(&self, bank: &QuestionBank) -> Vec<u32> {
        let mut seen = HashSet::new();
        bank.questions()
            .iter()
            .filter(|q| !self.values.contains_key(&q.id) && seen.insert(q.id))
            .map(|q| q.id)
            .collect()
    }
}

impl TryFrom<BTreeMap<u32, u8>> for AnswerSet {
    type Error = AnswerError;

    fn try_from(values: BTreeMap<u32, u8>) -> Result<Self, Self::Error> {
        let mut answers = AnswerSet::new();
        for (id, value) in values {
            answers.insert(id, value)?;
        }
        Ok(answers)
    }
}

impl From<AnswerSet> for BTreeMap<u32, u8> {
    fn from(answers: AnswerSet) -> Self {
        answers.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, section: Section, trait_key: &str) -> Question {
        Question {
            id,
            section,
            trait_key: trait_key.into(),
            text: format!("question {id}"),
            reverse: false,
        }
    }

    #[test]
    fn section_display_and_parse() {
        assert_eq!(Section::BigFive.to_string(), "bigfive");
        assert_eq!(Section::Egogram.to_string(), "egogram");
        assert_eq!("RIASEC".parse::<Section>().unwrap(), Section::Riasec);
        assert_eq!("big_five".parse::<Section>().unwrap(), Section::BigFive);
        assert!("mbti".parse::<Section>().is_err());
    }

    #[test]
    fn missing_answer_resolves_to_neutral() {
        let answers = AnswerSet::new().with(1, 5).unwrap();
        assert_eq!(answers.resolve(1), 5);
        assert_eq!(answers.resolve(2), NEUTRAL_ANSWER);
        assert_eq!(answers.get(2), None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut answers = AnswerSet::new();
        assert_eq!(
            answers.insert(4, 0),
            Err(AnswerError::OutOfRange { id: 4, value: 0 })
        );
        assert!(answers.insert(4, 6).is_err());
        assert!(answers.is_empty());
    }

    #[test]
    fn deserialize_validates_values() {
        let ok: AnswerSet = serde_json::from_str(r#"{"1": 2, "2": 5}"#).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.resolve(1), 2);

        let bad = serde_json::from_str::<AnswerSet>(r#"{"1": 7}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn missing_lists_unanswered_in_bank_order() {
        let bank = QuestionBank::new(vec![
            question(3, Section::BigFive, "openness"),
            question(1, Section::BigFive, "openness"),
            question(2, Section::Riasec, "social"),
        ]);
        let answers = AnswerSet::new().with(1, 4).unwrap();
        assert_eq!(answers.missing(&bank), vec![3, 2]);
    }

    #[test]
    fn group_filters_by_section_and_trait() {
        let bank = QuestionBank::new(vec![
            question(1, Section::BigFive, "openness"),
            question(2, Section::Riasec, "openness"),
            question(3, Section::BigFive, "openness"),
            question(4, Section::BigFive, "extraversion"),
        ]);
        let ids: Vec<u32> = bank
            .group(Section::BigFive, "openness")
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn question_toml_uses_trait_key() {
        let q: Question = toml::from_str(
            r#"
id = 9
section = "attachment"
trait = "secure"
text = "I find it easy to rely on others."
"#,
        )
        .unwrap();
        assert_eq!(q.section, Section::Attachment);
        assert_eq!(q.trait_key, "secure");
        assert!(!q.reverse);
    }
}
