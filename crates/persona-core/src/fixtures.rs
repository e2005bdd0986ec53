//! Synthetic question banks and answer builders shared by unit tests.

use crate::dimensions::{
    AttachmentStyle, BigFiveTrait, Dimension, EgoState, RiasecType, SensitivityDimension, Virtue,
};
use crate::model::{AnswerSet, Question, QuestionBank, Section};

/// Items per trait for each instrument, matching the shipped bank.
pub(crate) fn items_per_trait(section: Section) -> u32 {
    match section {
        Section::BigFive | Section::Attachment | Section::Sensitivity => 3,
        Section::Riasec | Section::Strengths | Section::Egogram => 2,
    }
}

fn push_groups<D: Dimension>(questions: &mut Vec<Question>) {
    for &d in D::ALL {
        for i in 0..items_per_trait(D::SECTION) {
            let id = questions.len() as u32 + 1;
            questions.push(Question {
                id,
                section: D::SECTION,
                trait_key: d.key().to_string(),
                text: format!("{} item {}", d.key(), i + 1),
                // last Big Five item of each trait is reverse-coded
                reverse: D::SECTION == Section::BigFive && i == 2,
            });
        }
    }
}

/// A complete bank covering all six instruments.
pub(crate) fn synthetic_bank() -> QuestionBank {
    let mut questions = Vec::new();
    push_groups::<BigFiveTrait>(&mut questions);
    push_groups::<RiasecType>(&mut questions);
    push_groups::<Virtue>(&mut questions);
    push_groups::<AttachmentStyle>(&mut questions);
    push_groups::<SensitivityDimension>(&mut questions);
    push_groups::<EgoState>(&mut questions);
    QuestionBank::new(questions)
}

/// Builds answers by target *effective* value per trait, so reverse-coded
/// items are answered such that every item of a group counts the same.
pub(crate) struct Answers<'a> {
    bank: &'a QuestionBank,
    answers: AnswerSet,
}

impl<'a> Answers<'a> {
    /// Start with every question answered neutrally.
    pub(crate) fn neutral(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            answers: AnswerSet::uniform(bank, 3).expect("3 is on the scale"),
        }
    }

    /// Set every item of `dimension` to count as `value`.
    pub(crate) fn set<D: Dimension>(mut self, dimension: D, value: u8) -> Self {
        for q in self.bank.group(D::SECTION, dimension.key()) {
            let raw = if q.reverse { 6 - value } else { value };
            self.answers.insert(q.id, raw).expect("value on the scale");
        }
        self
    }

    /// Set every dimension of `D` to count as `value`.
    pub(crate) fn set_all<D: Dimension>(mut self, value: u8) -> Self {
        for &d in D::ALL {
            self = self.set(d, value);
        }
        self
    }

    pub(crate) fn build(self) -> AnswerSet {
        self.answers
    }
}
