//! Central analysis orchestrator.
//!
//! Runs the six instrument profilers against an injected question bank,
//! then feeds their results to the cross-instrument synthesizers and
//! assembles the [`Report`]. The engine holds no per-call state.

use tracing::debug;

use crate::advice::{self, Profiles, Signals};
use crate::careers::CareerMatcher;
use crate::error::{AnalysisError, ScoringError};
use crate::model::{AnswerSet, QuestionBank};
use crate::profiles::{attachment, big_five, egogram, riasec, sensitivity, strengths};
use crate::report::Report;

/// The analysis engine.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    careers: CareerMatcher,
}

impl AnalysisEngine {
    /// An engine with custom career tables.
    pub fn new(careers: CareerMatcher) -> Self {
        Self { careers }
    }

    /// Analyze one answer set.
    ///
    /// Every profiler runs even when an earlier one fails, so the error lists
    /// all misconfigured instruments at once.
    pub fn analyze(
        &self,
        answers: &AnswerSet,
        bank: &QuestionBank,
    ) -> Result<Report, AnalysisError> {
        let missing = answers.missing(bank).len();
        if missing > 0 {
            debug!(missing, "defaulting unanswered questions to neutral");
        }

        let mut errors = Vec::new();
        let big_five = keep(big_five::score(bank, answers), &mut errors);
        let riasec = keep(riasec::score(bank, answers, &self.careers), &mut errors);
        let strengths = keep(strengths::score(bank, answers), &mut errors);
        let attachment = keep(attachment::score(bank, answers), &mut errors);
        let sensitivity = keep(sensitivity::score(bank, answers), &mut errors);
        let egogram = keep(egogram::score(bank, answers), &mut errors);

        let (
            Some(big_five),
            Some(riasec),
            Some(strengths),
            Some(attachment),
            Some(sensitivity),
            Some(egogram),
        ) = (big_five, riasec, strengths, attachment, sensitivity, egogram)
        else {
            return Err(AnalysisError::Configuration(errors));
        };

        debug!(
            dominant = ?big_five.dominant,
            holland_code = %riasec.holland_code,
            attachment = ?attachment.dominant,
            sensitivity = sensitivity.overall,
            pattern = egogram.pattern.name,
            "instruments scored"
        );

        let signals = Signals::from_profiles(&Profiles {
            big_five: &big_five,
            riasec: &riasec,
            strengths: &strengths,
            attachment: &attachment,
            sensitivity: &sensitivity,
            egogram: &egogram,
        });

        let career_advice = advice::career::synthesize(&signals, riasec.careers);
        let relationship_advice = advice::relationship::synthesize(&signals);
        let stress_advice = advice::stress::synthesize(&signals);
        let summary = advice::summary::synthesize(&signals, big_five.dominant_description());

        debug!(
            career = career_advice.advice.len(),
            relationship = relationship_advice.advice.len(),
            stress_factors = stress_advice.stress_factors.len(),
            keywords = summary.keywords.len(),
            "advice synthesized"
        );

        Ok(Report {
            trait_profile: big_five,
            interest_profile: riasec,
            virtue_profile: strengths,
            attachment_profile: attachment,
            sensitivity_profile: sensitivity,
            ego_state_profile: egogram,
            career_advice,
            relationship_advice,
            stress_advice,
            summary,
        })
    }
}

fn keep<T>(result: Result<T, ScoringError>, errors: &mut Vec<ScoringError>) -> Option<T> {
    match result {
        Ok(profile) => Some(profile),
        Err(e) => {
            debug!(section = %e.section(), error = %e, "instrument failed");
            errors.push(e);
            None
        }
    }
}

/// Analyze with the standard career tables.
pub fn analyze(answers: &AnswerSet, bank: &QuestionBank) -> Result<Report, AnalysisError> {
    AnalysisEngine::default().analyze(answers, bank)
}
