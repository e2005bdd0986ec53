//! End-to-end pipeline tests against the standard question bank.
//!
//! These tests go through the same path as the CLI: parse the shipped bank,
//! parse answers, analyze, serialize.

use std::path::Path;

use persona_core::dimensions::{AttachmentStyle, BigFiveTrait, EgoState, Virtue};
use persona_core::model::Section;
use persona_core::parser::{parse_answers_str, standard_question_bank};
use persona_core::pattern::EgogramPattern;
use persona_core::{analyze, AnalysisEngine, AnswerSet, QuestionBank};

fn bank() -> QuestionBank {
    standard_question_bank().unwrap()
}

/// Answers where every item of `section`/`trait_key` counts as `value`,
/// everything else neutral.
fn with_trait(
    bank: &QuestionBank,
    mut answers: AnswerSet,
    section: Section,
    trait_key: &str,
    value: u8,
) -> AnswerSet {
    for q in bank.group(section, trait_key) {
        let raw = if q.reverse { 6 - value } else { value };
        answers.insert(q.id, raw).unwrap();
    }
    answers
}

#[test]
fn e2e_neutral_respondent() {
    let bank = bank();
    let report = analyze(&AnswerSet::uniform(&bank, 3).unwrap(), &bank).unwrap();

    assert_eq!(report.summary.type_name, "Pragmatic Reflective Individualist");
    assert_eq!(report.interest_profile.holland_code, "RIA");
    assert_eq!(report.attachment_profile.dominant, AttachmentStyle::Secure);
    assert_eq!(report.ego_state_profile.pattern.kind, EgogramPattern::Flat);
    assert_eq!(report.sensitivity_profile.level, "Moderate");
    assert_eq!(report.summary.keywords, vec!["Secure bonds"]);
}

#[test]
fn e2e_all_agree_keeps_canonical_tie_order() {
    let bank = bank();
    let report = analyze(&AnswerSet::uniform(&bank, 5).unwrap(), &bank).unwrap();

    // every interest is at 100, so the ranking falls back to R-I-A-S-E-C
    assert_eq!(report.interest_profile.holland_code, "RIA");
    assert_eq!(report.virtue_profile.top().dimension, Virtue::Wisdom);
    assert_eq!(report.virtue_profile.top().score, 100);
    // the reverse-coded item of each trait counts as 1
    assert_eq!(report.trait_profile.score(BigFiveTrait::Openness), 67);
}

#[test]
fn e2e_stability_mirrors_neuroticism() {
    let bank = bank();
    for value in 1..=5 {
        let answers = with_trait(
            &bank,
            AnswerSet::new(),
            Section::BigFive,
            "neuroticism",
            value,
        );
        let report = analyze(&answers, &bank).unwrap();
        let traits = &report.trait_profile;
        assert_eq!(
            traits.score(BigFiveTrait::Stability),
            100 - traits.score(BigFiveTrait::Neuroticism)
        );
    }
}

#[test]
fn e2e_expressive_profile() {
    let bank = bank();
    let mut answers = AnswerSet::uniform(&bank, 3).unwrap();
    for (section, key, value) in [
        (Section::BigFive, "openness", 5),
        (Section::BigFive, "extraversion", 5),
        (Section::BigFive, "agreeableness", 4),
        (Section::Riasec, "artistic", 5),
        (Section::Riasec, "social", 4),
        (Section::Strengths, "transcendence", 5),
        (Section::Sensitivity, "sensory", 5),
        (Section::Sensitivity, "emotional", 4),
        (Section::Egogram, "np", 5),
        (Section::Egogram, "fc", 5),
        (Section::Egogram, "cp", 1),
    ] {
        answers = with_trait(&bank, answers, section, key, value);
    }

    let report = analyze(&answers, &bank).unwrap();

    assert_eq!(report.summary.type_name, "Inquisitive Outgoing Harmonizer");
    assert_eq!(report.interest_profile.holland_code, "ASR");
    assert_eq!(report.ego_state_profile.pattern.kind, EgogramPattern::InverseN);
    assert_eq!(report.ego_state_profile.dominant, EgoState::Np);
    assert_eq!(report.sensitivity_profile.overall, 75);
    assert_eq!(report.sensitivity_profile.level, "High sensitivity");
    assert_eq!(
        report.summary.keywords,
        vec!["Curious", "Sociable", "Compassionate", "Highly sensitive", "Secure bonds"]
    );
    assert!(report
        .summary
        .summary
        .starts_with("You are highly open to new experiences and ideas. Artistic aptitude"));
    assert!(report
        .career_advice
        .advice
        .iter()
        .any(|a| a.contains("creativity")));
    assert_eq!(
        report.stress_advice.coping_strategies[0],
        "Talk things through with someone you trust"
    );
}

#[test]
fn e2e_json_answers_round_trip_is_deterministic() {
    let bank = bank();
    let answers = parse_answers_str(
        r#"{"1": 5, "4": 2, "13": 4, "22": 5, "40": 1, "52": 5, "61": 4}"#,
        Path::new("answers.json"),
    )
    .unwrap();

    let engine = AnalysisEngine::default();
    let first = engine.analyze(&answers, &bank).unwrap().to_json_pretty().unwrap();
    let second = engine.analyze(&answers, &bank).unwrap().to_json_pretty().unwrap();
    assert_eq!(first, second);
}
