//! The `persona analyze` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use persona_core::parser;
use persona_core::{AnalysisEngine, QuestionBank, Report};

/// Unanswered ids listed in the strict-mode error before truncating.
const MAX_LISTED_MISSING: usize = 10;

pub fn execute(
    answers_path: PathBuf,
    bank_path: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format '{format}' (expected text or json)"
    );

    let bank = load_bank(bank_path)?;
    let answers = parser::parse_answers(&answers_path)?;

    let missing = answers.missing(&bank);
    if !missing.is_empty() {
        if strict {
            let listed: Vec<String> = missing
                .iter()
                .take(MAX_LISTED_MISSING)
                .map(ToString::to_string)
                .collect();
            let more = if missing.len() > MAX_LISTED_MISSING {
                ", ..."
            } else {
                ""
            };
            anyhow::bail!(
                "{} question(s) unanswered: {}{more}",
                missing.len(),
                listed.join(", ")
            );
        }
        tracing::warn!(
            missing = missing.len(),
            "unanswered questions are scored as neutral (3)"
        );
    }

    let report = AnalysisEngine::default().analyze(&answers, &bank)?;

    match format.as_str() {
        "json" => println!("{}", report.to_json_pretty()?),
        _ => print_text(&report),
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

/// The bank at `path`, or the built-in standard bank.
pub fn load_bank(path: Option<PathBuf>) -> Result<QuestionBank> {
    match path {
        Some(path) => parser::parse_question_bank(&path),
        None => parser::standard_question_bank(),
    }
}

fn score_table<K: Ord>(scores: &BTreeMap<K, u8>, labels: &BTreeMap<K, &'static str>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Trait", "Score"]);
    for (key, score) in scores {
        let label = labels.get(key).copied().unwrap_or("?");
        table.add_row(vec![Cell::new(label), Cell::new(score)]);
    }
    table
}

fn print_list(title: &str, items: &[&str]) {
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

fn print_text(report: &Report) {
    let summary = &report.summary;
    println!("Personality type: {}", summary.type_name);
    println!("{}", summary.summary);
    println!("Keywords: {}", summary.keywords.join(", "));

    let traits = &report.trait_profile;
    println!("\nBig Five");
    println!("{}", score_table(&traits.scores, &traits.labels));

    let interests = &report.interest_profile;
    println!("\nRIASEC interests (Holland code {})", interests.holland_code);
    println!("{}", score_table(&interests.scores, &interests.labels));

    let strengths = &report.virtue_profile;
    println!("\nCharacter strengths");
    println!("{}", score_table(&strengths.scores, &strengths.labels));

    let attachment = &report.attachment_profile;
    println!("\nAttachment style");
    println!("{}", score_table(&attachment.scores, &attachment.labels));

    let sensitivity = &report.sensitivity_profile;
    println!(
        "\nSensitivity: {} ({})",
        sensitivity.overall, sensitivity.level
    );
    println!("{}", score_table(&sensitivity.scores, &sensitivity.labels));
    print_list("Tips", &sensitivity.tips);

    let egogram = &report.ego_state_profile;
    println!("\nEgogram: {} pattern", egogram.pattern.name);
    println!("{}", score_table(&egogram.scores, &egogram.short_labels));
    println!("{}", egogram.pattern.description);

    let career = &report.career_advice;
    println!();
    print_list("Suggested careers", career.careers);
    print_list("Career advice", &career.advice);
    print_list("Work style", &career.work_style);

    let relationship = &report.relationship_advice;
    println!();
    print_list(
        &format!("Relationships ({})", relationship.style),
        &relationship.advice,
    );

    let stress = &report.stress_advice;
    println!();
    print_list("Stress factors", &stress.stress_factors);
    print_list("Coping strategies", &stress.coping_strategies);
    println!(
        "Resilience: {} ({}). {}",
        stress.resilience.level, stress.resilience.score, stress.resilience.description
    );
}
