//! The `persona init` command.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use persona_core::model::NEUTRAL_ANSWER;
use persona_core::parser::{self, STANDARD_BANK_TOML};

const BANK_FILE: &str = "question-bank.toml";
const ANSWERS_FILE: &str = "answers.json";

pub fn execute() -> Result<()> {
    // Copy of the built-in bank for editing
    if Path::new(BANK_FILE).exists() {
        println!("{BANK_FILE} already exists, skipping.");
    } else {
        std::fs::write(BANK_FILE, STANDARD_BANK_TOML)
            .with_context(|| format!("failed to write {BANK_FILE}"))?;
        println!("Created {BANK_FILE}");
    }

    // Neutral answer sheet for every standard question
    if Path::new(ANSWERS_FILE).exists() {
        println!("{ANSWERS_FILE} already exists, skipping.");
    } else {
        let bank = parser::standard_question_bank()?;
        let answers: BTreeMap<u32, u8> = bank
            .questions()
            .iter()
            .map(|q| (q.id, NEUTRAL_ANSWER))
            .collect();
        let json = serde_json::to_string_pretty(&answers)?;
        std::fs::write(ANSWERS_FILE, json)
            .with_context(|| format!("failed to write {ANSWERS_FILE}"))?;
        println!("Created {ANSWERS_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Fill in {ANSWERS_FILE} with your answers (1 = disagree, 5 = agree)");
    println!("  2. Run: persona validate --bank {BANK_FILE}");
    println!("  3. Run: persona analyze --answers {ANSWERS_FILE} --bank {BANK_FILE}");

    Ok(())
}
