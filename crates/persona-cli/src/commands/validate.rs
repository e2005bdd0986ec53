//! The `persona validate` command.

use std::path::PathBuf;

use anyhow::Result;

use persona_core::model::Section;
use persona_core::parser;

use super::analyze::load_bank;

pub fn execute(bank_path: Option<PathBuf>) -> Result<()> {
    let source = bank_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "standard bank".to_string());
    let bank = load_bank(bank_path)?;

    println!("Question bank: {source} ({} questions)", bank.len());
    for section in Section::ALL {
        println!("  {:<20} {}", section.title(), bank.section(section).count());
    }

    let warnings = parser::validate_question_bank(&bank);
    for w in &warnings {
        let prefix = w
            .question_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
