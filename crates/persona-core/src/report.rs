//! The analysis report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::advice::{CareerAdvice, RelationshipAdvice, StressAdvice, Summary};
use crate::profiles::{
    AttachmentProfile, BigFiveProfile, EgogramProfile, RiasecProfile, SensitivityProfile,
    StrengthsProfile,
};

/// Everything one analysis produces: six instrument profiles plus four
/// synthesized sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Big Five traits.
    pub trait_profile: BigFiveProfile,
    /// RIASEC interests.
    pub interest_profile: RiasecProfile,
    /// Character strengths.
    pub virtue_profile: StrengthsProfile,
    pub attachment_profile: AttachmentProfile,
    pub sensitivity_profile: SensitivityProfile,
    /// Egogram ego states.
    pub ego_state_profile: EgogramProfile,
    pub career_advice: CareerAdvice,
    pub relationship_advice: RelationshipAdvice,
    pub stress_advice: StressAdvice,
    pub summary: Summary,
}

impl Report {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    /// Save the report as JSON to a file, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}
