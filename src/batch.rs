use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::scoring::{calculate_lead_score, Grade, LeadRecord, LeadScoreResult};

/// A lead paired with its score, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredLead {
    pub label: String,
    #[serde(flatten)]
    pub record: LeadRecord,
    #[serde(flatten)]
    pub result: LeadScoreResult,
}

/// Exports contain either a list of leads or a single lead object.
#[derive(Deserialize)]
#[serde(untagged)]
enum LeadFile {
    Many(Vec<LeadRecord>),
    One(LeadRecord),
}

impl LeadFile {
    /// Unwrap into records. A lone object with no lead fields at all is most
    /// likely a wrapper (`{"leads": [...]}`) and is rejected; blank records
    /// inside a list are kept but reported.
    fn into_leads(self) -> Result<Vec<LeadRecord>> {
        match self {
            LeadFile::One(lead) if is_blank_record(&lead) => bail!(
                "Lead object has no id, name or qualification_details; \
                 expected a lead or a list of leads"
            ),
            LeadFile::One(lead) => Ok(vec![lead]),
            LeadFile::Many(leads) => {
                for (position, lead) in leads.iter().enumerate() {
                    if is_blank_record(lead) {
                        tracing::warn!(
                            "record {} has no id, name or qualification answers; it will score 0",
                            position + 1
                        );
                    }
                }
                Ok(leads)
            }
        }
    }
}

fn is_blank_record(lead: &LeadRecord) -> bool {
    lead.id.is_none() && lead.name.is_none() && lead.qualification_details.is_blank()
}

/// Parse lead records from JSON text.
pub fn parse_json_leads(content: &str) -> Result<Vec<LeadRecord>> {
    let file: LeadFile =
        serde_json::from_str(content).context("Failed to parse leads: invalid JSON")?;
    file.into_leads()
}

/// Parse lead records from YAML text.
pub fn parse_yaml_leads(content: &str) -> Result<Vec<LeadRecord>> {
    let file: LeadFile =
        serde_saphyr::from_str(content).context("Failed to parse leads: invalid YAML")?;
    file.into_leads()
}

/// Load lead records from a `.json`, `.yaml` or `.yml` file, or JSON on stdin when `path` is `-`.
pub fn load_leads(path: &Path) -> Result<Vec<LeadRecord>> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read leads from stdin")?;
        return parse_json_leads(&content);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read lead file at {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let leads = match extension.as_deref() {
        Some("json") => parse_json_leads(&content),
        Some("yaml") | Some("yml") => parse_yaml_leads(&content),
        _ => bail!(
            "Unsupported lead file {}: expected .json, .yaml or .yml",
            path.display()
        ),
    }
    .with_context(|| format!("in {}", path.display()))?;

    tracing::debug!("loaded {} leads from {}", leads.len(), path.display());
    Ok(leads)
}

/// Score every lead, drop those below `min_grade`, and rank by score descending.
/// Ties keep their input order.
pub fn score_and_rank(leads: Vec<LeadRecord>, min_grade: Option<Grade>) -> Vec<ScoredLead> {
    let total = leads.len();

    let mut scored: Vec<ScoredLead> = leads
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            let result = calculate_lead_score(&record.qualification_details);
            let label = record.label(position);
            tracing::debug!(
                lead = %label,
                score = result.score,
                grade = %result.grade,
                "scored lead"
            );
            ScoredLead { label, record, result }
        })
        .filter(|lead| min_grade.map_or(true, |min| lead.result.grade.meets(min)))
        .collect();

    // sort_by is stable, so equal scores stay in input order
    scored.sort_by(|a, b| b.result.score.cmp(&a.result.score));

    tracing::info!("{} of {} leads kept after grade filter", scored.len(), total);
    scored
}
