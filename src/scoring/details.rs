use serde::{Deserialize, Serialize};

/// Qualification answers collected about a lead during intake.
///
/// Every field is optional. A missing field means "unknown" and earns no
/// points; it is never treated as the lowest tier.
///
/// Example JSON:
/// ```json
/// {
///   "age_range": "40-49",
///   "profession": "Diretor Comercial",
///   "objective": "emagrecimento",
///   "location": "Setor Bueno, Goiânia",
///   "budget": "premium",
///   "urgency": "imediata"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct QualificationDetails {
    /// Age bucket such as "30-39"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,

    /// Free-text occupation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,

    /// Goal tag such as "hipertrofia"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,

    /// Free-text neighbourhood / city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Budget tier: "premium", "alto", "medio", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,

    /// Timing tag: "imediata", "urgente", "proximos_30_dias", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,

    /// Collected but not scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_trained_before: Option<bool>,

    /// Collected but not scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
}

impl QualificationDetails {
    /// True when none of the scored fields carry a value.
    pub fn is_blank(&self) -> bool {
        [
            &self.age_range,
            &self.profession,
            &self.objective,
            &self.location,
            &self.budget,
            &self.urgency,
        ]
        .iter()
        .all(|field| present(field).is_none())
    }
}

/// A lead as it appears in an exported batch file.
///
/// Only the qualification answers are scored; `id` and `name` are carried
/// through for display. Any other columns in the export are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct LeadRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, alias = "qualification")]
    pub qualification_details: QualificationDetails,
}

impl LeadRecord {
    /// Human label for the lead: name, then id, then a positional fallback.
    pub fn label(&self, position: usize) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.id.as_deref().filter(|i| !i.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("lead #{}", position + 1))
    }
}

/// Returns the value when it is present and non-empty.
/// An empty string carries no information and scores like a missing field.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}
