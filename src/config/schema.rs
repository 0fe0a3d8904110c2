use serde::{Deserialize, Serialize};

use crate::output::{OutputFormat, ThemeMode};
use crate::scoring::Grade;

/// User configuration. Every key is optional; command-line flags win.
///
/// Example YAML:
/// ```yaml
/// theme: dark
/// format: table
/// min_grade: C
/// limit: 20
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// auto (probe terminal background), light or dark
    #[serde(default)]
    pub theme: Option<ThemeMode>,

    /// Default output format for `batch`
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Hide leads graded below this letter
    #[serde(default)]
    pub min_grade: Option<Grade>,

    /// Show at most this many leads
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Config {
    /// Returns all validation errors at once (not just the first).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(limit) = self.limit {
            if let Err(e) = check_limit(limit) {
                errors.push(format!("limit: {}", e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_limit(limit: usize) -> Result<usize, String> {
    if limit == 0 {
        Err("must be at least 1".to_string())
    } else {
        Ok(limit)
    }
}

/// Parse a `--limit` value with the same rule the config file follows.
pub fn parse_limit(s: &str) -> Result<usize, String> {
    let limit: usize = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid limit '{}': {}", s, e))?;
    check_limit(limit)
}
