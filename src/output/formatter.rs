use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use terminal_size::{terminal_size, Width};

use super::theme::{grade_badge, grade_style, Theme};
use crate::batch::ScoredLead;
use crate::scoring::{Grade, LeadScoreResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Short "profession, location" summary shown after the lead name
fn lead_summary(lead: &ScoredLead) -> String {
    let details = &lead.record.qualification_details;
    [details.profession.as_deref(), details.location.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format leads as a ranked table: Index, Grade, Score, Name, Summary
/// Index column: 3 chars (fits "99."), score column: 3 chars, right-aligned
pub fn format_scored_table(leads: &[ScoredLead], theme: Theme, use_colors: bool) -> String {
    if leads.is_empty() {
        return "No leads found.".to_string();
    }

    let term_width = get_terminal_width();
    // index + space + badge + space + score + two separators
    let fixed_width = 3 + 1 + 3 + 1 + 3 + 4;

    leads
        .iter()
        .enumerate()
        .map(|(idx, lead)| {
            let index_str = format!("{:>2}.", idx + 1);
            let badge = grade_badge(lead.result.grade, theme, use_colors);
            let score_str = format!("{:>3}", lead.result.score);

            let summary = lead_summary(lead);
            let text = if summary.is_empty() {
                lead.label.clone()
            } else {
                format!("{}  ({})", lead.label, summary)
            };
            let text = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&text, width - fixed_width),
                Some(_) => truncate(&text, 20),
                None => text,
            };

            if use_colors {
                format!("{} {} {}  {}", index_str.dimmed(), badge, score_str.bold(), text)
            } else {
                format!("{} {} {}  {}", index_str, badge, score_str, text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one lead with the per-category breakdown (for `score` and verbose mode)
pub fn format_lead_detail(
    label: &str,
    result: &LeadScoreResult,
    theme: Theme,
    use_colors: bool,
) -> String {
    let badge = grade_badge(result.grade, theme, use_colors);
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!("{} {} {}/100", label.bold(), badge, result.score));
    } else {
        lines.push(format!("{} {} {}/100", label, badge, result.score));
    }

    if result.breakdown.is_empty() {
        lines.push("  (no qualifying answers)".to_string());
    }
    for entry in &result.breakdown {
        let points = format!("{:+3}", entry.points);
        let line = format!("  {:<11}{}  {} [{}]", entry.label, points, entry.value, entry.branch);
        if use_colors {
            lines.push(line.replacen(&points, &points.green().to_string(), 1));
        } else {
            lines.push(line);
        }
    }

    let raw = result.raw_total();
    if raw != result.score {
        lines.push(format!("  capped from {} to {}", raw, result.score));
    }

    lines.join("\n")
}

/// Format leads as tab-separated values for scripting
/// Columns: score, grade, label, id (no headers, no colors)
pub fn format_tsv(leads: &[ScoredLead]) -> String {
    leads
        .iter()
        .map(|lead| {
            format!(
                "{}\t{}\t{}\t{}",
                lead.result.score,
                lead.result.grade,
                lead.label,
                lead.record.id.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format leads as a pretty-printed JSON array
pub fn format_json(leads: &[ScoredLead]) -> Result<String> {
    serde_json::to_string_pretty(leads).context("Failed to serialize scored leads")
}

/// One line per grade with its score range and colour token
pub fn format_grade_legend(theme: Theme, use_colors: bool) -> String {
    Grade::ALL
        .iter()
        .map(|grade| {
            let (low, high) = grade.score_range();
            format!(
                "{} {:>3}-{:<3} {}",
                grade_badge(*grade, theme, use_colors),
                low,
                high,
                grade_style(*grade).token
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
