use serde::Serialize;

use super::details::QualificationDetails;
use super::grade::Grade;
use super::rules::Category;

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryContribution {
    pub label: &'static str, // e.g. "Age range", "Budget"
    pub value: String,       // the answer that was scored
    pub branch: &'static str, // e.g. "prime", "other"
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadScoreResult {
    pub score: u32,
    pub grade: Grade,
    /// Only categories that awarded points, in evaluation order
    pub breakdown: Vec<CategoryContribution>,
}

impl LeadScoreResult {
    /// Sum of the contributions before the cap is applied.
    pub fn raw_total(&self) -> u32 {
        self.breakdown.iter().map(|c| c.points).sum()
    }
}

pub fn calculate_lead_score(details: &QualificationDetails) -> LeadScoreResult {
    let mut total = 0;
    let mut breakdown = Vec::new();

    for category in Category::ALL {
        let Some(value) = category.value(details) else {
            continue;
        };
        // Present but unrecognised budget/urgency values earn nothing
        let Some(branch) = category.evaluate(value) else {
            continue;
        };

        total += branch.points;
        breakdown.push(CategoryContribution {
            label: category.label(),
            value: value.to_string(),
            branch: branch.name,
            points: branch.points,
        });
    }

    let score = total.min(MAX_SCORE);
    LeadScoreResult {
        score,
        grade: Grade::from_score(score),
        breakdown,
    }
}
