pub mod details;
pub mod engine;
pub mod grade;
pub mod rules;
pub mod validation;

pub use details::{LeadRecord, QualificationDetails};
pub use engine::{calculate_lead_score, CategoryContribution, LeadScoreResult, MAX_SCORE};
pub use grade::Grade;
pub use rules::{Category, Matcher};
pub use validation::lint_details;
