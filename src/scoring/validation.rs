use super::details::QualificationDetails;
use super::rules::{Category, Matcher};

/// Lint qualification answers for values the scorer will not fully credit.
/// Returns all findings at once (not just the first).
///
/// This is advisory: scoring never consults it. It exists so intake data
/// with typos ("Alto", "medio ") can be spotted before leads are ranked.
pub fn lint_details(details: &QualificationDetails) -> Result<(), Vec<String>> {
    let mut findings = Vec::new();

    for category in Category::ALL {
        let Some(value) = category.value(details) else {
            continue;
        };
        let field = category.field_name();

        match category.evaluate(value) {
            None => {
                let mut message =
                    format!("{}: '{}' is not a recognised value and earns 0 points", field, value);
                if let Some(hint) = near_literal(category, value) {
                    message.push_str(&format!(" (did you mean '{}'?)", hint));
                }
                findings.push(message);
            }
            Some(branch)
                if is_exact_category(category) && matches!(branch.matcher, Matcher::AnyValue) =>
            {
                let mut message = format!(
                    "{}: '{}' earns only fallback credit ({} points)",
                    field, value, branch.points
                );
                if let Some(hint) = near_literal(category, value) {
                    message.push_str(&format!(" (did you mean '{}'?)", hint));
                }
                findings.push(message);
            }
            Some(_) => {}
        }
    }

    if findings.is_empty() {
        Ok(())
    } else {
        Err(findings)
    }
}

// Free-text categories are expected to fall through to the fallback often,
// so only the literal-matched categories are flagged for it.
fn is_exact_category(category: Category) -> bool {
    matches!(category, Category::AgeRange | Category::Objective)
}

/// A known literal equal to `value` up to case and surrounding whitespace.
fn near_literal(category: Category, value: &str) -> Option<&'static str> {
    let folded = value.trim().to_lowercase();
    category
        .branches()
        .iter()
        .filter_map(|b| match b.matcher {
            Matcher::OneOf(literals) => Some(literals),
            _ => None,
        })
        .flat_map(|literals| literals.iter().copied())
        .find(|literal| *literal != value && literal.to_lowercase() == folded)
}
