use super::details::{present, QualificationDetails};

pub const PRIME_AGE_RANGE: &str = "40-49";
pub const ADJACENT_AGE_RANGES: &[&str] = &["30-39", "50-59"];

/// Lowercase substrings that mark a premium occupation.
pub const PREMIUM_PROFESSION_MARKERS: &[&str] = &[
    "medico",
    "médico",
    "advogado",
    "empresario",
    "empresário",
    "engenheiro",
    "dentista",
    "diretor",
    "gerente",
    "ceo",
    "executivo",
    "juiz",
    "promotor",
    "arquiteto",
    "socio",
    "sócio",
];

pub const HIGH_VALUE_OBJECTIVES: &[&str] =
    &["emagrecimento", "hipertrofia", "performance", "saude"];

/// Lowercase substrings that mark a priority neighbourhood.
pub const PRIORITY_LOCATION_MARKERS: &[&str] = &[
    "setor bueno",
    "setor marista",
    "setor oeste",
    "jardim goiás",
    "jardim goias",
    "alphaville",
    "aldeia do vale",
];

pub const HIGH_BUDGETS: &[&str] = &["premium", "alto"];
pub const MID_BUDGETS: &[&str] = &["medio", "médio"];
pub const URGENT_TIMINGS: &[&str] = &["imediata", "urgente"];
pub const SOON_TIMINGS: &[&str] = &["proximos_30_dias"];

/// How a branch decides whether a field value qualifies.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Case-sensitive equality with one of the literals
    OneOf(&'static [&'static str]),
    /// Lowercased value contains one of the (lowercase) markers
    ContainsAny(&'static [&'static str]),
    /// Any non-empty value
    AnyValue,
}

impl Matcher {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Matcher::OneOf(literals) => literals.contains(&value),
            Matcher::ContainsAny(markers) => {
                let lowered = value.to_lowercase();
                markers.iter().any(|m| lowered.contains(m))
            }
            Matcher::AnyValue => true,
        }
    }
}

/// One rung of a category's if/else-if chain.
#[derive(Debug, Clone, Copy)]
pub struct Branch {
    pub name: &'static str,
    pub matcher: Matcher,
    pub points: u32,
}

const AGE_RANGE_BRANCHES: &[Branch] = &[
    Branch { name: "prime", matcher: Matcher::OneOf(&[PRIME_AGE_RANGE]), points: 25 },
    Branch { name: "adjacent", matcher: Matcher::OneOf(ADJACENT_AGE_RANGES), points: 15 },
    Branch { name: "other", matcher: Matcher::AnyValue, points: 5 },
];

const PROFESSION_BRANCHES: &[Branch] = &[
    Branch {
        name: "premium",
        matcher: Matcher::ContainsAny(PREMIUM_PROFESSION_MARKERS),
        points: 25,
    },
    Branch { name: "other", matcher: Matcher::AnyValue, points: 10 },
];

const OBJECTIVE_BRANCHES: &[Branch] = &[
    Branch { name: "high-value", matcher: Matcher::OneOf(HIGH_VALUE_OBJECTIVES), points: 20 },
    Branch { name: "other", matcher: Matcher::AnyValue, points: 10 },
];

const LOCATION_BRANCHES: &[Branch] = &[
    Branch {
        name: "priority",
        matcher: Matcher::ContainsAny(PRIORITY_LOCATION_MARKERS),
        points: 15,
    },
    Branch { name: "other", matcher: Matcher::AnyValue, points: 5 },
];

// Budget and urgency have no fallback: unrecognised values earn nothing.
const BUDGET_BRANCHES: &[Branch] = &[
    Branch { name: "high", matcher: Matcher::OneOf(HIGH_BUDGETS), points: 10 },
    Branch { name: "mid", matcher: Matcher::OneOf(MID_BUDGETS), points: 5 },
];

const URGENCY_BRANCHES: &[Branch] = &[
    Branch { name: "urgent", matcher: Matcher::OneOf(URGENT_TIMINGS), points: 5 },
    Branch { name: "soon", matcher: Matcher::OneOf(SOON_TIMINGS), points: 3 },
];

/// The six scored qualification categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AgeRange,
    Profession,
    Objective,
    Location,
    Budget,
    Urgency,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::AgeRange,
        Category::Profession,
        Category::Objective,
        Category::Location,
        Category::Budget,
        Category::Urgency,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::AgeRange => "Age range",
            Category::Profession => "Profession",
            Category::Objective => "Objective",
            Category::Location => "Location",
            Category::Budget => "Budget",
            Category::Urgency => "Urgency",
        }
    }

    /// Field name as it appears in serialized qualification details.
    pub fn field_name(self) -> &'static str {
        match self {
            Category::AgeRange => "age_range",
            Category::Profession => "profession",
            Category::Objective => "objective",
            Category::Location => "location",
            Category::Budget => "budget",
            Category::Urgency => "urgency",
        }
    }

    /// Branches ordered from highest value to generic fallback.
    pub fn branches(self) -> &'static [Branch] {
        match self {
            Category::AgeRange => AGE_RANGE_BRANCHES,
            Category::Profession => PROFESSION_BRANCHES,
            Category::Objective => OBJECTIVE_BRANCHES,
            Category::Location => LOCATION_BRANCHES,
            Category::Budget => BUDGET_BRANCHES,
            Category::Urgency => URGENCY_BRANCHES,
        }
    }

    pub fn value(self, details: &QualificationDetails) -> Option<&str> {
        let field = match self {
            Category::AgeRange => &details.age_range,
            Category::Profession => &details.profession,
            Category::Objective => &details.objective,
            Category::Location => &details.location,
            Category::Budget => &details.budget,
            Category::Urgency => &details.urgency,
        };
        present(field)
    }

    /// First matching branch wins; `None` when the value matches nothing.
    pub fn evaluate(self, value: &str) -> Option<&'static Branch> {
        self.branches().iter().find(|b| b.matcher.matches(value))
    }

    pub fn max_points(self) -> u32 {
        self.branches().iter().map(|b| b.points).max().unwrap_or(0)
    }
}
