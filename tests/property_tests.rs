/// Property-based tests for the lead scorer
/// Invariants that should hold for every combination of answers
use lead_grade::scoring::{calculate_lead_score, Grade, QualificationDetails};
use proptest::prelude::*;

fn age_range() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some("40-49".to_string())),
        Just(Some("30-39".to_string())),
        Just(Some("50-59".to_string())),
        "\\PC{0,12}".prop_map(Some),
    ]
}

fn profession() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some("CEO".to_string())),
        Just(Some("Diretor Regional".to_string())),
        Just(Some("vendedor".to_string())),
        "\\PC{0,20}".prop_map(Some),
    ]
}

fn objective() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some("emagrecimento".to_string())),
        Just(Some("estetica".to_string())),
        "\\PC{0,12}".prop_map(Some),
    ]
}

fn location() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some("Setor Marista".to_string())),
        Just(Some("goiania".to_string())),
        "\\PC{0,20}".prop_map(Some),
    ]
}

fn budget() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some("premium".to_string())),
        Just(Some("alto".to_string())),
        Just(Some("medio".to_string())),
        Just(Some("médio".to_string())),
        "\\PC{0,8}".prop_map(Some),
    ]
}

fn urgency() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None::<String>),
        Just(Some("imediata".to_string())),
        Just(Some("urgente".to_string())),
        Just(Some("proximos_30_dias".to_string())),
        "\\PC{0,8}".prop_map(Some),
    ]
}

fn details() -> impl Strategy<Value = QualificationDetails> {
    (
        age_range(),
        profession(),
        objective(),
        location(),
        budget(),
        urgency(),
        proptest::option::of(proptest::bool::ANY),
        proptest::option::of("\\PC{0,8}"),
    )
        .prop_map(|(age_range, profession, objective, location, budget, urgency, trained, time)| {
            QualificationDetails {
                age_range,
                profession,
                objective,
                location,
                budget,
                urgency,
                has_trained_before: trained,
                preferred_time: time,
            }
        })
}

proptest! {
    #[test]
    fn score_stays_in_range(d in details()) {
        let result = calculate_lead_score(&d);
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn grade_matches_ladder(d in details()) {
        let result = calculate_lead_score(&d);
        prop_assert_eq!(result.grade, Grade::from_score(result.score));
    }

    #[test]
    fn score_is_capped_breakdown_total(d in details()) {
        let result = calculate_lead_score(&d);
        prop_assert_eq!(result.score, result.raw_total().min(100));
    }

    #[test]
    fn unscored_fields_never_matter(d in details(), trained in proptest::bool::ANY) {
        let mut other = d.clone();
        other.has_trained_before = Some(trained);
        other.preferred_time = None;
        prop_assert_eq!(calculate_lead_score(&d), calculate_lead_score(&other));
    }

    #[test]
    fn upgrading_budget_never_lowers_score(d in details()) {
        let base = calculate_lead_score(&d).score;
        let mut upgraded = d.clone();
        upgraded.budget = Some("premium".to_string());
        prop_assert!(calculate_lead_score(&upgraded).score >= base);
    }

    #[test]
    fn upgrading_urgency_never_lowers_score(d in details()) {
        let base = calculate_lead_score(&d).score;
        let mut upgraded = d.clone();
        upgraded.urgency = Some("imediata".to_string());
        prop_assert!(calculate_lead_score(&upgraded).score >= base);
    }

    #[test]
    fn upgrading_age_range_never_lowers_score(d in details()) {
        let base = calculate_lead_score(&d).score;
        let mut upgraded = d.clone();
        upgraded.age_range = Some("40-49".to_string());
        prop_assert!(calculate_lead_score(&upgraded).score >= base);
    }

    #[test]
    fn upgrading_profession_never_lowers_score(d in details()) {
        let base = calculate_lead_score(&d).score;
        let mut upgraded = d.clone();
        upgraded.profession = Some("Médico".to_string());
        prop_assert!(calculate_lead_score(&upgraded).score >= base);
    }

    #[test]
    fn upgrading_objective_never_lowers_score(d in details()) {
        let base = calculate_lead_score(&d).score;
        let mut upgraded = d.clone();
        upgraded.objective = Some("hipertrofia".to_string());
        prop_assert!(calculate_lead_score(&upgraded).score >= base);
    }

    #[test]
    fn upgrading_location_never_lowers_score(d in details()) {
        let base = calculate_lead_score(&d).score;
        let mut upgraded = d.clone();
        upgraded.location = Some("Aldeia do Vale".to_string());
        prop_assert!(calculate_lead_score(&upgraded).score >= base);
    }

    #[test]
    fn filling_an_absent_field_never_lowers_score(d in details(), value in "\\PC{1,12}") {
        let base = calculate_lead_score(&d).score;
        let mut filled = d.clone();
        if filled.location.is_none() {
            filled.location = Some(value);
        }
        prop_assert!(calculate_lead_score(&filled).score >= base);
    }
}
