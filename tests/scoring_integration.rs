use lead_grade::batch::{parse_json_leads, score_and_rank};
use lead_grade::output::{format_tsv, grade_style};
use lead_grade::scoring::{calculate_lead_score, lint_details, Grade, QualificationDetails};

const EXPORT: &str = r#"[
    {
        "id": "a1",
        "name": "Marina",
        "qualification_details": {
            "age_range": "40-49",
            "profession": "Empresária e sócia-diretora",
            "objective": "emagrecimento",
            "location": "Setor Bueno",
            "budget": "premium",
            "urgency": "imediata",
            "has_trained_before": true,
            "preferred_time": "manha"
        }
    },
    {
        "id": "b2",
        "name": "Paulo",
        "qualification_details": {
            "age_range": "30-39",
            "profession": "vendedor",
            "objective": "estetica",
            "location": "goiania"
        }
    },
    {
        "id": "c3",
        "name": "Sem respostas"
    }
]"#;

#[test]
fn export_is_ranked_and_graded() {
    let leads = parse_json_leads(EXPORT).unwrap();
    let ranked = score_and_rank(leads, None);

    let summary: Vec<(&str, u32, Grade)> = ranked
        .iter()
        .map(|l| (l.label.as_str(), l.result.score, l.result.grade))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Marina", 100, Grade::A),
            ("Paulo", 40, Grade::C),
            ("Sem respostas", 0, Grade::D),
        ]
    );

    assert_eq!(format_tsv(&ranked).lines().next(), Some("100\tA\tMarina\ta1"));
}

#[test]
fn min_grade_c_drops_unqualified() {
    let leads = parse_json_leads(EXPORT).unwrap();
    let ranked = score_and_rank(leads, Some(Grade::C));
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|l| l.result.grade.meets(Grade::C)));
}

#[test]
fn maximal_profile_lints_clean() {
    let details = QualificationDetails {
        age_range: Some("40-49".to_string()),
        profession: Some("CEO".to_string()),
        objective: Some("saude".to_string()),
        location: Some("Jardim Goiás".to_string()),
        budget: Some("alto".to_string()),
        urgency: Some("urgente".to_string()),
        ..Default::default()
    };
    assert!(lint_details(&details).is_ok());
    assert_eq!(calculate_lead_score(&details).score, 100);
}

#[test]
fn every_grade_has_a_style() {
    for grade in Grade::ALL {
        let style = grade_style(grade);
        assert!(!style.token.is_empty());
    }
}
