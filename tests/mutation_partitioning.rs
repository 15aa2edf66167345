use transferq::core::mutation::{CandidateRow, compute_updates};
use transferq::document::Payload;
use transferq::plan::OperationPlan;
use transferq::types::Scalar;

fn plan_from(json: &str) -> OperationPlan {
    let payload: Payload = serde_json::from_str(json).expect("payload");
    OperationPlan::from_payload(&payload)
}

fn row(object: &str, values: &[(&str, Option<Scalar>)]) -> CandidateRow {
    CandidateRow {
        object: object.to_string(),
        values: values
            .iter()
            .map(|(column, value)| (column.to_string(), value.clone()))
            .collect(),
    }
}

fn two_column_plan() -> OperationPlan {
    plan_from(
        r#"{
            "operation_details": {
                "owner":  { "old": "owner_3", "new": "owner_4" },
                "status": { "old": 3,         "new": 4 }
            }
        }"#,
    )
}

#[test]
fn object_matching_two_columns_joins_both_sets() {
    let plan = two_column_plan();
    let candidates = vec![row(
        "p_1",
        &[
            ("owner", Some(Scalar::from("owner_3"))),
            ("status", Some(Scalar::Int(3))),
        ],
    )];

    let updates = compute_updates(&candidates, &plan);
    assert_eq!(updates.objects_for("owner"), ["p_1".to_string()]);
    assert_eq!(updates.objects_for("status"), ["p_1".to_string()]);
}

#[test]
fn over_selected_row_is_gated_per_column() {
    // Passed the SQL OR through its status alone; owner must stay untouched.
    let plan = two_column_plan();
    let candidates = vec![row(
        "ch_1",
        &[
            ("owner", Some(Scalar::from("owner_1"))),
            ("status", Some(Scalar::Int(3))),
        ],
    )];

    let updates = compute_updates(&candidates, &plan);
    assert!(updates.objects_for("owner").is_empty());
    assert_eq!(updates.objects_for("status"), ["ch_1".to_string()]);
}

#[test]
fn mismatched_values_leave_object_out_entirely() {
    let plan = two_column_plan();
    let candidates = vec![row(
        "ch_2",
        &[
            ("owner", Some(Scalar::from("owner_1"))),
            ("status", Some(Scalar::Int(10))),
        ],
    )];

    let updates = compute_updates(&candidates, &plan);
    assert!(updates.is_empty());
}

#[test]
fn set_old_matches_any_member() {
    let plan = plan_from(
        r#"{ "operation_details": { "status": { "old": [1, 2, 10], "new": 4 } } }"#,
    );
    let candidates = vec![
        row("a", &[("status", Some(Scalar::Int(2)))]),
        row("b", &[("status", Some(Scalar::Int(10)))]),
        row("c", &[("status", Some(Scalar::Int(4)))]),
    ];

    let updates = compute_updates(&candidates, &plan);
    assert_eq!(
        updates.objects_for("status"),
        ["a".to_string(), "b".to_string()]
    );
}

#[test]
fn null_current_value_never_matches() {
    let plan = two_column_plan();
    let candidates = vec![row("a", &[("owner", None), ("status", Some(Scalar::Int(3)))])];

    let updates = compute_updates(&candidates, &plan);
    assert!(updates.objects_for("owner").is_empty());
    assert_eq!(updates.objects_for("status"), ["a".to_string()]);
}

#[test]
fn empty_candidates_yield_empty_set() {
    let updates = compute_updates(&[], &two_column_plan());
    assert!(updates.is_empty());
    assert_eq!(updates.iter().count(), 0);
}

#[test]
fn text_and_integer_values_do_not_cross_match() {
    let plan = plan_from(r#"{ "operation_details": { "status": { "old": 3, "new": 4 } } }"#);
    let candidates = vec![row("a", &[("status", Some(Scalar::from("3")))])];

    let updates = compute_updates(&candidates, &plan);
    assert!(updates.is_empty());
}
