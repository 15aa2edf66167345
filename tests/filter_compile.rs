use transferq::document::Payload;
use transferq::filter::{ColumnFilter, FilterOp, compile_disjunction, placeholders};
use transferq::plan::OperationPlan;
use transferq::types::Scalar;

fn plan_from(json: &str) -> OperationPlan {
    let payload: Payload = serde_json::from_str(json).expect("payload");
    OperationPlan::from_payload(&payload)
}

#[test]
fn placeholders_render_comma_separated() {
    assert_eq!(placeholders(0), "");
    assert_eq!(placeholders(1), "?");
    assert_eq!(placeholders(3), "?, ?, ?");
}

#[test]
fn scalar_old_compiles_to_equality() {
    let filters = vec![ColumnFilter {
        column: "owner".to_string(),
        op: FilterOp::Eq(Scalar::from("owner_3")),
    }];

    let fragment = compile_disjunction(&filters);
    assert_eq!(fragment.sql, "owner = ?");
    assert_eq!(fragment.params, vec![Scalar::from("owner_3")]);
}

#[test]
fn set_old_compiles_to_membership() {
    let filters = vec![ColumnFilter {
        column: "status".to_string(),
        op: FilterOp::In(vec![Scalar::Int(1), Scalar::Int(2)]),
    }];

    let fragment = compile_disjunction(&filters);
    assert_eq!(fragment.sql, "status IN (?, ?)");
    assert_eq!(fragment.params, vec![Scalar::Int(1), Scalar::Int(2)]);
}

#[test]
fn disjunction_joins_columns_with_or_in_plan_order() {
    let plan = plan_from(
        r#"{
            "operation_details": {
                "status": { "old": [1, 2],    "new": 3 },
                "owner":  { "old": "owner_3", "new": "owner_4" }
            }
        }"#,
    );

    let fragment = compile_disjunction(&ColumnFilter::from_plan(&plan));
    assert_eq!(fragment.sql, "owner = ? OR status IN (?, ?)");
    assert_eq!(
        fragment.params,
        vec![Scalar::from("owner_3"), Scalar::Int(1), Scalar::Int(2)]
    );
}

#[test]
fn values_never_appear_in_the_fragment_text() {
    let plan = plan_from(
        r#"{
            "operation_details": {
                "owner": { "old": "x' OR '1'='1", "new": "owner_4" }
            }
        }"#,
    );

    let fragment = compile_disjunction(&ColumnFilter::from_plan(&plan));
    assert_eq!(fragment.sql, "owner = ?");
    assert!(!fragment.sql.contains('\''));
    assert_eq!(fragment.params, vec![Scalar::from("x' OR '1'='1")]);
}
