use transferq::document::Payload;
use transferq::plan::{OperationPlan, is_plain_identifier};
use transferq::types::{OldValue, Scalar};

fn plan_from(json: &str) -> OperationPlan {
    let payload: Payload = serde_json::from_str(json).expect("payload");
    OperationPlan::from_payload(&payload)
}

#[test]
fn wellformed_entries_are_kept() {
    let plan = plan_from(
        r#"{
            "objects": ["p_1"],
            "operation_details": {
                "owner":  { "old": "owner_3", "new": "owner_4" },
                "status": { "old": [1, 2],    "new": 3 }
            }
        }"#,
    );
    assert_eq!(plan.len(), 2);

    let owner = plan.get("owner").expect("owner entry");
    assert_eq!(owner.old, OldValue::One(Scalar::Text("owner_3".to_string())));
    assert_eq!(owner.new, Scalar::Text("owner_4".to_string()));

    let status = plan.get("status").expect("status entry");
    assert_eq!(
        status.old,
        OldValue::Many(vec![Scalar::Int(1), Scalar::Int(2)])
    );
    assert_eq!(status.new, Scalar::Int(3));
}

#[test]
fn entry_missing_new_is_dropped() {
    let plan = plan_from(r#"{ "operation_details": { "owner": { "old": "owner_3" } } }"#);
    assert!(plan.get("owner").is_none());
    assert!(plan.is_empty());
}

#[test]
fn entry_missing_old_is_dropped() {
    let plan = plan_from(r#"{ "operation_details": { "owner": { "new": "owner_4" } } }"#);
    assert!(plan.is_empty());
}

#[test]
fn null_old_is_dropped() {
    let plan = plan_from(
        r#"{ "operation_details": { "owner": { "old": null, "new": "owner_4" } } }"#,
    );
    assert!(plan.is_empty());
}

#[test]
fn empty_old_string_is_dropped() {
    let plan =
        plan_from(r#"{ "operation_details": { "owner": { "old": "", "new": "owner_4" } } }"#);
    assert!(plan.is_empty());
}

#[test]
fn empty_old_list_is_dropped() {
    let plan = plan_from(r#"{ "operation_details": { "status": { "old": [], "new": 3 } } }"#);
    assert!(plan.is_empty());
}

#[test]
fn empty_new_string_is_dropped() {
    let plan =
        plan_from(r#"{ "operation_details": { "owner": { "old": "owner_3", "new": "" } } }"#);
    assert!(plan.is_empty());
}

#[test]
fn zero_values_are_not_treated_as_empty() {
    let plan = plan_from(r#"{ "operation_details": { "status": { "old": 0, "new": 1 } } }"#);
    let status = plan.get("status").expect("status entry");
    assert_eq!(status.old, OldValue::One(Scalar::Int(0)));
}

#[test]
fn invalid_entries_do_not_poison_valid_ones() {
    let plan = plan_from(
        r#"{
            "operation_details": {
                "owner":  { "old": "owner_3", "new": "owner_4" },
                "status": { "old": "" },
                "level":  { "new": 2 }
            }
        }"#,
    );
    assert_eq!(plan.len(), 1);
    assert!(plan.get("owner").is_some());
}

#[test]
fn column_with_metacharacters_is_dropped() {
    let plan = plan_from(
        r#"{
            "operation_details": {
                "owner; DROP TABLE data--": { "old": "a", "new": "b" },
                "owner = '' OR 1": { "old": "a", "new": "b" },
                "1owner": { "old": "a", "new": "b" }
            }
        }"#,
    );
    assert!(plan.is_empty());
}

#[test]
fn identifier_check_accepts_plain_names_only() {
    assert!(is_plain_identifier("owner"));
    assert!(is_plain_identifier("_status_2"));
    assert!(!is_plain_identifier(""));
    assert!(!is_plain_identifier("2fast"));
    assert!(!is_plain_identifier("own er"));
    assert!(!is_plain_identifier("owner'"));
}

#[test]
fn missing_operation_details_yields_empty_plan() {
    let plan = plan_from(r#"{ "objects": ["p_1"] }"#);
    assert!(plan.is_empty());
    assert_eq!(plan.columns().count(), 0);
}
