//! Scaling-policy document vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use scalegate_core::policy::ScalingPolicy;

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn parse_policy_min() {
    let s = load("policy_min.json");
    let policy: ScalingPolicy = serde_json::from_str(&s).unwrap();
    assert_eq!(policy.instance_min_count, Some(1));
    assert_eq!(policy.instance_max_count, Some(4));
    assert!(policy.schedules.is_none());
    assert_eq!(policy.recurring_schedule_len(), None);
    assert_eq!(policy.specific_date_len(), None);
    assert_eq!(policy.scaling_rules_len(), None);
}

#[test]
fn parse_policy_full() {
    let s = load("policy_full.json");
    let policy: ScalingPolicy = serde_json::from_str(&s).unwrap();
    assert_eq!(policy.scaling_rules_len(), Some(2));
    assert_eq!(policy.recurring_schedule_len(), Some(1));
    assert_eq!(policy.specific_date_len(), Some(1));

    let schedules = policy.schedules.unwrap();
    assert_eq!(schedules.timezone.as_deref(), Some("Asia/Shanghai"));

    // Entries stay raw for downstream consumers.
    let rules = policy.scaling_rules.unwrap();
    assert!(rules[0].get().contains("\"metric_type\""));
}

#[test]
fn null_arrays_count_as_absent() {
    let s = load("policy_null_arrays.json");
    let policy: ScalingPolicy = serde_json::from_str(&s).unwrap();
    assert_eq!(policy.recurring_schedule_len(), None);
    assert_eq!(policy.specific_date_len(), None);
    assert_eq!(policy.scaling_rules_len(), None);
}

#[test]
fn unknown_fields_are_tolerated() {
    let policy: ScalingPolicy = serde_json::from_str(
        r#"{ "instance_min_count": 1, "future_field": { "nested": true } }"#,
    )
    .unwrap();
    assert_eq!(policy.instance_min_count, Some(1));
}

#[test]
fn schedules_block_without_entries() {
    let policy: ScalingPolicy =
        serde_json::from_str(r#"{ "schedules": { "timezone": "UTC" } }"#).unwrap();
    assert_eq!(policy.recurring_schedule_len(), None);
    assert_eq!(policy.specific_date_len(), None);
}
