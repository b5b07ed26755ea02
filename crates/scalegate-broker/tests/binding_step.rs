//! Validation-step outcome and binding-store tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use scalegate_broker::app_state::AppState;
use scalegate_broker::store::{BindingStore, MemoryBindingStore, StoredBinding};
use scalegate_broker::validation::step::{self, BindingIdentity, StepOutcome};
use scalegate_broker::{catalog, config};
use scalegate_core::policy::ScalingPolicy;
use serde_json::json;

const CATALOG: &str = r#"{
  "services": [
    {
      "id": "autoscaler-guid",
      "plans": [
        {
          "id": "free-plan",
          "recurring_schedule_count": 2,
          "specific_date_count": 2,
          "scaling_rules_count": 1
        }
      ]
    }
  ]
}"#;

fn test_state() -> AppState {
    let cfg = config::load_from_str("version: 1\n").unwrap();
    let catalog = catalog::load_from_str(CATALOG).unwrap();
    AppState::new(cfg, catalog).unwrap()
}

fn identity() -> BindingIdentity<'static> {
    BindingIdentity {
        app_guid: "app-guid",
        service_id: "autoscaler-guid",
        plan_id: "free-plan",
    }
}

fn policy(v: serde_json::Value) -> ScalingPolicy {
    serde_json::from_str(&v.to_string()).unwrap()
}

#[test]
fn continue_without_policy() {
    let state = test_state();
    assert!(matches!(
        step::run(&state, identity(), None),
        StepOutcome::Continue
    ));
}

#[test]
fn continue_within_limits() {
    let state = test_state();
    let p = policy(json!({ "scaling_rules": [{}] }));

    assert!(matches!(
        step::run(&state, identity(), Some(&p)),
        StepOutcome::Continue
    ));

    let rendered = state.metrics().render(&[]);
    assert!(rendered.contains(r#"scalegate_validations_total{outcome="pass"} 1"#));
}

#[test]
fn fail_carries_violations() {
    let state = test_state();
    let p = policy(json!({
        "scaling_rules": [{}, {}],
        "schedules": { "recurring_schedule": [{}, {}, {}] }
    }));

    match step::run(&state, identity(), Some(&p)) {
        StepOutcome::Fail(violations) => {
            assert_eq!(violations.len(), 2);
            assert_eq!(violations[0].property, "schedules.recurring_schedule");
            assert_eq!(violations[1].property, "scaling_rules");
        }
        StepOutcome::Continue => panic!("expected Fail"),
    }

    let rendered = state.metrics().render(&[]);
    assert!(rendered.contains(r#"scalegate_validations_total{outcome="fail"} 1"#));
    assert!(rendered
        .contains(r#"scalegate_policy_violations_total{property="scaling_rules"} 1"#));
}

#[tokio::test]
async fn memory_store_roundtrip() {
    let store = MemoryBindingStore::new();

    store
        .put(StoredBinding {
            binding_id: "binding-1".into(),
            instance_id: "instance-1".into(),
            app_guid: Some("app-guid".into()),
            service_id: "autoscaler-guid".into(),
            plan_id: "free-plan".into(),
            policy_json: Some(r#"{"instance_min_count":1}"#.into()),
        })
        .await
        .unwrap();

    assert_eq!(store.count().await, 1);

    let got = store.get("binding-1").await.expect("stored binding");
    assert_eq!(got.plan_id, "free-plan");
    assert_eq!(got.policy_json.as_deref(), Some(r#"{"instance_min_count":1}"#));

    assert!(store.delete("binding-1").await.unwrap());
    assert!(!store.delete("binding-1").await.unwrap());
    assert_eq!(store.count().await, 0);
}
