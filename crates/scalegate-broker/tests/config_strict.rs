#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use scalegate_broker::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
broker:
  listen: "0.0.0.0:8080"
  catalogz_path: "catalog.json" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.broker.listen, "0.0.0.0:8080");
    assert_eq!(cfg.broker.catalog_path, "catalog.json");
    assert_eq!(cfg.broker.max_body_bytes, 262_144);
}

#[test]
fn wrong_version_rejected() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn body_limit_range_enforced() {
    let bad = r#"
version: 1
broker:
  max_body_bytes: 16
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}
