// tests/reach_scenarios.rs
//
// Spec + stubbed response → rows → table, no network.
//
use serde_json::json;

use reach_estimate::core::Response;
use reach_estimate::{process, Cell, ReachError, ReachTable, TargetingSpec};

fn ok(users: u64) -> Response {
    Response::new(200, json!({"data": {"users": users, "estimate_ready": true}}).to_string())
}

#[test]
fn single_country_row() {
    let spec = TargetingSpec::parse(r#"{"geo_locations":{"countries":["US"]}}"#).unwrap();
    let row = process(&spec, &ok(180_000_000)).unwrap();

    assert_eq!(row.users, 180_000_000);
    assert_eq!(row.columns, vec![("countries".to_string(), Cell::Scalar(json!("US")))]);
    assert_eq!(row.to_json(), json!({"countries": "US", "users": 180_000_000u64}));
}

#[test]
fn two_countries_stay_a_list_in_order() {
    let spec = TargetingSpec::parse(r#"{"geo_locations":{"countries":["US","MX"]}}"#).unwrap();
    let row = process(&spec, &ok(1)).unwrap();
    assert_eq!(row.get("countries"), Some(&Cell::List(vec![json!("US"), json!("MX")])));
}

#[test]
fn gender_comparison_table() {
    let base = json!({
        "geo_locations": {"countries": ["US"]},
        "age_min": 25,
        "age_max": 34,
        "relationship_statuses": [1, 3],
    });
    let mut men = base.clone();
    men["genders"] = json!([1]);
    let mut women = base;
    women["genders"] = json!([2]);

    let mut table = ReachTable::new();
    for (spec, users) in [(men, 500_000), (women, 520_000)] {
        let spec = TargetingSpec::parse(&spec.to_string()).unwrap();
        table.push(process(&spec, &ok(users)).unwrap());
    }

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.headers(),
        ["countries", "age_min", "age_max", "relationship_statuses", "genders", "users"]
    );
    let rows = table.string_rows();
    assert_eq!(rows[0][..4], rows[1][..4]);
    assert_eq!(rows[0][3], "[1,3]");
    assert_eq!((rows[0][4].as_str(), rows[0][5].as_str()), ("1", "500000"));
    assert_eq!((rows[1][4].as_str(), rows[1][5].as_str()), ("2", "520000"));
}

#[test]
fn api_error_is_missing_estimate_not_a_row() {
    let spec = TargetingSpec::parse(r#"{"geo_locations":{"countries":["US"]}}"#).unwrap();
    for status in [200, 400] {
        let resp = Response::new(status, r#"{"error": {"message": "Invalid parameter"}}"#);
        match process(&spec, &resp) {
            Err(ReachError::MissingEstimate { api_message, .. }) => {
                assert_eq!(api_message.as_deref(), Some("Invalid parameter"));
            }
            other => panic!("expected MissingEstimate, got {other:?}"),
        }
    }
}

#[test]
fn minify_then_parse_is_stable() {
    let pretty = r#"
    {
        "geo_locations": {
            "countries": [ "US" ],
            "location_types": [ "home" ]
        },
        "education_statuses": [ 9, 10 ],
        "age_min": 18
    }"#;
    let a = TargetingSpec::parse(pretty).unwrap();
    let b = TargetingSpec::parse(&a.minify()).unwrap();
    assert_eq!(a, b);
    assert!(!a.minify().contains(' '));
}

#[test]
fn spec_field_named_users_gets_its_own_column() {
    let spec = TargetingSpec::parse(r#"{"geo_locations":{"countries":["US"]},"users":[5]}"#).unwrap();
    let table: ReachTable = std::iter::once(process(&spec, &ok(42)).unwrap()).collect();

    assert_eq!(table.headers(), ["countries", "spec.users", "users"]);
    assert_eq!(table.string_rows(), vec![vec!["US", "5", "42"]]);
    assert_eq!(table.to_json(), json!([{"countries": "US", "spec.users": 5, "users": 42}]));
}
