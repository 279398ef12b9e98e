// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use serde_json::json;

use reach_estimate::config::{ExportFormat, ExportOptions, RunOptions};
use reach_estimate::core::Response;
use reach_estimate::{file, process, runner, ReachError, ReachTable, TargetingSpec};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("reach_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample_table() -> ReachTable {
    let rows = [
        (r#"{"geo_locations":{"countries":["US"]},"genders":[1]}"#, 500_000),
        (r#"{"geo_locations":{"countries":["US","CA"]},"genders":[2]}"#, 520_000),
    ];
    rows.iter()
        .map(|(spec, users)| {
            let spec = TargetingSpec::parse(spec).unwrap();
            let body = format!(r#"{{"data":{{"users":{users}}}}}"#);
            process(&spec, &Response::new(200, body)).unwrap()
        })
        .collect()
}

#[test]
fn csv_export_quotes_list_cells() {
    let dir = tmp_dir("csv");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("cmp.csv").to_str().unwrap());

    let written = file::write_export(&export, &sample_table()).unwrap().unwrap();
    assert!(written.to_string_lossy().ends_with("cmp.csv"));

    let text = fs::read_to_string(&written).unwrap();
    assert_eq!(
        text,
        "countries,genders,users\nUS,1,500000\n\"[\"\"US\"\",\"\"CA\"\"]\",2,520000\n"
    );
}

#[test]
fn json_export_keeps_native_types() {
    let dir = tmp_dir("json");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Json;
    export.set_path(dir.join("nested/out").to_str().unwrap());

    let written = file::write_export(&export, &sample_table()).unwrap().unwrap();
    assert!(written.to_string_lossy().ends_with("out.json"));

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"countries": "US", "genders": 1, "users": 500000},
            {"countries": ["US", "CA"], "genders": 2, "users": 520000}
        ])
    );
}

#[test]
fn no_out_path_writes_nothing() {
    let export = ExportOptions::default();
    assert!(file::write_export(&export, &sample_table()).unwrap().is_none());
}

#[test]
fn config_and_specs_load_from_disk() {
    let dir = tmp_dir("load");
    let cfg = dir.join("config.json");
    fs::write(&cfg, r#"{"access_token":"tok","ad_account_id":"555","api_version":"v5.0"}"#).unwrap();
    let us = dir.join("us.json");
    fs::write(&us, "{\n  \"geo_locations\": {\"countries\": [\"US\"]}\n}\n").unwrap();

    let mut opts = RunOptions::default();
    opts.config_path = cfg;
    let creds = runner::load_credentials(&mut opts).unwrap();
    assert_eq!(creds.account_id(), "act_555");
    assert_eq!(opts.api.api_version, "v5.0");

    let specs = runner::load_specs(&[us]).unwrap();
    assert_eq!(specs[0].0, "us");
    assert_eq!(specs[0].1.minify(), r#"{"geo_locations":{"countries":["US"]}}"#);
}

#[test]
fn api_version_from_command_line_beats_config_file() {
    let dir = tmp_dir("cli_version");
    let cfg = dir.join("config.json");
    fs::write(&cfg, r#"{"access_token":"tok","ad_account_id":"1","api_version":"v5.0"}"#).unwrap();

    // same text as the built-in default, still explicit
    let mut opts = RunOptions::default();
    opts.config_path = cfg;
    opts.api_cli.api_version = Some("v3.2".into());
    runner::load_credentials(&mut opts).unwrap();
    assert_eq!(opts.api.api_version, "v3.2");
}

#[test]
fn bad_spec_file_fails_before_any_request() {
    let dir = tmp_dir("bad_spec");
    let good = dir.join("good.json");
    let bad = dir.join("bad.json");
    fs::write(&good, r#"{"age_min":18}"#).unwrap();
    fs::write(&bad, r#"{"age_min":"#).unwrap();

    let err = runner::load_specs(&[good, bad]).unwrap_err();
    assert!(matches!(err, ReachError::Json(_)));

    let missing = dir.join("missing.json");
    assert!(matches!(runner::load_specs(&[missing]), Err(ReachError::Io { .. })));
}
