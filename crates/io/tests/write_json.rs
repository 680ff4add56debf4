//! Integration test: diagnostics output written as JSON.

use blendmask_diagnostics::DiagnosticsOutput;
use blendmask_io::write_json;
use serde_json::Value;

fn output(reference: Option<Vec<f64>>, annual: Option<Vec<f64>>) -> DiagnosticsOutput {
    DiagnosticsOutput {
        mode: "maf".to_string(),
        diagnostic: "dec_mean_gmst".to_string(),
        period_months: 120,
        start_year: 1850,
        n_months: 360,
        model: vec![-0.2, 0.0, 0.2],
        reference,
        decadal_warming: 0.9,
        annual_warming: annual,
    }
}

fn read_back(path: &std::path::Path) -> Value {
    let text = std::fs::read_to_string(path).expect("read output");
    serde_json::from_str(&text).expect("valid JSON")
}

#[test]
fn optional_series_omitted_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blend.json");
    write_json(&path, &output(None, None)).unwrap();

    let json = read_back(&path);
    assert_eq!(json["mode"], "maf");
    assert_eq!(json["period_months"], 120);
    assert_eq!(json["model"].as_array().unwrap().len(), 3);
    assert!(json.get("reference").is_none());
    assert!(json.get("annual_warming").is_none());
}

#[test]
fn reference_and_annual_series_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blend.json");
    write_json(&path, &output(Some(vec![-0.1, 0.1, 0.3]), Some(vec![0.0; 30]))).unwrap();

    let json = read_back(&path);
    assert_eq!(json["reference"].as_array().unwrap().len(), 3);
    assert_eq!(json["annual_warming"].as_array().unwrap().len(), 30);
    assert_eq!(json["decadal_warming"], 0.9);
}

#[test]
fn nan_periods_serialize_as_null() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blend.json");
    let mut out = output(None, None);
    out.model[0] = f64::NAN;
    write_json(&path, &out).unwrap();

    let json = read_back(&path);
    assert!(json["model"][0].is_null());
}
