//! End-to-end checks on the JSON render models emitted by the CLI.

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn run_json(dir: &TempDir, args: &[&str]) -> Value {
    #[allow(deprecated)]
    let output = Command::cargo_bin("paretolab")
        .unwrap()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("PARETOLAB_SEED")
        .env_remove("PARETOLAB_THRESHOLD")
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn list_is_a_json_array() {
    let dir = TempDir::new().unwrap();
    let v = run_json(&dir, &["list"]);
    let names: Vec<&str> = v.as_array().unwrap().iter().filter_map(Value::as_str).collect();
    assert_eq!(
        names,
        vec!["Fábrica de tazas metálicas", "Clínica privada", "Tienda online"]
    );
}

#[test]
fn show_emits_slider_specs() {
    let dir = TempDir::new().unwrap();
    let v = run_json(&dir, &["show", "--scenario", "Clínica privada", "--seed", "2"]);
    let sliders = v["sliders"].as_array().unwrap();
    assert_eq!(sliders.len(), 6);
    for (i, slider) in sliders.iter().enumerate() {
        assert_eq!(slider["key"], format!("Clínica privada_{i}"));
        assert_eq!(slider["min"], 1);
        assert_eq!(slider["max"], 10);
        assert_eq!(slider["default"], 10 - i as u64);
    }
}

#[test]
fn evaluation_charts_are_well_formed() {
    let dir = TempDir::new().unwrap();
    let v = run_json(&dir, &["evaluate", "--scenario", "Tienda online", "--seed", "8"]);

    for chart in ["user_chart", "real_chart"] {
        let line: Vec<f64> = v[chart]["line"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_f64)
            .collect();
        assert_eq!(line.len(), 6);
        assert!(line.windows(2).all(|w| w[0] <= w[1]));
        assert!((line[5] - 100.0).abs() < 1e-6);
        assert_eq!(v[chart]["y2_range"][1], 110.0);
    }

    assert_eq!(
        v["real_top"],
        serde_json::json!(["Retraso en entregas", "Producto equivocado", "Producto dañado"])
    );
    assert_eq!(v["comparison"]["total_count"], 3);
    let verdict = v["comparison"]["verdict"].as_str().unwrap();
    assert!(["perfect", "acceptable", "poor"].contains(&verdict));
}

#[test]
fn lower_threshold_changes_the_key_set() {
    let dir = TempDir::new().unwrap();
    let v = run_json(
        &dir,
        &["evaluate", "--scenario", "Fábrica de tazas metálicas", "--seed", "1", "--threshold", "60"],
    );
    assert_eq!(v["threshold"], 60.0);
    assert_eq!(
        v["real_top"],
        serde_json::json!(["Demora en entrega", "Producto rayado"])
    );
}
