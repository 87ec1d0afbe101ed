use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sysmc-cli"))
}

fn repo_root() -> PathBuf {
    // crates/sysmc-cli -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").canonicalize().unwrap()
}

fn fixture_path(name: &str) -> PathBuf {
    repo_root().join("tests/fixtures").join(name)
}

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("sysmc_cli_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn assert_artifact_contract(v: &serde_json::Value, n_toys: u64) {
    assert_eq!(
        v.get("schema_version").and_then(|x| x.as_str()),
        Some("sysmc/combination/v1")
    );

    let datasets =
        v.get("datasets").and_then(|x| x.as_array()).expect("datasets should be an array");
    assert!(!datasets.is_empty(), "datasets should be non-empty");

    for ds in datasets {
        let hist = ds.get("histogram").expect("each entry carries a histogram");
        let counts =
            hist.get("counts").and_then(|x| x.as_array()).expect("counts should be an array");
        assert_eq!(counts.len(), 1000, "histogram must have 1000 bins");
        let total: u64 = counts.iter().map(|c| c.as_u64().unwrap()).sum();
        assert_eq!(total, n_toys, "every toy must land in exactly one bin");

        let lo = hist.get("lo").and_then(|x| x.as_f64()).unwrap();
        let hi = hist.get("hi").and_then(|x| x.as_f64()).unwrap();
        assert!(lo < hi);

        let mode = ds.get("mode").and_then(|x| x.as_f64()).expect("mode should be a number");
        let rms = ds.get("rms").and_then(|x| x.as_f64()).expect("rms should be a number");
        assert!(mode.is_finite());
        assert!(rms.is_finite() && rms >= 0.0);
    }
}

#[test]
fn combine_writes_artifact_with_four_variants_per_dataset() {
    let out = tmp_path("combine.json");
    let output = run(&[
        "combine",
        "--input",
        fixture_path("simple_datasets.json").to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--toys",
        "20000",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_artifact_contract(&v, 20000);

    // 2 datasets x 4 variants (both/both default)
    let datasets = v["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 8);

    let meta = &v["meta"];
    assert_eq!(meta["corr_mode"].as_str(), Some("both"));
    assert_eq!(meta["uncorr_mode"].as_str(), Some("both"));
    assert_eq!(meta["n_toys"].as_u64(), Some(20000));

    std::fs::remove_file(&out).ok();
}

#[test]
fn combine_fixed_selectors_retain_one_variant() {
    let out = tmp_path("combine_fixed.json");
    let output = run(&[
        "combine",
        "--input",
        fixture_path("simple_datasets.json").to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--toys",
        "5000",
        "--corr-mode",
        "m1s",
        "--uncorr-mode",
        "p1s",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_artifact_contract(&v, 5000);
    assert_eq!(v["datasets"].as_array().unwrap().len(), 2);

    std::fs::remove_file(&out).ok();
}

#[test]
fn combine_is_reproducible_for_a_fixed_seed() {
    let out_a = tmp_path("combine_a.json");
    let out_b = tmp_path("combine_b.json");
    for out in [&out_a, &out_b] {
        let output = run(&[
            "combine",
            "--input",
            fixture_path("simple_datasets.json").to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
            "--toys",
            "2000",
            "--seed",
            "7",
        ]);
        assert!(output.status.success());
    }

    let a: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_a).unwrap()).unwrap();
    let b: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_b).unwrap()).unwrap();
    // Everything except the creation timestamp must match.
    assert_eq!(a["datasets"], b["datasets"]);

    std::fs::remove_file(&out_a).ok();
    std::fs::remove_file(&out_b).ok();
}

#[test]
fn invalid_selector_is_rejected_before_generation() {
    let output = run(&[
        "combine",
        "--input",
        fixture_path("simple_datasets.json").to_str().unwrap(),
        "--toys",
        "1000",
        "--corr-mode",
        "2sigma",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid selector"), "stderr: {}", stderr);
    assert!(stderr.contains("2sigma"), "stderr: {}", stderr);
}

#[test]
fn zero_toys_is_rejected() {
    let output = run(&[
        "combine",
        "--input",
        fixture_path("simple_datasets.json").to_str().unwrap(),
        "--toys",
        "0",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("toys must be > 0"));
}

#[test]
fn malformed_component_aborts_the_run() {
    let output = run(&[
        "combine",
        "--input",
        fixture_path("malformed_datasets.json").to_str().unwrap(),
        "--toys",
        "1000",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed input"), "stderr: {}", stderr);
    assert!(stderr.contains("det01"), "stderr: {}", stderr);
}

#[test]
fn version_prints_tool_version() {
    let output = run(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("sysmc "), "stdout: {}", stdout);
}
