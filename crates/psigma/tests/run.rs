use std::{fs::copy, path::Path};

use approx::assert_abs_diff_eq;
use assert_cmd::Command;
use insta::assert_snapshot;
use tempfile::tempdir;
use test_case::test_case;

fn psigma() -> Command {
    let mut cmd = Command::cargo_bin("psigma").unwrap();
    cmd.current_dir("testfiles");
    cmd
}

#[test_case("ammonia.xyz", "ammonia.xyz: P_Sigma = 0.8344976762")]
#[test_case("trimethylamine.xyz", "trimethylamine.xyz: P_Sigma = 0.6902712817")]
#[test_case("planar.xyz", "planar.xyz: P_Sigma = 0")]
fn single(file: &str, want: &str) {
    let assert = psigma().arg(file).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_eq!(stdout.trim_end(), want);
}

#[test]
fn batch() {
    let assert = psigma()
        .args([
            "ammonia.xyz",
            "trimethylamine.xyz",
            "planar.xyz",
            "water.xyz",
            "amide_anion.xyz",
            "ammonium.xyz",
            "short.xyz",
            "missing.xyz",
        ])
        .assert()
        .failure();
    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("5 of 8 files failed"), "stderr: {stderr}");
    assert_snapshot!("batch", String::from_utf8_lossy(&output.stdout));
}

#[test]
fn json() {
    let assert = psigma()
        .args(["--json", "ammonia.xyz", "water.xyz"])
        .assert()
        .failure();
    let got: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let entries = got.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["file"], "ammonia.xyz");
    let report = &entries[0]["report"];
    assert_abs_diff_eq!(
        report["p_sigma"].as_f64().unwrap(),
        0.834_497_676_156_547,
        epsilon = 1e-12
    );
    assert_eq!(report["central"], 0);
    assert_eq!(report["bonds"].as_array().unwrap().len(), 3);
    assert_eq!(report["angles"].as_array().unwrap().len(), 3);
    assert!(entries[0].get("error").is_none());

    assert_eq!(entries[1]["file"], "water.xyz");
    assert_eq!(entries[1]["error"], "no N atom found in the geometry");
    assert!(entries[1].get("report").is_none());
}

#[test]
fn element_override() {
    let assert = psigma().args(["-e", "O", "water.xyz"]).assert().failure();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_eq!(
        stdout.trim_end(),
        "water.xyz: error: found 2 atoms bonded to O, at least 3 are needed"
    );
}

#[test]
fn config_file() -> std::io::Result<()> {
    let dir = tempdir()?;
    copy("testfiles/ammonia.xyz", dir.path().join("ammonia.xyz"))?;
    std::fs::write(
        dir.path().join("tight.toml"),
        "tolerance = 0.0\n\n[radii]\nH = 0.2\n",
    )?;
    let assert = Command::cargo_bin("psigma")
        .unwrap()
        .args(["-c", "tight.toml", "ammonia.xyz"])
        .current_dir(&dir)
        .assert()
        .failure();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_eq!(
        stdout.trim_end(),
        "ammonia.xyz: error: found 0 atoms bonded to N, at least 3 are needed"
    );
    Ok(())
}

#[test]
fn bad_config() {
    let assert = psigma()
        .args(["-c", "typo.toml", "ammonia.xyz"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("failed to load typo.toml"), "stderr: {stderr}");
}

#[test]
fn interactive() -> std::io::Result<()> {
    let dir = tempdir()?;
    copy(
        Path::new("testfiles/ammonia.xyz"),
        dir.path().join("ammonia.xyz"),
    )?;
    std::fs::write(
        dir.path().join("broken.xyz"),
        "4\nonly three atoms\nN 0.0 0.0 0.0\nH 1.0 0.0 0.0\nH 0.0 1.0 0.0\n",
    )?;
    let assert = Command::cargo_bin("psigma")
        .unwrap()
        .current_dir(&dir)
        .write_stdin("ammonia.txt\nbroken.xyz\nyes\nammonia.xyz\nno\n\n")
        .assert()
        .success();
    assert_snapshot!(
        "interactive",
        String::from_utf8_lossy(&assert.get_output().stdout)
    );
    Ok(())
}
