//! Runs the `glyphsplit` binary against the core fixtures.

use std::{
    env,
    fs::remove_dir_all,
    path::{Path, PathBuf},
    process::{self, Command, Output},
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../core/tests/fixtures").join(name)
}

fn temp_dir(test: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("glyphsplit-cli-{test}-{}", process::id()));
    let _ = remove_dir_all(&dir);
    dir
}

fn glyphsplit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyphsplit"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn quiet_run_logs_nothing() {
    let out = temp_dir("quiet");
    let config = fixture("batch.json");
    let output =
        glyphsplit(&["extract", "-o", out.to_str().unwrap(), "-c", config.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Extracted 3 glyphs\n");
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}

#[test]
fn verbose_run_reports_missing_glyphs() {
    let out = temp_dir("verbose");
    let config = fixture("batch.json");
    let output =
        glyphsplit(&["extract", "-o", out.to_str().unwrap(), "-c", config.to_str().unwrap(), "-v"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Glyph not found: U+F099"));
    assert!(stderr.contains("1 mapped glyphs were not found"));
}

#[test]
fn compose_without_mapping_fails() {
    let output = glyphsplit(&["compose"]);
    assert!(!output.status.success());
}
