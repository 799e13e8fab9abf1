mod common;

use circleforge::geometry::StrokeFile;
use common::{closed_circle, surface};
use regex::Regex;
use serde_json::Value;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    store_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store_path = dir.path().join("best_score.json");
        Self { dir, store_path }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_circleforge"))
            .args(args)
            .arg("--store")
            .arg(&self.store_path)
            .output()
            .expect("Failed to execute binary")
    }

    fn write_circle_stroke(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        StrokeFile::new(surface(), closed_circle(surface(), 200.0, 120))
            .save_to_file(&path)
            .unwrap();
        path
    }

    fn write_event_log(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        let mut f = File::create(&path).unwrap();
        writeln!(f, "source,kind,x,y").unwrap();
        let points = closed_circle(surface(), 200.0, 90);
        for (i, p) in points.iter().enumerate() {
            let kind = if i == 0 { "down" } else { "move" };
            writeln!(f, "pointer,{},{},{}", kind, p.x, p.y).unwrap();
        }
        writeln!(f, "pointer,up,,").unwrap();
        path
    }
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stored_best(path: &Path) -> Option<f64> {
    let raw: Value = serde_json::from_str(&fs::read_to_string(path).ok()?).ok()?;
    raw["bestScore"].as_f64()
}

#[test]
fn test_score_json_output() {
    let ctx = TestContext::new();
    let stroke = ctx.write_circle_stroke("circle.json");

    let output = ctx.run(&["score", stroke.to_str().unwrap(), "--json"]);
    assert!(output.status.success(), "{:?}", output);

    let json: Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["closed"], true);
    assert!(json["score"].as_f64().unwrap() > 99.0);
    // Scoring a file never touches the stored best
    assert!(!ctx.store_path.exists());
}

#[test]
fn test_score_missing_file_fails() {
    let ctx = TestContext::new();
    let missing = ctx.path("missing.json");
    let output = ctx.run(&["score", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_replay_persists_best() {
    let ctx = TestContext::new();
    let log = ctx.write_event_log("events.csv");

    let output = ctx.run(&["replay", log.to_str().unwrap()]);
    assert!(output.status.success(), "{:?}", output);
    assert!(stdout_of(&output).contains("New High Score"));

    let best = stored_best(&ctx.store_path).expect("best score should be stored");
    assert!(best > 99.0);

    // Same stroke again is not a new best
    let output = ctx.run(&["replay", log.to_str().unwrap()]);
    assert!(!stdout_of(&output).contains("New High Score"));
    assert_eq!(stored_best(&ctx.store_path), Some(best));
}

#[test]
fn test_challenge_text_uses_stored_best() {
    let ctx = TestContext::new();
    fs::write(&ctx.store_path, r#"{ "bestScore": 87.456 }"#).unwrap();

    let output = ctx.run(&["challenge"]);
    assert!(output.status.success());

    let re = Regex::new(r"My circle is (\d+\.\d{2})% perfect").unwrap();
    let stdout = stdout_of(&output);
    let caps = re.captures(&stdout).expect("challenge line");
    assert_eq!(&caps[1], "87.46");
}

#[test]
fn test_challenge_without_best_reads_zero() {
    let ctx = TestContext::new();
    let output = ctx.run(&["challenge", "--challenge-url", ""]);
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).trim(),
        "My circle is 0.00% perfect, can you beat that?"
    );
}

#[test]
fn test_validate_lists_shapes() {
    let ctx = TestContext::new();
    let output = ctx.run(&["validate", "--samples", "120"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = stdout_of(&output);
    for name in ["circle", "half_arc", "spiral", "square"] {
        assert!(stdout.contains(name), "missing {} in\n{}", name, stdout);
    }
}

#[test]
fn test_invalid_weights_file_fails() {
    let ctx = TestContext::new();
    let weights = ctx.path("weights.json");
    fs::write(&weights, r#"{ "radial_tolerance": 0.0 }"#).unwrap();

    let output = ctx.run(&["validate", "--weights", weights.to_str().unwrap()]);
    assert!(!output.status.success());
}
