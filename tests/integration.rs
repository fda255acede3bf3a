use std::path::Path;
use std::process::{Command, Output};

fn swordlink(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swordlink"))
        .args(args)
        .current_dir(Path::new("tests/fixtures"))
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn analyze_recognized_links_exits_zero() {
    let out = swordlink(&["analyze", "sword://StrongsRealGreek/01909", "Job.3.3"]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));

    let text = stdout(&out);
    assert!(text.contains("SPECIFIC_DOCUMENT  book=StrongsRealGreek  key=01909"), "{text}");
    assert!(text.contains("BIBLE  book=-  key=Job.3.3"), "{text}");
}

#[test]
fn analyze_unrecognized_link_exits_one() {
    let out = swordlink(&["analyze", "gdef:01234", "bogus:xyz"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("UNRECOGNIZED  bogus:xyz"));
}

#[test]
fn analyze_json_output() {
    let out = swordlink(&["analyze", "--json", "sword://Bible/John.17.11", "sword:"]);
    assert_eq!(out.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let reports = value.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["recognized"], true);
    assert_eq!(reports[0]["reference"]["doc_type"], "BIBLE");
    assert_eq!(reports[0]["reference"]["book"], "Bible");
    assert_eq!(reports[1]["recognized"], false);
    assert!(reports[1]["reference"].is_null());
}

#[test]
fn scan_respects_config_and_skips_external_links() {
    let out = swordlink(&["scan", "library"]);
    let text = stdout(&out);
    assert_eq!(out.status.code(), Some(0), "{text}");
    assert!(text.contains("All 6 links recognized"), "{text}");
    assert!(!text.contains("bogus"), "{text}");
    assert!(!text.contains("crosswire"), "{text}");
}

#[test]
fn scan_reports_unrecognized_links() {
    let out = swordlink(&["scan", "broken", "--json"]);
    assert_eq!(out.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["unrecognized"], 1);
    assert_eq!(value["links"][1]["uri"], "Strongs:01909");
    assert_eq!(value["links"][1]["line"], 2);
}

#[test]
fn scan_missing_root_exits_two() {
    let out = swordlink(&["scan", "does-not-exist"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Scan Root Not Found"));
}

#[test]
fn protocols_lists_every_token() {
    let out = swordlink(&["protocols"]);
    assert!(out.status.success());
    let text = stdout(&out);
    for token in ["bible", "sword", "gdef", "hdef", "robinson", "allgoccur", "allhoccur"] {
        assert!(text.contains(token), "missing {token} in {text}");
    }
}
