//! End-to-end tests for `export`, `score`, `explain` and `completions`.

mod common;

use common::Sandbox;
use predicates::prelude::*;

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_tsv_is_the_default() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["export", "tweets.csv", "--label", "Potus"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "index\tline\tlabel\tsentiment\tclass\ttext\n\
             0\t1\tPotus\t0.500000\tpositive\tgreat day\n\
             1\t2\tPotus\t-0.600000\tnegative\tterrible news\n\
             2\t3\tPotus\t0.000000\tneutral\tthe of a\n",
        ));
}

#[test]
fn export_csv_has_header_and_rows() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["export", "tweets.csv", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "index,line,label,sentiment,class,text\n",
        ))
        .stdout(predicate::str::contains("1,2,tweets,-0.600000,negative,terrible news"));
}

#[test]
fn export_jsonl_emits_one_object_per_record() {
    let sb = Sandbox::new();
    let out = sb
        .cmd()
        .args(["export", "tweets.csv", "--format", "jsonl"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let rows: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["class"], "positive");
    assert_eq!(rows[2]["sentiment"], 0.0);
}

#[test]
fn export_missing_corpus_fails() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["export", "absent.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corpus file not found"));
}

// ---------------------------------------------------------------------------
// score
// ---------------------------------------------------------------------------

#[test]
fn score_prints_one_line_per_text() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["score", "GREAT!!! day", "the of a", "love love"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "0.500000\tGREAT!!! day\n0.000000\tthe of a\n1.000000\tlove love\n",
        ));
}

#[test]
fn score_json_lists_records() {
    let sb = Sandbox::new();
    let out = sb
        .cmd()
        .args(["score", "--json", "terrible"])
        .output()
        .unwrap();
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v[0]["text"], "terrible");
    assert_eq!(v[0]["sentiment"], -0.6);
}

// ---------------------------------------------------------------------------
// explain
// ---------------------------------------------------------------------------

#[test]
fn explain_shows_each_token_decision() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["explain", "The great news!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalized: \"the great news\""))
        .stdout(predicate::str::contains("|1|the|stop-word|-|"))
        .stdout(predicate::str::contains("|2|great|matched|0.8000|"))
        .stdout(predicate::str::contains("|3|news|not in lexicon|-|"))
        .stdout(predicate::str::contains("Score: 0.800000"));
}

#[test]
fn explain_json_reports_raw_and_clamped_scores() {
    let sb = Sandbox::new();
    let out = sb
        .cmd()
        .args(["explain", "--json", "love"])
        .output()
        .unwrap();
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["raw_score"], 3.2);
    assert_eq!(v["score"], 1.0);
    assert_eq!(v["tokens"][0]["verdict"]["kind"], "matched");
}

// ---------------------------------------------------------------------------
// completions / help / version
// ---------------------------------------------------------------------------

#[test]
fn completions_bash_mentions_binary() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sentmd"));
}

#[test]
fn help_lists_subcommands() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn version_prints_package_version() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn invalid_format_is_rejected_by_clap() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["export", "--format", "xml", "tweets.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}

#[test]
fn verbose_flag_emits_info_diagnostics() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["-v", "analyze", "tweets.csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resources loaded"));
}
