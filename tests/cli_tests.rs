//! Integration tests for the bookmatch CLI
//!
//! These tests run the bookmatch binary over CSV catalogs written to temp dirs.

mod common;

use common::{bookmatch, write_file, write_library};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    bookmatch(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: bookmatch"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    bookmatch(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookmatch"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    bookmatch(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "bookmatch ",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("bookmatch --help"));
}

// ============================================================================
// recommend
// ============================================================================

#[test]
fn test_recommend_human() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "recommend", "Emma", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Books similar to \"Emma\""))
        .stdout(predicate::str::contains("1. Pride and Prejudice"))
        .stdout(predicate::str::contains("Jane Austen | Romance | score"))
        .stdout(predicate::str::contains("\n2. "))
        .stdout(predicate::str::contains("\n3. ").not());
}

#[test]
fn test_recommend_json() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--format", "json", "recommend", "Dune"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["rank"], 1);
    assert!(results.iter().all(|r| r["title"] != "Dune"));

    let scores: Vec<f64> = results.iter().map(|r| r["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
}

#[test]
fn test_recommend_records() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--format", "records"])
        .args(["recommend", "Emma", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H bookmatch=1 records=1 mode=recommend query=\"Emma\" results=1",
        ))
        .stdout(predicate::str::contains(
            "\"Pride and Prejudice\" author=\"Jane Austen\" genre=\"Romance\"",
        ));
}

#[test]
fn test_recommend_unknown_title_is_soft_miss() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "recommend", "The Silmarillion"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No similar books found for \"The Silmarillion\".",
        ));

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--format", "json", "recommend", "dune"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_recommend_limit_out_of_range_exit_code_2() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    for limit in ["0", "11"] {
        bookmatch(dir.path())
            .arg("--catalog")
            .arg(&catalog)
            .args(["recommend", "Dune", "--limit", limit])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid limit"));
    }
}

#[test]
fn test_recommend_min_score_filters_results() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--format", "json"])
        .args(["recommend", "Emma", "--limit", "5", "--min-score", "0.01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert!(!results.is_empty());
    assert!(results.len() < 5);
    assert!(results.iter().all(|r| r["score"].as_f64().unwrap() >= 0.01));
}

#[test]
fn test_min_score_outside_unit_range_is_usage_error() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["recommend", "Dune", "--min-score", "1.5"])
        .assert()
        .code(2);
}

#[test]
fn test_catalog_from_environment() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .env("BOOKMATCH_CATALOG", &catalog)
        .args(["--language", "english", "recommend", "Emma", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pride and Prejudice"));
}

// ============================================================================
// Catalog and build errors
// ============================================================================

#[test]
fn test_missing_catalog_flag_exit_code_2() {
    let dir = tempdir().unwrap();
    bookmatch(dir.path())
        .args(["recommend", "Dune"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--catalog"));
}

#[test]
fn test_catalog_not_found_exit_code_3() {
    let dir = tempdir().unwrap();
    bookmatch(dir.path())
        .args(["--catalog", "nope.csv", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("catalog not found"));
}

#[test]
fn test_missing_columns_exit_code_3() {
    let dir = tempdir().unwrap();
    let catalog = write_file(
        dir.path(),
        "bad.csv",
        "title,author,description\nDune,Frank Herbert,spice\n",
    );

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing required columns: genre"));
}

#[test]
fn test_blank_field_exit_code_3() {
    let dir = tempdir().unwrap();
    let catalog = write_file(
        dir.path(),
        "blank.csv",
        "title,author,genre,description\nDune,Frank Herbert,SciFi,\n",
    );

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Dune on line 2"))
        .stderr(predicate::str::contains("description"));
}

#[test]
fn test_header_only_catalog_is_empty() {
    let dir = tempdir().unwrap();
    let catalog = write_file(dir.path(), "empty.csv", "title,author,genre,description\n");

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("catalog is empty"));
}

#[test]
fn test_only_stop_words_exit_code_3() {
    let dir = tempdir().unwrap();
    let catalog = write_file(
        dir.path(),
        "stop.csv",
        "title,author,genre,description\nOne,the,and,of\nTwo,a,to,the\n",
    );

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "recommend", "One"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vocabulary is empty"));
}

#[test]
fn test_duplicate_titles() {
    let dir = tempdir().unwrap();
    let catalog = write_file(
        dir.path(),
        "dupes.csv",
        "title,author,genre,description\n\
         Same,First Author,SciFi,space opera\n\
         Other,Someone,SciFi,space opera\n\
         Same,Second Author,Romance,love letters\n",
    );

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate title \"Same\""));

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--allow-duplicates", "--language", "english", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Same (First Author)"))
        .stdout(predicate::str::contains("Same (Second Author)"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "recommend", "Dune", "--limit", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "invalid_value");
}

#[test]
fn test_json_error_envelope_on_parse_failure() {
    let dir = tempdir().unwrap();
    let output = bookmatch(dir.path())
        .args(["--format", "json", "--language", "latin", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    bookmatch(dir.path())
        .args(["--quiet", "--catalog", "nope.csv", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// list, similarity, terms, info
// ============================================================================

#[test]
fn test_list_keeps_file_order() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--quiet", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let titles: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        titles,
        vec![
            "Dune",
            "Foundation",
            "Pride and Prejudice",
            "Emma",
            "Neuromancer",
            "Hyperion"
        ]
    );
}

#[test]
fn test_list_json() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 6);
    assert_eq!(json[2]["title"], "Pride and Prejudice");
    assert_eq!(json[2]["author"], "Jane Austen");
}

#[test]
fn test_similarity() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--quiet", "similarity", "Dune", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1.0000\n"));

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "similarity", "Dune", "Missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("title not found: Missing"));
}

#[test]
fn test_similarity_names_the_unknown_title() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "similarity", "Atlantis", "Dune"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("title not found: Atlantis"));
}

#[test]
fn test_similarity_is_symmetric() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let score = |a: &str, b: &str| {
        let output = bookmatch(dir.path())
            .arg("--catalog")
            .arg(&catalog)
            .args(["--language", "english", "--format", "json", "similarity", a, b])
            .output()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        json["score"].as_f64().unwrap()
    };

    assert_eq!(score("Emma", "Pride and Prejudice"), score("Pride and Prejudice", "Emma"));
    assert!(score("Emma", "Pride and Prejudice") > score("Emma", "Neuromancer"));
}

#[test]
fn test_terms() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--format", "json", "terms", "Dune", "-n", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Dune");
    let terms = json["terms"].as_array().unwrap();
    assert_eq!(terms.len(), 3);
    let weights: Vec<f64> = terms.iter().map(|t| t["weight"].as_f64().unwrap()).collect();
    assert!(weights.windows(2).all(|w| w[0] >= w[1]));

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "terms", "Missing"])
        .assert()
        .code(3);
}

#[test]
fn test_info() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--format", "json", "info"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stats"]["records"], 6);
    assert_eq!(json["config"]["language"], "english");
    assert_eq!(json["stats"]["catalog_fingerprint"].as_str().unwrap().len(), 64);
    assert!(json["stats"]["vocabulary_size"].as_u64().unwrap() > 0);

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Records:      6"));
}

// ============================================================================
// interactive
// ============================================================================

#[test]
fn test_interactive_answers_each_line() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "interactive", "-n", "1"])
        .write_stdin("Emma\n\nAtlantis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Pride and Prejudice"))
        .stdout(predicate::str::contains(
            "No similar books found for \"Atlantis\".",
        ));
}

#[test]
fn test_interactive_records_per_query() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "english", "--format", "records", "interactive"])
        .write_stdin("Dune\nEmma\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let headers = stdout.lines().filter(|l| l.starts_with("H ")).count();
    assert_eq!(headers, 2);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_local_config_sets_defaults() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());
    write_file(
        dir.path(),
        "bookmatch.toml",
        "language = \"english\"\ndefault_limit = 2\n",
    );

    let output = bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--format", "json", "recommend", "Dune"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_explicit_config_max_limit() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());
    let config = write_file(
        dir.path(),
        "custom.toml",
        "language = \"english\"\ndefault_limit = 1\nmax_limit = 2\n",
    );

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("--config")
        .arg(&config)
        .args(["recommend", "Dune", "--limit", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_stemming_without_language_is_unsupported() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "none", "--stemming", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported"));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());
    write_file(dir.path(), "bookmatch.toml", "min_score = 2.0\n");

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid min_score"));
}

#[test]
fn test_no_stemming_overrides_config_file() {
    let dir = tempdir().unwrap();
    let catalog = write_library(dir.path());
    write_file(
        dir.path(),
        "bookmatch.toml",
        "language = \"english\"\nstemming = true\n",
    );

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "none", "list"])
        .assert()
        .code(2);

    bookmatch(dir.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["--language", "none", "--no-stemming", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune (Frank Herbert)"));
}
