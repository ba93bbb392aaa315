//! The `sparql-features` binary over JSON and JSON Lines input

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;

const SELECT_ALL: &str = r#"{"form":"Select","pattern":{"TriplesBlock":[{"subject":{"Variable":"s"},"predicate":{"Variable":"p"},"object":{"Variable":"o"}}]}}"#;

fn nested_groups(levels: usize) -> String {
    let mut pattern = String::from(r#"{"TriplesBlock":[]}"#);
    for _ in 0..levels {
        pattern = format!(r#"{{"Group":[{}]}}"#, pattern);
    }
    format!(r#"{{"form":"Select","pattern":{}}}"#, pattern)
}

fn run_lines(args: &[&str], input: String) -> Vec<Value> {
    let output = cargo_bin_cmd!("sparql-features")
        .env_remove("SPARQL_FEATURES_NAMESPACE")
        .env_remove("SPARQL_FEATURES_MAX_DEPTH")
        .arg("--lines")
        .args(args)
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_single_query_from_stdin() {
    let output = cargo_bin_cmd!("sparql-features")
        .write_stdin(SELECT_ALL)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let histogram: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(histogram["TriplePattern"], 1);
    assert_eq!(histogram["Select"], 1);
}

#[test]
fn test_lines_skip_tree_too_deep_to_parse() {
    let input = format!("{}\n{}\n", nested_groups(70), SELECT_ALL);
    let histograms = run_lines(&[], input);

    assert_eq!(histograms.len(), 1);
    assert_eq!(histograms[0]["TriplePattern"], 1);
}

#[test]
fn test_lines_skip_malformed_line() {
    let input = format!("{{\"form\": \n{}\n", SELECT_ALL);
    let histograms = run_lines(&[], input);

    assert_eq!(histograms.len(), 1);
    assert_eq!(histograms[0]["Select"], 1);
}

#[test]
fn test_lines_skip_query_over_depth_limit() {
    let input = format!("{}\n\n{}\n", nested_groups(5), SELECT_ALL);
    let histograms = run_lines(&["--max-depth", "3"], input);

    assert_eq!(histograms.len(), 1);
    assert!(histograms[0].get("Group").is_none());
    assert_eq!(histograms[0]["TriplePattern"], 1);
}

#[test]
fn test_lines_iri_keys() {
    let histograms = run_lines(&["--iris"], format!("{}\n", SELECT_ALL));
    assert_eq!(
        histograms[0]["http://lsq.aksw.org/vocab#TriplePattern"],
        1
    );
}

#[test]
fn test_single_query_too_deep_fails() {
    cargo_bin_cmd!("sparql-features")
        .env_remove("SPARQL_FEATURES_MAX_DEPTH")
        .args(["--max-depth", "3"])
        .write_stdin(nested_groups(5))
        .assert()
        .failure();
}
