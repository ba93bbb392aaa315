//! Query trees arriving as JSON from an external parser

use sparql_features::config::ExtractorConfig;
use sparql_features::sparql_syntax::Query;
use sparql_features::{extract_features, extract_features_checked, FeatureHistogram, FeatureTag};

const FILTERED_PATH_QUERY: &str = r#"{
    "form": "Select",
    "distinct": true,
    "limit": 10,
    "offset": 5,
    "pattern": { "Group": [
        { "PathBlock": [
            { "subject": { "Variable": "s" },
              "predicate": { "Path": { "Alt": [
                  { "Link": "http://example.org/p" },
                  { "Inverse": { "Link": "http://example.org/q" } }
              ] } },
              "object": { "Variable": "o" } },
            { "subject": { "Variable": "o" },
              "predicate": { "Path": { "Link": "http://example.org/label" } },
              "object": { "Variable": "l" } }
        ] },
        { "Filter": { "And": [
            { "Function": { "symbol": "lang", "args": [ { "Variable": "l" } ] } },
            { "Function": { "iri": "http://example.org/fn/score", "args": [] } }
        ] } }
    ] },
    "aggregators": [ { "Count": { "expr": { "Variable": "s" } } } ]
}"#;

#[test]
fn test_extract_from_json_tree() -> anyhow::Result<()> {
    let query: Query = serde_json::from_str(FILTERED_PATH_QUERY)?;
    let h = extract_features(&query);

    assert_eq!(h.get(&FeatureTag::Group), 1);
    assert_eq!(h.get(&FeatureTag::TriplePath), 1);
    assert_eq!(h.get(&FeatureTag::AltPath), 1);
    assert_eq!(h.get(&FeatureTag::InversePath), 1);
    assert_eq!(h.get(&FeatureTag::TriplePattern), 1);
    assert_eq!(h.get(&FeatureTag::Filter), 1);
    assert_eq!(h.get(&FeatureTag::Functions), 2);
    assert_eq!(h.get(&FeatureTag::function("lang")), 1);
    assert_eq!(h.get(&FeatureTag::function("http://example.org/fn/score")), 1);
    assert_eq!(h.get(&FeatureTag::Distinct), 1);
    assert_eq!(h.get(&FeatureTag::Limit), 1);
    assert_eq!(h.get(&FeatureTag::Offset), 1);
    assert_eq!(h.get(&FeatureTag::Aggregators), 1);
    assert_eq!(h.get(&FeatureTag::aggregate("count")), 1);
    Ok(())
}

#[test]
fn test_histogram_json_round_trip() -> anyhow::Result<()> {
    let query: Query = serde_json::from_str(FILTERED_PATH_QUERY)?;
    let h = extract_features(&query);

    let json = serde_json::to_string(&h)?;
    assert!(json.contains("\"fn-http%3A%2F%2Fexample.org%2Ffn%2Fscore\":1"));
    let back: FeatureHistogram = serde_json::from_str(&json)?;
    assert_eq!(back, h);
    Ok(())
}

#[test]
fn test_iri_keys() -> anyhow::Result<()> {
    let query: Query = serde_json::from_str(FILTERED_PATH_QUERY)?;
    let h = extract_features(&query);
    let config = ExtractorConfig::default();

    let map = h.to_iri_map(&config.namespace);
    assert_eq!(map.get("http://lsq.aksw.org/vocab#AltPath"), Some(&1));
    assert_eq!(map.get("http://lsq.aksw.org/vocab#fn-lang"), Some(&1));
    assert_eq!(map.len(), h.len());
    Ok(())
}

#[test]
fn test_checked_extraction_rejects_deep_json_tree() -> anyhow::Result<()> {
    let mut pattern = String::from(r#"{ "TriplesBlock": [] }"#);
    for _ in 0..20 {
        pattern = format!(r#"{{ "Group": [ {} ] }}"#, pattern);
    }
    let json = format!(r#"{{ "form": "Ask", "pattern": {} }}"#, pattern);
    let query: Query = serde_json::from_str(&json)?;

    let shallow = ExtractorConfig {
        max_nesting_depth: 8,
        ..Default::default()
    };
    assert!(extract_features_checked(&query, &shallow).is_err());

    let h = extract_features_checked(&query, &ExtractorConfig::default())?;
    assert_eq!(h.get(&FeatureTag::Group), 20);
    assert_eq!(h.get(&FeatureTag::Ask), 1);
    assert!(!h.contains(&FeatureTag::TriplePattern));
    Ok(())
}

#[test]
fn test_unknown_element_kind_is_rejected_at_the_boundary() {
    let json = r#"{ "form": "Select", "pattern": { "Lateral": [] } }"#;
    assert!(serde_json::from_str::<Query>(json).is_err());
}
