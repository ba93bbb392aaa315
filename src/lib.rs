//! sparql-features - structural feature extraction for SPARQL query logs
//!
//! This crate turns a parsed SPARQL syntax tree into a histogram of the
//! constructs it uses:
//! - Pattern elements (triples, paths, UNION, OPTIONAL, FILTER, ...)
//! - Filter functions, named by symbol, IRI or operator
//! - Property path operators
//! - Query form, solution modifiers and aggregates
//!
//! Parsing query text and exporting histograms as RDF happen outside this crate.

pub mod config;
pub mod feature_extractor;
pub mod sparql_syntax;

pub use feature_extractor::{extract_features, extract_features_checked, FeatureHistogram, FeatureTag};
