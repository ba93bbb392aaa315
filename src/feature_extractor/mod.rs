//! Structural feature extraction for SPARQL queries.
//!
//! Produces a histogram counting each syntactic construct of a query: pattern
//! elements, filter functions, property path operators, the query form,
//! solution modifiers and aggregates. The histogram is the query fingerprint
//! used by log analysis and RDF export.
//!
//! Extraction is a pure function of the syntax tree. Each call owns its
//! histogram, so independent queries can be processed in parallel without
//! coordination.

pub mod depth;
pub mod errors;
pub mod expression_decomposer;
pub mod feature_tag;
pub mod histogram;
pub mod path_decomposer;
pub mod pattern_visitor;
pub mod query_features;
pub mod tag_naming;

pub use errors::{ExtractionError, FeatureTagError};
pub use feature_tag::FeatureTag;
pub use histogram::FeatureHistogram;
pub use pattern_visitor::{extract_pattern_features, FeatureExtractor};

use crate::config::ExtractorConfig;
use crate::sparql_syntax::Query;

/// Feature histogram of `query`: pattern features plus query-level features
pub fn extract_features(query: &Query) -> FeatureHistogram {
    let mut histogram = extract_pattern_features(query.pattern.as_ref());
    query_features::augment(query, &mut histogram);

    log::debug!(
        "Extracted {} distinct features ({} occurrences)",
        histogram.len(),
        histogram.total()
    );
    histogram
}

/// [`extract_features`], after rejecting queries nested deeper than the configured limit
pub fn extract_features_checked(
    query: &Query,
    config: &ExtractorConfig,
) -> Result<FeatureHistogram, ExtractionError> {
    let depth = depth::nesting_depth(query);
    let limit = config.max_nesting_depth as usize;
    if depth > limit {
        return Err(ExtractionError::NestingTooDeep { depth, limit });
    }
    Ok(extract_features(query))
}
