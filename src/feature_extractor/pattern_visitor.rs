//! Graph pattern traversal
//!
//! Walks a query body depth-first and counts each construct it meets. Every
//! element kind is matched explicitly, so adding a variant to [`Element`]
//! fails the build here until its counting rule is decided.
//!
//! EXISTS and NOT EXISTS appear in two shapes:
//! - as standalone elements they count their own tag and the embedded
//!   pattern is walked like any other child;
//! - inside a FILTER they are function applications (`fn-exists`,
//!   `fn-notexists`) and the embedded pattern is not walked.

use crate::sparql_syntax::{Element, Expression, PathPredicate, TriplePath};

use super::expression_decomposer::{function_name, is_function, linearize};
use super::feature_tag::FeatureTag;
use super::histogram::FeatureHistogram;
use super::path_decomposer::decompose_path;

/// Single-use visitor owning the histogram of one traversal
#[derive(Debug, Default)]
pub struct FeatureExtractor {
    histogram: FeatureHistogram,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `element` and everything nested below it
    pub fn walk(&mut self, element: &Element) {
        match element {
            Element::TriplesBlock(triples) => {
                // one per triple; an empty block (VALUES-only bodies) adds no key
                if !triples.is_empty() {
                    self.histogram
                        .add(FeatureTag::TriplePattern, triples.len() as u64);
                }
            }
            Element::PathBlock(items) => {
                for item in items {
                    self.visit_path_item(item);
                }
            }
            Element::Filter(expr) => {
                self.histogram.increment(FeatureTag::Filter);
                self.visit_filter_expression(expr);
            }
            Element::Assign { .. } => {
                self.histogram.increment(FeatureTag::Assign);
            }
            Element::Bind { .. } => {
                self.histogram.increment(FeatureTag::Bind);
            }
            Element::Data(_) => {
                self.histogram.increment(FeatureTag::Values);
            }
            Element::Union(branches) => {
                self.histogram.increment(FeatureTag::Union);
                for branch in branches {
                    self.walk(branch);
                }
            }
            Element::Optional(inner) => {
                self.histogram.increment(FeatureTag::Optional);
                self.walk(inner);
            }
            Element::Group(elements) => {
                self.histogram.increment(FeatureTag::Group);
                for child in elements {
                    self.walk(child);
                }
            }
            Element::Dataset { pattern, .. } => {
                self.histogram.increment(FeatureTag::Dataset);
                self.walk(pattern);
            }
            Element::NamedGraph { pattern, .. } => {
                self.histogram.increment(FeatureTag::NamedGraph);
                self.walk(pattern);
            }
            Element::Service { pattern, .. } => {
                self.histogram.increment(FeatureTag::Service);
                self.walk(pattern);
            }
            Element::Exists(inner) => {
                self.histogram.increment(FeatureTag::Exists);
                self.walk(inner);
            }
            Element::NotExists(inner) => {
                self.histogram.increment(FeatureTag::NotExists);
                self.walk(inner);
            }
            Element::Minus(inner) => {
                self.histogram.increment(FeatureTag::Minus);
                self.walk(inner);
            }
            Element::SubQuery(query) => {
                self.histogram.increment(FeatureTag::SubQuery);
                // flattened into the same histogram; the subquery's own
                // modifiers are not counted
                if let Some(pattern) = &query.pattern {
                    self.walk(pattern);
                }
            }
        }
    }

    fn visit_path_item(&mut self, item: &TriplePath) {
        if item.as_triple().is_some() {
            // a path that is just a predicate is a triple pattern
            self.histogram.increment(FeatureTag::TriplePattern);
            return;
        }

        self.histogram.increment(FeatureTag::TriplePath);
        if let PathPredicate::Path(path) = &item.predicate {
            self.histogram.merge(decompose_path(path));
        }
    }

    fn visit_filter_expression(&mut self, expr: &Expression) {
        for part in linearize(expr) {
            self.histogram.increment(FeatureTag::Functions);

            if !is_function(part) {
                continue;
            }
            match function_name(part) {
                Some(name) => {
                    self.histogram.increment(FeatureTag::function(name));
                }
                None => {
                    log::warn!(
                        "Could not obtain any of symbol/iri/op name for function {}",
                        part
                    );
                }
            }
        }
    }

    pub fn into_histogram(self) -> FeatureHistogram {
        self.histogram
    }
}

/// Histogram of the constructs in `pattern`; an absent pattern yields an empty one
pub fn extract_pattern_features(pattern: Option<&Element>) -> FeatureHistogram {
    let Some(pattern) = pattern else {
        return FeatureHistogram::new();
    };
    let mut extractor = FeatureExtractor::new();
    extractor.walk(pattern);
    extractor.into_histogram()
}
