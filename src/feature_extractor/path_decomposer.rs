//! Property path classification
//!
//! Every operator node of a path counts once under its own tag. Links are
//! leaves and add nothing: the enclosing triple path is already counted by
//! the pattern visitor.

use crate::sparql_syntax::Path;

use super::feature_tag::FeatureTag;
use super::histogram::FeatureHistogram;

/// Operator counts for `path`, to be merged by the caller
pub fn decompose_path(path: &Path) -> FeatureHistogram {
    let mut histogram = FeatureHistogram::new();
    collect_path_features(path, &mut histogram);
    histogram
}

fn collect_path_features(path: &Path, histogram: &mut FeatureHistogram) {
    match path {
        Path::Link(_) => {}
        Path::Inverse(inner) => {
            histogram.increment(FeatureTag::InversePath);
            collect_path_features(inner, histogram);
        }
        Path::Seq(left, right) => {
            histogram.increment(FeatureTag::SeqPath);
            collect_path_features(left, histogram);
            collect_path_features(right, histogram);
        }
        Path::Alt(left, right) => {
            histogram.increment(FeatureTag::AltPath);
            collect_path_features(left, histogram);
            collect_path_features(right, histogram);
        }
        Path::ZeroOrMore(inner) => {
            histogram.increment(FeatureTag::ZeroOrMorePath);
            collect_path_features(inner, histogram);
        }
        Path::OneOrMore(inner) => {
            histogram.increment(FeatureTag::OneOrMorePath);
            collect_path_features(inner, histogram);
        }
        Path::ZeroOrOne(inner) => {
            histogram.increment(FeatureTag::ZeroOrOnePath);
            collect_path_features(inner, histogram);
        }
        // the set is the unit, not its members
        Path::NegatedPropertySet { .. } => {
            histogram.increment(FeatureTag::NegPropSetPath);
        }
        Path::FixedLength { path: inner, .. } => {
            histogram.increment(FeatureTag::FixedLengthPath);
            collect_path_features(inner, histogram);
        }
        Path::Mod { path: inner, .. } => {
            histogram.increment(FeatureTag::ModPath);
            collect_path_features(inner, histogram);
        }
    }
}
