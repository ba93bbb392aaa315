//! Query-level features that are not visible from the pattern tree

use crate::sparql_syntax::{Query, QueryForm};

use super::feature_tag::FeatureTag;
use super::histogram::FeatureHistogram;

/// Add form, solution-modifier and aggregate tags of `query` to `histogram`
pub fn augment(query: &Query, histogram: &mut FeatureHistogram) {
    let form_tag = match query.form {
        QueryForm::Select => FeatureTag::Select,
        QueryForm::Construct => FeatureTag::Construct,
        QueryForm::Describe => FeatureTag::Describe,
        QueryForm::Ask => FeatureTag::Ask,
        QueryForm::Unknown => FeatureTag::Unknown,
    };
    histogram.increment(form_tag);

    if query.distinct {
        histogram.increment(FeatureTag::Distinct);
    }
    if query.reduced {
        histogram.increment(FeatureTag::Reduced);
    }
    if !query.order_by.is_empty() {
        histogram.increment(FeatureTag::OrderBy);
    }
    if !query.group_by.is_empty() {
        histogram.increment(FeatureTag::GroupBy);
    }
    if query.limit.is_some() {
        histogram.increment(FeatureTag::Limit);
    }
    // OFFSET 0 is a no-op and is not counted
    if matches!(query.offset, Some(offset) if offset > 0) {
        histogram.increment(FeatureTag::Offset);
    }

    if !query.aggregators.is_empty() {
        histogram.increment(FeatureTag::Aggregators);
        for aggregator in &query.aggregators {
            histogram.increment(FeatureTag::aggregate(aggregator.name()));
        }
    }
}
