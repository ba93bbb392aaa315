//! Syntactic nesting depth of a query.
//!
//! Extraction recurses once per nesting level. Callers processing untrusted
//! logs can measure a tree here and reject it before extraction.

use crate::sparql_syntax::{Aggregator, Element, Expression, Path, PathPredicate, Query};

/// Deepest chain of nested elements, expressions and path operators in `query`
pub fn nesting_depth(query: &Query) -> usize {
    let pattern = query.pattern.as_ref().map_or(0, element_depth);
    let group_by = query.group_by.iter().map(expression_depth).max().unwrap_or(0);
    let order_by = query
        .order_by
        .iter()
        .map(|condition| expression_depth(&condition.expression))
        .max()
        .unwrap_or(0);
    let aggregators = query
        .aggregators
        .iter()
        .map(aggregator_depth)
        .max()
        .unwrap_or(0);

    pattern.max(group_by).max(order_by).max(aggregators)
}

pub fn element_depth(element: &Element) -> usize {
    let inner = match element {
        Element::TriplesBlock(_) | Element::Data(_) => 0,
        Element::PathBlock(items) => items
            .iter()
            .map(|item| match &item.predicate {
                PathPredicate::Term(_) => 0,
                PathPredicate::Path(path) => path_depth(path),
            })
            .max()
            .unwrap_or(0),
        Element::Filter(expr) | Element::Assign { expr, .. } | Element::Bind { expr, .. } => {
            expression_depth(expr)
        }
        Element::Union(children) | Element::Group(children) => {
            children.iter().map(element_depth).max().unwrap_or(0)
        }
        Element::Optional(inner)
        | Element::Exists(inner)
        | Element::NotExists(inner)
        | Element::Minus(inner) => element_depth(inner),
        Element::Dataset { pattern, .. }
        | Element::NamedGraph { pattern, .. }
        | Element::Service { pattern, .. } => element_depth(pattern),
        Element::SubQuery(query) => nesting_depth(query),
    };
    1 + inner
}

pub fn expression_depth(expr: &Expression) -> usize {
    let inner = match expr {
        Expression::Variable(_) | Expression::Constant(_) => 0,
        Expression::And(left, right) | Expression::Or(left, right) => {
            expression_depth(left).max(expression_depth(right))
        }
        Expression::Function(call) => call.args.iter().map(expression_depth).max().unwrap_or(0),
        Expression::Exists(pattern) | Expression::NotExists(pattern) => element_depth(pattern),
    };
    1 + inner
}

pub fn path_depth(path: &Path) -> usize {
    let inner = match path {
        Path::Link(_) | Path::NegatedPropertySet { .. } => 0,
        Path::Seq(left, right) | Path::Alt(left, right) => path_depth(left).max(path_depth(right)),
        Path::Inverse(inner)
        | Path::ZeroOrMore(inner)
        | Path::OneOrMore(inner)
        | Path::ZeroOrOne(inner) => path_depth(inner),
        Path::FixedLength { path, .. } | Path::Mod { path, .. } => path_depth(path),
    };
    1 + inner
}

fn aggregator_depth(aggregator: &Aggregator) -> usize {
    let inner = match aggregator {
        Aggregator::Count { expr, .. } => expr.as_ref().map_or(0, expression_depth),
        Aggregator::Sum { expr, .. }
        | Aggregator::Min { expr, .. }
        | Aggregator::Max { expr, .. }
        | Aggregator::Avg { expr, .. }
        | Aggregator::Sample { expr, .. }
        | Aggregator::GroupConcat { expr, .. } => expression_depth(expr),
        Aggregator::Custom { args, .. } => args.iter().map(expression_depth).max().unwrap_or(0),
    };
    1 + inner
}
