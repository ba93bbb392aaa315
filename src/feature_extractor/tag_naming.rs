//! Tag names for functions and aggregates.
//!
//! Function and aggregate identifiers are free-form (operator symbols, full
//! IRIs, extension names), but tag strings end up as IRI local names in the
//! exported RDF. Everything here is pure and total: the same input always
//! yields the same tag name, and every input yields one.

use crate::sparql_syntax::FunctionCall;

/// Prefix of tags derived from function names
pub const FUNCTION_TAG_PREFIX: &str = "fn-";

/// Prefix of tags derived from aggregate names
pub const AGGREGATE_TAG_PREFIX: &str = "agg-";

/// Pick the identifier a function is counted under.
///
/// Preference order is symbol, then IRI, then operator name. Empty strings are
/// treated as missing.
pub fn resolve_function_name(function: &FunctionCall) -> Option<&str> {
    [&function.symbol, &function.iri, &function.op_name]
        .into_iter()
        .filter_map(|candidate| candidate.as_deref())
        .find(|name| !name.is_empty())
}

/// Percent-encode a raw function identifier into a tag-safe name
pub fn normalize_function_name(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Lower-case and percent-encode an aggregate name
pub fn normalize_aggregate_name(raw: &str) -> String {
    urlencoding::encode(&raw.to_lowercase()).into_owned()
}
