//! SPARQL syntax tree consumed by the feature extractor.
//!
//! Parsing query text is done elsewhere; this module only defines the typed
//! tree a parser hands over. Every type is serde-enabled so trees can be
//! exchanged as JSON between processes.

pub mod ast;

pub use ast::{
    Aggregator, DatasetDescription, Element, Expression, FunctionCall, InlineData, Literal, Path,
    PathPredicate, Query, QueryForm, SortCondition, SortDirection, Term, TriplePath,
    TriplePattern,
};
