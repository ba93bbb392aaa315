//! Feature vocabulary
//!
//! Fixed tag strings are part of the export contract: downstream RDF consumers
//! resolve them against the vocabulary namespace, so they must never change.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::errors::FeatureTagError;
use super::tag_naming::{
    normalize_aggregate_name, normalize_function_name, AGGREGATE_TAG_PREFIX, FUNCTION_TAG_PREFIX,
};

/// Default vocabulary namespace tags are resolved against
pub const DEFAULT_NAMESPACE: &str = "http://lsq.aksw.org/vocab#";

/// One structural feature of a query
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureTag {
    // pattern elements
    TriplePattern,
    TriplePath,
    Union,
    Optional,
    Filter,
    Bind,
    Assign,
    Service,
    Exists,
    NotExists,
    Minus,
    NamedGraph,
    Group,
    Dataset,
    Values,
    SubQuery,
    Functions,
    // query forms
    Select,
    Construct,
    Describe,
    Ask,
    Unknown,
    // solution modifiers
    Distinct,
    Reduced,
    OrderBy,
    GroupBy,
    Limit,
    Offset,
    Aggregators,
    // path operators
    SeqPath,
    AltPath,
    InversePath,
    ZeroOrMorePath,
    OneOrMorePath,
    ZeroOrOnePath,
    NegPropSetPath,
    FixedLengthPath,
    ModPath,
    /// `fn-<name>`, name already normalized
    Function(String),
    /// `agg-<name>`, name already normalized
    Aggregate(String),
}

const FIXED_TAGS: &[(&str, FeatureTag)] = &[
    ("TriplePattern", FeatureTag::TriplePattern),
    ("TriplePath", FeatureTag::TriplePath),
    ("Union", FeatureTag::Union),
    ("Optional", FeatureTag::Optional),
    ("Filter", FeatureTag::Filter),
    ("Bind", FeatureTag::Bind),
    ("Assign", FeatureTag::Assign),
    ("Service", FeatureTag::Service),
    ("Exists", FeatureTag::Exists),
    ("NotExists", FeatureTag::NotExists),
    ("Minus", FeatureTag::Minus),
    ("NamedGraph", FeatureTag::NamedGraph),
    ("Group", FeatureTag::Group),
    ("Dataset", FeatureTag::Dataset),
    ("Values", FeatureTag::Values),
    ("SubQuery", FeatureTag::SubQuery),
    ("Functions", FeatureTag::Functions),
    ("Select", FeatureTag::Select),
    ("Construct", FeatureTag::Construct),
    ("Describe", FeatureTag::Describe),
    ("Ask", FeatureTag::Ask),
    ("Unknown", FeatureTag::Unknown),
    ("Distinct", FeatureTag::Distinct),
    ("Reduced", FeatureTag::Reduced),
    ("OrderBy", FeatureTag::OrderBy),
    ("GroupBy", FeatureTag::GroupBy),
    ("Limit", FeatureTag::Limit),
    ("Offset", FeatureTag::Offset),
    ("Aggregators", FeatureTag::Aggregators),
    ("SeqPath", FeatureTag::SeqPath),
    ("AltPath", FeatureTag::AltPath),
    ("InversePath", FeatureTag::InversePath),
    ("ZeroOrMorePath", FeatureTag::ZeroOrMorePath),
    ("OneOrMorePath", FeatureTag::OneOrMorePath),
    ("ZeroOrOnePath", FeatureTag::ZeroOrOnePath),
    ("NegPropSetPath", FeatureTag::NegPropSetPath),
    ("FixedLengthPath", FeatureTag::FixedLengthPath),
    ("ModPath", FeatureTag::ModPath),
];

// Reverse lookup for parsing tag strings back
lazy_static::lazy_static! {
    static ref TAGS_BY_NAME: HashMap<&'static str, FeatureTag> =
        FIXED_TAGS.iter().cloned().collect();
}

impl FeatureTag {
    /// Tag for a function, from its raw (un-encoded) name
    pub fn function(raw_name: &str) -> Self {
        FeatureTag::Function(normalize_function_name(raw_name))
    }

    /// Tag for an aggregate, from its raw name in any case
    pub fn aggregate(raw_name: &str) -> Self {
        FeatureTag::Aggregate(normalize_aggregate_name(raw_name))
    }

    /// Stable local name of the tag
    pub fn name(&self) -> Cow<'static, str> {
        let fixed = match self {
            FeatureTag::TriplePattern => "TriplePattern",
            FeatureTag::TriplePath => "TriplePath",
            FeatureTag::Union => "Union",
            FeatureTag::Optional => "Optional",
            FeatureTag::Filter => "Filter",
            FeatureTag::Bind => "Bind",
            FeatureTag::Assign => "Assign",
            FeatureTag::Service => "Service",
            FeatureTag::Exists => "Exists",
            FeatureTag::NotExists => "NotExists",
            FeatureTag::Minus => "Minus",
            FeatureTag::NamedGraph => "NamedGraph",
            FeatureTag::Group => "Group",
            FeatureTag::Dataset => "Dataset",
            FeatureTag::Values => "Values",
            FeatureTag::SubQuery => "SubQuery",
            FeatureTag::Functions => "Functions",
            FeatureTag::Select => "Select",
            FeatureTag::Construct => "Construct",
            FeatureTag::Describe => "Describe",
            FeatureTag::Ask => "Ask",
            FeatureTag::Unknown => "Unknown",
            FeatureTag::Distinct => "Distinct",
            FeatureTag::Reduced => "Reduced",
            FeatureTag::OrderBy => "OrderBy",
            FeatureTag::GroupBy => "GroupBy",
            FeatureTag::Limit => "Limit",
            FeatureTag::Offset => "Offset",
            FeatureTag::Aggregators => "Aggregators",
            FeatureTag::SeqPath => "SeqPath",
            FeatureTag::AltPath => "AltPath",
            FeatureTag::InversePath => "InversePath",
            FeatureTag::ZeroOrMorePath => "ZeroOrMorePath",
            FeatureTag::OneOrMorePath => "OneOrMorePath",
            FeatureTag::ZeroOrOnePath => "ZeroOrOnePath",
            FeatureTag::NegPropSetPath => "NegPropSetPath",
            FeatureTag::FixedLengthPath => "FixedLengthPath",
            FeatureTag::ModPath => "ModPath",
            FeatureTag::Function(name) => {
                return Cow::Owned(format!("{}{}", FUNCTION_TAG_PREFIX, name))
            }
            FeatureTag::Aggregate(name) => {
                return Cow::Owned(format!("{}{}", AGGREGATE_TAG_PREFIX, name))
            }
        };
        Cow::Borrowed(fixed)
    }

    /// Full IRI of the tag under `namespace`
    pub fn iri(&self, namespace: &str) -> String {
        format!("{}{}", namespace, self.name())
    }

    /// Whether this tag belongs to the closed vocabulary
    pub fn is_fixed(&self) -> bool {
        !matches!(self, FeatureTag::Function(_) | FeatureTag::Aggregate(_))
    }
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for FeatureTag {
    type Err = FeatureTagError;

    /// Parse a tag from its local name. Dynamic names are taken as already normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(tag) = TAGS_BY_NAME.get(s) {
            return Ok(tag.clone());
        }
        if let Some(name) = s.strip_prefix(FUNCTION_TAG_PREFIX) {
            if !name.is_empty() {
                return Ok(FeatureTag::Function(name.to_string()));
            }
        }
        if let Some(name) = s.strip_prefix(AGGREGATE_TAG_PREFIX) {
            if !name.is_empty() {
                return Ok(FeatureTag::Aggregate(name.to_string()));
            }
        }
        Err(FeatureTagError::UnknownTag(s.to_string()))
    }
}

impl Serialize for FeatureTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> Deserialize<'de> for FeatureTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
