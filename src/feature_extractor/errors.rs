use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeatureTagError {
    #[error("Unknown feature tag '{0}'")]
    UnknownTag(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtractionError {
    #[error(
        "Query nesting depth {depth} exceeds the configured limit of {limit}. Reject or simplify the query before extraction."
    )]
    NestingTooDeep { depth: usize, limit: usize },
}
