use std::fmt;

use serde::{Deserialize, Serialize};

/// Query form as reported by the parser
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum QueryForm {
    Select,
    Construct,
    Describe,
    Ask,
    /// Anything the parser could not classify
    Unknown,
}

/// A complete parsed query, as handed over by the external parser.
///
/// Only the parts that matter for feature extraction are modelled; projection
/// lists, templates and prologue declarations are not carried.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Query {
    pub form: QueryForm,
    #[serde(default)]
    pub distinct: bool,
    #[serde(default)]
    pub reduced: bool,
    /// `None` for queries without a WHERE body
    #[serde(default)]
    pub pattern: Option<Element>,
    #[serde(default)]
    pub order_by: Vec<SortCondition>,
    #[serde(default)]
    pub group_by: Vec<Expression>,
    /// `None` means no LIMIT
    #[serde(default)]
    pub limit: Option<u64>,
    /// `None` means no OFFSET
    #[serde(default)]
    pub offset: Option<u64>,
    /// Aggregates used anywhere in the projection, HAVING or ORDER BY
    #[serde(default)]
    pub aggregators: Vec<Aggregator>,
}

impl Query {
    /// A bare query of the given form over `pattern`, without modifiers
    pub fn new(form: QueryForm, pattern: Option<Element>) -> Self {
        Self {
            form,
            distinct: false,
            reduced: false,
            pattern,
            order_by: Vec::new(),
            group_by: Vec::new(),
            limit: None,
            offset: None,
            aggregators: Vec::new(),
        }
    }

    pub fn select(pattern: Element) -> Self {
        Self::new(QueryForm::Select, Some(pattern))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SortCondition {
    pub expression: Expression,
    pub direction: SortDirection,
}

/// RDF literal with optional language tag or datatype
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub datatype: Option<String>,
}

impl Literal {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }
}

/// RDF term in subject, predicate or object position
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(String),
    Iri(String),
    Literal(Literal),
    BlankNode(String),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct TriplePattern {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl TriplePattern {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// Predicate position of a path-block item: either a plain term or a property path
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub enum PathPredicate {
    Term(Term),
    Path(Path),
}

/// One item of a path block: `subject predicate-or-path object`
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct TriplePath {
    pub subject: Term,
    pub predicate: PathPredicate,
    pub object: Term,
}

impl TriplePath {
    pub fn new(subject: Term, path: Path, object: Term) -> Self {
        Self {
            subject,
            predicate: PathPredicate::Path(path),
            object,
        }
    }

    /// The item as a plain triple, if its predicate is a term or a bare link.
    ///
    /// `?s ex:p ?o` written in a path block is still a triple pattern; any
    /// operator (even a lone `^ex:p`) makes it a genuine path.
    pub fn as_triple(&self) -> Option<TriplePattern> {
        let predicate = match &self.predicate {
            PathPredicate::Term(term) => term.clone(),
            PathPredicate::Path(Path::Link(iri)) => Term::Iri(iri.clone()),
            PathPredicate::Path(_) => return None,
        };
        Some(TriplePattern::new(
            self.subject.clone(),
            predicate,
            self.object.clone(),
        ))
    }
}

impl From<TriplePattern> for TriplePath {
    fn from(triple: TriplePattern) -> Self {
        Self {
            subject: triple.subject,
            predicate: PathPredicate::Term(triple.predicate),
            object: triple.object,
        }
    }
}

/// Property path expression
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub enum Path {
    /// Direct predicate link `ex:p`
    Link(String),
    /// `^path`
    Inverse(Box<Path>),
    /// `path1 / path2`
    Seq(Box<Path>, Box<Path>),
    /// `path1 | path2`
    Alt(Box<Path>, Box<Path>),
    /// `path*`
    ZeroOrMore(Box<Path>),
    /// `path+`
    OneOrMore(Box<Path>),
    /// `path?`
    ZeroOrOne(Box<Path>),
    /// `!(ex:p1 | ^ex:p2 | ...)`
    NegatedPropertySet {
        #[serde(default)]
        forward: Vec<String>,
        #[serde(default)]
        backward: Vec<String>,
    },
    /// `path{n}`
    FixedLength { path: Box<Path>, length: u64 },
    /// `path{min,max}`, either bound optional
    Mod {
        path: Box<Path>,
        min: Option<u64>,
        max: Option<u64>,
    },
}

impl Path {
    pub fn link(iri: impl Into<String>) -> Self {
        Path::Link(iri.into())
    }

    pub fn seq(left: Path, right: Path) -> Self {
        Path::Seq(Box::new(left), Box::new(right))
    }

    pub fn alt(left: Path, right: Path) -> Self {
        Path::Alt(Box::new(left), Box::new(right))
    }

    pub fn inverse(path: Path) -> Self {
        Path::Inverse(Box::new(path))
    }

    pub fn zero_or_more(path: Path) -> Self {
        Path::ZeroOrMore(Box::new(path))
    }

    pub fn one_or_more(path: Path) -> Self {
        Path::OneOrMore(Box::new(path))
    }

    pub fn zero_or_one(path: Path) -> Self {
        Path::ZeroOrOne(Box::new(path))
    }
}

/// Function application inside an expression.
///
/// A parser fills in whichever identifiers it knows: built-in operators carry
/// a `symbol` (e.g. `gt`) and an `op_name` (e.g. `>`), extension functions
/// carry an `iri`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub iri: Option<String>,
    #[serde(default)]
    pub op_name: Option<String>,
    #[serde(default)]
    pub args: Vec<Expression>,
}

impl FunctionCall {
    /// Built-in function or operator, e.g. `builtin("gt", ">", args)`
    pub fn builtin(symbol: &str, op_name: &str, args: Vec<Expression>) -> Self {
        Self {
            symbol: Some(symbol.to_string()),
            iri: None,
            op_name: Some(op_name.to_string()),
            args,
        }
    }

    /// Extension function identified only by its IRI
    pub fn custom(iri: &str, args: Vec<Expression>) -> Self {
        Self {
            symbol: None,
            iri: Some(iri.to_string()),
            op_name: None,
            args,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Expression {
    Variable(String),
    Constant(Term),
    /// `left && right`
    And(Box<Expression>, Box<Expression>),
    /// `left || right`
    Or(Box<Expression>, Box<Expression>),
    Function(FunctionCall),
    /// `EXISTS { ... }` used as an expression
    Exists(Box<Element>),
    /// `NOT EXISTS { ... }` used as an expression
    NotExists(Box<Element>),
}

impl Expression {
    pub fn var(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn integer(value: i64) -> Self {
        Expression::Constant(Term::Literal(Literal::typed(
            value.to_string(),
            "http://www.w3.org/2001/XMLSchema#integer",
        )))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    pub fn builtin(symbol: &str, op_name: &str, args: Vec<Expression>) -> Self {
        Expression::Function(FunctionCall::builtin(symbol, op_name, args))
    }
}

/// Aggregate function used by a query
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Aggregator {
    /// `COUNT(*)` when `expr` is `None`
    Count {
        #[serde(default)]
        distinct: bool,
        #[serde(default)]
        expr: Option<Expression>,
    },
    Sum {
        #[serde(default)]
        distinct: bool,
        expr: Expression,
    },
    Min {
        #[serde(default)]
        distinct: bool,
        expr: Expression,
    },
    Max {
        #[serde(default)]
        distinct: bool,
        expr: Expression,
    },
    Avg {
        #[serde(default)]
        distinct: bool,
        expr: Expression,
    },
    Sample {
        #[serde(default)]
        distinct: bool,
        expr: Expression,
    },
    GroupConcat {
        #[serde(default)]
        distinct: bool,
        expr: Expression,
        #[serde(default)]
        separator: Option<String>,
    },
    /// Extension aggregate identified by IRI
    Custom {
        iri: String,
        #[serde(default)]
        distinct: bool,
        #[serde(default)]
        args: Vec<Expression>,
    },
}

impl Aggregator {
    /// Aggregate name as written in query text (`COUNT`, `GROUP_CONCAT`, or the IRI)
    pub fn name(&self) -> &str {
        match self {
            Aggregator::Count { .. } => "COUNT",
            Aggregator::Sum { .. } => "SUM",
            Aggregator::Min { .. } => "MIN",
            Aggregator::Max { .. } => "MAX",
            Aggregator::Avg { .. } => "AVG",
            Aggregator::Sample { .. } => "SAMPLE",
            Aggregator::GroupConcat { .. } => "GROUP_CONCAT",
            Aggregator::Custom { iri, .. } => iri,
        }
    }
}

/// Inline data (`VALUES`) table
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct InlineData {
    pub variables: Vec<String>,
    /// One row per binding, `None` for UNDEF
    #[serde(default)]
    pub rows: Vec<Vec<Option<Term>>>,
}

/// `FROM` / `FROM NAMED` description attached to a pattern
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct DatasetDescription {
    #[serde(default)]
    pub default_graphs: Vec<String>,
    #[serde(default)]
    pub named_graphs: Vec<String>,
}

/// Graph pattern syntax element
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Element {
    /// Basic graph pattern: plain triples only
    TriplesBlock(Vec<TriplePattern>),
    /// Triples and property paths
    PathBlock(Vec<TriplePath>),
    Filter(Expression),
    /// `LET (?var := expr)`
    Assign { var: String, expr: Expression },
    /// `BIND (expr AS ?var)`
    Bind { var: String, expr: Expression },
    /// `VALUES`
    Data(InlineData),
    Union(Vec<Element>),
    Optional(Box<Element>),
    /// `{ ... }`
    Group(Vec<Element>),
    Dataset {
        dataset: DatasetDescription,
        pattern: Box<Element>,
    },
    /// `GRAPH <g> { ... }`
    NamedGraph { graph: Term, pattern: Box<Element> },
    Service {
        endpoint: Term,
        #[serde(default)]
        silent: bool,
        pattern: Box<Element>,
    },
    /// Standalone `EXISTS { ... }` element
    Exists(Box<Element>),
    /// Standalone `NOT EXISTS { ... }` element
    NotExists(Box<Element>),
    Minus(Box<Element>),
    SubQuery(Box<Query>),
}

impl Element {
    pub fn group(elements: Vec<Element>) -> Self {
        Element::Group(elements)
    }

    pub fn optional(element: Element) -> Self {
        Element::Optional(Box::new(element))
    }

    pub fn minus(element: Element) -> Self {
        Element::Minus(Box::new(element))
    }

    pub fn sub_query(query: Query) -> Self {
        Element::SubQuery(Box::new(query))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
