//! Builders for the query trees used across integration tests

#![allow(dead_code)]

use sparql_features::sparql_syntax::{
    Aggregator, Element, Expression, InlineData, Path, Query, Term, TriplePath, TriplePattern,
};

pub const EX: &str = "http://example.org/";

pub fn ex(local: &str) -> String {
    format!("{}{}", EX, local)
}

pub fn triple(s: &str, p: &str, o: &str) -> TriplePattern {
    TriplePattern::new(Term::var(s), Term::var(p), Term::var(o))
}

pub fn bgp(triples: Vec<TriplePattern>) -> Element {
    Element::TriplesBlock(triples)
}

pub fn spo() -> Element {
    bgp(vec![triple("s", "p", "o")])
}

pub fn path_item(path: Path) -> TriplePath {
    TriplePath::new(Term::var("s"), path, Term::var("o"))
}

pub fn gt(var: &str, value: i64) -> Expression {
    Expression::builtin(
        "gt",
        ">",
        vec![Expression::var(var), Expression::integer(value)],
    )
}

pub fn values(var: &str, iris: &[&str]) -> Element {
    Element::Data(InlineData {
        variables: vec![var.to_string()],
        rows: iris.iter().map(|iri| vec![Some(Term::iri(ex(iri)))]).collect(),
    })
}

pub fn count_star() -> Aggregator {
    Aggregator::Count {
        distinct: false,
        expr: None,
    }
}

pub fn sum(var: &str) -> Aggregator {
    Aggregator::Sum {
        distinct: false,
        expr: Expression::var(var),
    }
}

/// A query exercising most element kinds; `reverse_siblings` flips every sibling list
pub fn kitchen_sink(reverse_siblings: bool) -> Query {
    let mut union_branches = vec![spo(), Element::group(vec![spo(), spo()])];
    let mut path_items = vec![
        path_item(Path::link(ex("name"))),
        path_item(Path::seq(Path::link(ex("knows")), Path::link(ex("name")))),
    ];
    if reverse_siblings {
        union_branches.reverse();
        path_items.reverse();
    }

    let mut children = vec![
        spo(),
        Element::PathBlock(path_items),
        Element::Filter(Expression::and(gt("o", 5), gt("x", 1))),
        Element::optional(bgp(vec![triple("s", "q", "x")])),
        Element::Union(union_branches),
        Element::minus(spo()),
        Element::Bind {
            var: "y".to_string(),
            expr: Expression::integer(3),
        },
        values("s", &["a", "b"]),
    ];
    if reverse_siblings {
        children.reverse();
    }
    Query::select(Element::group(children))
}
