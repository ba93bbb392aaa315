//! Filter expression decomposition
//!
//! A filter condition is flattened along its logical connectives so that
//! `FILTER(?a > 1 && regex(?b, "x"))` is seen as two function applications,
//! the same as two separate filters would be.

use crate::sparql_syntax::Expression;

use super::tag_naming::resolve_function_name;

/// Pre-order list of the operands of `&&` / `||` chains in `expr`.
///
/// Connective nodes themselves are not listed; every other node, including
/// `!` and comparisons, is listed once as a whole. A non-connective input
/// yields itself, so the result is never empty.
pub fn linearize(expr: &Expression) -> Vec<&Expression> {
    let mut out = Vec::new();
    collect_operands(expr, &mut out);
    out
}

fn collect_operands<'e>(expr: &'e Expression, out: &mut Vec<&'e Expression>) {
    match expr {
        Expression::And(left, right) | Expression::Or(left, right) => {
            collect_operands(left, out);
            collect_operands(right, out);
        }
        Expression::Variable(_)
        | Expression::Constant(_)
        | Expression::Function(_)
        | Expression::Exists(_)
        | Expression::NotExists(_) => out.push(expr),
    }
}

/// Whether `expr` is a function application
pub fn is_function(expr: &Expression) -> bool {
    match expr {
        Expression::Function(_) | Expression::Exists(_) | Expression::NotExists(_) => true,
        Expression::Variable(_)
        | Expression::Constant(_)
        | Expression::And(..)
        | Expression::Or(..) => false,
    }
}

/// Raw name of the function applied by `expr`.
///
/// `None` both for non-functions and for functions without any usable
/// identifier; use [`is_function`] to tell them apart.
pub fn function_name(expr: &Expression) -> Option<&str> {
    match expr {
        Expression::Function(call) => resolve_function_name(call),
        Expression::Exists(_) => Some("exists"),
        Expression::NotExists(_) => Some("notexists"),
        Expression::Variable(_)
        | Expression::Constant(_)
        | Expression::And(..)
        | Expression::Or(..) => None,
    }
}
