//! Predicate matcher
//!
//! Classifies a hypothesis type against the recognised predicate shapes by
//! head constant and exact arity. Every shape is tested independently, in
//! `PredicateShape::ALL` order; a term that fits none yields nothing.

use crate::ir::{Fact, PredicateShape};
use crate::term::Expr;

/// Test `ty` against a single shape, extracting operands in declared order
pub fn match_shape(shape: PredicateShape, ty: &Expr) -> Option<Fact<&Expr>> {
    if ty.head_const() != Some(shape.head()) || ty.arity() != shape.arity() {
        return None;
    }

    let (_, args) = ty.app_fn_args();
    let fact = match (shape, args.as_slice()) {
        (PredicateShape::OnLine, [a, l]) => Fact::OnLine(*a, *l),
        (PredicateShape::Between, [a, b, c]) => Fact::Between(*a, *b, *c),
        (PredicateShape::OnCircle, [a, c]) => Fact::OnCircle(*a, *c),
        (PredicateShape::CenterCircle, [a, c]) => Fact::CenterCircle(*a, *c),
        _ => return None,
    };
    Some(fact)
}

/// All shapes matched by `ty`, in check order
pub fn match_predicates(ty: &Expr) -> Vec<Fact<&Expr>> {
    PredicateShape::ALL
        .iter()
        .filter_map(|&shape| match_shape(shape, ty))
        .collect()
}
