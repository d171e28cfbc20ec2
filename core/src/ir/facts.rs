//! Geometric predicate shapes and facts
//!
//! A fact is one predicate instance. It is generic over its operands so the
//! same shape carries matched sub-terms first and entity keys afterwards.

use super::entities::EntityKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The recognised predicate shapes, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PredicateShape {
    OnLine,
    Between,
    OnCircle,
    CenterCircle,
}

impl PredicateShape {
    /// Every shape in check order
    pub const ALL: [PredicateShape; 4] = [
        PredicateShape::OnLine,
        PredicateShape::Between,
        PredicateShape::OnCircle,
        PredicateShape::CenterCircle,
    ];

    /// Head constant of the predicate declaration
    pub fn head(&self) -> &'static str {
        match self {
            PredicateShape::OnLine => "OnLine",
            PredicateShape::Between => "Between",
            PredicateShape::OnCircle => "OnCircle",
            PredicateShape::CenterCircle => "CenterCircle",
        }
    }

    /// Operand kinds in declared argument order
    pub fn signature(&self) -> &'static [EntityKind] {
        match self {
            PredicateShape::OnLine => &[EntityKind::Point, EntityKind::Line],
            PredicateShape::Between => &[EntityKind::Point, EntityKind::Point, EntityKind::Point],
            PredicateShape::OnCircle => &[EntityKind::Point, EntityKind::Circle],
            PredicateShape::CenterCircle => &[EntityKind::Point, EntityKind::Circle],
        }
    }

    pub fn arity(&self) -> usize {
        self.signature().len()
    }
}

impl fmt::Display for PredicateShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.head())
    }
}

/// One predicate instance over operands of type `T`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fact<T> {
    /// Second point lies strictly between the first and third
    Between(T, T, T),

    /// A point lies on a line
    OnLine(T, T),

    /// A point lies on a circle
    OnCircle(T, T),

    /// A point is the center of a circle
    CenterCircle(T, T),
}

impl<T> Fact<T> {
    pub fn shape(&self) -> PredicateShape {
        match self {
            Fact::Between(_, _, _) => PredicateShape::Between,
            Fact::OnLine(_, _) => PredicateShape::OnLine,
            Fact::OnCircle(_, _) => PredicateShape::OnCircle,
            Fact::CenterCircle(_, _) => PredicateShape::CenterCircle,
        }
    }

    /// Operands in declared argument order
    pub fn operands(&self) -> Vec<&T> {
        match self {
            Fact::Between(a, b, c) => vec![a, b, c],
            Fact::OnLine(a, l) => vec![a, l],
            Fact::OnCircle(a, c) | Fact::CenterCircle(a, c) => vec![a, c],
        }
    }

    /// Operands paired with the entity kind their position declares
    pub fn typed_operands(&self) -> impl Iterator<Item = (EntityKind, &T)> {
        self.shape()
            .signature()
            .iter()
            .copied()
            .zip(self.operands())
    }

    /// Map every operand, stopping at the first failure
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&T) -> Result<U, E>) -> Result<Fact<U>, E> {
        Ok(match self {
            Fact::Between(a, b, c) => Fact::Between(f(a)?, f(b)?, f(c)?),
            Fact::OnLine(a, l) => Fact::OnLine(f(a)?, f(l)?),
            Fact::OnCircle(a, c) => Fact::OnCircle(f(a)?, f(c)?),
            Fact::CenterCircle(a, c) => Fact::CenterCircle(f(a)?, f(c)?),
        })
    }
}

/// Renders the fact line of the substance program: `Shape(k1, k2, ...)`
impl<T: fmt::Display> fmt::Display for Fact<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.shape())?;
        for (i, operand) in self.operands().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", operand)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_line_format() {
        let between = Fact::Between("a", "b", "c");
        assert_eq!(between.to_string(), "Between(a, b, c)");

        let on_line = Fact::OnLine("a", "L");
        assert_eq!(on_line.to_string(), "OnLine(a, L)");

        let center = Fact::CenterCircle("b", "C");
        assert_eq!(center.to_string(), "CenterCircle(b, C)");
    }

    #[test]
    fn test_typed_operands_follow_signature() {
        let fact = Fact::OnCircle("a", "C");
        let typed: Vec<_> = fact.typed_operands().collect();

        assert_eq!(typed, vec![(EntityKind::Point, &"a"), (EntityKind::Circle, &"C")]);
    }

    #[test]
    fn test_shape_arity_matches_operands() {
        let facts = [
            Fact::Between(1, 2, 3),
            Fact::OnLine(1, 2),
            Fact::OnCircle(1, 2),
            Fact::CenterCircle(1, 2),
        ];

        for fact in &facts {
            assert_eq!(fact.shape().arity(), fact.operands().len());
        }
    }

    #[test]
    fn test_try_map_propagates_failure() {
        let fact = Fact::OnLine(1, 2);

        let doubled: Result<Fact<i32>, ()> = fact.try_map(|x| Ok(x * 2));
        assert_eq!(doubled, Ok(Fact::OnLine(2, 4)));

        let failed: Result<Fact<i32>, &str> =
            fact.try_map(|x| if *x == 2 { Err("two") } else { Ok(*x) });
        assert_eq!(failed, Err("two"));
    }
}
