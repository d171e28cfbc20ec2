//! Display-string oracle for terms
//!
//! Entity keys are whatever the printer produces, so two terms that print the
//! same are the same diagram entity.

use super::{Expr, MAX_DEPTH};
use thiserror::Error;

/// Errors raised by a pretty printer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrettyError {
    #[error("cannot display term {term}: {reason}")]
    Unprintable { term: String, reason: String },
}

/// Turns a term into its display string
pub trait PrettyPrinter: Send + Sync {
    fn pretty(&self, expr: &Expr) -> Result<String, PrettyError>;
}

/// Prints names verbatim and flattens applications into one identifier
///
/// `mid a b` prints as `mid_a_b`, so compound operands still fit the
/// `Kind key` and `Shape(a, b)` lines of a substance program. Distinct terms
/// can flatten to the same key (`f (g a)` and `f g a`) and then share an
/// entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPrinter;

impl PlainPrinter {
    /// `depth` counts applications in argument position, like parentheses
    fn write(expr: &Expr, depth: usize, out: &mut String) -> Result<(), PrettyError> {
        match expr {
            Expr::Const(name) | Expr::Var(name) => out.push_str(name),
            Expr::App(_, _) if depth > MAX_DEPTH => {
                return Err(PrettyError::Unprintable {
                    term: out.clone(),
                    reason: format!("nested deeper than {}", MAX_DEPTH),
                })
            }
            Expr::App(_, _) => {
                let (head, args) = expr.app_fn_args();
                Self::write(head, depth, out)?;
                for arg in args {
                    out.push('_');
                    Self::write(arg, depth + 1, out)?;
                }
            }
        }
        Ok(())
    }
}

impl PrettyPrinter for PlainPrinter {
    fn pretty(&self, expr: &Expr) -> Result<String, PrettyError> {
        let mut out = String::new();
        Self::write(expr, 0, &mut out)?;
        Ok(out)
    }
}
