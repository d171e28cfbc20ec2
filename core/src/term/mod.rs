//! Term model for hypothesis types
//!
//! The logic engine hands over elaborated terms; only their spine matters
//! here, so they are kept as a small closed expression tree:
//! - **Const**: a global constant such as a predicate name
//! - **Var**: a local variable bound in the goal context
//! - **App**: curried application of one term to another

mod parse;
mod pretty;

pub use parse::ParseError;
pub use pretty::{PlainPrinter, PrettyError, PrettyPrinter};

use serde::{Deserialize, Serialize};

/// Deepest argument nesting the parser and printer accept
pub const MAX_DEPTH: usize = 128;

/// Elaborated term, the type of a hypothesis or one of its operands
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Expr {
    /// Global constant
    Const(String),

    /// Local variable
    Var(String),

    /// Function application `f a`
    App(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn constant(name: impl Into<String>) -> Self {
        Expr::Const(name.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn app(f: Expr, arg: Expr) -> Self {
        Expr::App(Box::new(f), Box::new(arg))
    }

    /// Apply a constant head to a list of arguments, left to right
    pub fn apply(head: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        args.into_iter()
            .fold(Expr::constant(head), |f, arg| Expr::app(f, arg))
    }

    /// Split an application spine into its head and arguments in order
    pub fn app_fn_args(&self) -> (&Expr, Vec<&Expr>) {
        let mut args = Vec::new();
        let mut head = self;
        while let Expr::App(f, arg) = head {
            args.push(arg.as_ref());
            head = f.as_ref();
        }
        args.reverse();
        (head, args)
    }

    /// Head symbol when the spine starts with a constant
    pub fn head_const(&self) -> Option<&str> {
        match self.app_fn_args().0 {
            Expr::Const(name) => Some(name),
            _ => None,
        }
    }

    /// Number of arguments applied to the head
    pub fn arity(&self) -> usize {
        let mut n = 0;
        let mut head = self;
        while let Expr::App(f, _) = head {
            n += 1;
            head = f.as_ref();
        }
        n
    }
}
