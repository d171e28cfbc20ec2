//! Intermediate representation for diagram synthesis
//!
//! - **hypothesis**: named, typed assumptions and the ordered view over them
//! - **goal**: goal contexts and the shared read-only proof snapshot
//! - **facts**: the four predicate shapes and fact instances
//! - **entities**: key-deduplicated Point/Line/Circle registry
//! - **program**: the substance program lines and their text form
//!
//! # Example
//!
//! ```rust
//! use euclid_diagram_core::ir::*;
//! use euclid_diagram_core::term::Expr;
//!
//! let mut registry = EntityRegistry::new();
//! let mut program = DiagramProgram::new();
//!
//! for key in ["a", "L"] {
//!     let kind = if key == "a" { EntityKind::Point } else { EntityKind::Line };
//!     let (_, is_new) = registry.insert(key, &Expr::var(key), kind);
//!     if is_new {
//!         program.declare(kind, key);
//!     }
//! }
//! program.push_fact(Fact::OnLine("a".to_string(), "L".to_string()));
//!
//! assert_eq!(program.to_substance(), "AutoLabel All\nPoint a\nLine L\nOnLine(a, L)");
//! ```

mod entities;
mod facts;
mod goal;
mod hypothesis;
mod program;

pub use entities::{Entity, EntityKind, EntityRegistry};
pub use facts::{Fact, PredicateShape};
pub use goal::{ContextRef, GoalContext, GoalId, ProofSnapshot};
pub use hypothesis::{Hypothesis, HypothesisId, HypothesisView};
pub use program::{DiagramProgram, ProgramLine};
