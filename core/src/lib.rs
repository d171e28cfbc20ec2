//! Euclidean Diagram Core
//!
//! Extracts geometric facts from proof hypotheses and compiles them into a
//! substance program for a constraint-based diagram layout engine

pub mod term;     // Terms, fixture notation, display-string oracle
pub mod ir;       // Intermediate representation (hypotheses, goals, facts, entities, program)
pub mod matcher;  // Predicate shape matching
pub mod synthesis; // Hypotheses -> substance program
pub mod filter;   // Selected-location visibility filter
pub mod config;   // Static diagram resources and settings
pub mod render;   // Rendering collaborator and markup
pub mod rpc;      // getEuclideanGoal request handling
pub mod panel;    // Client panel state machine
pub mod loader;   // Goal fixture loaders

pub use term::{Expr, PlainPrinter, PrettyPrinter};
pub use ir::*;
pub use matcher::{match_predicates, match_shape};
pub use synthesis::{synthesize, DiagramSynthesis, Synthesis, SynthesisState};
pub use filter::{filter_visible, GoalLocation, SelectedLocation, SubexprPos};
pub use config::DiagramConfig;
pub use render::{ComponentRenderer, DiagramInput, DiagramRenderer, Html};
pub use rpc::{GoalRequest, GoalRequestHandler, GoalResponse, RpcError, RpcResult, RpcServer};
pub use panel::{GoalClient, LocalClient, PanelController, PanelProps, PanelStatus};
pub use loader::{GoalFixture, LoadError, LoadResult};
