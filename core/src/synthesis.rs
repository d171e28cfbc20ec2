//! Diagram program synthesis
//!
//! A single deterministic pass over the visible hypotheses. Each step is a
//! pure function from `(registry, program)` to the next pair, so the whole
//! run is a fold over the hypothesis list. Output order is hypothesis order,
//! then shape check order, then operand order.

use crate::ir::{DiagramProgram, EntityRegistry, Fact, Hypothesis, HypothesisView};
use crate::matcher::match_predicates;
use crate::term::{PrettyError, PrettyPrinter};
use tracing::debug;

/// Accumulator threaded through the fold
#[derive(Debug, Clone, Default)]
pub struct SynthesisState {
    pub registry: EntityRegistry,
    pub program: DiagramProgram,
}

impl SynthesisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one hypothesis, returning the next state
    ///
    /// Declarations for entities seen for the first time are emitted right
    /// before the fact line that introduces them. Every match contributes its
    /// fact line, duplicates included.
    pub fn step(
        mut self,
        hypothesis: &Hypothesis,
        printer: &dyn PrettyPrinter,
    ) -> Result<Self, PrettyError> {
        for matched in match_predicates(&hypothesis.ty) {
            let keyed: Fact<String> = matched.try_map(|term| printer.pretty(term))?;

            for ((kind, key), term) in keyed.typed_operands().zip(matched.operands()) {
                let (_, is_new) = self.registry.insert(key, term, kind);
                if is_new {
                    self.program.declare(kind, key.as_str());
                }
            }
            self.program.push_fact(keyed);
        }
        Ok(self)
    }
}

/// Finished diagram: the program and the entities it declares
#[derive(Debug, Clone)]
pub struct DiagramSynthesis {
    pub program: DiagramProgram,
    pub entities: EntityRegistry,
}

/// Outcome of a synthesis run
#[derive(Debug, Clone)]
pub enum Synthesis {
    /// No geometric fact was found; nothing to draw
    Empty,

    Diagram(DiagramSynthesis),
}

impl Synthesis {
    pub fn is_empty(&self) -> bool {
        matches!(self, Synthesis::Empty)
    }

    pub fn diagram(&self) -> Option<&DiagramSynthesis> {
        match self {
            Synthesis::Empty => None,
            Synthesis::Diagram(diagram) => Some(diagram),
        }
    }

    /// Substance text, if there is a diagram
    pub fn substance(&self) -> Option<String> {
        self.diagram().map(|d| d.program.to_substance())
    }
}

/// Build the substance program for `view`
///
/// Fails only when the printer fails; no partial program is returned then.
pub fn synthesize(
    view: &HypothesisView,
    printer: &dyn PrettyPrinter,
) -> Result<Synthesis, PrettyError> {
    let state = view
        .iter()
        .try_fold(SynthesisState::new(), |state, hyp| state.step(hyp, printer))?;

    let facts = state.program.num_facts();
    debug!(
        hypotheses = view.len(),
        facts,
        entities = state.registry.len(),
        declarations = state.program.num_declarations(),
        "Synthesized diagram program"
    );

    if facts == 0 {
        return Ok(Synthesis::Empty);
    }

    Ok(Synthesis::Diagram(DiagramSynthesis {
        program: state.program,
        entities: state.registry,
    }))
}
