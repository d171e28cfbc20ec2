//! Substance program for the diagram layout engine

use super::entities::EntityKind;
use super::facts::Fact;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of the substance program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramLine {
    /// `AutoLabel All`
    AutoLabel,

    /// `<Kind> <key>`
    Declare { kind: EntityKind, key: String },

    /// `<Shape>(<key1>, <key2>, ...)`
    Fact(Fact<String>),
}

impl fmt::Display for ProgramLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramLine::AutoLabel => f.write_str("AutoLabel All"),
            ProgramLine::Declare { kind, key } => write!(f, "{} {}", kind, key),
            ProgramLine::Fact(fact) => write!(f, "{}", fact),
        }
    }
}

/// Ordered program lines, always starting with the `AutoLabel All` header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramProgram {
    lines: Vec<ProgramLine>,
}

impl Default for DiagramProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramProgram {
    pub fn new() -> Self {
        Self {
            lines: vec![ProgramLine::AutoLabel],
        }
    }

    pub fn declare(&mut self, kind: EntityKind, key: impl Into<String>) {
        self.lines.push(ProgramLine::Declare {
            kind,
            key: key.into(),
        });
    }

    pub fn push_fact(&mut self, fact: Fact<String>) {
        self.lines.push(ProgramLine::Fact(fact));
    }

    pub fn lines(&self) -> &[ProgramLine] {
        &self.lines
    }

    pub fn num_facts(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, ProgramLine::Fact(_)))
            .count()
    }

    pub fn num_declarations(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, ProgramLine::Declare { .. }))
            .count()
    }

    /// Serialize to substance text, one line per entry, newline separated
    pub fn to_substance(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiagramProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_program_has_header() {
        let program = DiagramProgram::new();
        assert_eq!(program.to_substance(), "AutoLabel All");
        assert_eq!(program.num_facts(), 0);
    }

    #[test]
    fn test_program_text() {
        let mut program = DiagramProgram::new();
        program.declare(EntityKind::Point, "a");
        program.declare(EntityKind::Line, "L");
        program.push_fact(Fact::OnLine("a".to_string(), "L".to_string()));

        assert_eq!(
            program.to_substance(),
            "AutoLabel All\nPoint a\nLine L\nOnLine(a, L)"
        );
        assert_eq!(program.num_facts(), 1);
        assert_eq!(program.num_declarations(), 2);
    }
}
