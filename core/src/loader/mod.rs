//! Goal fixture loader
//!
//! Reads goal contexts from JSON documents so the pipeline can run without a
//! live prover:
//!
//! ```json
//! {
//!   "id": "g1",
//!   "description": "two points on a line",
//!   "hypotheses": [
//!     { "name": "h1", "type": "OnLine a L" },
//!     { "name": "h2", "type": "OnLine b L" }
//!   ]
//! }
//! ```

use crate::ir::{GoalContext, GoalId, Hypothesis, HypothesisView};
use crate::term::{Expr, ParseError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// One hypothesis as written in a fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisFixture {
    /// Identifier; defaults to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    /// Type in term notation
    #[serde(rename = "type")]
    pub ty: String,
}

/// A goal context as written in a fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalFixture {
    pub id: String,

    #[serde(default)]
    pub description: String,

    pub hypotheses: Vec<HypothesisFixture>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl GoalFixture {
    /// Parse every term and build the goal context
    pub fn to_goal_context(&self) -> LoadResult<GoalContext> {
        let hypotheses = self
            .hypotheses
            .iter()
            .map(|hyp| {
                let ty = parse_term(&hyp.name, &hyp.ty)?;
                let id = hyp.id.clone().unwrap_or_else(|| hyp.name.clone());
                Ok(Hypothesis::new(id, hyp.name.clone(), ty))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let goal = GoalContext::new(GoalId::new(self.id.clone()), HypothesisView::new(hypotheses));
        match &self.target {
            Some(target) => Ok(goal.with_target(parse_term("target", target)?)),
            None => Ok(goal),
        }
    }
}

fn parse_term(name: &str, text: &str) -> LoadResult<Expr> {
    Expr::parse(text).map_err(|source| LoadError::InvalidTerm {
        name: name.to_string(),
        source,
    })
}

/// Loader result
pub type LoadResult<T> = Result<T, LoadError>;

/// Fixture loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("invalid term in {name}: {source}")]
    InvalidTerm {
        name: String,
        #[source]
        source: ParseError,
    },
}

/// Load a single goal fixture
///
/// Every term is parsed before the fixture is returned, so a loaded fixture
/// always converts with [`GoalFixture::to_goal_context`].
pub fn load_goal_file<P: AsRef<Path>>(path: P) -> LoadResult<GoalFixture> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", path.display(), e)))?;

    let fixture: GoalFixture =
        serde_json::from_str(&contents).map_err(|e| LoadError::ParseError(e.to_string()))?;
    fixture.to_goal_context()?;
    Ok(fixture)
}

/// Load every `.json` goal fixture in a directory, sorted by file name
///
/// Files that fail to load are skipped with a warning.
pub fn load_goal_dir<P: AsRef<Path>>(dir: P) -> LoadResult<Vec<GoalFixture>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(LoadError::FileNotFound(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)
        .map_err(|e| LoadError::FileNotFound(format!("{}: {}", dir.display(), e)))?
    {
        let entry = entry.map_err(|e| LoadError::FileNotFound(e.to_string()))?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut fixtures = Vec::new();
    for path in paths {
        match load_goal_file(&path) {
            Ok(fixture) => fixtures.push(fixture),
            Err(e) => warn!(path = %path.display(), error = %e, "Skipping goal fixture"),
        }
    }

    Ok(fixtures)
}
