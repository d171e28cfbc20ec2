//! Diagram configuration
//!
//! The domain schema and style sheet are static inputs to the layout engine;
//! the defaults are the bundled Euclidean resources.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Bundled domain schema: entity types and predicate declarations
pub const EUCLIDEAN_DOMAIN: &str = include_str!("../resources/euclidean.dsl");

/// Bundled style sheet
pub const EUCLIDEAN_STYLE: &str = include_str!("../resources/euclidean.sty");

/// Component the default renderer targets
pub const DEFAULT_COMPONENT: &str = "ProofWidgets.Penrose.Diagram";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static inputs handed to the renderer alongside every program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiagramConfig {
    /// Domain schema text
    pub domain_schema: String,

    /// Style sheet text
    pub style_sheet: String,

    /// Optimisation step budget for the layout engine
    pub max_opt_steps: u32,

    /// Client component that draws the diagram
    pub component: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            domain_schema: EUCLIDEAN_DOMAIN.to_string(),
            style_sheet: EUCLIDEAN_STYLE.to_string(),
            max_opt_steps: 500,
            component: DEFAULT_COMPONENT.to_string(),
        }
    }
}

impl DiagramConfig {
    /// Load a JSON config; omitted fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn with_max_opt_steps(mut self, steps: u32) -> Self {
        self.max_opt_steps = steps;
        self
    }

    pub fn with_style_sheet(mut self, style_sheet: impl Into<String>) -> Self {
        self.style_sheet = style_sheet.into();
        self
    }

    pub fn with_domain_schema(mut self, domain_schema: impl Into<String>) -> Self {
        self.domain_schema = domain_schema.into();
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }
}
