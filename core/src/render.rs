//! Rendering collaborator
//!
//! The layout engine is external. The core hands it the substance program,
//! the static resources and one label per entity, and gets back markup for
//! the response.

use crate::config::DiagramConfig;
use crate::ir::EntityKind;
use crate::synthesis::DiagramSynthesis;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a renderer
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to encode diagram props: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("renderer failed: {0}")]
    Backend(String),
}

/// Serialisable markup tree returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Html {
    Element {
        tag: String,
        attrs: Vec<(String, serde_json::Value)>,
        children: Vec<Html>,
    },
    Text(String),
    Component {
        name: String,
        props: serde_json::Value,
    },
}

impl Html {
    pub fn text(text: impl Into<String>) -> Self {
        Html::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Html>) -> Self {
        Html::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        if let Html::Element { attrs, .. } = &mut self {
            attrs.push((key.into(), value.into()));
        }
        self
    }

    /// Concatenated text of this node and its children
    pub fn text_content(&self) -> String {
        match self {
            Html::Text(text) => text.clone(),
            Html::Element { children, .. } => children.iter().map(Html::text_content).collect(),
            Html::Component { .. } => String::new(),
        }
    }
}

/// Display label attached to one diagram entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityLabel {
    pub key: String,
    pub kind: EntityKind,
    pub label: Html,
}

/// Everything the renderer needs for one diagram
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramInput {
    pub substance: String,
    pub domain_schema: String,
    pub style_sheet: String,

    /// One label per entity, in registration order
    pub labels: Vec<EntityLabel>,

    pub max_opt_steps: u32,
}

impl DiagramInput {
    pub fn new(diagram: &DiagramSynthesis, config: &DiagramConfig) -> Self {
        let labels = diagram
            .entities
            .iter()
            .map(|entity| EntityLabel {
                key: entity.key.clone(),
                kind: entity.kind,
                label: Html::element("code", vec![Html::text(entity.key.clone())])
                    .with_attr("className", "font-code"),
            })
            .collect();

        Self {
            substance: diagram.program.to_substance(),
            domain_schema: config.domain_schema.clone(),
            style_sheet: config.style_sheet.clone(),
            labels,
            max_opt_steps: config.max_opt_steps,
        }
    }
}

/// Turns a diagram input into markup
#[async_trait]
pub trait DiagramRenderer: Send + Sync {
    async fn render(&self, input: DiagramInput) -> Result<Html, RenderError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DiagramProps<'a> {
    embeds: Vec<(&'a str, &'a Html)>,
    dsl: &'a str,
    sty: &'a str,
    sub: &'a str,
    max_opt_steps: u32,
}

/// Emits a client component that runs the layout engine in the browser
#[derive(Debug, Clone)]
pub struct ComponentRenderer {
    component: String,
}

impl Default for ComponentRenderer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_COMPONENT)
    }
}

impl ComponentRenderer {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn from_config(config: &DiagramConfig) -> Self {
        Self::new(config.component.clone())
    }
}

#[async_trait]
impl DiagramRenderer for ComponentRenderer {
    async fn render(&self, input: DiagramInput) -> Result<Html, RenderError> {
        let props = DiagramProps {
            embeds: input
                .labels
                .iter()
                .map(|label| (label.key.as_str(), &label.label))
                .collect(),
            dsl: &input.domain_schema,
            sty: &input.style_sheet,
            sub: &input.substance,
            max_opt_steps: input.max_opt_steps,
        };

        Ok(Html::Component {
            name: self.component.clone(),
            props: serde_json::to_value(&props)?,
        })
    }
}
