//! Euclidean diagram CLI
//!
//! Loads a goal fixture, runs it through `getEuclideanGoal` and prints the
//! substance program or the full JSON response.

use anyhow::{Context, Result};
use clap::Parser;
use euclid_diagram_core::loader::load_goal_file;
use euclid_diagram_core::panel::NO_DIAGRAM_MESSAGE;
use euclid_diagram_core::rpc::{SnapshotProvider, GET_EUCLIDEAN_GOAL};
use euclid_diagram_core::{
    ContextRef, DiagramConfig, GoalRequest, GoalRequestHandler, HypothesisId, ProofSnapshot,
    RpcServer, SelectedLocation, Synthesis,
};
use std::fs;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "euclid-diagram")]
#[command(about = "Compile Euclidean hypotheses into a diagram substance program")]
struct Args {
    /// Goal fixture file (JSON)
    goal: String,

    /// Hide a hypothesis by id, as if selected in the goal view
    #[arg(long = "hide", value_name = "ID")]
    hide: Vec<String>,

    /// Print the full getEuclideanGoal response as JSON
    #[arg(long)]
    json: bool,

    /// Diagram config file (JSON)
    #[arg(long)]
    config: Option<String>,

    /// Override the layout optimisation step budget
    #[arg(long)]
    max_opt_steps: Option<u32>,

    /// Style sheet file replacing the bundled one
    #[arg(long, value_name = "PATH")]
    style: Option<String>,

    /// Domain schema file replacing the bundled one
    #[arg(long, value_name = "PATH")]
    domain: Option<String>,

    /// Client component that renders the diagram
    #[arg(long, value_name = "NAME")]
    component: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => DiagramConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path))?,
        None => DiagramConfig::default(),
    };
    if let Some(steps) = args.max_opt_steps {
        config = config.with_max_opt_steps(steps);
    }
    if let Some(path) = &args.style {
        let style = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
        config = config.with_style_sheet(style);
    }
    if let Some(path) = &args.domain {
        let domain = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
        config = config.with_domain_schema(domain);
    }
    if let Some(component) = &args.component {
        config = config.with_component(component.clone());
    }

    let fixture = load_goal_file(&args.goal).with_context(|| format!("loading {}", args.goal))?;
    let goal = fixture.to_goal_context()?;
    info!(goal = %goal.id, hypotheses = goal.hypotheses.len(), "Loaded goal fixture");

    let context_ref = ContextRef::new("cli");
    let request = GoalRequest::new(context_ref.clone(), goal.id.clone()).with_locs(
        args.hide
            .iter()
            .map(|id| SelectedLocation::Hyp {
                id: HypothesisId::new(id.clone()),
            })
            .collect(),
    );

    let provider = SnapshotProvider::new().with_snapshot(context_ref, ProofSnapshot::new(vec![goal]));
    let handler = GoalRequestHandler::new(Arc::new(provider)).with_config(config);

    if args.json {
        let server = RpcServer::new(handler);
        let response = server
            .dispatch(GET_EUCLIDEAN_GOAL, serde_json::to_value(&request)?)
            .await?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match handler.synthesize(&request)? {
        Synthesis::Empty => eprintln!("{}", NO_DIAGRAM_MESSAGE),
        Synthesis::Diagram(diagram) => println!("{}", diagram.program),
    }

    Ok(())
}
