//! Demonstration of the diagram pipeline
//!
//! Run with: cargo run --example substance_demo

use euclid_diagram_core::*;

fn main() {
    println!("=== Euclidean Diagram Demo ===\n");

    let hypotheses = [
        ("h1", "Between a b c"),
        ("h2", "OnLine a L"),
        ("h3", "OnLine c L"),
        ("h4", "OnCircle a C"),
        ("h5", "CenterCircle b C"),
        ("h6", "Ne a c"),
    ];

    let view: HypothesisView = hypotheses
        .iter()
        .map(|(name, ty)| {
            let ty = Expr::parse(ty).expect("demo terms are well-formed");
            Hypothesis::new(*name, *name, ty)
        })
        .collect();

    println!("1. Matching hypotheses:");
    for hyp in &view {
        let shapes: Vec<String> = match_predicates(&hyp.ty)
            .iter()
            .map(|fact| fact.shape().to_string())
            .collect();
        println!("   {} -> {:?}", hyp.name, shapes);
    }

    println!("\n2. Full program:");
    let synthesis = synthesize(&view, &PlainPrinter).expect("demo terms are shallow");
    if let Some(diagram) = synthesis.diagram() {
        for line in diagram.program.to_substance().lines() {
            println!("   {}", line);
        }
        println!(
            "   ({} facts, {} entities)",
            diagram.program.num_facts(),
            diagram.entities.len()
        );
    }

    println!("\n3. With h4 selected in the goal view:");
    let locs = vec![SelectedLocation::Hyp {
        id: HypothesisId::new("h4"),
    }];
    let visible = filter_visible(&view, &locs);
    match synthesize(&visible, &PlainPrinter).expect("demo terms are shallow") {
        Synthesis::Empty => println!("   (nothing to draw)"),
        Synthesis::Diagram(diagram) => {
            for line in diagram.program.to_substance().lines() {
                println!("   {}", line);
            }
        }
    }

    println!("\n=== Demo Complete ===");
}
