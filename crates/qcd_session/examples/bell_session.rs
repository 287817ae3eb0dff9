//! Bell State Editing Session
//!
//! Builds a Bell circuit by hand, exercises undo/redo, then asks an oracle
//! to extend it. Without an API key the offline templates are used.
//!
//! Usage:
//! ```bash
//! # Optional: QCD_OPENAI_API_KEY / OPENAI_API_KEY for the live oracle
//! cargo run --example bell_session
//! ```

use qcd_session::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              QCD Editing Session - Bell State                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = SessionConfig::auto_load();
    println!("Config: {}\n", config);
    let mut session = EditingSession::new(config);

    // Pointer flow: pick a type, then click the first cell
    session.select_gate_type(Some(GateType::H));
    session.click(40.0, 40.0);
    session.add_controlled_gate(GateType::Cnot, 1, 1, 0);
    session.rename("Bell Pair");

    let circuit = session.circuit();
    println!(
        "✓ {}: depth {}, {} gate type(s)",
        circuit.name(),
        circuit.depth(),
        circuit.gate_type_count()
    );

    session.undo();
    println!("  after undo: {} gate(s)", session.circuit().gate_count());
    session.redo();
    println!("  after redo: {} gate(s)\n", session.circuit().gate_count());

    println!("{}\n", session.export_qasm());

    // Oracle: live client first, keyword templates as fallback
    let oracle = FallbackOracle::new(OpenAiOracle::from_env()?, TemplateOracle::new());
    match session
        .generate(&oracle, "add measurement", GenerationMode::Modify)
        .await
    {
        Ok(report) if report.is_clean() => println!("✓ Modified circuit installed"),
        Ok(report) => println!("✓ Modified circuit installed with repairs: {}", report),
        Err(e) => println!("✗ Generation failed, fallback installed: {}", e),
    }

    let report = session.analyze(&oracle).await?;
    println!("\n{}", report.analysis);
    for suggestion in &report.suggestions {
        println!("  • {}", suggestion);
    }

    println!("\n{}", session.export_circuit()?);
    Ok(())
}
