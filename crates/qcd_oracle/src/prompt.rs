//! Prompt construction
//!
//! Gantree: L5_Oracle → Prompt

use crate::oracle::GenerationRequest;
use qcd_core::{Circuit, GateType};

/// System prompt for circuit generation
pub const GENERATION_SYSTEM_PROMPT: &str = r#"You are a quantum computing expert. Generate quantum circuits based on user descriptions.

Available gates: H (Hadamard), X (Pauli-X), Y (Pauli-Y), Z (Pauli-Z), CNOT (Controlled NOT), SWAP, RX (X rotation), RY (Y rotation), RZ (Z rotation), PHASE, MEASURE.

Respond with a JSON object in this exact format:
{
  "name": "Circuit name",
  "qubits": number,
  "gates": [
    {
      "type": "gate_type",
      "qubit": number,
      "time": number,
      "parameters": {},
      "controlQubit": number (only for CNOT)
    }
  ]
}"#;

/// System prompt for analysis
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a quantum computing expert. Analyze the given quantum circuit and provide insights about its purpose, complexity, potential applications, and optimization opportunities. Be concise but informative.";

/// System prompt for suggestions
pub const SUGGESTIONS_SYSTEM_PROMPT: &str = "You are a quantum computing expert. Provide 3 specific suggestions for improving or extending the given quantum circuit. Focus on practical, implementable improvements.";

/// User message for a generation request
/// Gantree: generation_prompt(request) -> String // 생성 프롬프트
pub fn generation_prompt(request: &GenerationRequest) -> String {
    match request.circuit_to_modify() {
        Some(current) => format!(
            "Current circuit: {}, {} qubits, {} gates.\nModify this circuit: {}\nReturn the complete modified circuit.",
            current.name(),
            current.qubits(),
            current.gate_count(),
            request.prompt
        ),
        None => format!("Create a new quantum circuit: {}", request.prompt),
    }
}

/// User message for an analysis request
pub fn analysis_prompt(circuit: &Circuit) -> String {
    format!(
        "Please analyze this quantum circuit:\n\n{}\n\nProvide analysis in the following format:\n\
         - Description: What this circuit does\n\
         - Complexity: Simple/Medium/Complex\n\
         - Potential Applications: List 2-3 applications\n\
         - Optimization Suggestions: 1-2 suggestions for improvement\n\
         - Estimated Execution Time: Rough estimate for execution",
        describe_circuit(circuit)
    )
}

/// User message for a suggestions request
pub fn suggestions_prompt(circuit: &Circuit) -> String {
    format!(
        "Here's my quantum circuit:\n\n{}\n\nProvide 3 specific suggestions for improvement or extension.",
        describe_circuit(circuit)
    )
}

/// Plain-text circuit summary sent to the oracle
/// Gantree: describe_circuit(circuit) -> String // 회로 요약
pub fn describe_circuit(circuit: &Circuit) -> String {
    let gate_types = circuit
        .gate_type_histogram()
        .iter()
        .map(|(t, n)| format!("{} {}", n, t))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("Circuit: {}", circuit.name()),
        format!("Qubits: {}", circuit.qubits()),
        format!("Total Gates: {}", circuit.gate_count()),
        format!("Gate Types: {}", gate_types),
        format!("Circuit Depth: {}", circuit.depth()),
        String::new(),
        "Gate Sequence:".to_string(),
    ];

    for gate in circuit.canonical_gates() {
        let mut line = format!("Time {}: {} on qubit {}", gate.time, gate.gate_type, gate.qubit);
        if let Some(control) = gate.control_qubit {
            line.push_str(&format!(" (control: {})", control));
        }
        let angle = gate.angle_value();
        if gate.gate_type.is_parameterized() && angle != 0.0 {
            line.push_str(&format!(" (angle: {})", angle));
        }
        lines.push(line);
    }

    lines.join("\n").trim_end().to_string()
}

/// Gate types listed in the generation system prompt
pub fn supported_gate_symbols() -> Vec<&'static str> {
    GateType::ALL.iter().map(GateType::symbol).collect()
}
