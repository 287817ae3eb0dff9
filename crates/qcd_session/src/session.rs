//! Editing session
//!
//! Gantree: L6_Session → EditingSession
//!
//! Owns the active circuit (as the history cursor), the pointer state and
//! the configuration. Every mutation computes the next circuit, stamps it,
//! and records it exactly once. No-op gestures return `false` and leave
//! history alone.

use crate::config::SessionConfig;
use chrono::Utc;
use qcd_core::{
    limits, Cell, Circuit, CircuitId, Gate, GateId, GateType, Parameters, QcdError, QcdResult,
    QubitId, TimeStep,
};
use qcd_history::History;
use qcd_oracle::{
    CircuitAnalysis, CircuitOracle, GenerationMode, GenerationRequest, SUGGESTIONS_UNAVAILABLE,
};
use qcd_placement::{engine, ClickOutcome, Interaction};
use qcd_validate::{ValidationReport, Validator};
use std::sync::Arc;

/// Analysis and suggestions for the current circuit
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Structured analysis (placeholder on oracle failure)
    pub analysis: CircuitAnalysis,
    /// Up to three suggestions (single explanatory line on failure)
    pub suggestions: Vec<String>,
}

/// Single-user editing session
/// Gantree: EditingSession // 편집 세션
#[derive(Debug, Clone)]
pub struct EditingSession {
    /// Configuration
    config: SessionConfig,

    /// Snapshot history; its cursor is the active circuit
    history: History,

    /// Palette and selection state
    interaction: Interaction,

    /// Validator for imported files
    import_validator: Validator,

    /// Validator for oracle output
    generated_validator: Validator,
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl EditingSession {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Start with an empty circuit built from the configured defaults
    /// Gantree: new(config) -> Self // 생성자
    pub fn new(config: SessionConfig) -> Self {
        let initial = Self::blank(&config);
        Self::with_circuit(config, initial)
    }

    /// Start from an existing circuit
    pub fn with_circuit(config: SessionConfig, circuit: Circuit) -> Self {
        let import_validator = Validator::for_import().with_default_name(config.import_name.clone());
        let generated_validator =
            Validator::for_generated().with_default_name(config.generated_name.clone());
        Self {
            config,
            history: History::new(circuit),
            interaction: Interaction::new(),
            import_validator,
            generated_validator,
        }
    }

    fn blank(config: &SessionConfig) -> Circuit {
        Circuit::with_name(config.default_qubits, config.default_name.clone())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Active circuit
    pub fn circuit(&self) -> &Circuit {
        self.history.current_ref()
    }

    /// Shared handle to the active snapshot
    pub fn snapshot(&self) -> Arc<Circuit> {
        self.history.current()
    }

    /// Configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Pointer state
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of retained snapshots
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // ========================================================================
    // Commit
    // ========================================================================

    /// Stamp and record the next circuit
    fn commit(&mut self, mut next: Circuit, action: &str) {
        next.touch();
        debug_assert!(next.check_invariants().is_ok(), "{action} broke circuit invariants");
        log::debug!(
            "{}: '{}' now has {} gate(s) on {} qubit(s)",
            action,
            next.name(),
            next.gate_count(),
            next.qubits()
        );
        self.history.record(next);
        self.interaction.reconcile(self.history.current_ref());
    }

    fn commit_if(&mut self, next: Option<Circuit>, action: &str) -> bool {
        match next {
            Some(circuit) => {
                self.commit(circuit, action);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Gate Operations
    // ========================================================================

    /// Add a gate at a free cell; occupied or out-of-range cells are a no-op
    /// Gantree: add_gate(&mut, type, q, t) -> bool // 게이트 추가
    pub fn add_gate(&mut self, gate_type: GateType, qubit: QubitId, time: TimeStep) -> bool {
        let next = engine::add(self.circuit(), gate_type, Cell::new(qubit, time));
        self.commit_if(next, "add_gate")
    }

    /// Add a gate with a control wire (e.g. CNOT on the target wire)
    pub fn add_controlled_gate(
        &mut self,
        gate_type: GateType,
        qubit: QubitId,
        time: TimeStep,
        control: QubitId,
    ) -> bool {
        let gate = Gate::new(gate_type, Cell::new(qubit, time)).control(control);
        let next = engine::place(self.circuit(), gate);
        self.commit_if(next, "add_controlled_gate")
    }

    /// Delete a gate; unknown ids are a no-op
    /// Gantree: remove_gate(&mut, id) -> bool // 게이트 삭제
    pub fn remove_gate(&mut self, id: &GateId) -> bool {
        let next = engine::remove(self.circuit(), id);
        self.commit_if(next, "remove_gate")
    }

    /// Move a gate; the target is clamped into the grid
    /// Gantree: move_gate(&mut, id, q, t) -> bool // 게이트 이동
    pub fn move_gate(&mut self, id: &GateId, qubit: i64, time: i64) -> bool {
        let next = engine::move_gate(self.circuit(), id, qubit, time, self.config.move_policy);
        self.commit_if(next, "move_gate")
    }

    /// Merge parameters into a gate. Non-finite values are ignored.
    /// Gantree: update_gate_parameters(&mut, id, params) -> bool // 파라미터 변경
    pub fn update_gate_parameters(&mut self, id: &GateId, params: Parameters) -> bool {
        let Some(gate) = self.circuit().gate(id) else {
            return false;
        };
        let mut merged = gate.parameters.clone();
        for (name, value) in params {
            if value.is_finite() {
                merged.insert(name, value);
            } else {
                log::debug!("Ignoring non-finite parameter '{}' for {}", name, id);
            }
        }
        if merged == gate.parameters {
            return false;
        }

        let mut next = self.circuit().clone();
        match next.update_gate(id, |g| g.parameters = merged) {
            Ok(true) => {
                self.commit(next, "update_gate_parameters");
                true
            }
            _ => false,
        }
    }

    /// Set or clear a gate's control wire; the wire is clamped into range
    pub fn set_control_qubit(&mut self, id: &GateId, control: Option<QubitId>) -> bool {
        let Some(gate) = self.circuit().gate(id) else {
            return false;
        };
        let max = self.circuit().qubits() - 1;
        let control = control.map(|c| c.min(max));
        if gate.control_qubit == control {
            return false;
        }

        let mut next = self.circuit().clone();
        match next.update_gate(id, |g| g.control_qubit = control) {
            Ok(true) => {
                self.commit(next, "set_control_qubit");
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Circuit Operations
    // ========================================================================

    /// Change the qubit count (clamped to [1, 10]). Gates on removed wires
    /// are dropped. Returns the number dropped, or `None` when unchanged.
    /// Gantree: set_qubit_count(&mut, n) -> Option<usize> // 큐비트 수 변경
    pub fn set_qubit_count(&mut self, qubits: usize) -> Option<usize> {
        let qubits = limits::clamp_qubits(qubits);
        if qubits == self.circuit().qubits() {
            return None;
        }
        let mut next = self.circuit().clone();
        let dropped = next.resize(qubits);
        if dropped > 0 {
            log::info!("Resize to {} qubits dropped {} gate(s)", qubits, dropped);
        }
        self.commit(next, "set_qubit_count");
        Some(dropped)
    }

    /// Rename the circuit; blank or unchanged names are a no-op
    /// Gantree: rename(&mut, name) -> bool // 이름 변경
    pub fn rename(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == self.circuit().name() {
            return false;
        }
        let mut next = self.circuit().clone();
        next.set_name(name);
        self.commit(next, "rename");
        true
    }

    /// Set or clear the description
    pub fn set_description(&mut self, description: Option<String>) -> bool {
        let description = description.filter(|d| !d.trim().is_empty());
        if description.as_deref() == self.circuit().description() {
            return false;
        }
        let mut next = self.circuit().clone();
        next.set_description(description);
        self.commit(next, "set_description");
        true
    }

    /// Remove all gates and measurements, keeping identity and qubit count
    /// Gantree: clear(&mut) // 전체 삭제
    pub fn clear(&mut self) {
        let mut next = self.circuit().clone();
        next.clear();
        self.commit(next, "clear");
    }

    /// Copy the circuit under a new id and a suffixed name
    /// Gantree: duplicate(&mut) // 복제
    pub fn duplicate(&mut self) {
        let mut next = self.circuit().clone();
        next.set_id(CircuitId::generate());
        next.set_name(format!("{}{}", next.name(), self.config.copy_suffix));
        next.set_timestamps(Some(Utc::now()), None);
        self.commit(next, "duplicate");
    }

    /// Replace the circuit with an empty default one
    /// Gantree: new_circuit(&mut) // 새 회로
    pub fn new_circuit(&mut self) {
        let next = Self::blank(&self.config);
        self.commit(next, "new_circuit");
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Step back; `false` at the start of history
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo().is_some();
        if moved {
            self.interaction.reconcile(self.history.current_ref());
        }
        moved
    }

    /// Step forward; `false` at the end of history
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo().is_some();
        if moved {
            self.interaction.reconcile(self.history.current_ref());
        }
        moved
    }

    // ========================================================================
    // Import / Export
    // ========================================================================

    /// Validate and install an imported file. On a hard failure the
    /// session is left unchanged and the error is returned.
    /// Gantree: import_circuit(&mut, raw) -> Result<ValidationReport> // 가져오기
    pub fn import_circuit(&mut self, raw: &str) -> QcdResult<ValidationReport> {
        let validated = self.import_validator.validate_str(raw)?;
        log::info!(
            "Imported '{}' ({} qubits, {} gates)",
            validated.circuit.name(),
            validated.circuit.qubits(),
            validated.circuit.gate_count()
        );
        self.commit(validated.circuit, "import_circuit");
        Ok(validated.report)
    }

    /// Validate and install oracle output. On a hard failure the fallback
    /// circuit is installed and the error is returned.
    /// Gantree: install_generated_circuit(&mut, raw) -> Result<ValidationReport> // 생성 회로 설치
    pub fn install_generated_circuit(&mut self, raw: &str) -> QcdResult<ValidationReport> {
        match self.generated_validator.validate_str(raw) {
            Ok(validated) => {
                log::info!(
                    "Installed generated circuit '{}' ({} gates)",
                    validated.circuit.name(),
                    validated.circuit.gate_count()
                );
                self.commit(validated.circuit, "install_generated_circuit");
                Ok(validated.report)
            }
            Err(err) => {
                self.install_fallback(&err);
                Err(err)
            }
        }
    }

    fn install_fallback(&mut self, cause: &QcdError) {
        log::warn!("Generation failed ({}), installing fallback circuit", cause);
        self.commit(Circuit::fallback(), "install_fallback");
    }

    /// Canonical JSON of the active circuit
    pub fn export_circuit(&self) -> QcdResult<String> {
        self.circuit().to_json()
    }

    /// OpenQASM 2.0 of the active circuit
    pub fn export_qasm(&self) -> String {
        self.circuit().to_qasm()
    }

    // ========================================================================
    // Pointer Interaction
    // ========================================================================

    /// Pick a palette type (`None` cancels)
    pub fn select_gate_type(&mut self, gate_type: Option<GateType>) {
        self.interaction.select_type(gate_type);
    }

    /// Select a gate; unknown ids clear the selection
    pub fn select_gate(&mut self, id: Option<GateId>) {
        let id = id.filter(|id| self.circuit().contains_gate(id));
        self.interaction.select_gate(id);
    }

    /// The selected gate, if it still exists
    pub fn selected_gate(&self) -> Option<&Gate> {
        self.interaction
            .selected()
            .and_then(|id| self.circuit().gate(id))
    }

    /// Canvas click at pixel offset `(x, y)`. Returns `true` when a gate was placed.
    /// Gantree: click(&mut, x, y) -> bool // 캔버스 클릭
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        let grid = self.config.grid;
        let outcome = self.interaction.click(self.history.current_ref(), &grid, x, y);
        match outcome {
            ClickOutcome::Placed(next) => {
                self.commit(next, "click");
                true
            }
            ClickOutcome::Blocked(cell) => {
                log::debug!("Click at {} ignored: occupied", cell);
                false
            }
            ClickOutcome::Selected(_) | ClickOutcome::Deselected | ClickOutcome::Ignored => false,
        }
    }

    /// Hover preview cell for the pending type
    pub fn preview(&self, x: f64, y: f64) -> Option<Cell> {
        self.interaction
            .preview(self.circuit(), &self.config.grid, x, y)
    }

    // ========================================================================
    // Oracle
    // ========================================================================

    /// Capture the inputs of a generation call
    pub fn generation_request(&self, prompt: &str, mode: GenerationMode) -> GenerationRequest {
        match mode {
            GenerationMode::Generate => GenerationRequest::generate(prompt),
            GenerationMode::Modify => GenerationRequest::modify(prompt, self.circuit().clone()),
        }
    }

    /// Ask the oracle for a circuit and install the validated result.
    /// Any oracle or parse failure installs the fallback circuit and is returned.
    /// Gantree: generate(&mut, oracle, prompt, mode) -> Result<ValidationReport> // AI 생성
    pub async fn generate(
        &mut self,
        oracle: &dyn CircuitOracle,
        prompt: &str,
        mode: GenerationMode,
    ) -> QcdResult<ValidationReport> {
        let request = self.generation_request(prompt, mode);
        log::info!("Requesting {} from {}: {}", mode, oracle.name(), prompt);

        match oracle.request_generation(&request).await {
            Ok(raw) => self.install_generated_circuit(&raw),
            Err(err) => {
                let err = QcdError::from(err);
                self.install_fallback(&err);
                Err(err)
            }
        }
    }

    /// Analysis and suggestions for the active circuit, requested concurrently.
    /// Oracle failures produce placeholders; only an empty circuit is an error.
    /// Gantree: analyze(&self, oracle) -> Result<AnalysisReport> // AI 분석
    pub async fn analyze(&self, oracle: &dyn CircuitOracle) -> QcdResult<AnalysisReport> {
        let circuit = self.snapshot();
        if circuit.is_empty() {
            return Err(QcdError::EmptyCircuit);
        }

        let (analysis, suggestions) = tokio::join!(
            oracle.request_analysis(&circuit),
            oracle.request_suggestions(&circuit)
        );

        let analysis = analysis.unwrap_or_else(|e| {
            log::warn!("Analysis unavailable: {}", e);
            CircuitAnalysis::unavailable()
        });
        let suggestions = suggestions.unwrap_or_else(|e| {
            log::warn!("Suggestions unavailable: {}", e);
            vec![SUGGESTIONS_UNAVAILABLE.to_string()]
        });

        Ok(AnalysisReport {
            analysis,
            suggestions,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qcd_oracle::{OracleError, TemplateOracle};
    use qcd_placement::MovePolicy;

    fn session() -> EditingSession {
        EditingSession::default()
    }

    fn only_id(s: &EditingSession) -> GateId {
        s.circuit().gates()[0].id.clone()
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.circuit().qubits(), 2);
        assert!(s.circuit().is_empty());
        assert_eq!(s.history_len(), 1);
        assert!(!s.can_undo());
    }

    #[test]
    fn test_add_records_once() {
        let mut s = session();
        assert!(s.add_gate(GateType::H, 0, 0));
        assert_eq!(s.history_len(), 2);
        assert!(!s.add_gate(GateType::X, 0, 0));
        assert_eq!(s.history_len(), 2);
        assert!(!s.add_gate(GateType::X, 5, 0));
        assert!(s.circuit().updated_at().is_some());
    }

    #[test]
    fn test_controlled_gate() {
        let mut s = session();
        assert!(s.add_controlled_gate(GateType::Cnot, 1, 1, 0));
        assert_eq!(s.circuit().gates()[0].control_qubit, Some(0));
        assert!(!s.add_controlled_gate(GateType::Cnot, 1, 2, 7));
    }

    #[test]
    fn test_remove_and_move() {
        let mut s = session();
        s.add_gate(GateType::H, 0, 0);
        let id = only_id(&s);

        assert!(s.move_gate(&id, 1, 3));
        assert_eq!(s.circuit().gate(&id).unwrap().cell(), Cell::new(1, 3));
        assert!(s.move_gate(&id, -2, -2));
        assert_eq!(s.circuit().gate(&id).unwrap().cell(), Cell::new(0, 0));

        assert!(s.remove_gate(&id));
        assert!(!s.remove_gate(&id));
        assert!(s.circuit().is_empty());
    }

    #[test]
    fn test_strict_move_policy() {
        let mut s = EditingSession::new(SessionConfig::default().with_move_policy(MovePolicy::RejectOccupied));
        s.add_gate(GateType::H, 0, 0);
        s.add_gate(GateType::X, 1, 0);
        let x = s.circuit().gates()[1].id.clone();
        assert!(!s.move_gate(&x, 0, 0));
    }

    #[test]
    fn test_update_parameters_merges() {
        let mut s = session();
        s.add_gate(GateType::Rx, 0, 0);
        let id = only_id(&s);

        let mut params = Parameters::new();
        params.insert("angle".into(), 1.25);
        assert!(s.update_gate_parameters(&id, params.clone()));
        assert!(!s.update_gate_parameters(&id, params));

        let mut extra = Parameters::new();
        extra.insert("phase".into(), 0.5);
        extra.insert("bad".into(), f64::NAN);
        assert!(s.update_gate_parameters(&id, extra));

        let g = s.circuit().gate(&id).unwrap();
        assert_relative_eq!(g.angle_value(), 1.25);
        assert_relative_eq!(g.param("phase"), 0.5);
        assert!(!g.parameters.contains_key("bad"));
    }

    #[test]
    fn test_set_control_qubit_clamps() {
        let mut s = session();
        s.add_gate(GateType::Cnot, 1, 0);
        let id = only_id(&s);
        assert!(s.set_control_qubit(&id, Some(9)));
        assert_eq!(s.circuit().gate(&id).unwrap().control_qubit, Some(1));
        assert!(s.set_control_qubit(&id, None));
        assert!(!s.set_control_qubit(&id, None));
    }

    #[test]
    fn test_set_qubit_count() {
        let mut s = session();
        s.add_gate(GateType::H, 1, 0);
        assert_eq!(s.set_qubit_count(2), None);
        assert_eq!(s.set_qubit_count(1), Some(1));
        assert_eq!(s.circuit().qubits(), 1);
        assert_eq!(s.set_qubit_count(50), Some(0));
        assert_eq!(s.circuit().qubits(), 10);
        assert!(s.undo());
        assert_eq!(s.circuit().qubits(), 1);
    }

    #[test]
    fn test_rename_duplicate_new() {
        let mut s = session();
        assert!(s.rename("  Bell  "));
        assert!(!s.rename("Bell"));
        assert!(!s.rename("   "));
        let original_id = s.circuit().id().clone();

        s.duplicate();
        assert_eq!(s.circuit().name(), "Bell (Copy)");
        assert_ne!(s.circuit().id(), &original_id);

        s.new_circuit();
        assert_eq!(s.circuit().name(), "New Circuit");
        assert_eq!(s.history_len(), 4);
    }

    #[test]
    fn test_description() {
        let mut s = session();
        assert!(s.set_description(Some("entangler".into())));
        assert!(!s.set_description(Some("entangler".into())));
        assert!(s.set_description(None));
        assert_eq!(s.circuit().description(), None);
    }

    #[test]
    fn test_clear_keeps_identity() {
        let mut s = session();
        s.add_gate(GateType::H, 0, 0);
        let id = s.circuit().id().clone();
        s.clear();
        assert!(s.circuit().is_empty());
        assert_eq!(s.circuit().id(), &id);
        assert!(s.undo());
        assert_eq!(s.circuit().gate_count(), 1);
    }

    #[test]
    fn test_import_failure_leaves_state() {
        let mut s = session();
        s.add_gate(GateType::H, 0, 0);
        let before = s.history_len();
        assert!(s.import_circuit("not json at all").is_err());
        assert_eq!(s.history_len(), before);
        assert_eq!(s.circuit().gate_count(), 1);
    }

    #[test]
    fn test_import_names_and_report() {
        let mut s = session();
        let report = s
            .import_circuit(r#"{"qubits": 3, "gates": [{"type": "BOGUS", "qubit": 5, "time": 0}]}"#)
            .unwrap();
        assert_eq!(s.circuit().name(), "Imported Circuit");
        assert_eq!(report.coerced_types.len(), 1);
    }

    #[test]
    fn test_generated_hard_failure_installs_fallback() {
        let mut s = session();
        let err = s.install_generated_circuit("sorry, no circuit").unwrap_err();
        assert!(err.is_hard_failure());
        assert!(s.circuit().same_content(&Circuit::fallback()));
        assert!(s.can_undo());
    }

    #[test]
    fn test_selection_follows_history() {
        let mut s = session();
        s.add_gate(GateType::H, 0, 0);
        let id = only_id(&s);
        s.select_gate(Some(id.clone()));
        assert_eq!(s.selected_gate().map(|g| g.id.clone()), Some(id.clone()));

        s.undo();
        assert!(s.interaction().selected().is_none());

        s.select_gate(Some(GateId::new("missing")));
        assert!(s.selected_gate().is_none());
    }

    #[test]
    fn test_click_places_pending_type() {
        let mut s = session();
        assert!(!s.click(10.0, 10.0));

        s.select_gate_type(Some(GateType::Z));
        assert_eq!(s.preview(90.0, 90.0), Some(Cell::new(1, 1)));
        assert!(s.click(90.0, 90.0));
        assert_eq!(s.circuit().gates()[0].gate_type, GateType::Z);
        assert_eq!(s.interaction().pending(), None);

        assert!(!s.click(90.0, 90.0));
        assert!(s.selected_gate().is_some());
    }

    #[test]
    fn test_exports() {
        let mut s = session();
        s.add_gate(GateType::H, 0, 0);
        assert!(s.export_circuit().unwrap().contains("\"type\": \"H\""));
        assert!(s.export_qasm().contains("h q[0];"));
    }

    #[test]
    fn test_generation_request_modes() {
        let mut s = session();
        s.add_gate(GateType::H, 0, 0);
        assert!(s.generation_request("x", GenerationMode::Generate).current.is_none());
        let m = s.generation_request("x", GenerationMode::Modify);
        assert_eq!(m.current.unwrap().gate_count(), 1);
    }

    struct Broken;

    #[async_trait::async_trait]
    impl CircuitOracle for Broken {
        fn name(&self) -> &str {
            "broken"
        }
        async fn request_generation(&self, _: &GenerationRequest) -> Result<String, OracleError> {
            Err(OracleError::MissingApiKey)
        }
        async fn request_analysis(&self, _: &Circuit) -> Result<CircuitAnalysis, OracleError> {
            Err(OracleError::MissingApiKey)
        }
        async fn request_suggestions(&self, _: &Circuit) -> Result<Vec<String>, OracleError> {
            Err(OracleError::MissingApiKey)
        }
    }

    #[tokio::test]
    async fn test_generate_with_templates() {
        let mut s = session();
        let report = s
            .generate(&TemplateOracle::new(), "bell state please", GenerationMode::Generate)
            .await
            .unwrap();
        assert!(report.is_clean());
        assert_eq!(s.circuit().name(), "Bell State Circuit");
        assert_eq!(s.circuit().depth(), 2);

        s.generate(&TemplateOracle::new(), "add hadamard", GenerationMode::Modify)
            .await
            .unwrap();
        assert_eq!(s.circuit().gate_count(), 3);
        assert_eq!(s.history_len(), 3);
    }

    #[tokio::test]
    async fn test_generate_failure_installs_fallback() {
        let mut s = session();
        let err = s
            .generate(&Broken, "anything", GenerationMode::Generate)
            .await
            .unwrap_err();
        assert!(matches!(err, QcdError::Oracle(_)));
        assert!(s.circuit().same_content(&Circuit::fallback()));
    }

    #[tokio::test]
    async fn test_analyze_rules() {
        let mut s = session();
        assert!(matches!(s.analyze(&Broken).await, Err(QcdError::EmptyCircuit)));

        s.add_gate(GateType::H, 0, 0);
        let report = s.analyze(&Broken).await.unwrap();
        assert_eq!(report.analysis, CircuitAnalysis::unavailable());
        assert_eq!(report.suggestions, vec![SUGGESTIONS_UNAVAILABLE.to_string()]);
    }
}
