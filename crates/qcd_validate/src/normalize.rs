//! Circuit normalizer
//!
//! Gantree: L2_Validation → Normalizer
//!
//! Reconciles a loosely-typed circuit object with the model invariants.
//! Nothing short of a non-object payload is rejected: fields are clamped,
//! defaulted or coerced, and unusable gate entries are dropped one by one.

use crate::payload::{extract_object, into_object};
use chrono::{DateTime, Utc};
use qcd_core::limits::{DEFAULT_QUBITS, MAX_QUBITS, MIN_QUBITS};
use qcd_core::names::{GENERATED_CIRCUIT_NAME, IMPORTED_CIRCUIT_NAME};
use qcd_core::{
    Cell, Circuit, CircuitId, Gate, GateId, GateType, Measurement, MeasurementBasis, Parameters,
    QcdResult, QubitId, TimeStep,
};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// Report
// ============================================================================

/// An unknown gate type that was replaced by `H`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercedType {
    /// Position of the entry in the input `gates` array
    pub index: usize,
    /// The unrecognized type text
    pub original: String,
}

/// What the normalizer changed on the way in
/// Gantree: ValidationReport // 정규화 보고서
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Gate entries dropped for lacking a type, qubit or time
    pub dropped_gates: usize,
    /// Measurement entries dropped for lacking a qubit or time
    pub dropped_measurements: usize,
    /// Numeric fields pulled into range
    pub clamped_fields: usize,
    /// Gates that received a generated id (missing or duplicate)
    pub assigned_ids: usize,
    /// Qubit count was absent or unusable and the default was applied
    pub defaulted_qubits: bool,
    /// Unknown gate types coerced to `H`
    pub coerced_types: Vec<CoercedType>,
    /// Entry indices whose control or target wire was clamped onto the gate's own wire
    pub collapsed_partners: Vec<usize>,
}

impl ValidationReport {
    /// Nothing had to be changed
    pub fn is_clean(&self) -> bool {
        self.dropped_gates == 0
            && self.dropped_measurements == 0
            && self.clamped_fields == 0
            && self.assigned_ids == 0
            && !self.defaulted_qubits
            && self.coerced_types.is_empty()
            && self.collapsed_partners.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dropped {} gate(s), {} measurement(s); clamped {} field(s); assigned {} id(s); coerced {} type(s); collapsed {} partner wire(s)",
            self.dropped_gates,
            self.dropped_measurements,
            self.clamped_fields,
            self.assigned_ids,
            self.coerced_types.len(),
            self.collapsed_partners.len()
        )
    }
}

/// A normalized circuit and its report
#[derive(Debug, Clone)]
pub struct Validated {
    /// Model-conformant circuit, gates in canonical order
    pub circuit: Circuit,
    /// What changed
    pub report: ValidationReport,
}

// ============================================================================
// Validator
// ============================================================================

/// Payload normalizer
/// Gantree: Validator // 검증기
#[derive(Debug, Clone)]
pub struct Validator {
    /// Name used when the payload has none
    default_name: String,
}

impl Default for Validator {
    fn default() -> Self {
        Self::for_generated()
    }
}

impl Validator {
    /// Validator for oracle output
    pub fn for_generated() -> Self {
        Self {
            default_name: GENERATED_CIRCUIT_NAME.to_string(),
        }
    }

    /// Validator for imported files
    pub fn for_import() -> Self {
        Self {
            default_name: IMPORTED_CIRCUIT_NAME.to_string(),
        }
    }

    /// Override the fallback name
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Validate raw text
    /// Gantree: validate_str(&self, raw) -> Result<Validated> // 텍스트 검증
    pub fn validate_str(&self, raw: &str) -> QcdResult<Validated> {
        let object = extract_object(raw)?;
        Ok(self.normalize(&object))
    }

    /// Validate an already-parsed value
    pub fn validate_value(&self, value: Value) -> QcdResult<Validated> {
        let object = into_object(value)?;
        Ok(self.normalize(&object))
    }

    /// Normalize a circuit-shaped object. Never fails.
    /// Gantree: normalize(&self, Map) -> Validated // 정규화
    pub fn normalize(&self, object: &Map<String, Value>) -> Validated {
        let mut report = ValidationReport::default();

        let qubits = normalize_qubit_count(object.get("qubits"), &mut report);
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.default_name);

        let mut circuit = Circuit::with_name(qubits, name);
        if let Some(id) = non_empty_str(object.get("id")) {
            circuit.set_id(CircuitId::new(id));
        }
        circuit.set_description(non_empty_str(object.get("description")).map(String::from));
        let created_at = timestamp(object.get("createdAt")).or(circuit.created_at());
        circuit.set_timestamps(created_at, timestamp(object.get("updatedAt")));

        let entries = object.get("gates").and_then(Value::as_array);
        let mut seen_ids = HashSet::new();
        for (index, entry) in entries.into_iter().flatten().enumerate() {
            let Some(gate) = normalize_gate(index, entry, qubits, &mut seen_ids, &mut report)
            else {
                report.dropped_gates += 1;
                log::debug!("Dropped gate entry {}: missing type, qubit or time", index);
                continue;
            };
            if let Err(err) = circuit.insert_gate(gate) {
                report.dropped_gates += 1;
                log::debug!("Dropped gate entry {}: {}", index, err);
            }
        }

        let measurements = object.get("measurements").and_then(Value::as_array);
        for (index, entry) in measurements.into_iter().flatten().enumerate() {
            match normalize_measurement(entry, qubits, &mut report) {
                Some(m) => {
                    if let Err(err) = circuit.insert_measurement(m) {
                        report.dropped_measurements += 1;
                        log::debug!("Dropped measurement entry {}: {}", index, err);
                    }
                }
                None => {
                    report.dropped_measurements += 1;
                    log::debug!("Dropped measurement entry {}: missing qubit or time", index);
                }
            }
        }

        circuit.sort_canonical();

        if !report.is_clean() {
            log::debug!("Normalized '{}': {}", circuit.name(), report);
        }

        Validated { circuit, report }
    }
}

/// Validate raw oracle output with the default validator
pub fn validate(raw: &str) -> QcdResult<Validated> {
    Validator::for_generated().validate_str(raw)
}

// ============================================================================
// Field Normalization
// ============================================================================

/// Absent, non-numeric or < 1 → default; > max → max; fractions truncate
fn normalize_qubit_count(value: Option<&Value>, report: &mut ValidationReport) -> usize {
    match value.and_then(Value::as_f64) {
        Some(n) if n >= MIN_QUBITS as f64 => {
            let n = n.trunc();
            if n > MAX_QUBITS as f64 {
                report.clamped_fields += 1;
                MAX_QUBITS
            } else {
                n as usize
            }
        }
        _ => {
            report.defaulted_qubits = true;
            DEFAULT_QUBITS
        }
    }
}

fn normalize_gate(
    index: usize,
    entry: &Value,
    qubits: usize,
    seen_ids: &mut HashSet<String>,
    report: &mut ValidationReport,
) -> Option<Gate> {
    let fields = entry.as_object()?;
    let type_text = fields.get("type")?.as_str()?;
    let raw_qubit = fields.get("qubit")?.as_f64()?;
    let raw_time = fields.get("time")?.as_f64()?;

    let gate_type = GateType::parse(type_text).unwrap_or_else(|| {
        log::warn!(
            "Unknown gate type '{}' at entry {}: coerced to H",
            type_text,
            index
        );
        report.coerced_types.push(CoercedType {
            index,
            original: type_text.to_string(),
        });
        GateType::H
    });

    let qubit = clamp_wire(raw_qubit, qubits, report);
    let time = clamp_time(raw_time, report);

    let id = match non_empty_str(fields.get("id")) {
        Some(id) if !seen_ids.contains(id) => GateId::new(id),
        _ => {
            report.assigned_ids += 1;
            fresh_id(seen_ids)
        }
    };
    seen_ids.insert(id.as_str().to_string());

    let mut gate = Gate::with_id(id, gate_type, Cell::new(qubit, time));
    gate.parameters = parameters(fields.get("parameters"));
    gate.control_qubit = partner_wire(index, fields.get("controlQubit"), qubit, qubits, report);
    gate.target_qubit = partner_wire(index, fields.get("targetQubit"), qubit, qubits, report);
    Some(gate)
}

fn normalize_measurement(
    entry: &Value,
    qubits: usize,
    report: &mut ValidationReport,
) -> Option<Measurement> {
    let fields = entry.as_object()?;
    let qubit = clamp_wire(fields.get("qubit")?.as_f64()?, qubits, report);
    let time = clamp_time(fields.get("time")?.as_f64()?, report);
    let basis = fields
        .get("basis")
        .and_then(Value::as_str)
        .and_then(MeasurementBasis::parse)
        .unwrap_or_default();

    let mut measurement = Measurement::new(qubit, time, basis);
    if let Some(id) = non_empty_str(fields.get("id")) {
        measurement.id = id.to_string();
    }
    Some(measurement)
}

/// Clamp into [0, qubits - 1], flooring fractions
fn clamp_wire(raw: f64, qubits: usize, report: &mut ValidationReport) -> QubitId {
    let max = qubits.saturating_sub(1) as f64;
    let clamped = raw.floor().clamp(0.0, max);
    if clamped != raw {
        report.clamped_fields += 1;
    }
    clamped as QubitId
}

/// Clamp to >= 0, flooring fractions
fn clamp_time(raw: f64, report: &mut ValidationReport) -> TimeStep {
    let clamped = raw.floor().max(0.0);
    if clamped != raw {
        report.clamped_fields += 1;
    }
    clamped as TimeStep
}

/// Clamp a control or target wire. Landing on the gate's own wire through
/// clamping is reported.
fn partner_wire(
    index: usize,
    value: Option<&Value>,
    qubit: QubitId,
    qubits: usize,
    report: &mut ValidationReport,
) -> Option<QubitId> {
    let raw = value.and_then(Value::as_f64)?;
    let wire = clamp_wire(raw, qubits, report);
    if wire == qubit && raw != wire as f64 {
        log::warn!(
            "Partner wire {} at entry {} clamped onto the gate's own wire {}",
            raw,
            index,
            qubit
        );
        report.collapsed_partners.push(index);
    }
    Some(wire)
}

/// Keep numeric entries only
fn parameters(value: Option<&Value>) -> Parameters {
    value
        .and_then(Value::as_object)
        .map(|params| {
            params
                .iter()
                .filter_map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
                .collect()
        })
        .unwrap_or_default()
}

fn fresh_id(seen_ids: &HashSet<String>) -> GateId {
    loop {
        let id = GateId::generate();
        if !seen_ids.contains(id.as_str()) {
            return id;
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let text = value.and_then(Value::as_str)?;
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

// ============================================================================
// Tests
// ============================================================================
