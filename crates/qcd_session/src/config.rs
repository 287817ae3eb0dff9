//! Session configuration
//!
//! Gantree: L6_Session → SessionConfig
//!
//! Sources (in priority order):
//! 1. File named by `$QCD_CONFIG`
//! 2. `<config_dir>/qcd/config.json`
//! 3. Built-in defaults

use qcd_core::limits::{self, DEFAULT_QUBITS};
use qcd_core::names::{COPY_SUFFIX, DEFAULT_CIRCUIT_NAME, GENERATED_CIRCUIT_NAME, IMPORTED_CIRCUIT_NAME};
use qcd_core::{QcdError, QcdResult};
use qcd_placement::{GridGeometry, MovePolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "QCD_CONFIG";

/// Editing session configuration
/// Gantree: SessionConfig // 세션 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    // ========================================================================
    // Canvas
    // ========================================================================
    /// Cell dimensions used for pointer mapping
    pub grid: GridGeometry,

    /// Collision handling for drags
    pub move_policy: MovePolicy,

    // ========================================================================
    // Circuit Defaults
    // ========================================================================
    /// Qubit count of a new circuit
    pub default_qubits: usize,

    /// Name of a new circuit
    pub default_name: String,

    /// Appended to the name by `duplicate`
    pub copy_suffix: String,

    /// Name given to imports without one
    pub import_name: String,

    /// Name given to generated circuits without one
    pub generated_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid: GridGeometry::default(),
            move_policy: MovePolicy::Tolerate,
            default_qubits: DEFAULT_QUBITS,
            default_name: DEFAULT_CIRCUIT_NAME.to_string(),
            copy_suffix: COPY_SUFFIX.to_string(),
            import_name: IMPORTED_CIRCUIT_NAME.to_string(),
            generated_name: GENERATED_CIRCUIT_NAME.to_string(),
        }
    }
}

impl SessionConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Defaults, but drags onto an occupied cell are rejected
    pub fn strict() -> Self {
        Self {
            move_policy: MovePolicy::RejectOccupied,
            ..Self::default()
        }
    }

    /// Load from a JSON file; missing fields take their defaults
    /// Gantree: from_file(path) -> Result<Self> // 파일 로드
    pub fn from_file(path: impl AsRef<Path>) -> QcdResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| QcdError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| QcdError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qcd").join("config.json"))
    }

    /// Load from the first available source, falling back to defaults
    /// Gantree: auto_load() -> Self // 자동 로드
    pub fn auto_load() -> Self {
        let explicit = std::env::var(CONFIG_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let candidate = explicit.or_else(|| Self::default_path().filter(|p| p.exists()));
        let Some(path) = candidate else {
            log::info!("No session config found, using defaults");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring session config: {}", e);
                Self::default()
            }
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set grid geometry
    pub fn with_grid(mut self, grid: GridGeometry) -> Self {
        self.grid = grid;
        self
    }

    /// Set move policy
    pub fn with_move_policy(mut self, policy: MovePolicy) -> Self {
        self.move_policy = policy;
        self
    }

    /// Set qubit count of new circuits (clamped to [1, 10])
    pub fn with_default_qubits(mut self, qubits: usize) -> Self {
        self.default_qubits = limits::clamp_qubits(qubits);
        self
    }

    /// Set name of new circuits
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Set duplicate suffix
    pub fn with_copy_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.copy_suffix = suffix.into();
        self
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate configuration
    pub fn validate(&self) -> QcdResult<()> {
        if !(limits::MIN_QUBITS..=limits::MAX_QUBITS).contains(&self.default_qubits) {
            return Err(QcdError::QubitCountOutOfRange {
                requested: self.default_qubits,
                max: limits::MAX_QUBITS,
            });
        }
        let sane = |v: f64| v.is_finite() && v > 0.0;
        if !sane(self.grid.cell_width) || !sane(self.grid.cell_height) {
            return Err(QcdError::Config(format!(
                "cell size must be positive, got {}x{}",
                self.grid.cell_width, self.grid.cell_height
            )));
        }
        Ok(())
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SessionConfig({}Q, {}x{} px, {:?})",
            self.default_qubits, self.grid.cell_width, self.grid.cell_height, self.move_policy
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
