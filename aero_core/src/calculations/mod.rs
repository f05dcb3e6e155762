//! # Design Calculations
//!
//! This module contains all calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, AeroError>` - Pure calculation function
//!
//! ## JSON Integration
//!
//! All types are designed for machine consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`wing`] - Lifting-line analysis of a straight wing
//! - [`constraint`] - Stall and service ceiling constraint diagram

pub mod constraint;
pub mod wing;

mod nullable;

use serde::{Deserialize, Serialize};

use crate::errors::AeroResult;

// Re-export commonly used types
pub use constraint::{BoundaryKind, ConstraintInput, ConstraintResult, Propulsion};
pub use wing::{WingInput, WingResult, WingStations};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "Constraint",
///   "label": "Trainer",
///   "wing_loadings_npm2": [400.0, 800.0],
///   "...": "remaining ConstraintInput fields"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Lifting-line wing analysis
    Wing(WingInput),
    /// Constraint diagram sweep
    Constraint(ConstraintInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Wing(w) => &w.label,
            CalculationItem::Constraint(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Wing(_) => "Wing",
            CalculationItem::Constraint(_) => "Constraint",
        }
    }

    /// Run the wrapped calculation
    pub fn run(&self) -> AeroResult<CalculationOutput> {
        match self {
            CalculationItem::Wing(input) => wing::calculate(input).map(CalculationOutput::Wing),
            CalculationItem::Constraint(input) => constraint::calculate(input).map(CalculationOutput::Constraint),
        }
    }
}

/// Result of running a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    /// Lifting-line wing analysis results
    Wing(WingResult),
    /// Constraint diagram results
    Constraint(ConstraintResult),
}

/// Run a calculation described as JSON and return the result as JSON.
///
/// Malformed JSON or an unknown `type` tag is reported as
/// [`AeroError::SerializationError`](crate::errors::AeroError::SerializationError);
/// calculation failures pass through unchanged.
///
/// # Example
///
/// ```rust
/// use aero_core::calculations::run_json;
///
/// let request = r#"{
///     "type": "Constraint",
///     "label": "Trainer",
///     "wing_loadings_npm2": [400.0, 1000.0],
///     "stall_speed_mps": 30.0,
///     "c_l_max": 1.5,
///     "stall_density": 1.225,
///     "roc_ceiling_mps": 0.5,
///     "ld_max": 12.0,
///     "c_d_0": 0.025,
///     "k": 0.045,
///     "reference_density": 1.225,
///     "ceiling_density": 0.55,
///     "propulsion": "Jet"
/// }"#;
///
/// let response = run_json(request).unwrap();
/// assert!(response.contains("\"feasible\":[true,false]"));
/// ```
pub fn run_json(request: &str) -> AeroResult<String> {
    let item: CalculationItem = serde_json::from_str(request)?;
    let output = item.run()?;
    Ok(serde_json::to_string(&output)?)
}
