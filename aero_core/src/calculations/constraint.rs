//! # Constraint Diagram
//!
//! Sweeps the sizing boundaries over a range of candidate wing loadings to
//! produce the data for a design-point selection chart.
//!
//! ## Assumptions
//!
//! - Parabolic drag polar (C_D0, K)
//! - Thrust (jet) or power (propeller) lapses with the density ratio
//! - Stall requirement checked at a single density
//!
//! ## Example
//!
//! ```rust
//! use aero_core::calculations::constraint::{calculate, ConstraintInput, Propulsion};
//!
//! let input = ConstraintInput {
//!     label: "Trainer".to_string(),
//!     wing_loadings_npm2: vec![400.0, 600.0, 800.0, 1000.0],
//!     stall_speed_mps: 30.0,
//!     c_l_max: 1.5,
//!     stall_density: 1.225,
//!     roc_ceiling_mps: 0.5,
//!     ld_max: Some(12.0),
//!     c_d_0: 0.025,
//!     k: 0.045,
//!     reference_density: 1.225,
//!     ceiling_density: 0.55,
//!     propulsion: Propulsion::Propeller { efficiency: 0.8 },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_wing_loading_npm2 - 826.875).abs() < 1e-9);
//! assert_eq!(result.feasible, vec![true, true, true, false]);
//! ```

use serde::{Deserialize, Serialize};

use super::nullable::{f64_or_nan, vec_f64_or_nan};
use crate::equations::coefficients::maximum_lift_to_drag;
use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::sizing::{service_ceiling_boundary_jet, service_ceiling_boundary_prop, stall_speed_boundary};
use crate::errors::{AeroError, AeroResult};

/// Propulsion type, which selects the ceiling boundary.
///
/// ## JSON Examples
///
/// ```json
/// "Jet"
/// ```
///
/// ```json
/// { "Propeller": { "efficiency": 0.8 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Propulsion {
    /// Thrust-to-weight boundary
    Jet,
    /// Power-loading boundary
    Propeller {
        /// Propeller efficiency η_p
        efficiency: f64,
    },
}

impl Propulsion {
    /// Quantity plotted on the vertical axis of the chart
    pub fn boundary_kind(&self) -> BoundaryKind {
        match self {
            Propulsion::Jet => BoundaryKind::MinThrustToWeight,
            Propulsion::Propeller { .. } => BoundaryKind::MaxPowerLoading,
        }
    }
}

/// What the ceiling boundary values mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryKind {
    /// Minimum T/W (-): designs above the curve are feasible
    MinThrustToWeight,
    /// Maximum W/P (N/W): designs below the curve are feasible
    MaxPowerLoading,
}

impl BoundaryKind {
    /// Axis label for charts
    pub fn axis_label(&self) -> &'static str {
        match self {
            BoundaryKind::MinThrustToWeight => "T/W [-]",
            BoundaryKind::MaxPowerLoading => "W/P [N/W]",
        }
    }
}

/// Input parameters for a constraint diagram.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Business jet",
///   "wing_loadings_npm2": [2000.0, 3000.0, 4000.0],
///   "stall_speed_mps": 55.0,
///   "c_l_max": 2.0,
///   "stall_density": 1.225,
///   "roc_ceiling_mps": 0.5,
///   "ld_max": 15.0,
///   "c_d_0": 0.02,
///   "k": 0.05,
///   "reference_density": 1.225,
///   "ceiling_density": 0.4,
///   "propulsion": "Jet"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintInput {
    /// User label for this chart
    pub label: String,

    /// Candidate wing loadings to sweep (N/m²)
    pub wing_loadings_npm2: Vec<f64>,

    /// Required stall speed (m/s)
    pub stall_speed_mps: f64,

    /// Maximum lift coefficient in the stall configuration
    pub c_l_max: f64,

    /// Density at which the stall speed applies (kg/m³)
    pub stall_density: f64,

    /// Residual rate of climb at the service ceiling (m/s)
    pub roc_ceiling_mps: f64,

    /// Maximum lift-to-drag ratio. Derived from the drag polar
    /// (C_D0, K) when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ld_max: Option<f64>,

    /// Zero-lift drag coefficient
    pub c_d_0: f64,

    /// Induced drag factor K = 1/(π·A·e)
    pub k: f64,

    /// Density at which thrust or power is rated (kg/m³)
    pub reference_density: f64,

    /// Density at the service ceiling (kg/m³)
    pub ceiling_density: f64,

    /// Jet or propeller
    pub propulsion: Propulsion,
}

impl ConstraintInput {
    /// Validate input parameters.
    ///
    /// Individual wing loadings are not checked: degenerate points show up as
    /// NaN in the boundary rather than failing the whole sweep.
    pub fn validate(&self) -> AeroResult<()> {
        if self.wing_loadings_npm2.is_empty() {
            return Err(AeroError::invalid_input(
                "wing_loadings_npm2",
                "[]",
                "At least one candidate wing loading is required",
            ));
        }
        for (field, value) in [
            ("stall_density", self.stall_density),
            ("reference_density", self.reference_density),
            ("ceiling_density", self.ceiling_density),
        ] {
            if !(value > 0.0) {
                return Err(AeroError::invalid_input(field, value.to_string(), "Density must be positive"));
            }
        }
        if let Propulsion::Propeller { efficiency } = self.propulsion {
            if !(efficiency > 0.0 && efficiency <= 1.0) {
                return Err(AeroError::invalid_input(
                    "propulsion.efficiency",
                    efficiency.to_string(),
                    "Propeller efficiency must be in (0, 1]",
                ));
            }
        }
        Ok(())
    }
}

/// Results from a constraint diagram sweep.
///
/// `ceiling_boundary` and `feasible` are aligned with the input wing loadings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintResult {
    /// Largest wing loading meeting the stall requirement (N/m²)
    #[serde(deserialize_with = "f64_or_nan")]
    pub max_wing_loading_npm2: f64,

    /// Maximum lift-to-drag ratio used for the ceiling boundary
    #[serde(deserialize_with = "f64_or_nan")]
    pub ld_max: f64,

    /// Ceiling boundary value per candidate wing loading, NaN where the
    /// wing loading is outside the formula's domain
    #[serde(deserialize_with = "vec_f64_or_nan")]
    pub ceiling_boundary: Vec<f64>,

    /// Meaning of `ceiling_boundary`
    pub boundary_kind: BoundaryKind,

    /// Whether each candidate is a positive wing loading meeting the stall
    /// requirement
    pub feasible: Vec<bool>,

    /// Equations applied, in order
    pub equations_used: Vec<Equation>,
}

impl ConstraintResult {
    /// Highest feasible wing loading and its ceiling boundary value.
    ///
    /// Points with a non-finite boundary are skipped.
    pub fn best_candidate(&self, wing_loadings_npm2: &[f64]) -> Option<(f64, f64)> {
        wing_loadings_npm2
            .iter()
            .zip(&self.ceiling_boundary)
            .zip(&self.feasible)
            .filter(|((_, b), ok)| **ok && b.is_finite())
            .map(|((ws, b), _)| (*ws, *b))
            .max_by(|a, b| a.0.total_cmp(&b.0))
    }
}

/// Sweep the stall and service ceiling boundaries.
///
/// # Returns
///
/// * `Ok(ConstraintResult)` - Boundary values for every candidate
/// * `Err(AeroError)` - Structured error if the chart inputs are invalid
pub fn calculate(input: &ConstraintInput) -> AeroResult<ConstraintResult> {
    input.validate()?;

    let mut tracker = EquationTracker::new();
    let context = input.label.as_str();

    let max_wing_loading_npm2 = stall_speed_boundary(input.stall_speed_mps, input.c_l_max, input.stall_density);
    tracker.record(Equation::StallSpeedBoundary, context);

    let ld_max = match input.ld_max {
        Some(ld_max) => ld_max,
        None => {
            tracker.record(Equation::MaximumLiftToDrag, context);
            maximum_lift_to_drag(input.c_d_0, input.k)
        }
    };

    let ceiling_boundary = match input.propulsion {
        Propulsion::Jet => {
            tracker.record(Equation::CeilingThrustToWeight, context);
            service_ceiling_boundary_jet(
                &input.wing_loadings_npm2,
                input.roc_ceiling_mps,
                ld_max,
                input.c_d_0,
                input.k,
                input.reference_density,
                input.ceiling_density,
            )
        }
        Propulsion::Propeller { efficiency } => {
            tracker.record(Equation::CeilingPowerLoading, context);
            service_ceiling_boundary_prop(
                &input.wing_loadings_npm2,
                input.roc_ceiling_mps,
                ld_max,
                input.c_d_0,
                input.k,
                efficiency,
                input.reference_density,
                input.ceiling_density,
            )
        }
    };

    let feasible = input
        .wing_loadings_npm2
        .iter()
        .map(|ws| *ws > 0.0 && *ws <= max_wing_loading_npm2)
        .collect();

    Ok(ConstraintResult {
        max_wing_loading_npm2,
        ld_max,
        ceiling_boundary,
        boundary_kind: input.propulsion.boundary_kind(),
        feasible,
        equations_used: tracker.unique_equations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::sizing::{service_ceiling_power_loading, service_ceiling_thrust_to_weight};

    fn jet_chart() -> ConstraintInput {
        ConstraintInput {
            label: "Jet".to_string(),
            wing_loadings_npm2: vec![1500.0, 2500.0, 3500.0, 4500.0],
            stall_speed_mps: 55.0,
            c_l_max: 2.0,
            stall_density: 1.225,
            roc_ceiling_mps: 0.5,
            ld_max: Some(15.0),
            c_d_0: 0.02,
            k: 0.05,
            reference_density: 1.225,
            ceiling_density: 0.4,
            propulsion: Propulsion::Jet,
        }
    }

    #[test]
    fn test_jet_chart() {
        let input = jet_chart();
        let result = calculate(&input).unwrap();

        // 1.225/2 · 55² · 2.0 = 3705.625
        assert!((result.max_wing_loading_npm2 - 3705.625).abs() < 1e-9);
        assert_eq!(result.feasible, vec![true, true, true, false]);
        assert_eq!(result.boundary_kind, BoundaryKind::MinThrustToWeight);
        assert_eq!(result.ceiling_boundary.len(), 4);

        let expected = service_ceiling_thrust_to_weight(2500.0, 0.5, 15.0, 0.02, 0.05, 1.225, 0.4);
        assert_eq!(result.ceiling_boundary[1], expected);
        assert_eq!(
            result.equations_used,
            vec![Equation::StallSpeedBoundary, Equation::CeilingThrustToWeight]
        );
    }

    #[test]
    fn test_prop_chart() {
        let mut input = jet_chart();
        input.propulsion = Propulsion::Propeller { efficiency: 0.8 };
        input.wing_loadings_npm2 = vec![600.0, 900.0];
        let result = calculate(&input).unwrap();

        assert_eq!(result.boundary_kind, BoundaryKind::MaxPowerLoading);
        let expected = service_ceiling_power_loading(900.0, 0.5, 15.0, 0.02, 0.05, 0.8, 1.225, 0.4);
        assert_eq!(result.ceiling_boundary[1], expected);
        assert!(result.ceiling_boundary[0] > result.ceiling_boundary[1]);
    }

    #[test]
    fn test_degenerate_points_do_not_fail_sweep() {
        let mut input = jet_chart();
        input.wing_loadings_npm2 = vec![-100.0, 2000.0];
        let result = calculate(&input).unwrap();
        assert!(result.ceiling_boundary[0].is_nan());
        assert!(result.ceiling_boundary[1].is_finite());
        assert_eq!(result.feasible, vec![false, true]);

        let best = result.best_candidate(&input.wing_loadings_npm2).unwrap();
        assert_eq!(best.0, 2000.0);
    }

    #[test]
    fn test_best_candidate_respects_stall_limit() {
        let input = jet_chart();
        let result = calculate(&input).unwrap();
        let (ws, tw) = result.best_candidate(&input.wing_loadings_npm2).unwrap();
        assert_eq!(ws, 3500.0);
        assert_eq!(tw, result.ceiling_boundary[2]);
    }

    #[test]
    fn test_non_positive_loadings_not_feasible() {
        let mut input = jet_chart();
        input.wing_loadings_npm2 = vec![0.0, -1.0, 1000.0];
        let result = calculate(&input).unwrap();
        assert_eq!(result.feasible, vec![false, false, true]);
    }

    #[test]
    fn test_ld_max_from_drag_polar() {
        let mut input = jet_chart();
        input.ld_max = None;
        let result = calculate(&input).unwrap();

        // 1 / (2·√(0.02·0.05)) = 15.811...
        let expected = maximum_lift_to_drag(0.02, 0.05);
        assert!((result.ld_max - expected).abs() < 1e-12);
        assert_eq!(
            result.equations_used,
            vec![
                Equation::StallSpeedBoundary,
                Equation::MaximumLiftToDrag,
                Equation::CeilingThrustToWeight,
            ]
        );
        let tw = service_ceiling_thrust_to_weight(2500.0, 0.5, expected, 0.02, 0.05, 1.225, 0.4);
        assert_eq!(result.ceiling_boundary[1], tw);

        let json = serde_json::to_string(&input).unwrap();
        assert!(!json.contains("\"ld_max\""));
        let parsed: ConstraintInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ld_max, None);
    }

    #[test]
    fn test_result_with_nan_holes_roundtrips() {
        let mut input = jet_chart();
        input.wing_loadings_npm2 = vec![-100.0, 1000.0];
        let result = calculate(&input).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"ceiling_boundary\":[null,"));

        let roundtrip: ConstraintResult = serde_json::from_str(&json).unwrap();
        assert!(roundtrip.ceiling_boundary[0].is_nan());
        assert_eq!(roundtrip.ceiling_boundary[1], result.ceiling_boundary[1]);
        assert_eq!(roundtrip.feasible, result.feasible);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut input = jet_chart();
        input.wing_loadings_npm2.clear();
        assert!(calculate(&input).is_err());

        let mut input = jet_chart();
        input.ceiling_density = 0.0;
        match calculate(&input) {
            Err(AeroError::InvalidInput { field, .. }) => assert_eq!(field, "ceiling_density"),
            other => panic!("expected density error, got {:?}", other),
        }

        let mut input = jet_chart();
        input.propulsion = Propulsion::Propeller { efficiency: 1.5 };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(BoundaryKind::MinThrustToWeight.axis_label(), "T/W [-]");
        assert_eq!(Propulsion::Jet.boundary_kind(), BoundaryKind::MinThrustToWeight);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut input = jet_chart();
        input.propulsion = Propulsion::Propeller { efficiency: 0.82 };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"Propeller\":{\"efficiency\":0.82}"));

        let roundtrip: ConstraintInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.propulsion, input.propulsion);
        assert_eq!(roundtrip.wing_loadings_npm2, input.wing_loadings_npm2);

        let jet: Propulsion = serde_json::from_str("\"Jet\"").unwrap();
        assert_eq!(jet, Propulsion::Jet);
    }
}
