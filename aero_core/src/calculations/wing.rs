//! # Wing Lifting-Line Analysis
//!
//! Solves the lifting-line system for a discretized wing and derives the
//! wing-level coefficients from the result.
//!
//! ## Assumptions
//!
//! - Symmetric spanwise loading (odd harmonics only)
//! - Unswept, moderate-to-high aspect ratio planform
//! - Linear section lift curve at every station
//! - SI units throughout
//!
//! ## Example
//!
//! ```rust
//! use aero_core::calculations::wing::{calculate, WingInput, WingStations};
//!
//! let input = WingInput {
//!     label: "Main wing".to_string(),
//!     stations: WingStations::half_span(8, 5.7, 1.25, 0.08).unwrap(),
//!     halfspan_m: 5.0,
//!     aspect_ratio: 8.0,
//!     true_airspeed_mps: 50.0,
//!     air_density_kgpm3: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("C_L  = {:.4}", result.lift_coefficient);
//! println!("C_Di = {:.5}", result.induced_drag_coefficient);
//! println!("e    = {:.3}", result.span_efficiency);
//! assert!(result.span_efficiency > 0.9 && result.span_efficiency <= 1.0);
//! ```

use serde::{Deserialize, Serialize};

use super::nullable::{f64_or_nan, vec_f64_or_nan};
use crate::equations::coefficients::{
    elliptic_center_loading, fourier_circulation, fourier_induced_downwash, fourier_induced_drag_coefficient,
    fourier_span_efficiency_factor, fourier_total_lift_coefficient, induced_drag_factor,
};
use crate::equations::lifting_line::{half_span_stations, lifting_line, spanwise_position};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{AeroError, AeroResult};

/// Discretized wing: one entry per station in each parallel sequence.
///
/// ## JSON Example
///
/// ```json
/// {
///   "theta": [0.5236, 1.0472, 1.5708],
///   "c_l_alpha": [5.7, 5.7, 5.7],
///   "chord": [1.0, 0.8, 1.0],
///   "total_alpha": [0.05, 0.05, 0.05]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingStations {
    /// Station angles, strictly inside (0, π) (rad)
    pub theta: Vec<f64>,

    /// Section lift-curve slope per station (1/rad)
    pub c_l_alpha: Vec<f64>,

    /// Chord length per station (m)
    pub chord: Vec<f64>,

    /// Total effective angle of attack per station (rad)
    ///
    /// Geometric incidence plus twist plus the section zero-lift angle
    /// correction, measured from the free stream.
    pub total_alpha: Vec<f64>,
}

impl WingStations {
    /// Stations with the same section properties everywhere.
    pub fn uniform(theta: Vec<f64>, c_l_alpha: f64, chord: f64, total_alpha: f64) -> Self {
        let n = theta.len();
        Self {
            theta,
            c_l_alpha: vec![c_l_alpha; n],
            chord: vec![chord; n],
            total_alpha: vec![total_alpha; n],
        }
    }

    /// `n` uniform stations laid out over one semi-span, tip to root.
    pub fn half_span(n: usize, c_l_alpha: f64, chord: f64, total_alpha: f64) -> AeroResult<Self> {
        Ok(Self::uniform(half_span_stations(n)?, c_l_alpha, chord, total_alpha))
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    /// True when there are no stations
    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// Whether the station angles follow the [`half_span_stations`] layout,
    /// to within round-off
    pub fn is_half_span_layout(&self) -> bool {
        half_span_stations(self.len()).map_or(false, |layout| {
            layout.iter().zip(&self.theta).all(|(a, b)| (a - b).abs() <= 1e-12)
        })
    }

    /// Check that the sequences are non-empty and index-aligned.
    pub fn validate(&self) -> AeroResult<()> {
        if self.is_empty() {
            return Err(AeroError::invalid_input(
                "stations.theta",
                "[]",
                "At least one station is required",
            ));
        }
        let n = self.len();
        for (field, len) in [
            ("stations.c_l_alpha", self.c_l_alpha.len()),
            ("stations.chord", self.chord.len()),
            ("stations.total_alpha", self.total_alpha.len()),
        ] {
            if len != n {
                return Err(AeroError::invalid_input(
                    field,
                    format!("length {}", len),
                    format!("Must match the number of station angles ({})", n),
                ));
            }
        }
        Ok(())
    }
}

/// Input parameters for a wing analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Main wing",
///   "stations": {
///     "theta": [0.5236, 1.0472, 1.5708],
///     "c_l_alpha": [5.7, 5.7, 5.7],
///     "chord": [1.0, 0.8, 1.0],
///     "total_alpha": [0.05, 0.05, 0.05]
///   },
///   "halfspan_m": 5.0,
///   "aspect_ratio": 8.0,
///   "true_airspeed_mps": 50.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WingInput {
    /// User label for this wing (e.g., "Main wing", "Horizontal tail")
    pub label: String,

    /// Spanwise discretization and section properties
    pub stations: WingStations,

    /// Halfspan in meters
    pub halfspan_m: f64,

    /// Aspect ratio b²/S
    pub aspect_ratio: f64,

    /// True airspeed in m/s, used for downwash and circulation
    pub true_airspeed_mps: f64,

    /// Air density in kg/m³. When given, the result also carries the lift
    /// and the center loading of the equivalent elliptic wing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_density_kgpm3: Option<f64>,
}

impl WingInput {
    /// Validate input parameters.
    ///
    /// Station angles are checked by the solver itself.
    pub fn validate(&self) -> AeroResult<()> {
        self.stations.validate()?;
        if !(self.halfspan_m > 0.0) {
            return Err(AeroError::invalid_input(
                "halfspan_m",
                self.halfspan_m.to_string(),
                "Halfspan must be positive",
            ));
        }
        if !(self.aspect_ratio > 0.0) {
            return Err(AeroError::invalid_input(
                "aspect_ratio",
                self.aspect_ratio.to_string(),
                "Aspect ratio must be positive",
            ));
        }
        if !(self.true_airspeed_mps > 0.0) {
            return Err(AeroError::invalid_input(
                "true_airspeed_mps",
                self.true_airspeed_mps.to_string(),
                "Airspeed must be positive",
            ));
        }
        if let Some(density) = self.air_density_kgpm3 {
            if !(density > 0.0) {
                return Err(AeroError::invalid_input(
                    "air_density_kgpm3",
                    density.to_string(),
                    "Density must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Results from a wing analysis.
///
/// Per-station vectors are aligned with the input stations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WingResult {
    /// Fourier coefficients A_k for harmonics 1, 3, 5, ...
    pub fourier_coefficients: Vec<f64>,

    /// Wing lift coefficient C_L = π·A·A_0
    pub lift_coefficient: f64,

    /// Induced drag coefficient C_Di
    pub induced_drag_coefficient: f64,

    /// Span efficiency (Oswald) factor e. NaN for an unloaded wing.
    #[serde(deserialize_with = "f64_or_nan")]
    pub span_efficiency: f64,

    /// Induced drag factor K = 1/(π·A·e), ready for the sizing boundaries
    #[serde(deserialize_with = "f64_or_nan")]
    pub induced_drag_factor: f64,

    /// Downwash per station (m/s, positive down)
    #[serde(deserialize_with = "vec_f64_or_nan")]
    pub downwash_mps: Vec<f64>,

    /// Bound circulation per station (m²/s)
    #[serde(deserialize_with = "vec_f64_or_nan")]
    pub circulation_m2ps: Vec<f64>,

    /// Spanwise coordinate per station (m)
    pub spanwise_position_m: Vec<f64>,

    /// Wing lift L = ½ρV²·S·C_L (N), when the air density is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lift_n: Option<f64>,

    /// Center loading c·c_l of the elliptic wing carrying the same lift (m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elliptic_center_loading_m: Option<f64>,

    /// Equations applied, in order
    pub equations_used: Vec<Equation>,
}

impl WingResult {
    /// Number of harmonics solved for
    pub fn harmonic_count(&self) -> usize {
        self.fourier_coefficients.len()
    }

    /// Induced angle of attack per station, w/V (rad)
    pub fn induced_angle_rad(&self, true_airspeed_mps: f64) -> Vec<f64> {
        self.downwash_mps.iter().map(|w| w / true_airspeed_mps).collect()
    }
}

/// Run the lifting-line analysis for a wing.
///
/// # Returns
///
/// * `Ok(WingResult)` - Coefficients and spanwise distributions
/// * `Err(AeroError)` - Invalid input, or a singular system from the solver
pub fn calculate(input: &WingInput) -> AeroResult<WingResult> {
    input.validate()?;

    let mut tracker = EquationTracker::new();
    let context = input.label.as_str();
    let stations = &input.stations;
    if stations.is_half_span_layout() {
        tracker.record(Equation::HalfSpanStations, context);
    }

    let coeff = lifting_line(
        &stations.theta,
        &stations.c_l_alpha,
        &stations.chord,
        &stations.total_alpha,
        input.halfspan_m,
    )?;
    tracker.record(Equation::LiftingLineSystem, context);

    let lift_coefficient = fourier_total_lift_coefficient(&coeff, input.aspect_ratio);
    tracker.record(Equation::TotalLiftCoefficient, context);
    let induced_drag_coefficient = fourier_induced_drag_coefficient(&coeff, input.aspect_ratio);
    tracker.record(Equation::InducedDragCoefficient, context);
    let span_efficiency = fourier_span_efficiency_factor(&coeff);
    tracker.record(Equation::SpanEfficiencyFactor, context);
    let k = induced_drag_factor(input.aspect_ratio, span_efficiency);
    tracker.record(Equation::InducedDragFactor, context);

    let downwash_mps = fourier_induced_downwash(&coeff, &stations.theta, input.true_airspeed_mps);
    tracker.record(Equation::InducedDownwash, context);
    let circulation_m2ps =
        fourier_circulation(&coeff, &stations.theta, input.halfspan_m, input.true_airspeed_mps);
    tracker.record(Equation::Circulation, context);
    let spanwise_position_m = stations
        .theta
        .iter()
        .map(|&t| spanwise_position(t, input.halfspan_m))
        .collect();
    tracker.record(Equation::SpanwisePosition, context);

    let (lift_n, elliptic_center_loading_m) = match input.air_density_kgpm3 {
        Some(density) => {
            // S = b²/A with b = 2s
            let area = (2.0 * input.halfspan_m).powi(2) / input.aspect_ratio;
            let lift = 0.5 * density * input.true_airspeed_mps.powi(2) * area * lift_coefficient;
            tracker.record(Equation::EllipticCenterLoading, context);
            (
                Some(lift),
                Some(elliptic_center_loading(input.halfspan_m, lift, density, input.true_airspeed_mps)),
            )
        }
        None => (None, None),
    };

    Ok(WingResult {
        fourier_coefficients: coeff,
        lift_coefficient,
        induced_drag_coefficient,
        span_efficiency,
        induced_drag_factor: k,
        downwash_mps,
        circulation_m2ps,
        spanwise_position_m,
        lift_n,
        elliptic_center_loading_m,
        equations_used: tracker.unique_equations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn test_wing() -> WingInput {
        WingInput {
            label: "Test Wing".to_string(),
            stations: WingStations {
                theta: vec![PI / 6.0, PI / 3.0, PI / 2.0],
                c_l_alpha: vec![5.7, 5.7, 5.7],
                chord: vec![1.0, 0.8, 1.0],
                total_alpha: vec![0.05, 0.05, 0.05],
            },
            halfspan_m: 5.0,
            aspect_ratio: 8.0,
            true_airspeed_mps: 50.0,
            air_density_kgpm3: None,
        }
    }

    #[test]
    fn test_lift_coefficient_reproduces_fundamental() {
        let result = calculate(&test_wing()).unwrap();
        assert_eq!(result.harmonic_count(), 3);
        assert_eq!(result.lift_coefficient, PI * 8.0 * result.fourier_coefficients[0]);
        assert!(result.lift_coefficient > 0.0);
    }

    #[test]
    fn test_matches_direct_solver_call() {
        let input = test_wing();
        let result = calculate(&input).unwrap();
        let s = &input.stations;
        let direct = lifting_line(&s.theta, &s.c_l_alpha, &s.chord, &s.total_alpha, input.halfspan_m).unwrap();
        assert_eq!(result.fourier_coefficients, direct);
    }

    #[test]
    fn test_drag_identity() {
        let result = calculate(&test_wing()).unwrap();
        let cl = result.lift_coefficient;
        let expected = cl * cl / (PI * 8.0 * result.span_efficiency);
        assert!((result.induced_drag_coefficient - expected).abs() < 1e-12);
        assert!((result.induced_drag_factor - 1.0 / (PI * 8.0 * result.span_efficiency)).abs() < 1e-12);
    }

    #[test]
    fn test_rectangular_wing_efficiency() {
        let input = WingInput {
            label: "Rectangular".to_string(),
            stations: WingStations::half_span(10, 2.0 * PI, 1.25, 0.08).unwrap(),
            halfspan_m: 5.0,
            aspect_ratio: 8.0,
            true_airspeed_mps: 50.0,
            air_density_kgpm3: None,
        };
        let result = calculate(&input).unwrap();

        // Untwisted rectangular wings sit a few percent below elliptic
        assert!(result.span_efficiency > 0.85, "e = {}", result.span_efficiency);
        assert!(result.span_efficiency < 1.0, "e = {}", result.span_efficiency);
        // 3D lift slope below 2π
        assert!(result.lift_coefficient < 2.0 * PI * 0.08);
    }

    #[test]
    fn test_distributions_aligned_with_stations() {
        let result = calculate(&test_wing()).unwrap();
        assert_eq!(result.downwash_mps.len(), 3);
        assert_eq!(result.circulation_m2ps.len(), 3);
        assert_eq!(result.spanwise_position_m.len(), 3);
        assert!((result.spanwise_position_m[2]).abs() < 1e-12);
        assert!(result.circulation_m2ps.iter().all(|g| *g > 0.0));
        assert!(result.downwash_mps.iter().all(|w| *w > 0.0));

        let eps = result.induced_angle_rad(50.0);
        assert!((eps[0] - result.downwash_mps[0] / 50.0).abs() < 1e-15);
    }

    #[test]
    fn test_singular_stations_propagate() {
        let mut input = test_wing();
        input.stations.theta = vec![PI / 4.0, PI / 2.0, 3.0 * PI / 4.0];
        input.stations.chord = vec![1.0, 0.8, 1.0];
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "SINGULAR_SYSTEM");
    }

    #[test]
    fn test_tip_station_rejected() {
        let mut input = test_wing();
        input.stations.theta[0] = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_misaligned_stations() {
        let mut input = test_wing();
        input.stations.total_alpha.pop();
        match calculate(&input) {
            Err(AeroError::InvalidInput { field, .. }) => assert_eq!(field, "stations.total_alpha"),
            other => panic!("expected length error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_scalars() {
        let mut input = test_wing();
        input.aspect_ratio = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_wing();
        input.halfspan_m = -5.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_uniform_builder() {
        let stations = WingStations::uniform(vec![0.4, 0.8, 1.2], 6.0, 1.1, 0.03);
        assert_eq!(stations.len(), 3);
        assert_eq!(stations.chord, vec![1.1; 3]);
        assert!(stations.validate().is_ok());
        assert!(WingStations::half_span(0, 6.0, 1.1, 0.03).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let wing = test_wing();
        let json = serde_json::to_string_pretty(&wing).unwrap();
        let roundtrip: WingInput = serde_json::from_str(&json).unwrap();
        assert_eq!(wing.stations, roundtrip.stations);
        assert_eq!(wing.halfspan_m, roundtrip.halfspan_m);
    }

    #[test]
    fn test_equations_recorded_in_order() {
        let mut input = test_wing();
        input.stations.theta = vec![0.4, 0.9, 1.4];
        let result = calculate(&input).unwrap();
        assert_eq!(result.equations_used[0], Equation::LiftingLineSystem);
        assert!(!result.equations_used.contains(&Equation::HalfSpanStations));
        assert!(!result.equations_used.contains(&Equation::EllipticCenterLoading));
        assert_eq!(result.equations_used.len(), 8);
    }

    #[test]
    fn test_half_span_layout_recorded() {
        // π/6, π/3, π/2 is the three-station layout
        assert!(test_wing().stations.is_half_span_layout());
        assert!(WingStations::half_span(6, 5.7, 1.0, 0.05).unwrap().is_half_span_layout());
        assert!(!WingStations::uniform(vec![0.4, 0.9, 1.4], 5.7, 1.0, 0.05).is_half_span_layout());

        let result = calculate(&test_wing()).unwrap();
        assert_eq!(result.equations_used[0], Equation::HalfSpanStations);
        assert_eq!(result.equations_used[1], Equation::LiftingLineSystem);
        assert_eq!(result.equations_used.len(), 9);
    }

    #[test]
    fn test_lift_and_elliptic_loading_with_density() {
        let mut input = test_wing();
        input.air_density_kgpm3 = Some(1.225);
        let result = calculate(&input).unwrap();

        // S = (2·5)²/8 = 12.5 m², q = ½·1.225·50²
        let lift = result.lift_n.unwrap();
        let expected_lift = 0.5 * 1.225 * 2500.0 * 12.5 * result.lift_coefficient;
        assert!((lift - expected_lift).abs() < 1e-9 * expected_lift);

        // Density cancels: ℓ_0 = 4·s·C_L/(π·A)
        let loading = result.elliptic_center_loading_m.unwrap();
        let expected_loading = 4.0 * 5.0 * result.lift_coefficient / (PI * 8.0);
        assert!((loading - expected_loading).abs() < 1e-12);
        assert!(result.equations_used.contains(&Equation::EllipticCenterLoading));

        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("air_density_kgpm3"));
        assert!(!serde_json::to_string(&test_wing()).unwrap().contains("air_density_kgpm3"));
    }

    #[test]
    fn test_invalid_density() {
        let mut input = test_wing();
        input.air_density_kgpm3 = Some(0.0);
        match calculate(&input) {
            Err(AeroError::InvalidInput { field, .. }) => assert_eq!(field, "air_density_kgpm3"),
            other => panic!("expected density error, got {:?}", other),
        }
    }

    #[test]
    fn test_unloaded_wing_roundtrips_through_json() {
        let mut input = test_wing();
        input.stations.total_alpha = vec![0.0; 3];
        let result = calculate(&input).unwrap();
        assert_eq!(result.lift_coefficient, 0.0);
        assert!(result.span_efficiency.is_nan());
        assert!(result.induced_drag_factor.is_nan());

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"span_efficiency\":null"));

        let roundtrip: WingResult = serde_json::from_str(&json).unwrap();
        assert!(roundtrip.span_efficiency.is_nan());
        assert!(roundtrip.induced_drag_factor.is_nan());
        assert_eq!(roundtrip.lift_coefficient, 0.0);
        assert_eq!(roundtrip.equations_used, result.equations_used);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_wing()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("fourier_coefficients"));
        assert!(json.contains("span_efficiency"));
        assert!(json.contains("LiftingLineSystem"));

        let roundtrip: WingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.fourier_coefficients, roundtrip.fourier_coefficients);
    }
}
