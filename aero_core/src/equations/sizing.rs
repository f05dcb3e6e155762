//! # Preliminary Sizing Boundaries
//!
//! Constraint lines for the design-point chart: thrust-to-weight (jet) or
//! power loading (propeller) against wing loading.
//!
//! ## Notation
//!
//! - `W/S` = Wing loading (N/m²)
//! - `ρ` = Design density at the condition being checked (kg/m³)
//! - `σ` = Density ratio ρ_design / ρ_reference (thrust or power lapse)
//! - `RC` = Residual rate of climb at the ceiling (m/s)
//! - `C_D0` = Zero-lift drag coefficient
//! - `K` = Induced drag factor 1/(π·A·e)
//! - `(L/D)_max` = Maximum lift-to-drag ratio
//! - `η_p` = Propeller efficiency
//!
//! The ceiling boundaries are swept across a slice of candidate wing loadings
//! and return a vector aligned with it. Points outside the physical domain
//! (negative radicands, zero density) come back as NaN or Inf, never as an
//! error, so that the sweep always has one output per input.
//!
//! ## References
//!
//! - Sadraey, Aircraft Design: A Systems Engineering Approach, Chapter 4
//! - Raymer, Aircraft Design: A Conceptual Approach, 6th Edition, Chapter 5

/// (L/D)_max divided by the lift-to-drag ratio at minimum power: 2/√3 ≈ 1.155.
pub const MIN_POWER_LD_FACTOR: f64 = 1.155;

/// Maximum wing loading that still meets a stall speed requirement.
///
/// # Formula
/// (W/S)_max = (ρ/2)·V_s²·C_Lmax
///
/// Draws a vertical line on the design chart: every wing loading to its left
/// is feasible.
///
/// # Arguments
/// * `stall_speed` - Required stall speed V_s (m/s)
/// * `c_l_max` - Maximum lift coefficient C_Lmax
/// * `design_density` - Density at which the stall speed applies (kg/m³)
///
/// # Returns
/// Maximum wing loading (N/m²)
///
/// # Example
/// ```rust
/// use aero_core::equations::sizing::stall_speed_boundary;
///
/// let ws = stall_speed_boundary(30.0, 1.5, 1.225);
/// assert!((ws - 826.875).abs() < 1e-9);
/// ```
#[inline]
pub fn stall_speed_boundary(stall_speed: f64, c_l_max: f64, design_density: f64) -> f64 {
    design_density / 2.0 * stall_speed.powi(2) * c_l_max
}

/// Density ratio σ = ρ_design / ρ_reference
#[inline]
pub fn density_ratio(design_density: f64, reference_density: f64) -> f64 {
    design_density / reference_density
}

/// Minimum thrust-to-weight ratio at one wing loading for a jet to reach the
/// service ceiling with the required residual climb rate.
///
/// # Formula
/// ```text
/// V    = √(2/ρ / √(C_D0/K) · W/S)
/// T/W  = RC / (σ·V) + 1 / (σ·(L/D)_max)
/// ```
///
/// V is the speed for (L/D)_max at the ceiling.
#[inline]
pub fn service_ceiling_thrust_to_weight(
    wing_loading: f64,
    roc_ceiling: f64,
    ld_max: f64,
    c_d_0: f64,
    k: f64,
    reference_density: f64,
    design_density: f64,
) -> f64 {
    let sigma = density_ratio(design_density, reference_density);
    let speed = (2.0 / design_density / (c_d_0 / k).sqrt() * wing_loading).sqrt();
    roc_ceiling / (sigma * speed) + 1.0 / sigma / ld_max
}

/// Maximum power loading at one wing loading for a propeller aircraft to
/// reach the service ceiling with the required residual climb rate.
///
/// # Formula
/// ```text
/// V    = √(2/(ρ·√(3·C_D0/K)) · W/S)
/// W/P  = σ / (RC/η_p + V·1.155/((L/D)_max·η_p))
/// ```
///
/// V is the speed for minimum power at the ceiling.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn service_ceiling_power_loading(
    wing_loading: f64,
    roc_ceiling: f64,
    ld_max: f64,
    c_d_0: f64,
    k: f64,
    prop_efficiency: f64,
    reference_density: f64,
    design_density: f64,
) -> f64 {
    let sigma = density_ratio(design_density, reference_density);
    let speed = (2.0 / (design_density * (3.0 * c_d_0 / k).sqrt()) * wing_loading).sqrt();
    sigma / (roc_ceiling / prop_efficiency + speed * MIN_POWER_LD_FACTOR / ld_max / prop_efficiency)
}

/// Service ceiling boundary for jet aircraft.
///
/// Evaluates [`service_ceiling_thrust_to_weight`] for every candidate wing
/// loading.
///
/// # Arguments
/// * `wing_loading` - Candidate wing loadings (N/m²)
/// * `roc_ceiling` - Residual rate of climb at the ceiling (m/s)
/// * `ld_max` - Maximum lift-to-drag ratio
/// * `c_d_0` - Zero-lift drag coefficient
/// * `k` - Induced drag factor 1/(π·A·e)
/// * `reference_density` - Density at which the thrust is rated (kg/m³)
/// * `design_density` - Density at the ceiling (kg/m³)
///
/// # Returns
/// Minimum thrust-to-weight ratio per wing loading, same length and order
///
/// # Example
/// ```rust
/// use aero_core::equations::sizing::service_ceiling_boundary_jet;
///
/// let tw = service_ceiling_boundary_jet(&[2000.0, 3000.0, 4000.0], 0.5, 15.0, 0.02, 0.05, 1.225, 0.4);
/// assert_eq!(tw.len(), 3);
/// assert!(tw.iter().all(|v| *v > 0.0));
/// ```
pub fn service_ceiling_boundary_jet(
    wing_loading: &[f64],
    roc_ceiling: f64,
    ld_max: f64,
    c_d_0: f64,
    k: f64,
    reference_density: f64,
    design_density: f64,
) -> Vec<f64> {
    wing_loading
        .iter()
        .map(|&ws| {
            service_ceiling_thrust_to_weight(ws, roc_ceiling, ld_max, c_d_0, k, reference_density, design_density)
        })
        .collect()
}

/// Service ceiling boundary for propeller aircraft.
///
/// Evaluates [`service_ceiling_power_loading`] for every candidate wing
/// loading.
///
/// # Arguments
/// * `wing_loading` - Candidate wing loadings (N/m²)
/// * `roc_ceiling` - Residual rate of climb at the ceiling (m/s)
/// * `ld_max` - Maximum lift-to-drag ratio
/// * `c_d_0` - Zero-lift drag coefficient
/// * `k` - Induced drag factor 1/(π·A·e)
/// * `prop_efficiency` - Propeller efficiency η_p
/// * `reference_density` - Density at which the power is rated (kg/m³)
/// * `design_density` - Density at the ceiling (kg/m³)
///
/// # Returns
/// Maximum power loading per wing loading (N/W), same length and order
#[allow(clippy::too_many_arguments)]
pub fn service_ceiling_boundary_prop(
    wing_loading: &[f64],
    roc_ceiling: f64,
    ld_max: f64,
    c_d_0: f64,
    k: f64,
    prop_efficiency: f64,
    reference_density: f64,
    design_density: f64,
) -> Vec<f64> {
    wing_loading
        .iter()
        .map(|&ws| {
            service_ceiling_power_loading(
                ws,
                roc_ceiling,
                ld_max,
                c_d_0,
                k,
                prop_efficiency,
                reference_density,
                design_density,
            )
        })
        .collect()
}
