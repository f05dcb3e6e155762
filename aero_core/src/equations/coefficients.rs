//! # Aerodynamic Coefficients from the Fourier Series
//!
//! Wing-level quantities derived from the lifting-line coefficients A_k, plus
//! a few closed-form relations used alongside them.
//!
//! ## Notation
//!
//! - `A` = Aspect ratio b²/S
//! - `A_k` = Fourier coefficient of harmonic n_k = 2k + 1
//! - `δ` = Induced drag penalty relative to an elliptic load
//! - `e` = Span efficiency (Oswald) factor, 1/(1 + δ)
//! - `V` = True airspeed
//!
//! None of these functions validate their input. Undefined points (A_0 = 0,
//! θ at a wingtip, empty coefficient vectors) come back as NaN or Inf so that a
//! sweep over a chart can keep going.
//!
//! ## References
//!
//! - Anderson, Fundamentals of Aerodynamics, 6th Edition, Section 5.3
//! - Raymer, Aircraft Design: A Conceptual Approach, 6th Edition, Section 12.6

use std::f64::consts::PI;

use super::lifting_line::harmonic;

/// Σ_k n_k·A_k², the weighted sum shared by the drag and efficiency formulas
#[inline]
fn weighted_square_sum(coeff: &[f64]) -> f64 {
    coeff
        .iter()
        .enumerate()
        .map(|(k, a)| harmonic(k) * a * a)
        .sum()
}

/// Total wing lift coefficient.
///
/// # Formula
/// C_L = π·A·A_0
///
/// Only the fundamental carries net lift. An empty vector gives NaN.
///
/// # Example
/// ```rust
/// use aero_core::equations::coefficients::fourier_total_lift_coefficient;
///
/// let cl = fourier_total_lift_coefficient(&[0.02, 0.001], 8.0);
/// assert!((cl - std::f64::consts::PI * 8.0 * 0.02).abs() < 1e-15);
/// ```
#[inline]
pub fn fourier_total_lift_coefficient(coeff: &[f64], aspect_ratio: f64) -> f64 {
    let a0 = coeff.first().copied().unwrap_or(f64::NAN);
    PI * aspect_ratio * a0
}

/// Induced drag coefficient.
///
/// # Formula
/// C_Di = π·A·Σ_k n_k·A_k²
///
/// Non-negative for any real coefficients and positive aspect ratio.
#[inline]
pub fn fourier_induced_drag_coefficient(coeff: &[f64], aspect_ratio: f64) -> f64 {
    PI * aspect_ratio * weighted_square_sum(coeff)
}

/// Span efficiency (Oswald) factor.
///
/// # Formula
/// ```text
/// δ = Σ_{k≥1} n_k·(A_k / A_0)²
/// e = 1 / (1 + δ)
/// ```
///
/// Exactly 1 for an elliptic load (all A_k = 0 for k ≥ 1). A_0 = 0 has no
/// defined efficiency: δ becomes Inf (e = 0) or NaN when every coefficient is 0.
///
/// # Example
/// ```rust
/// use aero_core::equations::coefficients::fourier_span_efficiency_factor;
///
/// assert_eq!(fourier_span_efficiency_factor(&[0.03, 0.0, 0.0]), 1.0);
/// assert!(fourier_span_efficiency_factor(&[0.03, 0.003]) < 1.0);
/// ```
#[inline]
pub fn fourier_span_efficiency_factor(coeff: &[f64]) -> f64 {
    let Some(&a0) = coeff.first() else {
        return f64::NAN;
    };
    let higher: f64 = coeff
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, a)| harmonic(k) * a * a)
        .sum();
    let delta = higher / (a0 * a0);
    1.0 / (1.0 + delta)
}

/// Induced downwash at each station.
///
/// # Formula
/// w(θ_j) = V·Σ_k n_k·A_k·sin(n_k·θ_j) / sin θ_j
///
/// Positive values point down. Undefined at θ = 0 and θ = π.
///
/// # Arguments
/// * `coeff` - Fourier coefficients A_k
/// * `theta` - Station angles (rad)
/// * `tas` - True airspeed (m/s)
///
/// # Returns
/// Downwash velocity per station (m/s), aligned with `theta`
pub fn fourier_induced_downwash(coeff: &[f64], theta: &[f64], tas: f64) -> Vec<f64> {
    theta
        .iter()
        .map(|&t| {
            let series: f64 = coeff
                .iter()
                .enumerate()
                .map(|(k, a)| {
                    let nk = harmonic(k);
                    nk * a * (nk * t).sin()
                })
                .sum();
            tas * series / t.sin()
        })
        .collect()
}

/// Bound circulation at each station.
///
/// # Formula
/// Γ(θ_j) = 4·s·V·Σ_k A_k·sin(n_k·θ_j)
///
/// # Arguments
/// * `coeff` - Fourier coefficients A_k
/// * `theta` - Station angles (rad)
/// * `halfspan` - Wing halfspan s (m)
/// * `tas` - True airspeed (m/s)
///
/// # Returns
/// Circulation per station (m²/s), aligned with `theta`
pub fn fourier_circulation(coeff: &[f64], theta: &[f64], halfspan: f64, tas: f64) -> Vec<f64> {
    theta
        .iter()
        .map(|&t| {
            let series: f64 = coeff
                .iter()
                .enumerate()
                .map(|(k, a)| a * (harmonic(k) * t).sin())
                .sum();
            4.0 * halfspan * tas * series
        })
        .collect()
}

/// Center loading of an elliptic lift distribution that carries a given lift.
///
/// # Formula
/// ```text
/// ℓ_0 = L / (0.5·b·ρ·V²·π)
/// ```
///
/// Equivalent to the root chord times section lift coefficient (c·c_l) at the
/// wing center, with the span b given as the halfspan argument.
///
/// # Arguments
/// * `halfspan` - Halfspan b (m)
/// * `lift` - Desired lift L (N)
/// * `density` - Air density ρ (kg/m³)
/// * `tas` - True airspeed V (m/s)
///
/// # Returns
/// Center loading c·c_l (m)
#[inline]
pub fn elliptic_center_loading(halfspan: f64, lift: f64, density: f64, tas: f64) -> f64 {
    lift / (0.5 * halfspan * density * tas.powi(2) * PI)
}

/// Induced drag factor of the parabolic drag polar.
///
/// # Formula
/// K = 1 / (π·A·e)
#[inline]
pub fn induced_drag_factor(aspect_ratio: f64, span_efficiency: f64) -> f64 {
    1.0 / (PI * aspect_ratio * span_efficiency)
}

/// Maximum lift-to-drag ratio of the parabolic drag polar.
///
/// # Formula
/// (L/D)_max = 1 / (2·√(C_D0·K))
#[inline]
pub fn maximum_lift_to_drag(c_d_0: f64, k: f64) -> f64 {
    1.0 / (2.0 * (c_d_0 * k).sqrt())
}
