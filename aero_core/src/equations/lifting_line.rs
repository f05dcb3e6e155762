//! # Lifting-Line Solver
//!
//! Prandtl's monoplane equation written at N spanwise stations and solved for
//! the N odd-harmonic Fourier coefficients of the circulation distribution.
//!
//! ## Notation
//!
//! - `θ` = Spanwise polar coordinate, y = -s·cos θ (0 at one tip, π at the other)
//! - `s` = Halfspan
//! - `c_lα` = Section lift-curve slope (1/rad)
//! - `c` = Local chord
//! - `α` = Total effective angle of attack (geometric + twist + zero-lift)
//! - `n_k` = 2k + 1, the odd harmonic carried by coefficient k
//! - `μ` = c_lα·c / (8s), the local stiffness term
//! - `A_k` = Fourier coefficient of harmonic n_k
//!
//! ## Equation
//!
//! At every station i, for the unknowns A_k:
//!
//! ```text
//! Σ_k A_k·sin(n_k·θ_i)·(sin θ_i + μ_i·n_k) = μ_i·α_i·sin θ_i
//! ```
//!
//! One equation per station, one unknown per harmonic, so the system is square.
//! Only odd harmonics appear, which assumes a spanwise-symmetric load.
//!
//! ## References
//!
//! - Anderson, Fundamentals of Aerodynamics, 6th Edition, Section 5.3
//! - Phillips, Mechanics of Flight, 2nd Edition, Section 1.8

use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector};

use crate::errors::{AeroError, AeroResult};

/// Smallest LU pivot, relative to the largest, accepted as non-singular.
///
/// Well-posed station sets keep this ratio many orders of magnitude above the
/// threshold; duplicate or mirrored stations drive it to round-off.
pub const SINGULARITY_TOLERANCE: f64 = 1e-12;

/// Odd harmonic carried by coefficient index `k`
#[inline]
pub fn harmonic(k: usize) -> f64 {
    (2 * k + 1) as f64
}

/// Solve the lifting-line equation for the Fourier coefficients.
///
/// # Arguments
/// * `theta` - Station angles, strictly inside (0, π) (rad)
/// * `c_l_alpha` - Section lift-curve slope per station (1/rad)
/// * `chord` - Chord length per station (m)
/// * `total_alpha` - Total effective angle of attack per station (rad)
/// * `halfspan` - Wing halfspan s (m)
///
/// # Returns
/// The N coefficients A_k for harmonics n_k = 1, 3, 5, ...
///
/// # Errors
/// * [`AeroError::InvalidInput`] - empty or misaligned inputs, an angle at or
///   beyond 0 / π, non-finite section data, non-positive halfspan
/// * [`AeroError::SingularSystem`] - the assembled matrix is not invertible to
///   working precision (e.g. duplicate station angles)
///
/// # Example
/// ```rust
/// use std::f64::consts::PI;
/// use aero_core::equations::lifting_line::lifting_line;
///
/// // Single root station reduces to A_0 = μα / (1 + μ)
/// let coeff = lifting_line(&[PI / 2.0], &[2.0 * PI], &[1.0], &[0.1], 4.0).unwrap();
/// let mu = 2.0 * PI / 32.0;
/// assert!((coeff[0] - mu * 0.1 / (1.0 + mu)).abs() < 1e-12);
/// ```
pub fn lifting_line(
    theta: &[f64],
    c_l_alpha: &[f64],
    chord: &[f64],
    total_alpha: &[f64],
    halfspan: f64,
) -> AeroResult<Vec<f64>> {
    validate_stations(theta, c_l_alpha, chord, total_alpha, halfspan)?;

    let n = theta.len();
    let mu: Vec<f64> = c_l_alpha
        .iter()
        .zip(chord)
        .map(|(cla, c)| cla * c / 8.0 / halfspan)
        .collect();

    // M[i,k] = (sin θ_i + μ_i·n_k)·sin(n_k·θ_i)
    let fourier = DMatrix::from_fn(n, n, |i, k| {
        let nk = harmonic(k);
        (theta[i].sin() + mu[i] * nk) * (nk * theta[i]).sin()
    });

    // b_i = μ_i·sin θ_i·α_i
    let circulation = DVector::from_fn(n, |i, _| mu[i] * theta[i].sin() * total_alpha[i]);

    solve_dense(fourier, &circulation)
}

/// LU-solve a square system, rejecting singular and near-singular matrices.
fn solve_dense(matrix: DMatrix<f64>, rhs: &DVector<f64>) -> AeroResult<Vec<f64>> {
    let n = matrix.nrows();
    let lu = matrix.lu();

    let pivots = lu.u().diagonal();
    let max_pivot = pivots.iter().fold(0.0_f64, |acc, p| acc.max(p.abs()));
    let min_pivot = pivots.iter().fold(f64::INFINITY, |acc, p| acc.min(p.abs()));

    if !(max_pivot > 0.0) || min_pivot <= SINGULARITY_TOLERANCE * max_pivot {
        return Err(AeroError::singular_system(
            n,
            format!(
                "pivot ratio {:e} below tolerance {:e}; check for duplicate or mirrored station angles",
                min_pivot / max_pivot,
                SINGULARITY_TOLERANCE
            ),
        ));
    }

    let solution = lu
        .solve(rhs)
        .ok_or_else(|| AeroError::singular_system(n, "LU factorization has a zero pivot"))?;

    if solution.iter().any(|x| !x.is_finite()) {
        return Err(AeroError::singular_system(n, "solution contains non-finite coefficients"));
    }

    Ok(solution.iter().copied().collect())
}

fn validate_stations(
    theta: &[f64],
    c_l_alpha: &[f64],
    chord: &[f64],
    total_alpha: &[f64],
    halfspan: f64,
) -> AeroResult<()> {
    let n = theta.len();
    if n == 0 {
        return Err(AeroError::invalid_input(
            "theta",
            "[]",
            "At least one station is required",
        ));
    }

    for (field, values) in [("c_l_alpha", c_l_alpha), ("chord", chord), ("total_alpha", total_alpha)] {
        if values.len() != n {
            return Err(AeroError::invalid_input(
                field,
                format!("length {}", values.len()),
                format!("Must match the number of station angles ({})", n),
            ));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(AeroError::invalid_input(field, bad.to_string(), "Station values must be finite"));
        }
    }

    if let Some(bad) = theta.iter().find(|t| !(**t > 0.0 && **t < PI)) {
        return Err(AeroError::invalid_input(
            "theta",
            bad.to_string(),
            "Station angle must lie strictly inside (0, pi); the wingtips are singular",
        ));
    }

    if !(halfspan.is_finite() && halfspan > 0.0) {
        return Err(AeroError::invalid_input(
            "halfspan",
            halfspan.to_string(),
            "Halfspan must be positive",
        ));
    }

    Ok(())
}

/// Station angles for one semi-span of a symmetric wing.
///
/// ```text
/// θ_i = i·π / (2n),   i = 1..n
/// ```
///
/// Runs from next to the tip (θ → 0) to the root (θ = π/2). The tip itself is
/// left out, and no station is mirrored across the root, which would repeat an
/// equation of the odd-harmonic system.
///
/// # Example
/// ```rust
/// use std::f64::consts::PI;
/// use aero_core::equations::lifting_line::half_span_stations;
///
/// let theta = half_span_stations(4).unwrap();
/// assert_eq!(theta.len(), 4);
/// assert!((theta[3] - PI / 2.0).abs() < 1e-15);
/// ```
pub fn half_span_stations(n: usize) -> AeroResult<Vec<f64>> {
    if n == 0 {
        return Err(AeroError::invalid_input("n", "0", "At least one station is required"));
    }
    Ok((1..=n).map(|i| i as f64 * PI / (2.0 * n as f64)).collect())
}

/// Spanwise coordinate of a station: y = -s·cos θ
#[inline]
pub fn spanwise_position(theta: f64, halfspan: f64) -> f64 {
    -halfspan * theta.cos()
}
