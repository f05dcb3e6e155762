//! # Aerodynamic and Sizing Equations
//!
//! Every formula used by the calculations lives here, as plain functions over
//! `f64` and slices. Keeping them in one place allows:
//! - Direct verification against textbook references
//! - Testing the lifting-line solve in isolation from the derived formulas
//! - One documented home for the sign and angle conventions
//!
//! ## Modules
//!
//! - [`lifting_line`] - Lifting-line linear system and station layout
//! - [`coefficients`] - Lift, induced drag, span efficiency, downwash
//! - [`sizing`] - Stall speed and service ceiling boundaries
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Conventions
//!
//! - **Units**: SI throughout, no conversions performed
//! - **Station angle**: θ = 0 and θ = π are the wingtips, θ = π/2 the root
//! - **Harmonics**: coefficient index k carries harmonic n_k = 2k + 1
//! - **Downwash**: positive downward
//!
//! ## Error Policy
//!
//! [`lifting_line::lifting_line`] is the only fallible function and returns an
//! error for bad stations or a singular system. Everything else returns NaN or
//! Inf at undefined points.

pub mod coefficients;
pub mod lifting_line;
pub mod registry;
pub mod sizing;

// Re-export commonly used items
pub use lifting_line::{half_span_stations, harmonic, lifting_line, spanwise_position, SINGULARITY_TOLERANCE};

pub use coefficients::{
    elliptic_center_loading,
    fourier_circulation,
    fourier_induced_downwash,
    fourier_induced_drag_coefficient,
    fourier_span_efficiency_factor,
    fourier_total_lift_coefficient,
    induced_drag_factor,
    maximum_lift_to_drag,
};

pub use sizing::{
    density_ratio,
    service_ceiling_boundary_jet,
    service_ceiling_boundary_prop,
    service_ceiling_power_loading,
    service_ceiling_thrust_to_weight,
    stall_speed_boundary,
    MIN_POWER_LD_FACTOR,
};

pub use registry::{
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Reference,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
