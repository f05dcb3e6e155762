//! # aero_core - Conceptual Aircraft Design Calculation Engine
//!
//! `aero_core` provides the numerical kernel for early-stage aircraft design:
//! a lifting-line solver for straight wings, the aerodynamic coefficients
//! derived from it, and the stall and service ceiling boundaries of a
//! constraint diagram. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Calculation types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every formula is registered with its textbook reference
//!
//! ## Quick Start
//!
//! ```rust
//! use aero_core::equations::{fourier_span_efficiency_factor, half_span_stations, lifting_line};
//!
//! // Rectangular wing, aspect ratio 8, 6 stations on the half span
//! let theta = half_span_stations(6).unwrap();
//! let n = theta.len();
//! let coefficients = lifting_line(
//!     &theta,
//!     &vec![2.0 * std::f64::consts::PI; n],
//!     &vec![1.5; n],
//!     &vec![0.1; n],
//!     6.0,
//! )
//! .unwrap();
//!
//! let e = fourier_span_efficiency_factor(&coefficients);
//! assert!(e > 0.85 && e < 1.0);
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - Lifting-line solver, coefficient and sizing formulas, equation registry
//! - [`calculations`] - Wing and constraint-diagram calculations with a JSON entry point
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run_json, CalculationItem, CalculationOutput};
pub use errors::{AeroError, AeroResult};
