//! # Equation Registry
//!
//! Central registry of the aerodynamic and sizing equations implemented in
//! this crate. Each equation carries metadata: a textbook reference, the
//! formula, variable definitions with SI units, and the function implementing it.
//!
//! ## Usage
//!
//! ```rust
//! use aero_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::LiftingLineSystem, "Main wing");
//!
//! let meta = Equation::LiftingLineSystem.metadata();
//! assert_eq!(meta.source_function, "lifting_line");
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Textbook source of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// Anderson, Fundamentals of Aerodynamics
    Anderson { edition: u8, section: &'static str },
    /// Raymer, Aircraft Design: A Conceptual Approach
    Raymer { edition: u8, section: &'static str },
    /// Sadraey, Aircraft Design: A Systems Engineering Approach
    Sadraey { chapter: u8 },
    /// Definition or identity, no citation needed
    Fundamental,
}

impl Reference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            Reference::Anderson { edition, section } => {
                format!("Anderson, Fundamentals of Aerodynamics {}ed, Section {}", edition, section)
            }
            Reference::Raymer { edition, section } => {
                format!("Raymer, Aircraft Design {}ed, Section {}", edition, section)
            }
            Reference::Sadraey { chapter } => format!("Sadraey, Aircraft Design, Ch. {}", chapter),
            Reference::Fundamental => "Definition".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Lifting-line system and station layout
    LiftingLine,
    /// Coefficients derived from the Fourier series
    AerodynamicCoefficients,
    /// Constraint-diagram boundaries
    SizingBoundaries,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::LiftingLine => "Lifting-Line Theory",
            EquationCategory::AerodynamicCoefficients => "Aerodynamic Coefficients",
            EquationCategory::SizingBoundaries => "Sizing Boundaries",
        }
    }

    /// Sort order in generated documentation (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::LiftingLine => 1,
            EquationCategory::AerodynamicCoefficients => 2,
            EquationCategory::SizingBoundaries => 3,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "A_k", "W/S")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// SI units, "-" for dimensionless
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Textbook reference
    pub reference: Reference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation implemented in aero_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Lifting Line
    // -------------------------------------------------------------------------
    /// Σ A_k sin(n_k θ)(sin θ + μ n_k) = μ α sin θ
    LiftingLineSystem,
    /// θ_i = iπ/(2n)
    HalfSpanStations,
    /// y = -s cos θ
    SpanwisePosition,

    // -------------------------------------------------------------------------
    // Aerodynamic Coefficients
    // -------------------------------------------------------------------------
    /// C_L = π A A_0
    TotalLiftCoefficient,
    /// C_Di = π A Σ n_k A_k²
    InducedDragCoefficient,
    /// e = 1/(1 + δ)
    SpanEfficiencyFactor,
    /// w = V Σ n_k A_k sin(n_k θ)/sin θ
    InducedDownwash,
    /// Γ = 4 s V Σ A_k sin(n_k θ)
    Circulation,
    /// ℓ_0 = L/(0.5 b ρ V² π)
    EllipticCenterLoading,
    /// K = 1/(π A e)
    InducedDragFactor,
    /// (L/D)_max = 1/(2√(C_D0 K))
    MaximumLiftToDrag,

    // -------------------------------------------------------------------------
    // Sizing Boundaries
    // -------------------------------------------------------------------------
    /// (W/S)_max = ρ/2 V_s² C_Lmax
    StallSpeedBoundary,
    /// Jet T/W at the service ceiling
    CeilingThrustToWeight,
    /// Propeller W/P at the service ceiling
    CeilingPowerLoading,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::LiftingLineSystem => EquationMetadata {
                name: "Monoplane Lifting-Line Equation",
                description: "Linear system for the odd-harmonic Fourier coefficients of the spanwise circulation",
                formula_plain: "sum_k A_k sin(n_k theta_i) (sin(theta_i) + mu_i n_k) = mu_i alpha_i sin(theta_i), mu = c_l_alpha c / (8 s)",
                reference: Reference::Anderson { edition: 6, section: "5.3.2" },
                variables: vec![
                    Variable::new("A_k", "Fourier coefficient of harmonic n_k = 2k+1", "-"),
                    Variable::new("theta", "Station polar angle", "rad"),
                    Variable::new("c_l_alpha", "Section lift-curve slope", "1/rad"),
                    Variable::new("c", "Local chord", "m"),
                    Variable::new("alpha", "Total effective angle of attack", "rad"),
                    Variable::new("s", "Halfspan", "m"),
                ],
                assumptions: vec![
                    "Symmetric spanwise loading (odd harmonics only)",
                    "Unswept, high aspect ratio wing",
                    "Linear section lift curve",
                ],
                category: EquationCategory::LiftingLine,
                source_module: "equations/lifting_line.rs",
                source_function: "lifting_line",
            },

            Equation::HalfSpanStations => EquationMetadata {
                name: "Semi-Span Station Angles",
                description: "Station angles from next to the tip to the root, excluding the tip singularity",
                formula_plain: "theta_i = i pi / (2n), i = 1..n",
                reference: Reference::Fundamental,
                variables: vec![
                    Variable::new("theta_i", "Station polar angle", "rad"),
                    Variable::new("n", "Number of stations", "-"),
                ],
                assumptions: vec!["Symmetric wing; the other semi-span is implied"],
                category: EquationCategory::LiftingLine,
                source_module: "equations/lifting_line.rs",
                source_function: "half_span_stations",
            },

            Equation::SpanwisePosition => EquationMetadata {
                name: "Spanwise Coordinate",
                description: "Change of variable between the polar angle and the spanwise coordinate",
                formula_plain: "y = -s cos(theta)",
                reference: Reference::Anderson { edition: 6, section: "5.3.1" },
                variables: vec![
                    Variable::new("y", "Spanwise coordinate from the root", "m"),
                    Variable::new("s", "Halfspan", "m"),
                    Variable::new("theta", "Station polar angle", "rad"),
                ],
                assumptions: vec![],
                category: EquationCategory::LiftingLine,
                source_module: "equations/lifting_line.rs",
                source_function: "spanwise_position",
            },

            Equation::TotalLiftCoefficient => EquationMetadata {
                name: "Wing Lift Coefficient",
                description: "Total lift coefficient carried by the fundamental harmonic",
                formula_plain: "C_L = pi A A_0",
                reference: Reference::Anderson { edition: 6, section: "5.3.2" },
                variables: vec![
                    Variable::new("C_L", "Wing lift coefficient", "-"),
                    Variable::new("A", "Aspect ratio", "-"),
                    Variable::new("A_0", "Fundamental Fourier coefficient", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::AerodynamicCoefficients,
                source_module: "equations/coefficients.rs",
                source_function: "fourier_total_lift_coefficient",
            },

            Equation::InducedDragCoefficient => EquationMetadata {
                name: "Induced Drag Coefficient",
                description: "Drag due to the trailing vortex sheet, summed over all harmonics",
                formula_plain: "C_Di = pi A sum_k n_k A_k^2",
                reference: Reference::Anderson { edition: 6, section: "5.3.2" },
                variables: vec![
                    Variable::new("C_Di", "Induced drag coefficient", "-"),
                    Variable::new("A", "Aspect ratio", "-"),
                    Variable::new("A_k", "Fourier coefficients", "-"),
                ],
                assumptions: vec!["Small induced angles"],
                category: EquationCategory::AerodynamicCoefficients,
                source_module: "equations/coefficients.rs",
                source_function: "fourier_induced_drag_coefficient",
            },

            Equation::SpanEfficiencyFactor => EquationMetadata {
                name: "Span Efficiency Factor",
                description: "Induced drag of an elliptic load divided by the actual induced drag",
                formula_plain: "e = 1 / (1 + delta), delta = sum_{k>=1} n_k (A_k / A_0)^2",
                reference: Reference::Anderson { edition: 6, section: "5.3.2" },
                variables: vec![
                    Variable::new("e", "Span efficiency factor", "-"),
                    Variable::new("delta", "Induced drag penalty", "-"),
                ],
                assumptions: vec!["Non-zero lift (A_0 != 0)"],
                category: EquationCategory::AerodynamicCoefficients,
                source_module: "equations/coefficients.rs",
                source_function: "fourier_span_efficiency_factor",
            },

            Equation::InducedDownwash => EquationMetadata {
                name: "Induced Downwash",
                description: "Downwash velocity at each station from the trailing vortices",
                formula_plain: "w = V sum_k n_k A_k sin(n_k theta) / sin(theta)",
                reference: Reference::Anderson { edition: 6, section: "5.3.2" },
                variables: vec![
                    Variable::new("w", "Downwash velocity (positive down)", "m/s"),
                    Variable::new("V", "True airspeed", "m/s"),
                ],
                assumptions: vec!["Undefined at the wingtips"],
                category: EquationCategory::AerodynamicCoefficients,
                source_module: "equations/coefficients.rs",
                source_function: "fourier_induced_downwash",
            },

            Equation::Circulation => EquationMetadata {
                name: "Bound Circulation",
                description: "Spanwise circulation distribution from the Fourier series",
                formula_plain: "Gamma = 4 s V sum_k A_k sin(n_k theta)",
                reference: Reference::Anderson { edition: 6, section: "5.3.2" },
                variables: vec![
                    Variable::new("Gamma", "Bound circulation", "m^2/s"),
                    Variable::new("s", "Halfspan", "m"),
                    Variable::new("V", "True airspeed", "m/s"),
                ],
                assumptions: vec![],
                category: EquationCategory::AerodynamicCoefficients,
                source_module: "equations/coefficients.rs",
                source_function: "fourier_circulation",
            },

            Equation::EllipticCenterLoading => EquationMetadata {
                name: "Elliptic Center Loading",
                description: "Chord times section lift coefficient at the center of an elliptic load carrying a given lift",
                formula_plain: "l_0 = L / (0.5 b rho V^2 pi)",
                reference: Reference::Anderson { edition: 6, section: "5.3.1" },
                variables: vec![
                    Variable::new("l_0", "Center loading c c_l", "m"),
                    Variable::new("L", "Desired lift", "N"),
                    Variable::new("b", "Halfspan", "m"),
                    Variable::new("rho", "Air density", "kg/m^3"),
                    Variable::new("V", "True airspeed", "m/s"),
                ],
                assumptions: vec!["Elliptic lift distribution"],
                category: EquationCategory::AerodynamicCoefficients,
                source_module: "equations/coefficients.rs",
                source_function: "elliptic_center_loading",
            },

            Equation::InducedDragFactor => EquationMetadata {
                name: "Induced Drag Factor",
                description: "Coefficient of C_L^2 in the parabolic drag polar",
                formula_plain: "K = 1 / (pi A e)",
                reference: Reference::Raymer { edition: 6, section: "12.6" },
                variables: vec![
                    Variable::new("K", "Induced drag factor", "-"),
                    Variable::new("e", "Span efficiency factor", "-"),
                ],
                assumptions: vec!["Parabolic drag polar"],
                category: EquationCategory::AerodynamicCoefficients,
                source_module: "equations/coefficients.rs",
                source_function: "induced_drag_factor",
            },

            Equation::MaximumLiftToDrag => EquationMetadata {
                name: "Maximum Lift-to-Drag Ratio",
                description: "Best glide ratio of the parabolic drag polar",
                formula_plain: "(L/D)_max = 1 / (2 sqrt(C_D0 K))",
                reference: Reference::Raymer { edition: 6, section: "17.3" },
                variables: vec![
                    Variable::new("C_D0", "Zero-lift drag coefficient", "-"),
                    Variable::new("K", "Induced drag factor", "-"),
                ],
                assumptions: vec!["Parabolic drag polar"],
                category: EquationCategory::AerodynamicCoefficients,
                source_module: "equations/coefficients.rs",
                source_function: "maximum_lift_to_drag",
            },

            Equation::StallSpeedBoundary => EquationMetadata {
                name: "Stall Speed Boundary",
                description: "Largest wing loading that meets a stall speed requirement",
                formula_plain: "(W/S)_max = rho/2 V_s^2 C_Lmax",
                reference: Reference::Sadraey { chapter: 4 },
                variables: vec![
                    Variable::new("W/S", "Wing loading", "N/m^2"),
                    Variable::new("V_s", "Stall speed", "m/s"),
                    Variable::new("C_Lmax", "Maximum lift coefficient", "-"),
                    Variable::new("rho", "Design density", "kg/m^3"),
                ],
                assumptions: vec!["Steady level flight at stall"],
                category: EquationCategory::SizingBoundaries,
                source_module: "equations/sizing.rs",
                source_function: "stall_speed_boundary",
            },

            Equation::CeilingThrustToWeight => EquationMetadata {
                name: "Service Ceiling Boundary (Jet)",
                description: "Minimum thrust-to-weight ratio to hold the residual climb rate at the ceiling",
                formula_plain: "T/W = RC / (sigma sqrt(2/rho/sqrt(C_D0/K) W/S)) + 1/(sigma (L/D)_max)",
                reference: Reference::Sadraey { chapter: 4 },
                variables: vec![
                    Variable::new("T/W", "Thrust-to-weight ratio", "-"),
                    Variable::new("RC", "Residual rate of climb", "m/s"),
                    Variable::new("sigma", "Density ratio", "-"),
                    Variable::new("W/S", "Wing loading", "N/m^2"),
                ],
                assumptions: vec!["Climb at the speed for (L/D)_max", "Thrust lapses with density ratio"],
                category: EquationCategory::SizingBoundaries,
                source_module: "equations/sizing.rs",
                source_function: "service_ceiling_boundary_jet",
            },

            Equation::CeilingPowerLoading => EquationMetadata {
                name: "Service Ceiling Boundary (Propeller)",
                description: "Maximum power loading to hold the residual climb rate at the ceiling",
                formula_plain: "W/P = sigma / (RC/eta_p + sqrt(2/(rho sqrt(3 C_D0/K)) W/S) 1.155/((L/D)_max eta_p))",
                reference: Reference::Sadraey { chapter: 4 },
                variables: vec![
                    Variable::new("W/P", "Power loading", "N/W"),
                    Variable::new("eta_p", "Propeller efficiency", "-"),
                    Variable::new("sigma", "Density ratio", "-"),
                    Variable::new("W/S", "Wing loading", "N/m^2"),
                ],
                assumptions: vec!["Climb at the speed for minimum power", "Power lapses with density ratio"],
                category: EquationCategory::SizingBoundaries,
                source_module: "equations/sizing.rs",
                source_function: "service_ceiling_boundary_prop",
            },
        }
    }

    /// All categories in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<EquationCategory> = ALL_EQUATIONS
            .iter()
            .map(|eq| eq.metadata().category)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        categories.sort_by_key(|c| c.sort_order());
        categories
    }

    /// Equations belonging to one category, in registry order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }
}

/// Every registered equation, in documentation order.
pub const ALL_EQUATIONS: &[Equation] = &[
    Equation::LiftingLineSystem,
    Equation::HalfSpanStations,
    Equation::SpanwisePosition,
    Equation::TotalLiftCoefficient,
    Equation::InducedDragCoefficient,
    Equation::SpanEfficiencyFactor,
    Equation::InducedDownwash,
    Equation::Circulation,
    Equation::EllipticCenterLoading,
    Equation::InducedDragFactor,
    Equation::MaximumLiftToDrag,
    Equation::StallSpeedBoundary,
    Equation::CeilingThrustToWeight,
    Equation::CeilingPowerLoading,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where it was used (e.g., "Main wing")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, categories in sort order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate a markdown reference of every registered equation.
///
/// # Example
/// ```rust
/// use aero_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("## Lifting-Line Theory"));
/// assert!(markdown.contains("C_L = pi A A_0"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str("# aero_core Equations Reference\n\n");
    output.push_str("> **Auto-generated from the equation registry. Do not edit manually.**\n\n");
    output.push_str("All quantities are SI. θ runs from 0 at one wingtip to π at the other.\n\n---\n\n");

    let categories = Equation::all_categories();
    for category in &categories {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in Equation::in_category(*category) {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 14);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(meta.source_module.starts_with("equations/"));
        }

        let lift = Equation::TotalLiftCoefficient.metadata();
        assert!(lift.formula_plain.contains("pi A A_0"));
    }

    #[test]
    fn test_reference_citation() {
        let anderson = Reference::Anderson { edition: 6, section: "5.3.2" };
        assert_eq!(anderson.citation(), "Anderson, Fundamentals of Aerodynamics 6ed, Section 5.3.2");
        assert_eq!(Reference::Sadraey { chapter: 4 }.citation(), "Sadraey, Aircraft Design, Ch. 4");
    }

    #[test]
    fn test_categories_sorted() {
        let categories = Equation::all_categories();
        assert_eq!(
            categories,
            vec![
                EquationCategory::LiftingLine,
                EquationCategory::AerodynamicCoefficients,
                EquationCategory::SizingBoundaries,
            ]
        );
        assert_eq!(Equation::in_category(EquationCategory::SizingBoundaries).len(), 3);
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::LiftingLineSystem, "Wing");
        tracker.record(Equation::TotalLiftCoefficient, "Wing");
        tracker.record(Equation::LiftingLineSystem, "Tail");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::LiftingLineSystem, Equation::TotalLiftCoefficient]
        );
    }

    #[test]
    fn test_by_category() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::StallSpeedBoundary, "test");
        tracker.record(Equation::InducedDragCoefficient, "test");
        tracker.record(Equation::LiftingLineSystem, "test");

        let by_cat = tracker.by_category();
        assert_eq!(by_cat.len(), 3);
        assert_eq!(by_cat[0].0, EquationCategory::LiftingLine);
        assert_eq!(by_cat[2].0, EquationCategory::SizingBoundaries);
    }

    #[test]
    fn test_merge() {
        let mut a = EquationTracker::new();
        a.record(Equation::Circulation, "Wing");
        let mut b = EquationTracker::new();
        b.record(Equation::CeilingPowerLoading, "Chart");
        a.merge(b);
        assert_eq!(a.usages().len(), 2);
    }

    #[test]
    fn test_markdown_lists_every_equation() {
        let markdown = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(markdown.contains(eq.metadata().name), "{:?} missing", eq);
        }
        assert!(markdown.contains("**Total Equations:** 14"));
    }
}
