//! Generate EQUATIONS.md from the equation registry.
//!
//! This binary writes the equations reference documentation from the
//! centralized equation registry in aero_core.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen_equations
//! ```
//!
//! The generated file is written to `aero_core/src/equations/EQUATIONS.md`.

use std::fs;
use std::path::Path;

use aero_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

fn main() {
    println!("Generating EQUATIONS.md for {} equations...", ALL_EQUATIONS.len());

    let markdown = generate_equations_markdown();

    // Relative to workspace root
    let output_path = Path::new("aero_core/src/equations/EQUATIONS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
