//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! The generated file is written to `vhb_core/src/equations/EQUATIONS.md`.

use std::fs;
use std::path::Path;

use vhb_core::equations::generate_equations_markdown;

fn main() {
    let markdown = generate_equations_markdown();

    // relative to workspace root
    let output_path = Path::new("vhb_core/src/equations/EQUATIONS.md");

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
