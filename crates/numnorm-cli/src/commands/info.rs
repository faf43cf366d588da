//! Info command implementation.

use text_normalizer::{DETECTED_SYMBOLS, Normalizer};

/// Run the info command.
pub fn run() {
    println!("numnorm: Russian number normalization");
    println!("======================================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();
    println!("Pipeline stages:");
    for (i, name) in Normalizer::new().stage_names().iter().enumerate() {
        println!("  {}. {name}", i + 1);
    }
    println!();
    let symbols: String = DETECTED_SYMBOLS.iter().collect();
    println!("Currency symbols: {symbols}");
    println!();
    println!("Crates:");
    println!("  numnorm-core: Error type and traits");
    println!("  text-normalizer: Number normalization pipeline");
    println!("  runtime: Logging and configuration");
    println!("  numnorm-cli: This CLI tool");
}
