// ============================================================================
// Basic Usage Example
// ============================================================================

use renard::prelude::*;

fn main() -> Result<(), RenardError> {
    println!("=== Renard Series Example ===\n");

    // Base values of every registered series
    for &key in series_keys() {
        println!(
            "{:<6} {:>2} values, precision {}",
            key,
            key.cardinality(),
            precision(key)
        );
    }

    // Pick a resistor value close to a calculated one
    println!("\n=== Nearest Values ===");
    let target = 4_321.0;
    let nearest = find_nearest(R20, target)?;
    println!("Nearest R20 value to {}: {}", target, eng_string(nearest, true));

    let nearby = find_nearest_few(R20, target, 3)?;
    let rendered: Vec<String> = nearby.iter().map(|&v| eng_string(v, true)).collect();
    println!("Nearby: {}", rendered.join(", "));

    println!(
        "Bracketed by {} and {}",
        eng_string(find_less_than(R20, target)?, true),
        eng_string(find_greater_than(R20, target)?, true)
    );

    // Enumerate a range spanning several decades
    println!("\n=== Range ===");
    for value in rrange(R10, 0.5, 50.0)? {
        println!("  {}", eng_string(value, false));
    }

    // Errors are returned, never panicked
    println!("\n=== Errors ===");
    if let Err(err) = rrange(R10, 10.0, 1.0) {
        println!("  {}", err);
    }
    if let Err(err) = key_from_name("E12") {
        println!("  {}", err);
    }

    Ok(())
}
