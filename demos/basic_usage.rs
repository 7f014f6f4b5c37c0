// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

fn main() {
    // Run with `--features logging` to see LoggingEventHandler output
    #[cfg(feature = "logging")]
    calculator::logging::init_tracing("calculator=debug");

    println!("=== Calculator Example ===\n");

    // Free functions work on any operand type
    println!("add(2, 3)         = {}", add(2, 3));
    println!("subtract(5, -3)   = {}", subtract(5, -3));
    println!("multiply(-3, -4)  = {}", multiply(-3, -4));
    println!("divide(7, 2)      = {:?}", divide(7, 2));
    println!(
        "divide(1.00, 8)   = {:?}",
        divide(Decimal::new(100, 2), Decimal::from(8))
    );

    match divide(10, 0) {
        Ok(q) => println!("divide(10, 0)     = {q}"),
        Err(err) => println!("divide(10, 0)     failed: {err}"),
    }

    // Calculator service with event logging
    println!("\n=== Calculator Service ===");
    let calc = CalculatorBuilder::new("demo")
        .build(Arc::new(LoggingEventHandler))
        .expect("valid config");

    for op in Operation::ALL {
        for (a, b) in [(10.0, 4.0), (10.0, 0.0)] {
            match calc.evaluate(op, a, b) {
                Ok(value) => println!("  {a} {} {b} = {value}", op.symbol()),
                Err(err) => println!("  {a} {} {b} -> {err}", op.symbol()),
            }
        }
    }
}
