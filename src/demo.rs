use log::debug;

use crate::{calculator::Calculator, config};

/// Processes some numbers with the calculator.
pub fn process_numbers(a: i64, b: i64) {
    let mut calc = Calculator::new(config::CALCULATOR_NAME);

    let sum = calc.add(a, b);
    debug!("add({}, {}) = {}", a, b, sum);
    println!("Sum: {}", sum);

    let product = calc.multiply(a, b);
    debug!("multiply({}, {}) = {}", a, b, product);
    println!("Product: {}", product);

    println!("{}", calc.get_info());
}

/// Runs the fixed demonstration sequence.
pub fn run() {
    println!("Rust Test Program");

    // Good breakpoint locations.
    let x = config::DEFAULT_X;
    let y = config::DEFAULT_Y;

    process_numbers(x, y);

    println!("Done!");
}
