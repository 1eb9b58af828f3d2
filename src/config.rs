/// Label given to the calculator instance the demo constructs.
pub const CALCULATOR_NAME: &str = "TestCalc";

/// Default operands for the demo run.
pub const DEFAULT_X: i64 = 10;
pub const DEFAULT_Y: i64 = 5;

/// Age at which `Person::is_adult` turns true.
pub const ADULT_AGE: u32 = 18;
