/// A named arithmetic accumulator.
///
/// Holds the result of the most recent operation; each call to [`add`] or
/// [`multiply`] overwrites the previous result.
///
/// [`add`]: Calculator::add
/// [`multiply`]: Calculator::multiply
#[derive(Debug, Clone)]
pub struct Calculator {
    name: String,
    result: i64,
}

impl Calculator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result: 0,
        }
    }

    /// Adds two numbers, storing and returning the sum.
    pub fn add(&mut self, x: i64, y: i64) -> i64 {
        self.result = x + y;
        self.result
    }

    /// Multiplies two numbers, storing and returning the product.
    pub fn multiply(&mut self, x: i64, y: i64) -> i64 {
        self.result = x * y;
        self.result
    }

    /// Formats the calculator name together with the last result.
    // The `get_` prefix is a rename code-action target.
    pub fn get_info(&self) -> String {
        format!("Calculator '{}' - Last result: {}", self.name, self.result)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result(&self) -> i64 {
        self.result
    }
}
