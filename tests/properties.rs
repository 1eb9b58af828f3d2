use proptest::prelude::*;
use test_rust::Calculator;

// Operand bounds keep debug-build arithmetic inside i64.
proptest! {
    #[test]
    fn test_add_stores_sum(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let mut calc = Calculator::new("prop");
        prop_assert_eq!(calc.add(a, b), a + b);
        prop_assert_eq!(calc.result(), a + b);
    }

    #[test]
    fn test_multiply_stores_product(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let mut calc = Calculator::new("prop");
        prop_assert_eq!(calc.multiply(a, b), a * b);
        prop_assert_eq!(calc.result(), a * b);
    }

    #[test]
    fn test_multiply_overwrites_sum(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let mut calc = Calculator::new("prop");
        calc.add(a, b);
        calc.multiply(a, b);
        prop_assert_eq!(calc.result(), a * b);
        prop_assert_eq!(
            calc.get_info(),
            format!("Calculator 'prop' - Last result: {}", a * b)
        );
    }

    #[test]
    fn test_get_info_idempotent(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let mut calc = Calculator::new("prop");
        calc.add(a, b);
        prop_assert_eq!(calc.get_info(), calc.get_info());
    }
}
