// ============================================================================
// Scenario Tests
// Concrete input/output cases for each operation
// ============================================================================

use calculator::prelude::*;

mod add {
    use super::*;

    #[test]
    fn positive_numbers() {
        assert_eq!(add(2, 3), 5);
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(add(-2, -3), -5);
    }

    #[test]
    fn mixed_numbers() {
        assert_eq!(add(5, -3), 2);
    }

    #[test]
    fn floats() {
        assert_eq!(add(0.5, 0.25), 0.75);
    }
}

mod subtract {
    use super::*;

    #[test]
    fn positive_numbers() {
        assert_eq!(subtract(5, 3), 2);
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(subtract(-5, -3), -2);
    }

    #[test]
    fn mixed_numbers() {
        assert_eq!(subtract(5, -3), 8);
    }

    #[test]
    fn unsigned_without_underflow() {
        assert_eq!(subtract(10u32, 4u32), 6);
    }
}

mod multiply {
    use super::*;

    #[test]
    fn positive_numbers() {
        assert_eq!(multiply(3, 4), 12);
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(multiply(-3, -4), 12);
    }

    #[test]
    fn mixed_numbers() {
        assert_eq!(multiply(3, -4), -12);
    }

    #[test]
    fn by_zero() {
        assert_eq!(multiply(5, 0), 0);
    }
}

mod divide {
    use super::*;

    #[test]
    fn positive_numbers() {
        assert_eq!(divide(10, 2), Ok(5.0));
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(divide(-10, -2), Ok(5.0));
    }

    #[test]
    fn mixed_numbers() {
        assert_eq!(divide(10, -2), Ok(-5.0));
    }

    #[test]
    fn by_zero_fails_with_message() {
        let err = divide(10, 0).unwrap_err();
        assert_eq!(err, ArithmeticError::InvalidOperation);
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn float_by_zero_fails() {
        assert_eq!(divide(10.0, 0.0), Err(ArithmeticError::InvalidOperation));
        assert_eq!(divide(10.0f32, -0.0), Err(ArithmeticError::InvalidOperation));
    }

    #[test]
    fn zero_by_number() {
        assert_eq!(divide(0, 5), Ok(0.0));
    }

    #[test]
    fn integers_divide_into_float() {
        let quotient: f64 = divide(7, 2).unwrap();
        assert_eq!(quotient, 3.5);
    }

    #[test]
    fn error_propagates_with_question_mark() {
        fn average(total: i64, count: i64) -> ArithmeticResult<f64> {
            let mean = divide(total, count)?;
            Ok(mean)
        }

        assert_eq!(average(9, 3), Ok(3.0));
        assert_eq!(average(9, 0), Err(ArithmeticError::InvalidOperation));
    }
}
