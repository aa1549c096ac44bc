//! Parsing of user-entered values
//!
//! Shared by the command line and the interactive forms. Amount inputs carry
//! a minimum of zero, the way a numeric input widget would; the actions
//! themselves do not check the sign of a deposit.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};

/// Parse a user-entered amount, enforcing the non-negative input minimum
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    if input.trim().is_empty() {
        return Err(ExpenseError::Validation("Enter an amount".into()));
    }

    let amount = Money::parse(input).map_err(|e| {
        ExpenseError::Validation(format!("{}. Use a format like '40' or '40.50'", e))
    })?;

    if amount.is_negative() {
        return Err(ExpenseError::Validation(format!(
            "Amount must not be negative: '{}'",
            input.trim()
        )));
    }

    if !amount.is_within_limit() {
        return Err(ExpenseError::Validation(format!(
            "Amount too large: '{}'. The largest amount is {}",
            input.trim(),
            Money::MAX
        )));
    }

    Ok(amount)
}

/// Parse a user-entered category name
pub fn parse_category(input: &str) -> ExpenseResult<Category> {
    Category::parse(input).ok_or_else(|| {
        ExpenseError::Validation(format!(
            "Invalid category: '{}'. Valid categories: food, transport, bills, fun, health, other",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("40").unwrap(), Money::from_cents(4000));
        assert_eq!(parse_amount("0").unwrap(), Money::zero());
        assert_eq!(parse_amount("₹12.5").unwrap(), Money::from_cents(1250));
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert!(parse_amount("").unwrap_err().is_validation());
        assert!(parse_amount("   ").unwrap_err().is_validation());
        assert!(parse_amount("-5").unwrap_err().is_validation());
        assert!(parse_amount("lots").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_amount_enforces_maximum() {
        assert_eq!(parse_amount("9999999999999.99").unwrap(), Money::MAX);

        let err = parse_amount("10000000000000").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Amount too large"));
        assert!(parse_amount("90000000000000000").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Food").unwrap(), Category::Food);
        assert_eq!(parse_category("health").unwrap(), Category::Health);
        assert!(parse_category("groceries").unwrap_err().is_validation());
    }
}
