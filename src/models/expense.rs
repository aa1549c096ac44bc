//! Expense record model
//!
//! An expense is immutable once logged. The serialized field names match the
//! `expenses.json` record shape: `{"Reason", "Category", "Amount"}`.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::{self, Money};

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-text reason (may be empty)
    #[serde(rename = "Reason")]
    pub reason: String,

    #[serde(rename = "Category")]
    pub category: Category,

    #[serde(rename = "Amount", with = "money::as_decimal")]
    pub amount: Money,
}

impl Expense {
    pub fn new(reason: impl Into<String>, category: Category, amount: Money) -> Self {
        Self {
            reason: reason.into(),
            category,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_shape() {
        let expense = Expense::new("lunch", Category::Food, Money::from_cents(4000));
        let value = serde_json::to_value(&expense).unwrap();

        assert_eq!(value["Reason"], "lunch");
        assert_eq!(value["Category"], "Food");
        assert_eq!(value["Amount"].as_f64(), Some(40.0));
    }

    #[test]
    fn test_reads_integer_and_float_amounts() {
        let a: Expense =
            serde_json::from_str(r#"{"Reason":"bus","Category":"Transport","Amount":12}"#).unwrap();
        let b: Expense =
            serde_json::from_str(r#"{"Reason":"bus","Category":"Transport","Amount":12.0}"#)
                .unwrap();

        assert_eq!(a, b);
        assert_eq!(a.amount, Money::from_cents(1200));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result: Result<Expense, _> = serde_json::from_str(r#"{"Reason":"bus"}"#);
        assert!(result.is_err());
    }
}
