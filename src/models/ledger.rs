//! Ledger model
//!
//! The ordered list of logged expenses. Insertion order is entry order.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::expense::Expense;
use super::money::Money;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense at the end of the ledger
    pub fn push(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn last(&self) -> Option<&Expense> {
        self.expenses.last()
    }

    /// Sum of all recorded amounts
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of amounts recorded under one category
    pub fn total_for(&self, category: Category) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ledger {
        Ledger::from(vec![
            Expense::new("lunch", Category::Food, Money::from_cents(4000)),
            Expense::new("bus", Category::Transport, Money::from_cents(250)),
            Expense::new("dinner", Category::Food, Money::from_cents(1500)),
        ])
    }

    #[test]
    fn test_push_keeps_entry_order() {
        let mut ledger = Ledger::new();
        ledger.push(Expense::new("a", Category::Fun, Money::from_cents(1)));
        ledger.push(Expense::new("b", Category::Fun, Money::from_cents(2)));

        let reasons: Vec<_> = ledger.iter().map(|e| e.reason.as_str()).collect();
        assert_eq!(reasons, ["a", "b"]);
    }

    #[test]
    fn test_totals() {
        let ledger = sample();
        assert_eq!(ledger.total(), Money::from_cents(5750));
        assert_eq!(ledger.total_for(Category::Food), Money::from_cents(5500));
        assert_eq!(ledger.total_for(Category::Bills), Money::zero());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_string(&Ledger::new()).unwrap();
        assert_eq!(json, "[]");
    }
}
