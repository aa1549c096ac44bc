//! Spending Summary
//!
//! Aggregates the ledger by category.

use crate::models::{Category, Ledger, Money};

/// Spending under one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: Category,
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Spending across all categories
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    /// Categories with at least one expense, largest total first
    pub categories: Vec<CategorySpending>,
    pub total: Money,
    pub expense_count: usize,
}

impl SpendingSummary {
    pub fn generate(ledger: &Ledger) -> Self {
        let total = ledger.total();

        let mut categories: Vec<CategorySpending> = Category::ALL
            .iter()
            .filter_map(|&category| {
                let count = ledger.iter().filter(|e| e.category == category).count();
                if count == 0 {
                    return None;
                }
                let spent = ledger.total_for(category);
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    (spent.cents() as f64 / total.cents() as f64) * 100.0
                };
                Some(CategorySpending {
                    category,
                    total: spent,
                    count,
                    percentage,
                })
            })
            .collect();

        // Stable sort keeps category order among equal totals
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            categories,
            total,
            expense_count: ledger.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    #[test]
    fn test_empty_ledger() {
        let summary = SpendingSummary::generate(&Ledger::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total, Money::zero());
    }

    #[test]
    fn test_groups_and_orders_by_total() {
        let ledger = Ledger::from(vec![
            Expense::new("bus", Category::Transport, Money::from_cents(2_500)),
            Expense::new("lunch", Category::Food, Money::from_cents(4_000)),
            Expense::new("dinner", Category::Food, Money::from_cents(3_500)),
            Expense::new("movie", Category::Fun, Money::from_cents(2_500)),
        ]);

        let summary = SpendingSummary::generate(&ledger);

        let order: Vec<_> = summary.categories.iter().map(|c| c.category).collect();
        assert_eq!(order, [Category::Food, Category::Transport, Category::Fun]);

        let food = &summary.categories[0];
        assert_eq!(food.total, Money::from_cents(7_500));
        assert_eq!(food.count, 2);
        assert!((food.percentage - 60.0).abs() < 1e-9);

        assert_eq!(summary.total, Money::from_cents(12_500));
        assert_eq!(summary.expense_count, 4);
    }

    #[test]
    fn test_zero_amount_expenses_are_counted() {
        let ledger = Ledger::from(vec![Expense::new("free", Category::Health, Money::zero())]);
        let summary = SpendingSummary::generate(&ledger);

        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].percentage, 0.0);
    }
}
