//! Actions and their effects
//!
//! [`apply`] is a pure function from the current state and one user action to
//! the next state and the effect to report. Persisting is the caller's job.

use crate::models::{Category, Expense, Money};

use super::state::AppState;

/// An expense as submitted by the user, before it is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub reason: String,
    pub category: Category,
    pub amount: Money,
}

impl NewExpense {
    pub fn new(reason: impl Into<String>, category: Category, amount: Money) -> Self {
        Self {
            reason: reason.into(),
            category,
            amount,
        }
    }
}

/// A state-changing user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add funds to the balance
    Deposit(Money),
    /// Log an expense against the balance
    LogExpense(NewExpense),
}

/// Why an action was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InsufficientBalance { needed: Money, available: Money },
    /// The resulting balance would pass [`Money::MAX`]
    BalanceLimit { amount: Money, balance: Money },
}

/// Outcome of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Deposited { amount: Money, balance: Money },
    ExpenseLogged { expense: Expense, balance: Money },
    Rejected(Rejection),
}

impl Effect {
    /// Whether the state changed and must be persisted
    pub fn is_committed(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    /// User-facing confirmation or error text
    pub fn message(&self, currency_symbol: &str) -> String {
        match self {
            Self::Deposited { amount, .. } => format!(
                "Added {} to your balance",
                amount.format_with_symbol(currency_symbol)
            ),
            Self::ExpenseLogged { expense, .. } => format!(
                "Added expense: {} - {}",
                expense.reason,
                expense.amount.format_with_symbol(currency_symbol)
            ),
            Self::Rejected(Rejection::InsufficientBalance { .. }) => {
                "Not enough balance!".to_string()
            }
            Self::Rejected(Rejection::BalanceLimit { .. }) => format!(
                "Balance cannot exceed {}",
                Money::MAX.format_with_symbol(currency_symbol)
            ),
        }
    }
}

/// Apply one action to a state
///
/// Deposits are accepted up to the balance limit; their sign is not checked
/// here. An expense is recorded only if its amount does not exceed the
/// balance. A rejected action returns a state equal to the input.
pub fn apply(state: &AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::Deposit(amount) => {
            let Some(balance) = state.balance.checked_add(amount) else {
                return balance_limit(state, amount);
            };
            let mut next = state.clone();
            next.balance = balance;
            let effect = Effect::Deposited {
                amount,
                balance: next.balance,
            };
            (next, effect)
        }
        Action::LogExpense(new_expense) => {
            if new_expense.amount > state.balance {
                let rejection = Rejection::InsufficientBalance {
                    needed: new_expense.amount,
                    available: state.balance,
                };
                return (state.clone(), Effect::Rejected(rejection));
            }

            let Some(balance) = state.balance.checked_sub(new_expense.amount) else {
                return balance_limit(state, new_expense.amount);
            };

            let expense = Expense::new(new_expense.reason, new_expense.category, new_expense.amount);
            let mut next = state.clone();
            next.ledger.push(expense.clone());
            next.balance = balance;
            let effect = Effect::ExpenseLogged {
                expense,
                balance: next.balance,
            };
            (next, effect)
        }
    }
}

fn balance_limit(state: &AppState, amount: Money) -> (AppState, Effect) {
    let rejection = Rejection::BalanceLimit {
        amount,
        balance: state.balance,
    };
    (state.clone(), Effect::Rejected(rejection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ledger;

    fn state_with_balance(cents: i64) -> AppState {
        AppState::new(Ledger::new(), Money::from_cents(cents))
    }

    #[test]
    fn test_deposit_adds_to_balance() {
        for (start, amount) in [(0, 0), (0, 10_000), (6_000, 1), (-500, 2_500)] {
            let state = state_with_balance(start);
            let (next, effect) = apply(&state, Action::Deposit(Money::from_cents(amount)));

            assert_eq!(next.balance, Money::from_cents(start + amount));
            assert!(next.ledger.is_empty());
            assert!(effect.is_committed());
        }
    }

    #[test]
    fn test_expense_within_balance_is_recorded() {
        let state = state_with_balance(10_000);
        let action = Action::LogExpense(NewExpense::new(
            "lunch",
            Category::Food,
            Money::from_cents(4_000),
        ));

        let (next, effect) = apply(&state, action);

        assert_eq!(next.balance, Money::from_cents(6_000));
        assert_eq!(next.ledger.len(), 1);
        assert_eq!(
            next.ledger.last(),
            Some(&Expense::new("lunch", Category::Food, Money::from_cents(4_000)))
        );
        assert!(matches!(effect, Effect::ExpenseLogged { .. }));
    }

    #[test]
    fn test_expense_equal_to_balance_is_allowed() {
        let state = state_with_balance(4_000);
        let action = Action::LogExpense(NewExpense::new(
            "rent",
            Category::Bills,
            Money::from_cents(4_000),
        ));

        let (next, effect) = apply(&state, action);

        assert_eq!(next.balance, Money::zero());
        assert!(effect.is_committed());
    }

    #[test]
    fn test_expense_over_balance_changes_nothing() {
        let state = state_with_balance(6_000);
        let action = Action::LogExpense(NewExpense::new(
            "tv",
            Category::Fun,
            Money::from_cents(100_000),
        ));

        let (next, effect) = apply(&state, action);

        assert_eq!(next, state);
        assert_eq!(
            effect,
            Effect::Rejected(Rejection::InsufficientBalance {
                needed: Money::from_cents(100_000),
                available: Money::from_cents(6_000),
            })
        );
        assert!(!effect.is_committed());
    }

    #[test]
    fn test_deposit_past_limit_is_rejected() {
        let state = state_with_balance(Money::MAX.cents() - 100);

        let (next, effect) = apply(&state, Action::Deposit(Money::from_cents(100)));
        assert_eq!(next.balance, Money::MAX);
        assert!(effect.is_committed());

        let (after, effect) = apply(&next, Action::Deposit(Money::from_cents(1)));
        assert_eq!(after, next);
        assert_eq!(
            effect,
            Effect::Rejected(Rejection::BalanceLimit {
                amount: Money::from_cents(1),
                balance: Money::MAX,
            })
        );
    }

    #[test]
    fn test_huge_deposit_does_not_overflow() {
        let huge = Money::from_cents(9_000_000_000_000_000_000);
        let state = AppState::new(Ledger::new(), huge);

        let (next, effect) = apply(&state, Action::Deposit(huge));

        assert_eq!(next, state);
        assert!(!effect.is_committed());
        assert_eq!(effect.message("₹"), "Balance cannot exceed ₹9999999999999.99");
    }

    #[test]
    fn test_negative_expense_past_limit_is_rejected() {
        let state = state_with_balance(Money::MAX.cents());
        let action = Action::LogExpense(NewExpense::new(
            "refund",
            Category::Other,
            Money::from_cents(-1),
        ));

        let (next, effect) = apply(&state, action);

        assert_eq!(next, state);
        assert!(matches!(effect, Effect::Rejected(Rejection::BalanceLimit { .. })));
    }

    #[test]
    fn test_messages() {
        let deposited = Effect::Deposited {
            amount: Money::from_cents(10_000),
            balance: Money::from_cents(10_000),
        };
        assert_eq!(deposited.message("₹"), "Added ₹100.00 to your balance");

        let logged = Effect::ExpenseLogged {
            expense: Expense::new("lunch", Category::Food, Money::from_cents(4_000)),
            balance: Money::from_cents(6_000),
        };
        assert_eq!(logged.message("₹"), "Added expense: lunch - ₹40.00");

        let rejected = Effect::Rejected(Rejection::InsufficientBalance {
            needed: Money::from_cents(1),
            available: Money::zero(),
        });
        assert_eq!(rejected.message("₹"), "Not enough balance!");
    }
}
