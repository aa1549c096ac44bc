//! Session layer for the expense manager
//!
//! A [`Session`] owns the application state for the lifetime of the process.
//! It is loaded once from a [`LedgerStore`], and every committed action is
//! persisted before the in-memory state is replaced, so the store always holds
//! the authoritative snapshot after each step.

pub mod action;
pub mod input;
pub mod state;

pub use action::{apply, Action, Effect, NewExpense, Rejection};
pub use input::{parse_amount, parse_category};
pub use state::AppState;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::{LedgerStore, LoadWarning};

/// One interactive session over a store
pub struct Session<S: LedgerStore> {
    store: S,
    state: AppState,
}

impl<S: LedgerStore> Session<S> {
    /// Load the persisted state once and start a session
    ///
    /// Load warnings are returned to the caller for display; they never fail
    /// the session.
    pub fn open(store: S) -> ExpenseResult<(Self, Vec<LoadWarning>)> {
        let snapshot = store.load()?;
        let warnings = snapshot.warnings.clone();
        let session = Self {
            store,
            state: AppState::from(snapshot),
        };
        Ok((session, warnings))
    }

    /// Current state, for rendering
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply an action and persist the result if it changed anything
    ///
    /// If saving fails the in-memory state is left as it was.
    pub fn dispatch(&mut self, action: Action) -> ExpenseResult<Effect> {
        let (next, effect) = apply(&self.state, action);

        match &effect {
            Effect::Rejected(Rejection::InsufficientBalance { needed, available }) => {
                tracing::info!(%needed, %available, "expense rejected: not enough balance");
            }
            Effect::Rejected(Rejection::BalanceLimit { amount, balance }) => {
                tracing::info!(%amount, %balance, "action rejected: balance limit");
            }
            _ => {
                self.store.save(&next.ledger, next.balance)?;
                self.state = next;
                tracing::info!(balance = %self.state.balance, "action committed");
            }
        }

        Ok(effect)
    }

    /// Like [`Session::dispatch`], but a rejection becomes an error
    pub fn dispatch_strict(&mut self, action: Action) -> ExpenseResult<Effect> {
        match self.dispatch(action)? {
            Effect::Rejected(Rejection::InsufficientBalance { needed, available }) => {
                Err(ExpenseError::InsufficientBalance { needed, available })
            }
            Effect::Rejected(Rejection::BalanceLimit { .. }) => Err(ExpenseError::BalanceLimit),
            effect => Ok(effect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Ledger, Money};
    use crate::storage::{FileStore, MemoryStore, Snapshot};
    use std::cell::Cell;

    #[test]
    fn test_scenario() {
        let store = MemoryStore::new();
        let (mut session, warnings) = Session::open(&store).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(session.state().balance, Money::zero());

        session
            .dispatch(Action::Deposit(Money::from_cents(10_000)))
            .unwrap();
        assert_eq!(session.state().balance.to_string(), "100.00");

        session
            .dispatch(Action::LogExpense(NewExpense::new(
                "lunch",
                Category::Food,
                Money::from_cents(4_000),
            )))
            .unwrap();
        assert_eq!(session.state().balance.to_string(), "60.00");
        assert_eq!(
            session.state().ledger,
            Ledger::from(vec![Expense::new(
                "lunch",
                Category::Food,
                Money::from_cents(4_000)
            )])
        );

        let effect = session
            .dispatch(Action::LogExpense(NewExpense::new(
                "tv",
                Category::Fun,
                Money::from_cents(100_000),
            )))
            .unwrap();
        assert!(!effect.is_committed());
        assert_eq!(session.state().balance.to_string(), "60.00");
        assert_eq!(session.state().ledger.len(), 1);

        // Two commits, the rejection saved nothing
        assert_eq!(store.save_count().unwrap(), 2);
        let persisted = store.load().unwrap();
        assert_eq!(persisted.balance, Money::from_cents(6_000));
        assert_eq!(persisted.ledger, session.state().ledger);
    }

    #[test]
    fn test_dispatch_strict_turns_rejection_into_error() {
        let store = MemoryStore::new();
        let (mut session, _) = Session::open(&store).unwrap();

        let err = session
            .dispatch_strict(Action::LogExpense(NewExpense::new(
                "coffee",
                Category::Food,
                Money::from_cents(300),
            )))
            .unwrap_err();

        assert!(err.is_insufficient_balance());
        assert_eq!(store.save_count().unwrap(), 0);
    }

    #[test]
    fn test_session_reloads_persisted_state() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let store = FileStore::with_files(
            temp_dir.path().join("expenses.json"),
            temp_dir.path().join("balance.txt"),
        );

        {
            let (mut session, _) = Session::open(store.clone()).unwrap();
            session
                .dispatch(Action::Deposit(Money::from_cents(2_500)))
                .unwrap();
            session
                .dispatch(Action::LogExpense(NewExpense::new(
                    "bus",
                    Category::Transport,
                    Money::from_cents(500),
                )))
                .unwrap();
        }

        let (session, warnings) = Session::open(store).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(session.state().balance, Money::from_cents(2_000));
        assert_eq!(session.state().ledger.len(), 1);
    }

    #[test]
    fn test_dispatch_strict_refuses_balance_past_limit() {
        let store = MemoryStore::with_state(Ledger::new(), Money::MAX);
        let (mut session, _) = Session::open(&store).unwrap();

        let err = session
            .dispatch_strict(Action::Deposit(Money::from_cents(1)))
            .unwrap_err();

        assert!(matches!(err, ExpenseError::BalanceLimit));
        assert_eq!(session.state().balance, Money::MAX);
        assert_eq!(store.save_count().unwrap(), 0);
    }

    struct FailingStore {
        attempts: Cell<usize>,
    }

    impl LedgerStore for FailingStore {
        fn load(&self) -> ExpenseResult<Snapshot> {
            Ok(Snapshot::default())
        }

        fn save(&self, _ledger: &Ledger, _balance: Money) -> ExpenseResult<()> {
            self.attempts.set(self.attempts.get() + 1);
            Err(ExpenseError::Storage("disk full".into()))
        }
    }

    #[test]
    fn test_failed_save_keeps_previous_state() {
        let store = FailingStore {
            attempts: Cell::new(0),
        };
        let (mut session, _) = Session::open(store).unwrap();

        let result = session.dispatch(Action::Deposit(Money::from_cents(100)));

        assert!(matches!(result, Err(ExpenseError::Storage(_))));
        assert_eq!(session.state().balance, Money::zero());
        assert_eq!(session.store().attempts.get(), 1);
    }
}
