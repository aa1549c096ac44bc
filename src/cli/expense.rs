//! Expense and balance CLI commands
//!
//! Implements the non-interactive versions of the deposit and log-expense
//! actions, plus the read-only views of the ledger and balance.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_balance, format_ledger_table};
use crate::error::ExpenseResult;
use crate::session::input::{parse_amount, parse_category};
use crate::session::{Action, NewExpense, Session};
use crate::storage::LedgerStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Log a new expense against the balance
    Add {
        /// What the money was spent on
        reason: String,
        /// Amount (e.g., "40" or "40.50")
        amount: String,
        /// Category (food, transport, bills, fun, health, other)
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// List all logged expenses
    #[command(alias = "ls")]
    List,
}

/// Handle the deposit command
pub fn handle_deposit<S: LedgerStore>(
    session: &mut Session<S>,
    settings: &Settings,
    amount: &str,
) -> ExpenseResult<()> {
    let amount = parse_amount(amount)?;
    let effect = session.dispatch_strict(Action::Deposit(amount))?;

    println!("{}", effect.message(&settings.currency_symbol));
    print!(
        "{}",
        format_balance(session.state().balance, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle the balance command
pub fn handle_balance<S: LedgerStore>(session: &Session<S>, settings: &Settings) {
    print!(
        "{}",
        format_balance(session.state().balance, &settings.currency_symbol)
    );
}

/// Handle an expense command
pub fn handle_expense_command<S: LedgerStore>(
    session: &mut Session<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            reason,
            amount,
            category,
        } => {
            let category = parse_category(&category)?;
            let amount = parse_amount(&amount)?;

            let effect = session.dispatch_strict(Action::LogExpense(NewExpense::new(
                reason, category, amount,
            )))?;

            println!("{}", effect.message(&settings.currency_symbol));
            print!(
                "{}",
                format_balance(session.state().balance, &settings.currency_symbol)
            );
        }

        ExpenseCommands::List => {
            print!(
                "{}",
                format_ledger_table(&session.state().ledger, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStore;

    #[test]
    fn test_expense_add_over_balance_is_error() {
        let store = MemoryStore::new();
        let (mut session, _) = Session::open(&store).unwrap();
        let settings = Settings::default();

        let err = handle_expense_command(
            &mut session,
            &settings,
            ExpenseCommands::Add {
                reason: "tv".into(),
                amount: "1000".into(),
                category: "fun".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_insufficient_balance());
        assert!(session.state().ledger.is_empty());
    }

    #[test]
    fn test_deposit_then_expense() {
        let store = MemoryStore::new();
        let (mut session, _) = Session::open(&store).unwrap();
        let settings = Settings::default();

        handle_deposit(&mut session, &settings, "100").unwrap();
        handle_expense_command(
            &mut session,
            &settings,
            ExpenseCommands::Add {
                reason: "lunch".into(),
                amount: "40".into(),
                category: "food".into(),
            },
        )
        .unwrap();

        assert_eq!(session.state().balance, Money::from_cents(6000));
        assert_eq!(session.state().ledger.len(), 1);
    }
}
