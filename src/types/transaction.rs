//! Transaction-related types for the account directory
//!
//! This module defines the immutable transaction records kept in an account's
//! ledger, the pending transactions queued for later settlement, and the
//! identifier and amount aliases used throughout the crate.

use rust_decimal::Decimal;
use std::fmt;

/// Account number
///
/// Supports account numbers from 0 to 4,294,967,295
pub type AccountNumber = u32;

/// Monetary amount
///
/// Fixed-point so that equality between amounts is exact.
pub type Amount = Decimal;

/// Kinds of transaction recorded in a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Only recorded when the account held at least the requested amount.
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdraw => f.write_str("Withdraw"),
        }
    }
}

/// A completed transaction
///
/// Created only by [`Account::deposit`](crate::types::Account::deposit) and
/// [`Account::withdraw`](crate::types::Account::withdraw) and never mutated
/// afterwards. Fields are private so a ledger entry cannot be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Amount,
}

impl Transaction {
    pub(crate) fn new(kind: TransactionKind, amount: Amount) -> Self {
        Transaction { kind, amount }
    }

    /// The kind of this transaction
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The amount moved by this transaction (never negative)
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.2}", self.kind, self.amount)
    }
}

/// A deposit or withdrawal queued on an account but not yet applied
///
/// Pending transactions do not touch the balance or the ledger until the
/// account is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransaction {
    /// What the transaction will do when settled
    pub kind: TransactionKind,

    /// Requested amount
    pub amount: Amount,
}

impl PendingTransaction {
    pub fn deposit(amount: Amount) -> Self {
        PendingTransaction {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdraw(amount: Amount) -> Self {
        PendingTransaction {
            kind: TransactionKind::Withdraw,
            amount,
        }
    }
}

impl fmt::Display for PendingTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.2}", self.kind, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit(TransactionKind::Deposit, Decimal::new(30, 0), "Deposit: $30.00")]
    #[case::withdraw(TransactionKind::Withdraw, Decimal::new(525, 2), "Withdraw: $5.25")]
    #[case::pads_to_cents(TransactionKind::Deposit, Decimal::new(10, 0), "Deposit: $10.00")]
    fn test_transaction_display(
        #[case] kind: TransactionKind,
        #[case] amount: Amount,
        #[case] expected: &str,
    ) {
        assert_eq!(Transaction::new(kind, amount).to_string(), expected);
    }

    #[test]
    fn test_pending_constructors() {
        let amount = Decimal::new(5, 0);
        assert_eq!(PendingTransaction::deposit(amount).kind, TransactionKind::Deposit);
        assert_eq!(PendingTransaction::withdraw(amount).kind, TransactionKind::Withdraw);
        assert_eq!(PendingTransaction::withdraw(amount).to_string(), "Withdraw: $5.00");
    }
}
