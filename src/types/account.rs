//! Account-related types for the account directory
//!
//! This module defines the Account structure: identity, balance, the ledger of
//! applied transactions and the queue of pending ones. All balance mutation
//! goes through [`Account::deposit`] and [`Account::withdraw`], which keep the
//! balance equal to the opening balance plus deposits minus withdrawals.

use super::error::DirectoryError;
use super::ledger::{PendingQueue, TransactionLedger};
use super::transaction::{
    AccountNumber, Amount, PendingTransaction, Transaction, TransactionKind,
};
use rust_decimal::Decimal;
use std::fmt;

/// A bank account held in the directory
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    opening_balance: Amount,
    balance: Amount,
    ledger: TransactionLedger,
    pending: PendingQueue,
}

/// Result of settling an account's pending queue
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settlement {
    /// Pending transactions that were applied, in queue order
    pub applied: Vec<PendingTransaction>,

    /// Pending transactions that were rejected, with the reason
    pub rejected: Vec<(PendingTransaction, DirectoryError)>,
}

impl Account {
    /// Open an account with an initial balance
    ///
    /// # Arguments
    ///
    /// * `number` - The account number used as the index key
    /// * `opening_balance` - Initial balance (must be non-negative)
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the opening balance is negative.
    pub fn new(number: AccountNumber, opening_balance: Amount) -> Result<Self, DirectoryError> {
        if opening_balance < Decimal::ZERO {
            return Err(DirectoryError::invalid_amount(number, opening_balance, "open"));
        }

        Ok(Account {
            number,
            opening_balance,
            balance: opening_balance,
            ledger: TransactionLedger::new(),
            pending: PendingQueue::new(),
        })
    }

    /// Open an account with a zero balance
    pub fn empty(number: AccountNumber) -> Self {
        Account {
            number,
            opening_balance: Decimal::ZERO,
            balance: Decimal::ZERO,
            ledger: TransactionLedger::new(),
            pending: PendingQueue::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Balance the account was opened with
    pub fn opening_balance(&self) -> Amount {
        self.opening_balance
    }

    /// Read-only view of the applied transactions
    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    /// Independent copy of the ledger, in insertion order
    pub fn ledger_snapshot(&self) -> Vec<Transaction> {
        self.ledger.snapshot()
    }

    /// Number of transactions waiting to be settled
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Deposit funds into the account
    ///
    /// Increases the balance by `amount` and records a deposit in the ledger.
    /// Uses checked arithmetic so a failed deposit never touches the account.
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is negative
    /// - Adding `amount` to the balance would overflow
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, DirectoryError> {
        self.ensure_non_negative(amount, "deposit")?;

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| DirectoryError::arithmetic_overflow("deposit", self.number))?;

        self.balance = new_balance;
        self.ledger
            .append(Transaction::new(TransactionKind::Deposit, amount));

        Ok(new_balance)
    }

    /// Withdraw funds from the account
    ///
    /// Decreases the balance by `amount` and records a withdrawal in the ledger.
    /// A withdrawal larger than the balance is rejected without any change to
    /// the balance or the ledger.
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is negative
    /// - `amount` exceeds the current balance
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, DirectoryError> {
        self.ensure_non_negative(amount, "withdraw")?;

        if amount > self.balance {
            return Err(DirectoryError::insufficient_funds(
                self.number,
                self.balance,
                amount,
            ));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| DirectoryError::arithmetic_overflow("withdraw", self.number))?;

        self.balance = new_balance;
        self.ledger
            .append(Transaction::new(TransactionKind::Withdraw, amount));

        Ok(new_balance)
    }

    /// Queue a transaction for later settlement
    ///
    /// The amount is validated now; sufficiency of funds is only checked when
    /// the queue is settled.
    ///
    /// # Returns
    ///
    /// The number of transactions now waiting in the queue.
    pub fn enqueue(&mut self, pending: PendingTransaction) -> Result<usize, DirectoryError> {
        let operation = match pending.kind {
            TransactionKind::Deposit => "queue deposit",
            TransactionKind::Withdraw => "queue withdraw",
        };
        self.ensure_non_negative(pending.amount, operation)?;

        self.pending.enqueue(pending);
        Ok(self.pending.len())
    }

    /// Apply every queued transaction in FIFO order
    ///
    /// Each queued transaction goes through [`deposit`](Self::deposit) or
    /// [`withdraw`](Self::withdraw) and succeeds or fails on its own; a rejected
    /// withdrawal does not stop the ones behind it. The queue is empty when
    /// this returns.
    pub fn settle(&mut self) -> Settlement {
        let mut settlement = Settlement::default();

        while let Some(pending) = self.pending.dequeue() {
            let result = match pending.kind {
                TransactionKind::Deposit => self.deposit(pending.amount),
                TransactionKind::Withdraw => self.withdraw(pending.amount),
            };

            match result {
                Ok(_) => settlement.applied.push(pending),
                Err(e) => settlement.rejected.push((pending, e)),
            }
        }

        settlement
    }

    fn ensure_non_negative(&self, amount: Amount, operation: &str) -> Result<(), DirectoryError> {
        if amount < Decimal::ZERO {
            return Err(DirectoryError::invalid_amount(self.number, amount, operation));
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account #{} | Balance: ${:.2}", self.number, self.balance)
    }
}
