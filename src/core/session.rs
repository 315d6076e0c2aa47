//! Command session
//!
//! This module provides the `Session` that turns shell commands into calls on
//! an account directory and the sort/search utilities.
//!
//! The session enforces the directory's contract for its callers:
//! - Every command that names an account resolves it first, so an unknown
//!   number is reported as `AccountNotFound` before anything else happens
//! - Failed deposits and withdrawals leave the account untouched
//! - Sorting and searching always work on a ledger snapshot, never the ledger

use crate::algorithms::{self, SearchAlgorithm, SortAlgorithm};
use crate::core::traits::AccountDirectory;
use crate::types::{
    Account, AccountNumber, Amount, DirectoryError, PendingTransaction, Settlement, Transaction,
};

/// A single operation requested by the shell
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Deposit {
        account: AccountNumber,
        amount: Amount,
    },
    Withdraw {
        account: AccountNumber,
        amount: Amount,
    },
    /// Show an account's balance and ledger
    History { account: AccountNumber },
    /// Show an account's ledger sorted by amount
    Sort {
        account: AccountNumber,
        algorithm: SortAlgorithm,
    },
    /// Look for a transaction with exactly this amount
    Find {
        account: AccountNumber,
        amount: Amount,
        algorithm: SearchAlgorithm,
    },
    QueueDeposit {
        account: AccountNumber,
        amount: Amount,
    },
    QueueWithdraw {
        account: AccountNumber,
        amount: Amount,
    },
    /// Apply an account's pending queue
    Settle { account: AccountNumber },
    /// Sum of all balances
    Total,
    /// Every account with its balance
    List,
}

/// Result of a successfully executed command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Deposited {
        account: AccountNumber,
        amount: Amount,
        balance: Amount,
    },
    Withdrew {
        account: AccountNumber,
        amount: Amount,
        balance: Amount,
    },
    History {
        account: AccountNumber,
        balance: Amount,
        transactions: Vec<Transaction>,
    },
    Sorted {
        account: AccountNumber,
        algorithm: SortAlgorithm,
        transactions: Vec<Transaction>,
    },
    /// `found` holds the position in the sorted snapshot and the transaction
    /// there, or `None` if no transaction has the amount
    Searched {
        account: AccountNumber,
        amount: Amount,
        algorithm: SearchAlgorithm,
        found: Option<(usize, Transaction)>,
    },
    Queued {
        account: AccountNumber,
        pending: PendingTransaction,
        queue_len: usize,
    },
    Settled {
        account: AccountNumber,
        settlement: Settlement,
        balance: Amount,
    },
    Total { total: Amount },
    Listed { balances: Vec<(AccountNumber, Amount)> },
}

/// Executes commands against an account directory
#[derive(Debug)]
pub struct Session<D> {
    directory: D,
}

impl<D: AccountDirectory> Session<D> {
    /// Create a session over an existing directory
    pub fn new(directory: D) -> Self {
        Session { directory }
    }

    /// The underlying directory
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Consume the session, returning the directory
    pub fn into_directory(self) -> D {
        self.directory
    }

    /// Add an account during setup
    pub fn open(&mut self, number: AccountNumber, balance: Amount) -> Result<(), DirectoryError> {
        let account = Account::new(number, balance)?;
        self.directory.open(account)?;
        tracing::debug!(account = number, %balance, "account opened");
        Ok(())
    }

    /// Execute a single command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command names an account that is not in the directory
    /// - A deposit, withdrawal or queued amount is negative
    /// - A withdrawal exceeds the balance
    /// - A balance or the total would overflow
    ///
    /// None of these leave the directory partially updated.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, DirectoryError> {
        let result = self.dispatch(command);
        match &result {
            Ok(outcome) => tracing::debug!(?outcome, "command executed"),
            Err(e) => tracing::warn!(error = %e, "command rejected"),
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<Outcome, DirectoryError> {
        match command {
            Command::Deposit { account, amount } => {
                let balance = self.directory.update(account, |a| a.deposit(amount))?;
                Ok(Outcome::Deposited {
                    account,
                    amount,
                    balance,
                })
            }
            Command::Withdraw { account, amount } => {
                let balance = self.directory.update(account, |a| a.withdraw(amount))?;
                Ok(Outcome::Withdrew {
                    account,
                    amount,
                    balance,
                })
            }
            Command::History { account } => {
                let (balance, transactions) = self
                    .directory
                    .inspect(account, |a| (a.balance(), a.ledger_snapshot()))?;
                Ok(Outcome::History {
                    account,
                    balance,
                    transactions,
                })
            }
            Command::Sort { account, algorithm } => {
                let mut transactions = self.directory.inspect(account, Account::ledger_snapshot)?;
                algorithms::sort(&mut transactions, algorithm);
                Ok(Outcome::Sorted {
                    account,
                    algorithm,
                    transactions,
                })
            }
            Command::Find {
                account,
                amount,
                algorithm,
            } => {
                let mut transactions = self.directory.inspect(account, Account::ledger_snapshot)?;
                // Binary search needs an ordered snapshot; linear search reports
                // positions in the same ordering so the two are comparable
                algorithms::sort(&mut transactions, SortAlgorithm::Merge);
                let found = algorithms::search(&transactions, amount, algorithm)
                    .map(|index| (index, transactions[index]));
                Ok(Outcome::Searched {
                    account,
                    amount,
                    algorithm,
                    found,
                })
            }
            Command::QueueDeposit { account, amount } => {
                self.enqueue(account, PendingTransaction::deposit(amount))
            }
            Command::QueueWithdraw { account, amount } => {
                self.enqueue(account, PendingTransaction::withdraw(amount))
            }
            Command::Settle { account } => {
                let (settlement, balance) = self
                    .directory
                    .update(account, |a| Ok((a.settle(), a.balance())))?;
                Ok(Outcome::Settled {
                    account,
                    settlement,
                    balance,
                })
            }
            Command::Total => Ok(Outcome::Total {
                total: self.directory.total_balance()?,
            }),
            Command::List => Ok(Outcome::Listed {
                balances: self.directory.balances(),
            }),
        }
    }

    fn enqueue(
        &mut self,
        account: AccountNumber,
        pending: PendingTransaction,
    ) -> Result<Outcome, DirectoryError> {
        let queue_len = self.directory.update(account, |a| a.enqueue(pending))?;
        Ok(Outcome::Queued {
            account,
            pending,
            queue_len,
        })
    }
}
