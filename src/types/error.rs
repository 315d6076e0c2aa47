//! Error types for the account directory
//!
//! This module defines all error types that can occur while building the
//! directory, mutating accounts, or reading input for the command runner.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Account not found, duplicate account number
//! - **Account Errors**: Insufficient funds, invalid amounts
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **Input Errors**: File not found, malformed CSV rows, unknown commands

use super::transaction::{AccountNumber, Amount};
use thiserror::Error;

/// Main error type for the account directory
///
/// Every variant is a recoverable value returned to the caller. None of the
/// core operations leave an account or the index partially updated when they
/// return one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    /// No account with the requested number is reachable in the index
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountNumber,
    },

    /// An account with the same number already exists
    ///
    /// Only raised by indexes configured to reject duplicate keys.
    #[error("Account {account} already exists")]
    DuplicateAccount {
        /// The duplicated account number
        account: AccountNumber,
    },

    /// Withdrawal larger than the current balance
    ///
    /// The balance and ledger are left unchanged.
    #[error("Insufficient funds for account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Amount,
        /// Requested withdrawal amount
        requested: Amount,
    },

    /// Negative amount passed to an account operation
    #[error("Invalid amount {amount} for {operation} on account {account}")]
    InvalidAmount {
        /// Account number
        account: AccountNumber,
        /// The rejected amount
        amount: Amount,
        /// Operation that rejected it
        operation: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to maintain account integrity.
    #[error("Arithmetic overflow in {operation}{}", account.map(|a| format!(" for account {}", a)).unwrap_or_default())]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account involved, if the overflow is tied to a single account
        account: Option<AccountNumber>,
    },

    /// Input file not found at the specified path
    ///
    /// This is a fatal error for the CLI.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// The malformed row is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown command name in a command script
    #[error("Invalid command '{command}' at line {line}")]
    InvalidCommand {
        /// The unrecognised command name
        command: String,
        /// Line number in the command script
        line: u64,
    },

    /// A command row is missing a field it requires
    #[error("{command} requires a value for '{field}'")]
    MissingField {
        /// Command name
        command: String,
        /// Name of the missing field
        field: String,
    },
}

// Conversion from io::Error to DirectoryError
impl From<std::io::Error> for DirectoryError {
    fn from(error: std::io::Error) -> Self {
        DirectoryError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to DirectoryError
//
// A failed read of the underlying source stays an I/O error so it is fatal;
// everything else is a problem with the row itself.
impl From<csv::Error> for DirectoryError {
    fn from(error: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return DirectoryError::IoError {
                message: io_error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        DirectoryError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DirectoryError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        DirectoryError::AccountNotFound { account }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: AccountNumber) -> Self {
        DirectoryError::DuplicateAccount { account }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Amount, requested: Amount) -> Self {
        DirectoryError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(account: AccountNumber, amount: Amount, operation: &str) -> Self {
        DirectoryError::InvalidAmount {
            account,
            amount,
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error for a single account
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        DirectoryError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: Some(account),
        }
    }

    /// Create an ArithmeticOverflow error for a directory-wide fold
    pub fn total_overflow(operation: &str) -> Self {
        DirectoryError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: None,
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(command: &str, line: u64) -> Self {
        DirectoryError::InvalidCommand {
            command: command.to_string(),
            line,
        }
    }

    /// Create a MissingField error
    pub fn missing_field(command: &str, field: &str) -> Self {
        DirectoryError::MissingField {
            command: command.to_string(),
            field: field.to_string(),
        }
    }

    /// Whether this error means the input could not be read at all
    ///
    /// Fatal errors stop the command runner; everything else is reported and
    /// processing continues with the next command.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DirectoryError::FileNotFound { .. } | DirectoryError::IoError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::account_not_found(
        DirectoryError::AccountNotFound { account: 42 },
        "Account 42 not found"
    )]
    #[case::duplicate_account(
        DirectoryError::DuplicateAccount { account: 7 },
        "Account 7 already exists"
    )]
    #[case::insufficient_funds(
        DirectoryError::InsufficientFunds { account: 100, balance: Decimal::new(5000, 2), requested: Decimal::new(10000, 2) },
        "Insufficient funds for account 100: balance 50.00, requested 100.00"
    )]
    #[case::invalid_amount(
        DirectoryError::InvalidAmount { account: 1, amount: Decimal::new(-5, 0), operation: "deposit".to_string() },
        "Invalid amount -5 for deposit on account 1"
    )]
    #[case::overflow_for_account(
        DirectoryError::ArithmeticOverflow { operation: "deposit".to_string(), account: Some(3) },
        "Arithmetic overflow in deposit for account 3"
    )]
    #[case::overflow_for_directory(
        DirectoryError::ArithmeticOverflow { operation: "total_balance".to_string(), account: None },
        "Arithmetic overflow in total_balance"
    )]
    #[case::file_not_found(
        DirectoryError::FileNotFound { path: "accounts.csv".to_string() },
        "File not found: accounts.csv"
    )]
    #[case::parse_error_with_line(
        DirectoryError::ParseError { line: Some(4), message: "Invalid field".to_string() },
        "CSV parse error at line 4: Invalid field"
    )]
    #[case::parse_error_without_line(
        DirectoryError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_command(
        DirectoryError::InvalidCommand { command: "transfer".to_string(), line: 3 },
        "Invalid command 'transfer' at line 3"
    )]
    #[case::missing_field(
        DirectoryError::MissingField { command: "deposit".to_string(), field: "amount".to_string() },
        "deposit requires a value for 'amount'"
    )]
    fn test_error_display(#[case] error: DirectoryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_funds(
        DirectoryError::insufficient_funds(1, Decimal::new(5, 0), Decimal::new(10, 0)),
        DirectoryError::InsufficientFunds { account: 1, balance: Decimal::new(5, 0), requested: Decimal::new(10, 0) }
    )]
    #[case::account_not_found(
        DirectoryError::account_not_found(9),
        DirectoryError::AccountNotFound { account: 9 }
    )]
    #[case::total_overflow(
        DirectoryError::total_overflow("total_balance"),
        DirectoryError::ArithmeticOverflow { operation: "total_balance".to_string(), account: None }
    )]
    fn test_helper_functions(#[case] result: DirectoryError, #[case] expected: DirectoryError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: DirectoryError = io_error.into();
        assert!(matches!(error, DirectoryError::IoError { .. }));
        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_csv_io_error_conversion_is_fatal() {
        let csv_error = csv::Error::from(std::io::Error::other("disk gone"));
        let error: DirectoryError = csv_error.into();
        assert_eq!(
            error,
            DirectoryError::IoError {
                message: "disk gone".to_string()
            }
        );
        assert!(error.is_fatal());
    }

    #[test]
    fn test_recoverable_errors_are_not_fatal() {
        assert!(!DirectoryError::account_not_found(1).is_fatal());
        assert!(!DirectoryError::duplicate_account(1).is_fatal());
    }
}
