//! CSV format handling for account setup and command scripts
//!
//! This module centralizes all CSV format concerns, providing:
//! - `AccountRow` and `CommandRow` structures for deserialization
//! - Conversion from CSV rows to domain values
//!
//! All functions are pure (no I/O) for easy testing.

use crate::algorithms::{SearchAlgorithm, SortAlgorithm};
use crate::core::Command;
use crate::types::{AccountNumber, Amount, DirectoryError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Row of the accounts file
///
/// Matches the columns: account, balance
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountRow {
    pub account: AccountNumber,
    pub balance: String,
}

/// Row of the command script
///
/// Matches the columns: command, account, amount, algorithm. Only `command`
/// is always required; which of the others must be present depends on it.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CommandRow {
    pub command: String,
    pub account: Option<AccountNumber>,
    pub amount: Option<String>,
    pub algorithm: Option<String>,
}

/// Convert an AccountRow into an account number and opening balance
///
/// # Arguments
///
/// * `row` - The deserialized CSV row
/// * `line` - Line number of the row, for error messages
pub fn convert_account_row(
    row: AccountRow,
    line: u64,
) -> Result<(AccountNumber, Amount), DirectoryError> {
    let balance = parse_amount(&row.balance, line)?;
    Ok((row.account, balance))
}

/// Convert a CommandRow into a Command
///
/// This function:
/// - Matches the command name case-insensitively
/// - Checks that the fields the command needs are present
/// - Parses amounts into Decimals and algorithm names into their enums
/// - Falls back to merge sort and binary search when no algorithm is given
///
/// # Arguments
///
/// * `row` - The deserialized CSV row
/// * `line` - Line number of the row, for error messages
pub fn convert_command_row(row: CommandRow, line: u64) -> Result<Command, DirectoryError> {
    let name = row.command.to_lowercase();

    let account = || {
        row.account
            .ok_or_else(|| DirectoryError::missing_field(&name, "account"))
    };
    let amount = || match row.amount.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => parse_amount(value, line),
        _ => Err(DirectoryError::missing_field(&name, "amount")),
    };
    let algorithm = row
        .algorithm
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let command = match name.as_str() {
        "deposit" => Command::Deposit {
            account: account()?,
            amount: amount()?,
        },
        "withdraw" => Command::Withdraw {
            account: account()?,
            amount: amount()?,
        },
        "history" => Command::History {
            account: account()?,
        },
        "sort" => Command::Sort {
            account: account()?,
            algorithm: parse_algorithm::<SortAlgorithm>(algorithm, line)?,
        },
        "find" => Command::Find {
            account: account()?,
            amount: amount()?,
            algorithm: parse_algorithm::<SearchAlgorithm>(algorithm, line)?,
        },
        "queue-deposit" => Command::QueueDeposit {
            account: account()?,
            amount: amount()?,
        },
        "queue-withdraw" => Command::QueueWithdraw {
            account: account()?,
            amount: amount()?,
        },
        "settle" => Command::Settle {
            account: account()?,
        },
        "total" => Command::Total,
        "list" => Command::List,
        _ => return Err(DirectoryError::invalid_command(&row.command, line)),
    };

    Ok(command)
}

fn parse_amount(value: &str, line: u64) -> Result<Amount, DirectoryError> {
    Decimal::from_str(value.trim()).map_err(|_| DirectoryError::ParseError {
        line: Some(line),
        message: format!("Invalid amount '{}'", value),
    })
}

fn parse_algorithm<A>(value: Option<&str>, line: u64) -> Result<A, DirectoryError>
where
    A: FromStr<Err = String> + Default,
{
    match value {
        Some(name) => name.parse().map_err(|message| DirectoryError::ParseError {
            line: Some(line),
            message,
        }),
        None => Ok(A::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(command: &str, account: Option<u32>, amount: Option<&str>, algorithm: Option<&str>) -> CommandRow {
        CommandRow {
            command: command.to_string(),
            account,
            amount: amount.map(str::to_string),
            algorithm: algorithm.map(str::to_string),
        }
    }

    #[rstest]
    #[case::deposit(
        row("deposit", Some(100), Some("30.00"), None),
        Command::Deposit { account: 100, amount: Decimal::new(3000, 2) }
    )]
    #[case::withdraw_case_insensitive(
        row("WITHDRAW", Some(100), Some("5"), None),
        Command::Withdraw { account: 100, amount: Decimal::new(5, 0) }
    )]
    #[case::history(
        row("history", Some(7), None, None),
        Command::History { account: 7 }
    )]
    #[case::sort_default_algorithm(
        row("sort", Some(7), None, Some("")),
        Command::Sort { account: 7, algorithm: SortAlgorithm::Merge }
    )]
    #[case::sort_bubble(
        row("sort", Some(7), None, Some("bubble")),
        Command::Sort { account: 7, algorithm: SortAlgorithm::Bubble }
    )]
    #[case::find_linear(
        row("find", Some(7), Some("10"), Some(" linear ")),
        Command::Find { account: 7, amount: Decimal::new(10, 0), algorithm: SearchAlgorithm::Linear }
    )]
    #[case::find_default_algorithm(
        row("find", Some(7), Some("10"), None),
        Command::Find { account: 7, amount: Decimal::new(10, 0), algorithm: SearchAlgorithm::Binary }
    )]
    #[case::queue_deposit(
        row("queue-deposit", Some(1), Some("2.5"), None),
        Command::QueueDeposit { account: 1, amount: Decimal::new(25, 1) }
    )]
    #[case::queue_withdraw(
        row("queue-withdraw", Some(1), Some("1"), None),
        Command::QueueWithdraw { account: 1, amount: Decimal::new(1, 0) }
    )]
    #[case::settle(row("settle", Some(1), None, None), Command::Settle { account: 1 })]
    #[case::total(row("total", None, None, None), Command::Total)]
    #[case::list_ignores_extra_fields(row("list", Some(3), Some("1"), None), Command::List)]
    fn test_convert_command_row_valid(#[case] input: CommandRow, #[case] expected: Command) {
        assert_eq!(convert_command_row(input, 2), Ok(expected));
    }

    #[test]
    fn test_negative_amount_parses() {
        // Sign checks belong to the account, not the parser
        let command = convert_command_row(row("deposit", Some(1), Some("-4"), None), 2);
        assert_eq!(
            command,
            Ok(Command::Deposit { account: 1, amount: Decimal::new(-4, 0) })
        );
    }

    #[rstest]
    #[case::unknown_command(row("transfer", Some(1), Some("1"), None), "Invalid command 'transfer' at line 5")]
    #[case::missing_account(row("deposit", None, Some("1"), None), "deposit requires a value for 'account'")]
    #[case::missing_amount(row("withdraw", Some(1), None, None), "withdraw requires a value for 'amount'")]
    #[case::blank_amount(row("find", Some(1), Some("  "), None), "find requires a value for 'amount'")]
    #[case::invalid_amount(row("deposit", Some(1), Some("ten"), None), "CSV parse error at line 5: Invalid amount 'ten'")]
    #[case::invalid_algorithm(row("sort", Some(1), None, Some("quick")), "CSV parse error at line 5: Unknown sort algorithm 'quick'")]
    fn test_convert_command_row_errors(#[case] input: CommandRow, #[case] expected: &str) {
        let error = convert_command_row(input, 5).unwrap_err();
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::integer("50", Decimal::new(50, 0))]
    #[case::decimal("20.00", Decimal::new(2000, 2))]
    #[case::padded(" 10.5 ", Decimal::new(105, 1))]
    fn test_convert_account_row(#[case] balance: &str, #[case] expected: Decimal) {
        let input = AccountRow {
            account: 100,
            balance: balance.to_string(),
        };
        assert_eq!(convert_account_row(input, 2), Ok((100, expected)));
    }

    #[test]
    fn test_convert_account_row_invalid_balance() {
        let input = AccountRow {
            account: 100,
            balance: "lots".to_string(),
        };
        assert!(matches!(
            convert_account_row(input, 3),
            Err(DirectoryError::ParseError { line: Some(3), .. })
        ));
    }
}
