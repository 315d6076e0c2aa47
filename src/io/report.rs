//! Plain-text rendering of command results
//!
//! Each executed command produces one block of lines. Amounts are always
//! shown with two decimal places.

use crate::core::Outcome;
use crate::types::{AccountNumber, Amount, DirectoryError};
use std::io::Write;

/// Write the lines describing a successful command
pub fn write_outcome(outcome: &Outcome, output: &mut dyn Write) -> Result<(), DirectoryError> {
    match outcome {
        Outcome::Deposited {
            account,
            amount,
            balance,
        } => writeln!(
            output,
            "Account #{}: deposited ${:.2}, balance ${:.2}",
            account, amount, balance
        )?,
        Outcome::Withdrew {
            account,
            amount,
            balance,
        } => writeln!(
            output,
            "Account #{}: withdrew ${:.2}, balance ${:.2}",
            account, amount, balance
        )?,
        Outcome::History {
            account,
            balance,
            transactions,
        } => {
            write_account_line(*account, *balance, output)?;
            writeln!(output, "Transaction History:")?;
            for transaction in transactions {
                writeln!(output, "  {}", transaction)?;
            }
        }
        Outcome::Sorted {
            account,
            algorithm,
            transactions,
        } => {
            writeln!(
                output,
                "Account #{}: sorted by amount ({} sort)",
                account, algorithm
            )?;
            for transaction in transactions {
                writeln!(output, "  {}", transaction)?;
            }
        }
        Outcome::Searched {
            account,
            amount,
            algorithm,
            found,
        } => match found {
            Some((index, transaction)) => writeln!(
                output,
                "Account #{}: found {} at position {} ({} search)",
                account, transaction, index, algorithm
            )?,
            None => writeln!(
                output,
                "Account #{}: no transaction of ${:.2} ({} search)",
                account, amount, algorithm
            )?,
        },
        Outcome::Queued {
            account,
            pending,
            queue_len,
        } => writeln!(
            output,
            "Account #{}: queued {} ({} pending)",
            account, pending, queue_len
        )?,
        Outcome::Settled {
            account,
            settlement,
            balance,
        } => {
            writeln!(
                output,
                "Account #{}: settled {} pending, {} rejected, balance ${:.2}",
                account,
                settlement.applied.len(),
                settlement.rejected.len(),
                balance
            )?;
            for (pending, error) in &settlement.rejected {
                writeln!(output, "  rejected {}: {}", pending, error)?;
            }
        }
        Outcome::Total { total } => writeln!(output, "Total balance: ${:.2}", total)?,
        Outcome::Listed { balances } => {
            for (account, balance) in balances {
                write_account_line(*account, *balance, output)?;
            }
        }
    }

    Ok(())
}

/// Write the line describing a rejected command
pub fn write_error(error: &DirectoryError, output: &mut dyn Write) -> Result<(), DirectoryError> {
    writeln!(output, "Error: {}", error)?;
    Ok(())
}

fn write_account_line(
    account: AccountNumber,
    balance: Amount,
    output: &mut dyn Write,
) -> Result<(), DirectoryError> {
    writeln!(output, "Account #{} | Balance: ${:.2}", account, balance)?;
    Ok(())
}
