//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row structures and conversion)
//! - `reader` - Streaming readers for the accounts file and command script
//! - `report` - Plain-text rendering of command results

pub mod csv_format;
pub mod reader;
pub mod report;

pub use csv_format::{convert_account_row, convert_command_row, AccountRow, CommandRow};
pub use reader::{AccountReader, CommandReader};
pub use report::{write_error, write_outcome};
