//! Streaming CSV readers with iterator interfaces
//!
//! Provides iterators over the accounts file and the command script. CSV
//! format concerns are delegated to the csv_format module.
//!
//! # Design
//!
//! Both readers wrap a `CsvRows`, which reads one `StringRecord` at a time and
//! deserializes it against the header row. Reading raw records first keeps the
//! exact line number of every row available for error messages.
//!
//! ```no_run
//! use account_directory::io::CommandReader;
//! use std::path::Path;
//!
//! let reader = CommandReader::from_path(Path::new("commands.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Running {:?}", command),
//!         Err(e) => eprintln!("Skipping row: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from the
//!   constructors
//! - Individual row errors are yielded as Err variants and iteration continues

use crate::core::Command;
use crate::io::csv_format::{convert_account_row, convert_command_row, AccountRow, CommandRow};
use crate::types::{AccountNumber, Amount, DirectoryError};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Row-at-a-time CSV reader that remembers the header
#[derive(Debug)]
struct CsvRows<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    record: StringRecord,
}

impl<R: Read> CsvRows<R> {
    /// The reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow short rows (trailing optional fields may be omitted)
    fn new(input: R) -> Result<Self, DirectoryError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(input);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    /// Read and deserialize the next row, returning it with its line number
    fn next_row<T: DeserializeOwned>(&mut self) -> Option<Result<(u64, T), DirectoryError>> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map_or(0, |pos| pos.line());
                Some(
                    self.record
                        .deserialize::<T>(Some(&self.headers))
                        .map(|row| (line, row))
                        .map_err(|e| DirectoryError::ParseError {
                            line: Some(line),
                            message: e.to_string(),
                        }),
                )
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

fn open_file(path: &Path) -> Result<File, DirectoryError> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DirectoryError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DirectoryError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })
}

/// Reader over the accounts file (`account,balance`)
#[derive(Debug)]
pub struct AccountReader<R> {
    rows: CsvRows<R>,
}

impl AccountReader<File> {
    /// Open an accounts file
    pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        Self::new(open_file(path)?)
    }
}

impl<R: Read> AccountReader<R> {
    /// Read accounts from any byte source
    pub fn new(input: R) -> Result<Self, DirectoryError> {
        Ok(Self {
            rows: CsvRows::new(input)?,
        })
    }
}

impl<R: Read> Iterator for AccountReader<R> {
    type Item = Result<(AccountNumber, Amount), DirectoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next_row::<AccountRow>()?;
        Some(row.and_then(|(line, row)| convert_account_row(row, line)))
    }
}

/// Reader over the command script (`command,account,amount,algorithm`)
#[derive(Debug)]
pub struct CommandReader<R> {
    rows: CsvRows<R>,
}

impl CommandReader<File> {
    /// Open a command script
    pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        Self::new(open_file(path)?)
    }
}

impl<R: Read> CommandReader<R> {
    /// Read commands from any byte source
    pub fn new(input: R) -> Result<Self, DirectoryError> {
        Ok(Self {
            rows: CsvRows::new(input)?,
        })
    }
}

impl<R: Read> Iterator for CommandReader<R> {
    type Item = Result<Command, DirectoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next_row::<CommandRow>()?;
        Some(row.and_then(|(line, row)| convert_command_row(row, line)))
    }
}
