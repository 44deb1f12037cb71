use crate::types::AccountId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlipError {
    #[error("failed to load input file '{path}': {detail}")]
    Load { path: String, detail: String },

    #[error("required sheet '{name}' not found in workbook")]
    MissingTable { name: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Structural failures detected before any statement is computed.
/// Each variant names the offending sheet so the operator can fix
/// the workbook without reading a stack trace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("in '{table}' sheet expected {expected} columns, found {actual}")]
    ColumnCount {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[error("row count mismatch: 'Wages' has {expected} rows, '{table}' has {actual} rows")]
    RowCount {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate account '{account}' in '{table}' sheet")]
    DuplicateAccount { table: String, account: AccountId },

    #[error("account '{account}' from 'Wages' is missing in '{table}' sheet")]
    MissingAccount { table: String, account: AccountId },

    #[error("account '{account}' in '{table}' sheet does not appear in 'Wages'")]
    UnknownAccount { table: String, account: AccountId },
}

pub type SlipResult<T> = Result<T, SlipError>;
