//! Diagnostic error types for bookledger.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text so users know exactly what
//! went wrong and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the bookledger service.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text, source errors) through to the
/// caller.
#[derive(Debug, Error, Diagnostic)]
pub enum LedgerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Record errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum RecordError {
    #[error("Title and Authors are required")]
    #[diagnostic(
        code(bookledger::record::missing_required),
        help(
            "Send a JSON body with a non-empty `title` and a non-empty \
             `authors` (a string or an array of strings). All other fields \
             are optional and default to placeholder values."
        )
    )]
    MissingRequired,
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("I/O error: {source}")]
    #[diagnostic(
        code(bookledger::store::io),
        help(
            "A filesystem operation failed. Check that the ledger file's \
             directory exists, has correct permissions, and that the disk \
             is not full."
        )
    )]
    Io {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read workbook {path}: {message}")]
    #[diagnostic(
        code(bookledger::store::read),
        help(
            "The spreadsheet could not be opened or parsed. If the file was \
             edited outside this service it may be corrupt; restore it from \
             a backup or remove it to start a fresh ledger."
        )
    )]
    Read { path: String, message: String },

    #[error("failed to write workbook {path}: {message}")]
    #[diagnostic(
        code(bookledger::store::write),
        help("Check free disk space and write permissions on the ledger file.")
    )]
    Write { path: String, message: String },
}

/// Convenience alias for functions returning bookledger results.
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
