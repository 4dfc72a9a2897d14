//! # bookledger
//!
//! A minimal HTTP service that keeps book metadata in a single spreadsheet
//! workbook. Every record is one row of the `Books` sheet; the file is the
//! only state, read wholesale on every request and rewritten wholesale on
//! every append.
//!
//! ## Architecture
//!
//! - **Data model** (`record`): raw request shape, normalized row shape,
//!   validation and sentinel defaults
//! - **Storage** (`store`): the workbook path and the whole
//!   read-modify-write cycle behind `ensure` / `append` / `list`
//! - **Service facade** (`ledger`): the two validated operations the HTTP
//!   surface exposes
//! - **Errors** (`error`): diagnostic error taxonomy with codes and help
//!
//! ## Library usage
//!
//! ```no_run
//! use bookledger::ledger::Ledger;
//! use bookledger::record::{BookInput, OneOrMany};
//! use bookledger::store::BookStore;
//!
//! let ledger = Ledger::new(BookStore::new("BookInfo.xlsx"));
//! let input = BookInput {
//!     title: Some("Dune".into()),
//!     authors: Some(OneOrMany::One("Frank Herbert".into())),
//!     ..Default::default()
//! };
//! ledger.add_record(input).unwrap();
//! for book in ledger.list_records().unwrap() {
//!     println!("{} by {}", book.title, book.authors);
//! }
//! ```

pub mod error;
pub mod ledger;
pub mod record;
pub mod store;
