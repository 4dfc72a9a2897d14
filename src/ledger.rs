//! Service facade: the two validated operations over a [`BookStore`].
//!
//! The HTTP layer calls these instead of touching the store directly, so
//! validation always runs before any file I/O.

use crate::error::LedgerResult;
use crate::record::{Book, BookInput};
use crate::store::BookStore;

/// The record service: validates incoming records and delegates storage to
/// the owned [`BookStore`].
pub struct Ledger {
    store: BookStore,
}

impl Ledger {
    /// Create a ledger over the given store.
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Validate, normalize, and append one record.
    ///
    /// Fails with a record error before any file I/O when `title` or
    /// `authors` is missing or empty.
    pub fn add_record(&self, input: BookInput) -> LedgerResult<()> {
        let book = Book::from_input(input)?;
        self.store.append(&book)?;
        Ok(())
    }

    /// All records in append order.
    pub fn list_records(&self) -> LedgerResult<Vec<Book>> {
        Ok(self.store.list()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::record::OneOrMany;
    use crate::store::DEFAULT_FILE;

    fn temp_ledger(dir: &std::path::Path) -> Ledger {
        Ledger::new(BookStore::new(dir.join(DEFAULT_FILE)))
    }

    #[test]
    fn invalid_input_leaves_file_untouched() {
        let dir = tempfile::TempDir::new().unwrap();
        let ledger = temp_ledger(dir.path());
        ledger.store().ensure().unwrap();

        let err = ledger.add_record(BookInput::default()).unwrap_err();
        assert!(matches!(err, LedgerError::Record(_)));
        assert!(ledger.list_records().unwrap().is_empty());
    }

    #[test]
    fn add_then_list_returns_normalized_record() {
        let dir = tempfile::TempDir::new().unwrap();
        let ledger = temp_ledger(dir.path());

        let input = BookInput {
            title: Some("Roadside Picnic".into()),
            authors: Some(OneOrMany::Many(vec![
                "Arkady Strugatsky".into(),
                "Boris Strugatsky".into(),
            ])),
            ..Default::default()
        };
        ledger.add_record(input).unwrap();

        let books = ledger.list_records().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Roadside Picnic");
        assert_eq!(books[0].authors, "Arkady Strugatsky, Boris Strugatsky");
    }
}
