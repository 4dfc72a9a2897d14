//! Persistence tests for the bookledger store.
//!
//! These tests verify the observable contract of the spreadsheet ledger:
//! lazy idempotent initialization, append-order preservation, default
//! substitution, and records surviving a store reopen.

use std::path::Path;

use bookledger::ledger::Ledger;
use bookledger::record::{Book, BookInput, OneOrMany, NO_DESCRIPTION, NO_THUMBNAIL, UNKNOWN};
use bookledger::store::{BookStore, DEFAULT_FILE};

fn ledger_at(dir: &Path) -> Ledger {
    Ledger::new(BookStore::new(dir.join(DEFAULT_FILE)))
}

fn input(title: &str, authors: &[&str]) -> BookInput {
    BookInput {
        title: Some(title.into()),
        authors: Some(OneOrMany::Many(
            authors.iter().map(|a| a.to_string()).collect(),
        )),
        ..Default::default()
    }
}

#[test]
fn initialization_is_idempotent() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = BookStore::new(dir.path().join(DEFAULT_FILE));

    store.ensure().unwrap();
    let first = std::fs::read(store.path()).unwrap();

    store.ensure().unwrap();
    let second = std::fs::read(store.path()).unwrap();

    // Second ensure is a no-op: the file bytes are untouched.
    assert_eq!(first, second);
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn fresh_ledger_lists_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let ledger = ledger_at(dir.path());
    assert!(ledger.list_records().unwrap().is_empty());
}

#[test]
fn append_read_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let ledger = ledger_at(dir.path());

    ledger.add_record(input("Hyperion", &["Dan Simmons"])).unwrap();

    let expected = Book::from_input(input("Hyperion", &["Dan Simmons"])).unwrap();
    let books = ledger.list_records().unwrap();
    assert_eq!(books.last(), Some(&expected));
}

#[test]
fn appends_preserve_relative_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let ledger = ledger_at(dir.path());

    ledger.add_record(input("A Wizard of Earthsea", &["Ursula K. Le Guin"])).unwrap();
    ledger.add_record(input("The Tombs of Atuan", &["Ursula K. Le Guin"])).unwrap();

    let titles: Vec<_> = ledger
        .list_records()
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["A Wizard of Earthsea", "The Tombs of Atuan"]);
}

#[test]
fn invalid_record_does_not_change_row_count() {
    let dir = tempfile::TempDir::new().unwrap();
    let ledger = ledger_at(dir.path());

    ledger.add_record(input("Accepted", &["Someone"])).unwrap();
    let before = ledger.list_records().unwrap().len();

    assert!(ledger.add_record(BookInput::default()).is_err());
    assert_eq!(ledger.list_records().unwrap().len(), before);
}

#[test]
fn absent_optional_fields_store_their_placeholders() {
    let dir = tempfile::TempDir::new().unwrap();
    let ledger = ledger_at(dir.path());

    ledger.add_record(input("T", &["A"])).unwrap();

    let books = ledger.list_records().unwrap();
    let book = &books[0];
    assert_eq!(book.publisher, UNKNOWN);
    assert_eq!(book.published_date, UNKNOWN);
    assert_eq!(book.description, NO_DESCRIPTION);
    assert_eq!(book.page_count, UNKNOWN);
    assert_eq!(book.categories, UNKNOWN);
    assert_eq!(book.language, UNKNOWN);
    assert_eq!(book.thumbnail, NO_THUMBNAIL);
}

#[test]
fn records_survive_store_reopen() {
    let dir = tempfile::TempDir::new().unwrap();

    // First session: append two records.
    {
        let ledger = ledger_at(dir.path());
        ledger.add_record(input("Foundation", &["Isaac Asimov"])).unwrap();
        ledger
            .add_record(input("Foundation and Empire", &["Isaac Asimov"]))
            .unwrap();
    }

    // Second session: a fresh store over the same file sees both, in order.
    {
        let ledger = ledger_at(dir.path());
        let titles: Vec<_> = ledger
            .list_records()
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["Foundation", "Foundation and Empire"]);
    }
}
