//! Spreadsheet-backed storage for book records.
//!
//! [`BookStore`] owns the workbook path and the whole read-modify-write
//! cycle; callers only ever see [`ensure`](BookStore::ensure),
//! [`append`](BookStore::append) and [`list`](BookStore::list), never a raw
//! file handle. Every append re-reads the file and rewrites it wholesale in
//! a single save. There is no locking or versioning: two appends racing on
//! the same file can lose one of the writes.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;

use crate::error::StoreError;
use crate::record::Book;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Default workbook path, relative to the working directory.
pub const DEFAULT_FILE: &str = "BookInfo.xlsx";

/// Sheet holding the ledger rows.
const SHEET_NAME: &str = "Books";

/// Fixed header row, written once when the workbook is created and never
/// reordered afterwards.
const HEADER: [&str; 9] = [
    "Title",
    "Authors",
    "Publisher",
    "Published Date",
    "Description",
    "Page Count",
    "Categories",
    "Language",
    "Thumbnail",
];

/// Column indices (must match [`HEADER`])
mod cols {
    pub const TITLE: usize = 0;
    pub const AUTHORS: usize = 1;
    pub const PUBLISHER: usize = 2;
    pub const PUBLISHED_DATE: usize = 3;
    pub const DESCRIPTION: usize = 4;
    pub const PAGE_COUNT: usize = 5;
    pub const CATEGORIES: usize = 6;
    pub const LANGUAGE: usize = 7;
    pub const THUMBNAIL: usize = 8;
}

/// The single spreadsheet file holding all records.
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Create a store over the given workbook path.
    ///
    /// The file itself is created lazily by [`BookStore::ensure`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The workbook path this store owns.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the workbook with only the header row if it does not exist.
    /// Idempotent.
    pub fn ensure(&self) -> StoreResult<()> {
        let exists = self
            .path
            .try_exists()
            .map_err(|source| StoreError::Io { source })?;
        if exists {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "creating ledger workbook");
        self.write_rows(&[])
    }

    /// Append one record after the last existing row.
    ///
    /// Reads the whole workbook, pushes the new row, and rewrites the file
    /// in a single save call.
    pub fn append(&self, book: &Book) -> StoreResult<()> {
        self.ensure()?;
        let mut books = self.read_rows()?;
        books.push(book.clone());
        self.write_rows(&books)
    }

    /// All records in file (append) order. Header-only files yield an
    /// empty vec.
    pub fn list(&self) -> StoreResult<Vec<Book>> {
        self.ensure()?;
        self.read_rows()
    }

    fn read_rows(&self) -> StoreResult<Vec<Book>> {
        let mut workbook: Xlsx<_> =
            open_workbook(&self.path).map_err(|e| self.read_err(e))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .ok_or_else(|| self.read_err("workbook has no sheets"))?
            .clone();

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| self.read_err(e))?;

        let mut books = Vec::new();
        // Skip header row
        for row in range.rows().skip(1) {
            // Skip empty rows
            if row.iter().all(|c| c.to_string().trim().is_empty()) {
                continue;
            }
            books.push(Book {
                title: cell_string(row, cols::TITLE),
                authors: cell_string(row, cols::AUTHORS),
                publisher: cell_string(row, cols::PUBLISHER),
                published_date: cell_string(row, cols::PUBLISHED_DATE),
                description: cell_string(row, cols::DESCRIPTION),
                page_count: cell_string(row, cols::PAGE_COUNT),
                categories: cell_string(row, cols::CATEGORIES),
                language: cell_string(row, cols::LANGUAGE),
                thumbnail: cell_string(row, cols::THUMBNAIL),
            });
        }
        Ok(books)
    }

    fn write_rows(&self, books: &[Book]) -> StoreResult<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).map_err(|e| self.write_err(e))?;

        for (col, name) in HEADER.iter().enumerate() {
            sheet
                .write_string(0, col as u16, *name)
                .map_err(|e| self.write_err(e))?;
        }

        for (i, book) in books.iter().enumerate() {
            let row = i as u32 + 1;
            for (col, value) in [
                (cols::TITLE, &book.title),
                (cols::AUTHORS, &book.authors),
                (cols::PUBLISHER, &book.publisher),
                (cols::PUBLISHED_DATE, &book.published_date),
                (cols::DESCRIPTION, &book.description),
                (cols::PAGE_COUNT, &book.page_count),
                (cols::CATEGORIES, &book.categories),
                (cols::LANGUAGE, &book.language),
                (cols::THUMBNAIL, &book.thumbnail),
            ] {
                sheet
                    .write_string(row, col as u16, value)
                    .map_err(|e| self.write_err(e))?;
            }
        }

        workbook.save(&self.path).map_err(|e| self.write_err(e))
    }

    fn read_err(&self, message: impl ToString) -> StoreError {
        StoreError::Read {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }

    fn write_err(&self, message: impl ToString) -> StoreError {
        StoreError::Write {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

/// Coerce a cell to text. Whole-number floats render without the trailing
/// `.0` so numeric cells round-trip as their decimal string.
fn cell_string(row: &[Data], col: usize) -> String {
    row.get(col)
        .map(|c| match c {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default()
}
