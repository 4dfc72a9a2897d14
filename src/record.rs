//! Book records: the raw request shape and the normalized row form.
//!
//! A [`BookInput`] is whatever the client posted; [`Book`] is one ledger
//! row after validation and default substitution. Only `title` and
//! `authors` are required; every other field falls back to a fixed
//! placeholder so rows are always fully populated.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Placeholder stored when an optional text field is absent.
pub const UNKNOWN: &str = "unknown";
/// Placeholder stored when no description is given.
pub const NO_DESCRIPTION: &str = "no description";
/// Placeholder stored when no thumbnail URI is given.
pub const NO_THUMBNAIL: &str = "none";

/// A field that may arrive as a single string or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Render to cell text: lists are joined with `", "`.
    fn joined(&self) -> String {
        match self {
            OneOrMany::One(s) => s.clone(),
            OneOrMany::Many(items) => items.join(", "),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            OneOrMany::One(s) => s.is_empty(),
            OneOrMany::Many(items) => items.is_empty(),
        }
    }
}

/// A page count that may arrive as a JSON number or a string.
///
/// Non-numeric strings are passed through verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageCount {
    Number(serde_json::Number),
    Text(String),
}

impl PageCount {
    fn rendered(&self) -> String {
        match self {
            PageCount::Number(n) => n.to_string(),
            PageCount::Text(s) => s.clone(),
        }
    }
}

/// Raw request body for `POST /add-book`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookInput {
    pub title: Option<String>,
    pub authors: Option<OneOrMany>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<PageCount>,
    pub categories: Option<Vec<String>>,
    pub language: Option<String>,
    pub thumbnail: Option<String>,
}

/// One normalized ledger row.
///
/// Fields serialize under the exact header cell names, spaces included,
/// so the list response mirrors the spreadsheet verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Authors")]
    pub authors: String,
    #[serde(rename = "Publisher")]
    pub publisher: String,
    #[serde(rename = "Published Date")]
    pub published_date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Page Count")]
    pub page_count: String,
    #[serde(rename = "Categories")]
    pub categories: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Thumbnail")]
    pub thumbnail: String,
}

impl Book {
    /// Validate and normalize a raw request body into a ledger row.
    ///
    /// `title` and `authors` must be present and non-empty (an empty string
    /// or an empty author list fails). Everything else takes its
    /// placeholder default when absent; no further validation is applied,
    /// so empty strings inside lists join through as-is.
    pub fn from_input(input: BookInput) -> Result<Book, RecordError> {
        let title = input.title.filter(|t| !t.is_empty());
        let authors = input.authors.filter(|a| !a.is_empty());
        let (Some(title), Some(authors)) = (title, authors) else {
            return Err(RecordError::MissingRequired);
        };

        Ok(Book {
            title,
            authors: authors.joined(),
            publisher: input.publisher.unwrap_or_else(|| UNKNOWN.to_string()),
            published_date: input
                .published_date
                .unwrap_or_else(|| UNKNOWN.to_string()),
            description: input
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            page_count: input
                .page_count
                .map(|p| p.rendered())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            categories: input
                .categories
                .map(|c| c.join(", "))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            language: input.language.unwrap_or_else(|| UNKNOWN.to_string()),
            thumbnail: input.thumbnail.unwrap_or_else(|| NO_THUMBNAIL.to_string()),
        })
    }
}
