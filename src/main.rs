//! bookledger server: book metadata over HTTP, stored in one spreadsheet.
//!
//! - `POST /add-book` — validate and append one record
//! - `GET  /books` — all records in append order
//!
//! The ledger lives in a single workbook (`BookInfo.xlsx` by default).
//! Every request reads it wholesale; appends rewrite it wholesale. There is
//! deliberately no cross-request locking, so racing appends can drop one of
//! the writes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use bookledger::error::LedgerError;
use bookledger::ledger::Ledger;
use bookledger::record::{Book, BookInput};
use bookledger::store::{BookStore, DEFAULT_FILE};

// ── Handlers ──────────────────────────────────────────────────────────────

async fn add_book(
    State(ledger): State<Arc<Ledger>>,
    Json(input): Json<BookInput>,
) -> Result<String, (StatusCode, String)> {
    match ledger.add_record(input) {
        Ok(()) => Ok("Book added to the ledger.".to_string()),
        Err(LedgerError::Record(e)) => Err((StatusCode::BAD_REQUEST, format!("{e}."))),
        Err(e) => {
            tracing::error!(error = %e, "append failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Server error.".to_string()))
        }
    }
}

async fn list_books(
    State(ledger): State<Arc<Ledger>>,
) -> Result<Json<Vec<Book>>, (StatusCode, String)> {
    match ledger.list_records() {
        Ok(books) => Ok(Json(books)),
        Err(e) => {
            tracing::error!(error = %e, "list failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Server error.".to_string()))
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let bind = std::env::var("BOOKLEDGER_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BOOKLEDGER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{bind}:{port}");

    let file = std::env::var("BOOKLEDGER_FILE").unwrap_or_else(|_| DEFAULT_FILE.to_string());
    let ledger = Arc::new(Ledger::new(BookStore::new(file)));

    let app = Router::new()
        .route("/add-book", post(add_book))
        .route("/books", get(list_books))
        .layer(CorsLayer::permissive())
        .with_state(ledger);

    tracing::info!("bookledger listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
