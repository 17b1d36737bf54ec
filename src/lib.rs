//! veneer - a thin schema-driven query facade over a PostgreSQL client
//!
//! Describes tables with a [`Schema`], accumulates SELECT columns and raw
//! condition fragments on a [`Query`], renders SQL with `$n` placeholders,
//! and executes through a pluggable [`Driver`] (tokio-postgres by default),
//! decoding rows via the schema's decoder function.
//!
//! Condition fragments are literal SQL; the caller numbers placeholders
//! relative to the bindings already on the query. There is no pooling, no
//! transactions, and no retrying — one statement, one round trip.
//!
//! # Example
//! ```ignore
//! use veneer::{Database, Field, Query, Row, Schema, SqlValue};
//!
//! struct Note {
//!     id: i32,
//!     title: String,
//! }
//!
//! fn decode_note(row: &Row) -> veneer::Result<Note> {
//!     Ok(Note {
//!         id: row.parse("id")?,
//!         title: row.get("title")?.to_string(),
//!     })
//! }
//!
//! let schema = Schema::new(
//!     "notes",
//!     "id",
//!     vec![Field::integer("id"), Field::text("title")],
//!     decode_note,
//! );
//!
//! let db = Database::connect("postgres://localhost/mydb").await?;
//! let note = db
//!     .one(Query::from(&schema)
//!         .select(&["id", "title"])
//!         .filter("id = $1", vec![SqlValue::from(5)]))
//!     .await?;
//! ```

pub mod database;
pub mod driver;
pub mod drivers;
pub mod error;
pub mod query;
pub mod row;
pub mod schema;
pub mod value;

// Re-export main types for convenient access
pub use database::Database;
pub use driver::Driver;
pub use error::{Error, Result};
pub use query::Query;
pub use row::{ResultSet, Row};
pub use schema::{Decoder, Field, FieldKind, Schema};
pub use value::SqlValue;
