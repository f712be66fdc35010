//! Book - A single record from the books endpoint

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a book
///
/// The backend emits integer primary keys, but string ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    Int(i64),
    Text(String),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Int(id) => write!(f, "{id}"),
            BookId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        BookId::Int(id)
    }
}

impl From<i32> for BookId {
    fn from(id: i32) -> Self {
        BookId::Int(i64::from(id))
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        BookId::Text(id.to_string())
    }
}

/// A book as returned by `GET /api/books`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique ID
    pub id: BookId,
    /// Display title (empty when the record has none)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

impl Book {
    pub fn new(id: impl Into<BookId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
