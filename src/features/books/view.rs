//! Books View Model
//!
//! Plain description of what the books page shows, derived from `BooksState`.

use crate::state::books_state::BooksState;

/// Fixed page heading
pub const HEADING: &str = "Books";

/// One entry of the books list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookItem {
    /// Stable element key, derived from the book id
    pub key: String,
    /// Visible text
    pub title: String,
}

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooksView {
    pub heading: &'static str,
    pub error: Option<String>,
    pub items: Vec<BookItem>,
}

impl BooksView {
    pub fn from_state(state: &BooksState) -> Self {
        Self {
            heading: HEADING,
            error: state.error.clone(),
            items: state
                .books
                .iter()
                .map(|book| BookItem {
                    key: format!("book-{}", book.id),
                    title: book.title.clone(),
                })
                .collect(),
        }
    }

    /// Visible titles, in display order
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}
