//! BooksState - Book List Page State

use crate::domain::book::Book;

/// Result of the single books fetch, with the error collapsed to its display text
pub type FetchOutcome = Result<Vec<Book>, String>;

/// Where the page is in its fetch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Books received
    Loaded,
    /// Request failed, `error` holds the message
    Failed,
}

/// State for the books page
#[derive(Debug, Clone, Default)]
pub struct BooksState {
    /// Books in server order
    pub books: Vec<Book>,
    /// Message of the last failure
    pub error: Option<String>,
    /// Lifecycle phase
    pub phase: LoadPhase,
    requested: bool,
}

impl BooksState {
    /// Mark the fetch as issued
    ///
    /// Returns `false` if a fetch was already issued for this page load.
    pub fn begin_fetch(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        self.phase = LoadPhase::Loading;
        true
    }

    /// Replace the books wholesale
    pub fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.error = None;
        self.phase = LoadPhase::Loaded;
    }

    /// Record a failure; previously received books stay as they are
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.phase = LoadPhase::Failed;
    }

    /// Apply the outcome of the fetch
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(books) => self.set_books(books),
            Err(message) => self.set_error(message),
        }
    }
}
