//! AppEntities - Shared Entity Handles
//!
//! All app-wide GPUI entities are collected here and handed to the pages.

use gpui::{App, AppContext, Entity};

use crate::state::books_state::BooksState;

/// Collection of all app-wide Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Books page state
    pub books: Entity<BooksState>,
}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            books: cx.new(|_| BooksState::default()),
        }
    }
}
