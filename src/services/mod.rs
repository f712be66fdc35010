//! Service Layer
//!
//! HTTP access to the BookTrack API and the tokio bridge it runs on.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   BoxFuture    ┌──────────────┐   reqwest   ┌──────────┐
//! │ BooksPage    │ ─────────────▶ │ BookSource   │ ──────────▶ │ /api/    │
//! │ (GPUI task)  │ ◀── Result ─── │ (tokio rt)   │             │  books   │
//! └──────────────┘                └──────────────┘             └──────────┘
//! ```

pub mod books_client;
pub mod runtime;
