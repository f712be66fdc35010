//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and view model.

pub mod books;
