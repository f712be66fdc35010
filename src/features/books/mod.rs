//! Books Feature
//!
//! Fetches the book list once on mount and renders the titles.

pub mod controller;
pub mod page;
pub mod view;
