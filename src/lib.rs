//! BookTrack GUI Library
//!
//! This crate provides the application logic for the BookTrack GUI client,
//! a native window that lists the books served by the BookTrack API.

pub mod app;
pub mod domain;
pub mod error;
pub mod features;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
