//! Utils - Local Storage Helpers

pub mod config_store;
