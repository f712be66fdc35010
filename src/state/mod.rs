//! State - GPUI Entity State Modules

pub mod books_state;
