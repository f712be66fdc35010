//! Theme - Colors

pub mod colors;
