//! Module with various utilities.

pub mod cache;
