//! Module with the data model of the library.

pub mod constants;
mod de;
mod types;

pub use self::types::*;
