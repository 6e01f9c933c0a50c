//! Type definitions for eventboard

mod error;
mod records;

pub use error::*;
pub use records::*;
