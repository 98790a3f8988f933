//! Game implementations.

pub mod number;
pub mod word;
