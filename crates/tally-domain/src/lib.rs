//! tally-domain
//!
//! Pure domain models (income and expense records, derived aggregates).
//! No I/O, no logging, no engine logic. Only data types and shared traits.

pub mod aggregate;
pub mod common;
pub mod expense;
pub mod income;

pub use aggregate::*;
pub use common::*;
pub use expense::*;
pub use income::*;
