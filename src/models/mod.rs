//! Data models for the roster browser.
//!
//! Person records mirror the roster data file field for field.

mod criteria;
mod person;

pub use criteria::*;
pub use person::*;
