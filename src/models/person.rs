//! Person record matching the roster data file.

use serde::{Deserialize, Serialize};

/// Domains offered by the control surface.
pub const KNOWN_DOMAINS: [&str; 5] = ["Sales", "Finance", "IT", "Management", "Marketing"];

/// Genders offered by the control surface.
pub const KNOWN_GENDERS: [&str; 3] = ["Female", "Male", "Others"];

/// A person in the roster. Owned by the data source and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub avatar: String,
    pub domain: String,
    pub available: bool,
}

impl Person {
    /// "First Last", the text the name query is matched against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
