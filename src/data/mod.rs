//! Roster data source.
//!
//! The roster is read once at startup, either from a JSON file or from the
//! sample roster compiled into the binary, and is immutable afterwards.

mod roster;

pub use roster::*;

use std::path::Path;

use crate::errors::AppError;
use crate::models::Person;

/// Sample roster shipped with the binary.
const EMBEDDED_ROSTER: &str = include_str!("../../data/roster.json");

/// Parse a roster from its JSON representation.
pub fn parse_roster(json: &str) -> Result<Roster, AppError> {
    let people: Vec<Person> = serde_json::from_str(json)?;
    Roster::new(people)
}

/// Load the roster from `path`, or the embedded sample when no path is given.
pub fn load_roster(path: Option<&Path>) -> Result<Roster, AppError> {
    let roster = match path {
        Some(path) => {
            tracing::info!("Loading roster from {:?}", path);
            let json = std::fs::read_to_string(path).map_err(|e| {
                AppError::Data(format!("Failed to read roster file {:?}: {}", path, e))
            })?;
            parse_roster(&json)?
        }
        None => {
            tracing::info!("Loading embedded sample roster");
            parse_roster(EMBEDDED_ROSTER)?
        }
    };

    if roster.is_empty() {
        tracing::warn!("Roster is empty, nothing to browse");
    }
    tracing::info!("Roster loaded with {} people", roster.len());
    Ok(roster)
}
