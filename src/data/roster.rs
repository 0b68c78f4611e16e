//! Immutable in-memory roster keyed by person id.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::models::Person;

/// The full roster in source order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
    index: HashMap<u64, usize>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids.
    pub fn new(people: Vec<Person>) -> Result<Self, AppError> {
        let mut index = HashMap::with_capacity(people.len());
        for (pos, person) in people.iter().enumerate() {
            if index.insert(person.id, pos).is_some() {
                return Err(AppError::Data(format!(
                    "Duplicate person id {} in roster",
                    person.id
                )));
            }
        }
        Ok(Self { people, index })
    }

    /// All people in source order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Get a person by id.
    pub fn get(&self, id: u64) -> Option<&Person> {
        self.index.get(&id).map(|&pos| &self.people[pos])
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
