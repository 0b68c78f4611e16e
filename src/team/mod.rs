//! Selection and team manager.
//!
//! The operator picks candidates into an ordered selection; the team is
//! derived from it after every change.

use std::collections::HashSet;

use crate::models::Person;

/// Selection set plus the team derived from it.
#[derive(Debug, Clone)]
pub struct TeamManager {
    selection: Vec<Person>,
    team: Vec<Person>,
    finalized: bool,
    revision: u64,
}

impl Default for TeamManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamManager {
    /// A manager with an empty selection whose team has already been
    /// derived once, so the empty-team state is shown from the start.
    pub fn new() -> Self {
        let mut manager = Self {
            selection: Vec::new(),
            team: Vec::new(),
            finalized: false,
            revision: 0,
        };
        manager.recompute_team();
        manager
    }

    pub fn selection(&self) -> &[Person] {
        &self.selection
    }

    pub fn team(&self) -> &[Person] {
        &self.team
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Number of team recomputations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.iter().any(|p| p.id == id)
    }

    pub fn in_team(&self, id: u64) -> bool {
        self.team.iter().any(|p| p.id == id)
    }

    /// Whether the "add to team" control for `person` is enabled.
    pub fn can_add(&self, person: &Person) -> bool {
        person.available && !self.is_selected(person.id) && !self.in_team(person.id)
    }

    /// Append an available, not-yet-selected person. Returns false (and
    /// leaves everything untouched) otherwise.
    pub fn add(&mut self, person: &Person) -> bool {
        if !person.available || self.is_selected(person.id) {
            tracing::debug!(id = person.id, "Ignoring add of ineligible person");
            return false;
        }

        self.selection.push(person.clone());
        self.finalized = false;
        self.recompute_team();
        true
    }

    /// Drop `person` from the selection. The team is recomputed even when
    /// the person was not selected. Returns whether anything was removed.
    pub fn remove(&mut self, person: &Person) -> bool {
        let before = self.selection.len();
        self.selection.retain(|p| p.id != person.id);
        self.finalized = false;
        self.recompute_team();
        self.selection.len() != before
    }

    /// Derive the team from the selection: every selected person whose
    /// domain occurs in the selection. That is always the whole selection.
    pub fn recompute_team(&mut self) {
        let unique_domains: HashSet<&str> =
            self.selection.iter().map(|p| p.domain.as_str()).collect();

        self.team = self
            .selection
            .iter()
            .filter(|p| unique_domains.contains(p.domain.as_str()))
            .cloned()
            .collect();
        self.finalized = true;
        self.revision += 1;

        tracing::debug!(
            selected = self.selection.len(),
            team = self.team.len(),
            domains = unique_domains.len(),
            "Team recomputed"
        );
    }
}
