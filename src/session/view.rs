//! Read-only snapshot of a session for rendering.

use serde::Serialize;

use super::Session;
use crate::models::{FilterCriteria, Person};
use crate::paging::PageButton;

/// A person card on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub domain: String,
    pub avatar: String,
    pub available: bool,
    pub add_disabled: bool,
}

/// One line of the team panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub id: u64,
    pub name: String,
    pub domain: String,
}

impl From<&Person> for TeamEntry {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            name: person.full_name(),
            domain: person.domain.clone(),
        }
    }
}

/// Everything the presentation layer shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub criteria: FilterCriteria,
    pub total_matches: usize,
    pub current_page: usize,
    pub page_count: usize,
    pub cards: Vec<Card>,
    pub pages: Vec<PageButton>,
    /// `None` until the team has been derived; an empty list renders as
    /// "No team members selected".
    pub team: Option<Vec<TeamEntry>>,
    /// Number of times the team has been derived.
    pub team_revision: u64,
}

impl View {
    pub fn of(session: &Session) -> Self {
        let manager = session.team();
        let cards = session
            .visible()
            .iter()
            .map(|person| Card {
                id: person.id,
                name: person.full_name(),
                email: person.email.clone(),
                domain: person.domain.clone(),
                avatar: person.avatar.clone(),
                available: person.available,
                add_disabled: !manager.can_add(person),
            })
            .collect();

        let team = manager
            .is_finalized()
            .then(|| manager.team().iter().map(TeamEntry::from).collect());

        Self {
            criteria: session.criteria().clone(),
            total_matches: session.filtered().len(),
            current_page: session.page().current_page(),
            page_count: session.page_count(),
            cards,
            pages: session.page().buttons(session.filtered().len()),
            team,
            team_revision: manager.revision(),
        }
    }
}
