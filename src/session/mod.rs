//! Browsing session.
//!
//! One `Session` owns all mutable state. Actions are applied in order and
//! every derived value is recomputed explicitly right after the mutation
//! that affects it: criteria change → filter → page reset, selection
//! change → team.

mod view;

pub use view::*;

use crate::data::Roster;
use crate::models::{FilterCriteria, FilterUpdate, Person};
use crate::paging::PageState;
use crate::search;
use crate::team::TeamManager;

/// An operator action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetNameQuery(String),
    SetFilter(FilterUpdate),
    ClearFilters,
    GoToPage(usize),
    NextPage,
    PrevPage,
    Add(u64),
    Remove(u64),
}

/// Whether an action changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

/// State of one browsing session.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    criteria: FilterCriteria,
    filtered: Vec<Person>,
    page: PageState,
    team: TeamManager,
    revision_id: u64,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        let mut session = Self {
            filtered: Vec::new(),
            roster,
            criteria: FilterCriteria::default(),
            page: PageState::default(),
            team: TeamManager::new(),
            revision_id: 0,
        };
        session.refilter();
        session
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The filtered roster, in roster order.
    pub fn filtered(&self) -> &[Person] {
        &self.filtered
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn team(&self) -> &TeamManager {
        &self.team
    }

    /// Incremented on every applied action.
    pub fn revision_id(&self) -> u64 {
        self.revision_id
    }

    /// People on the current page.
    pub fn visible(&self) -> &[Person] {
        self.page.slice(&self.filtered)
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count(self.filtered.len())
    }

    /// Apply `action` to the session in place.
    pub fn apply(&mut self, action: Action) -> Outcome {
        tracing::debug!(?action, "Applying action");

        let outcome = match action {
            Action::SetNameQuery(query) => {
                self.criteria.name_query = query;
                self.refilter();
                Outcome::Applied
            }
            Action::SetFilter(update) => {
                self.criteria.set_filter(update);
                self.refilter();
                Outcome::Applied
            }
            Action::ClearFilters => {
                self.criteria = FilterCriteria::default();
                self.refilter();
                Outcome::Applied
            }
            Action::GoToPage(page) => {
                self.page.go_to(page);
                Outcome::Applied
            }
            Action::NextPage => {
                let next = (self.page.current_page() + 1).min(self.page_count().max(1));
                self.move_to(next)
            }
            Action::PrevPage => {
                let prev = self.page.current_page().saturating_sub(1).max(1);
                self.move_to(prev)
            }
            Action::Add(id) => match self.roster.get(id) {
                Some(person) if self.team.add(person) => Outcome::Applied,
                _ => Outcome::Ignored,
            },
            Action::Remove(id) => match self.roster.get(id) {
                Some(person) => {
                    self.team.remove(person);
                    Outcome::Applied
                }
                None => Outcome::Ignored,
            },
        };

        if outcome == Outcome::Applied {
            self.revision_id += 1;
        }
        outcome
    }

    /// Pure form of [`Session::apply`]: consume the state, return the next one.
    #[allow(dead_code)]
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    /// Snapshot of everything the presentation layer shows.
    pub fn view(&self) -> View {
        View::of(self)
    }

    fn move_to(&mut self, page: usize) -> Outcome {
        if page == self.page.current_page() {
            return Outcome::Ignored;
        }
        self.page.go_to(page);
        Outcome::Applied
    }

    fn refilter(&mut self) {
        self.filtered = search::filter(self.roster.people(), &self.criteria);
        self.page.reset();
        tracing::debug!(
            matches = self.filtered.len(),
            pages = self.page_count(),
            "Roster filtered"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn create_test_person(id: u64, first: &str, last: &str, domain: &str, available: bool) -> Person {
        Person {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            gender: "Female".to_string(),
            avatar: String::new(),
            domain: domain.to_string(),
            available,
        }
    }

    fn ann_and_bo() -> Session {
        let roster = Roster::new(vec![
            create_test_person(1, "Ann", "Lee", "Sales", true),
            create_test_person(2, "Bo", "Ray", "IT", false),
        ])
        .unwrap();
        Session::new(roster)
    }

    fn numbered(count: u64) -> Session {
        let people = (1..=count)
            .map(|id| create_test_person(id, "Person", &format!("N{}", id), "IT", id % 2 == 1))
            .collect();
        Session::new(Roster::new(people).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let session = ann_and_bo();
        assert_eq!(session.filtered().len(), 2);
        assert_eq!(session.page().current_page(), 1);
        assert!(session.team().is_finalized());
        assert_eq!(session.revision_id(), 0);
    }

    #[test]
    fn test_name_query_matches_both() {
        let mut session = ann_and_bo();
        session.apply(Action::SetNameQuery("a".to_string()));
        let ids: Vec<u64> = session.filtered().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_add_unavailable_ignored() {
        let mut session = ann_and_bo();
        let team_revision = session.team().revision();

        assert_eq!(session.apply(Action::Add(2)), Outcome::Ignored);
        assert!(session.team().selection().is_empty());
        assert_eq!(session.team().revision(), team_revision);
        assert_eq!(session.revision_id(), 0);
    }

    #[test]
    fn test_add_available_builds_team() {
        let mut session = ann_and_bo();
        assert_eq!(session.apply(Action::Add(1)), Outcome::Applied);
        assert_eq!(session.team().team().len(), 1);
        assert_eq!(session.team().team()[0].first_name, "Ann");
        assert!(session.team().is_finalized());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut session = ann_and_bo();
        assert_eq!(session.apply(Action::Add(99)), Outcome::Ignored);
        assert_eq!(session.apply(Action::Remove(99)), Outcome::Ignored);
    }

    #[test]
    fn test_criteria_change_resets_page() {
        let mut session = numbered(45);
        session.apply(Action::GoToPage(3));
        assert_eq!(session.visible().len(), 5);

        session.apply(Action::SetFilter(FilterUpdate::Available(Availability::True)));
        assert_eq!(session.page().current_page(), 1);

        session.apply(Action::GoToPage(2));
        session.apply(Action::SetNameQuery(String::new()));
        assert_eq!(session.page().current_page(), 1);

        session.apply(Action::GoToPage(2));
        session.apply(Action::ClearFilters);
        assert_eq!(session.page().current_page(), 1);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let mut session = numbered(45);
        session.apply(Action::GoToPage(4));
        assert!(session.visible().is_empty());
        assert_eq!(session.page_count(), 3);
    }

    #[test]
    fn test_next_and_prev_are_bounded() {
        let mut session = numbered(45);
        assert_eq!(session.apply(Action::PrevPage), Outcome::Ignored);

        session.apply(Action::NextPage);
        session.apply(Action::NextPage);
        assert_eq!(session.page().current_page(), 3);
        assert_eq!(session.apply(Action::NextPage), Outcome::Ignored);

        session.apply(Action::PrevPage);
        assert_eq!(session.page().current_page(), 2);
    }

    #[test]
    fn test_next_on_empty_results_stays_on_first_page() {
        let mut session = numbered(5);
        session.apply(Action::SetNameQuery("zzz".to_string()));
        assert_eq!(session.apply(Action::NextPage), Outcome::Ignored);
        assert_eq!(session.page().current_page(), 1);
    }

    #[test]
    fn test_filter_does_not_touch_selection() {
        let mut session = numbered(5);
        session.apply(Action::Add(1));
        let team_revision = session.team().revision();

        session.apply(Action::SetNameQuery("n3".to_string()));
        assert_eq!(session.team().selection().len(), 1);
        assert_eq!(session.team().revision(), team_revision);
    }

    #[test]
    fn test_reduce_chains() {
        let session = numbered(45)
            .reduce(Action::Add(1))
            .reduce(Action::Add(3))
            .reduce(Action::Remove(1))
            .reduce(Action::Add(1));
        let ids: Vec<u64> = session.team().selection().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(session.revision_id(), 4);
    }
}
